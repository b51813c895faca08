use anyhow::{Result, anyhow, bail};
use ratatui::style::Color;

pub(super) fn parse_color(s: &str) -> Result<Color> {
    let s = s.trim();
    match s {
        s if s.starts_with('#') => parse_hex(s),
        s if s.starts_with("rgb(") => parse_rgb(s),
        _ => try_from_str(s),
    }
}

pub(super) fn parse_hex(s: &str) -> Result<Color> {
    let hex = s.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        bail!("Invalid hex input: {s}\nExpected format \"#FF20D5\"");
    }

    let r = u8::from_str_radix(&hex[0..2], 16)?;
    let g = u8::from_str_radix(&hex[2..4], 16)?;
    let b = u8::from_str_radix(&hex[4..], 16)?;

    Ok(Color::Rgb(r, g, b))
}

pub(super) fn parse_rgb(s: &str) -> Result<Color> {
    if s.ends_with(')') {
        let inner = &s[4..s.len() - 1];
        let parts = inner.split(',').collect::<Vec<&str>>();
        if parts.len() == 3 {
            let r = parts[0].trim().parse::<u8>()?;
            let g = parts[1].trim().parse::<u8>()?;
            let b = parts[2].trim().parse::<u8>()?;
            return Ok(Color::Rgb(r, g, b));
        }
    }
    Err(anyhow!(
        "Invalid rgb input: {s}\nExpected ex: \"rgb(255, 50, 120)\""
    ))
}

pub(super) fn try_from_str(s: &str) -> Result<Color> {
    match s.to_lowercase().as_str() {
        "" | "none" => Ok(Color::Reset),
        "black" => Ok(Color::Black),
        "red" => Ok(Color::Red),
        "green" => Ok(Color::Green),
        "yellow" => Ok(Color::Yellow),
        "blue" => Ok(Color::Blue),
        "magenta" => Ok(Color::Magenta),
        "cyan" => Ok(Color::Cyan),
        "white" => Ok(Color::White),
        "gray" | "grey" => Ok(Color::Gray),
        "darkgray" | "darkgrey" => Ok(Color::DarkGray),
        "lightred" => Ok(Color::LightRed),
        "lightgreen" => Ok(Color::LightGreen),
        "lightyellow" => Ok(Color::LightYellow),
        "lightblue" => Ok(Color::LightBlue),
        "lightmagenta" => Ok(Color::LightMagenta),
        "lightcyan" => Ok(Color::LightCyan),
        _ => Err(anyhow!("Invalid color: {}", s)),
    }
}

pub(super) fn dim_color(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(
            (r as f32 * factor) as u8,
            (g as f32 * factor) as u8,
            (b as f32 * factor) as u8,
        ),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_notations() {
        assert_eq!(parse_color("#2563EB").unwrap(), Color::Rgb(0x25, 0x63, 0xEB));
        assert_eq!(parse_color(" rgb(1, 2, 3) ").unwrap(), Color::Rgb(1, 2, 3));
        assert_eq!(parse_color("LightRed").unwrap(), Color::LightRed);
        assert_eq!(parse_color("none").unwrap(), Color::Reset);
    }

    #[test]
    fn rejects_malformed_colors() {
        assert!(parse_color("#12345").is_err());
        assert!(parse_color("#GGGGGG").is_err());
        assert!(parse_color("rgb(1, 2)").is_err());
        assert!(parse_color("rgb(300, 2, 3)").is_err());
        assert!(parse_color("chartreuse-ish").is_err());
    }

    #[test]
    fn dimming_only_touches_rgb() {
        assert_eq!(dim_color(Color::Rgb(200, 100, 50), 0.5), Color::Rgb(100, 50, 25));
        assert_eq!(dim_color(Color::White, 0.5), Color::White);
    }
}
