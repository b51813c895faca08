mod theme_import;
mod theme_utils;

use anyhow::Context;
use ratatui::style::Color;
use theme_utils::{dim_color, parse_color};

pub use theme_import::ThemeImport;

const DIM_FACTOR: f32 = 0.6;

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub surface: Color,
    pub surface_selected: Color,
    pub title: Color,
    pub meta: Color,
    pub button: Color,
    pub button_active: Color,
    pub button_text: Color,
    pub accent: Color,
    pub error: Color,
    pub error_text: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // The bundled defaults always parse
        Theme::try_from(&ThemeImport::default()).unwrap_or(Theme {
            surface: Color::Reset,
            surface_selected: Color::DarkGray,
            title: Color::White,
            meta: Color::Gray,
            button: Color::Blue,
            button_active: Color::Yellow,
            button_text: Color::White,
            accent: Color::Yellow,
            error: Color::LightRed,
            error_text: Color::Black,
        })
    }
}

impl TryFrom<&ThemeImport> for Theme {
    type Error = anyhow::Error;

    fn try_from(import: &ThemeImport) -> anyhow::Result<Self> {
        let field = |name: &str, value: &str| {
            parse_color(value).with_context(|| format!("theme.{name}"))
        };

        let surface = field("surface", &import.surface)?;
        let accent = field("accent", &import.accent)?;

        Ok(Theme {
            surface,
            surface_selected: lighten(surface),
            title: field("title", &import.title)?,
            meta: field("meta", &import.meta)?,
            button: field("button", &import.button)?,
            button_active: dim_color(accent, DIM_FACTOR),
            button_text: field("button_text", &import.button_text)?,
            accent,
            error: field("error", &import.error)?,
            error_text: field("error_text", &import.error_text)?,
        })
    }
}

fn lighten(color: Color) -> Color {
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(
            r.saturating_add(24),
            g.saturating_add(24),
            b.saturating_add(24),
        ),
        _ => Color::DarkGray,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_matches_bundled_palette() {
        let theme = Theme::default();

        assert_eq!(theme.surface, Color::Rgb(0x11, 0x18, 0x27));
        assert_eq!(theme.surface_selected, Color::Rgb(0x29, 0x30, 0x3F));
        assert_eq!(theme.button, Color::Rgb(0x25, 0x63, 0xEB));
        assert_eq!(theme.title, Color::White);
        assert_eq!(theme.error_text, Color::Black);
    }

    #[test]
    fn bad_field_is_named_in_error() {
        let import = ThemeImport {
            meta: "#12".to_string(),
            ..ThemeImport::default()
        };

        let err = Theme::try_from(&import).unwrap_err();
        assert!(format!("{err:#}").contains("theme.meta"));
    }
}
