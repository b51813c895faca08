use super::AudioError;
use std::path::{Path, PathBuf};

#[derive(Debug, PartialEq, Eq)]
pub enum PreviewLocator {
    Remote(String),
    Local(PathBuf),
}

impl PreviewLocator {
    pub fn parse(locator: &str) -> Result<Self, AudioError> {
        let trimmed = locator.trim();

        if trimmed.is_empty() {
            return Err(AudioError::UnsupportedLocator(locator.to_string()));
        }

        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return Ok(PreviewLocator::Remote(trimmed.to_string()));
        }

        if let Some(path) = trimmed.strip_prefix("file://") {
            return Ok(PreviewLocator::Local(PathBuf::from(path)));
        }

        // Any other scheme (ftp://, content://, ...) is out of reach
        match trimmed.split_once("://") {
            Some(_) => Err(AudioError::UnsupportedLocator(locator.to_string())),
            None => Ok(PreviewLocator::Local(PathBuf::from(trimmed))),
        }
    }

    /// Container hint for the decoder, taken from the file extension.
    pub fn format_hint(&self) -> Option<&'static str> {
        let ext = match self {
            PreviewLocator::Remote(url) => {
                let path = url.split(['?', '#']).next().unwrap_or(url);
                Path::new(path).extension()?.to_str()?.to_ascii_lowercase()
            }
            PreviewLocator::Local(path) => path.extension()?.to_str()?.to_ascii_lowercase(),
        };

        let hint = match ext.as_str() {
            "adif" | "adts" | "aac" => "aac",
            "m4a" | "m4b" | "m4p" | "m4r" | "mp4" => "audio/mp4",
            "mp3" | "bit" | "mpga" => "mp3",
            "oga" | "ogg" | "ogx" | "spx" => "audio/ogg",
            "wav" | "wave" => "wav",
            "flac" => "flac",
            _ => return None,
        };
        Some(hint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_urls_are_remote() {
        let loc = PreviewLocator::parse("https://example.com/a/b.mp3").unwrap();
        assert_eq!(loc, PreviewLocator::Remote("https://example.com/a/b.mp3".into()));

        let loc = PreviewLocator::parse("  HTTP://example.com/x.wav ").unwrap();
        assert!(matches!(loc, PreviewLocator::Remote(_)));
    }

    #[test]
    fn file_urls_and_bare_paths_are_local() {
        assert_eq!(
            PreviewLocator::parse("file:///tmp/beat.mp3").unwrap(),
            PreviewLocator::Local(PathBuf::from("/tmp/beat.mp3"))
        );
        assert_eq!(
            PreviewLocator::parse("previews/beat.ogg").unwrap(),
            PreviewLocator::Local(PathBuf::from("previews/beat.ogg"))
        );
    }

    #[test]
    fn foreign_schemes_and_blanks_are_rejected() {
        assert!(matches!(
            PreviewLocator::parse("ftp://host/beat.mp3"),
            Err(AudioError::UnsupportedLocator(_))
        ));
        assert!(matches!(
            PreviewLocator::parse("   "),
            Err(AudioError::UnsupportedLocator(_))
        ));
    }

    #[test]
    fn hint_ignores_query_string() {
        let loc = PreviewLocator::parse("https://cdn.test/p/song.MP3?sig=abc#t=1").unwrap();
        assert_eq!(loc.format_hint(), Some("mp3"));

        let loc = PreviewLocator::parse("https://cdn.test/stream").unwrap();
        assert_eq!(loc.format_hint(), None);

        let loc = PreviewLocator::parse("/music/clip.m4a").unwrap();
        assert_eq!(loc.format_hint(), Some("audio/mp4"));
    }
}
