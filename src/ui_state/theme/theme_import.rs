use serde::Deserialize;

/// Raw `[theme]` table as written in the config file.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeImport {
    pub surface: String,
    pub title: String,
    pub meta: String,
    pub button: String,
    pub button_text: String,
    pub accent: String,
    pub error: String,
    pub error_text: String,
}

impl Default for ThemeImport {
    fn default() -> Self {
        ThemeImport {
            surface: "#111827".to_string(),
            title: "white".to_string(),
            meta: "#9CA3AF".to_string(),
            button: "#2563EB".to_string(),
            button_text: "white".to_string(),
            accent: "#FACC15".to_string(),
            error: "lightred".to_string(),
            error_text: "black".to_string(),
        }
    }
}
