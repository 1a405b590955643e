//! Game settings and preferences
//!
//! Read once at startup from an optional JSON block embedded in the page.
//! Nothing is written back; a reload starts from the same configuration.

use serde::{Deserialize, Serialize};

use crate::deck::Category;
use crate::error::ConfigError;

/// Display theme (presentation only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Glyph for the toggle button (shows the theme you would switch to)
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

/// Startup configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: Theme,
    /// Fixed RNG seed (reproducible sessions); clock-seeded when absent
    pub seed: Option<u64>,
    /// Initial category list for the editor; built-in pairs when absent
    pub categories: Option<Vec<Category>>,
}

impl Settings {
    /// Element id of the embedded `application/json` settings block
    pub const ELEMENT_ID: &'static str = "wavelength-config";

    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(categories) = &self.categories {
            if categories.is_empty() {
                return Err(ConfigError::EmptyCategories);
            }
            if let Some(index) = categories.iter().position(|c| !c.is_playable()) {
                return Err(ConfigError::BlankLabel { index });
            }
        }
        Ok(())
    }

    /// Load settings from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        let Some(json) = json else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from page");
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_round_trip_names() {
        assert_eq!(Theme::from_str("DARK"), Some(Theme::Dark));
        assert_eq!(Theme::from_str(Theme::Light.as_str()), Some(Theme::Light));
        assert_eq!(Theme::from_str("sepia"), None);
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
    }

    #[test]
    fn test_from_json_defaults() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_from_json_full() {
        let settings = Settings::from_json(
            r#"{"theme":"dark","seed":7,"categories":[{"left":"Tea","right":"Coffee"}]}"#,
        )
        .unwrap();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.categories.unwrap()[0].right, "Coffee");
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        assert!(matches!(
            Settings::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{"categories":[]}"#),
            Err(ConfigError::EmptyCategories)
        ));
        assert!(matches!(
            Settings::from_json(
                r#"{"categories":[{"left":"A","right":"B"},{"left":" ","right":"C"}]}"#
            ),
            Err(ConfigError::BlankLabel { index: 1 })
        ));
    }
}
