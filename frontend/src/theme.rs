use log::{debug, info, warn};
use web_sys::window;

use crate::config::THEME_STORAGE_KEY;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Anything other than "light" is treated as the dark default.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_light(self) -> bool {
        self == Theme::Light
    }
}

/// Reads the stored preference, defaulting to dark when storage is unavailable.
pub fn load() -> Theme {
    let stored = window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok())
        .flatten();
    Theme::from_stored(stored.as_deref())
}

pub fn store(theme: Theme) {
    if let Some(window) = window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if storage.set_item(THEME_STORAGE_KEY, theme.as_str()).is_err() {
                warn!("Could not persist theme preference");
            }
            return;
        }
    }
    debug!("Local storage unavailable, theme not persisted");
}

/// Body class carried while the light theme is active.
pub const LIGHT_CLASS: &str = "light";

/// Mirrors the theme onto the `light` class of `<body>`.
pub fn apply(theme: Theme) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        debug!("No document body, skipping theme class");
        return;
    };
    let classes = body.class_list();
    let result = if theme.is_light() {
        classes.add_1(LIGHT_CLASS)
    } else {
        classes.remove_1(LIGHT_CLASS)
    };
    if let Err(e) = result {
        warn!("Could not update theme class: {:?}", e);
        return;
    }
    info!("Theme set to {}", theme.as_str());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_values() {
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("Light")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("")), Theme::Dark);
        assert_eq!(Theme::from_stored(None), Theme::Dark);
    }

    #[test]
    fn toggling_round_trips_through_storage_string() {
        let theme = Theme::default().toggled();
        assert!(theme.is_light());
        assert_eq!(Theme::from_stored(Some(theme.as_str())), theme);
        assert_eq!(theme.toggled(), Theme::Dark);
    }

    #[test]
    fn light_class_matches_stored_light_value() {
        assert_eq!(LIGHT_CLASS, Theme::Light.as_str());
        assert!(!Theme::Dark.is_light());
    }
}
