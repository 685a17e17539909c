use crate::GameState;

#[cfg(feature = "web")]
use gloo_storage::{LocalStorage, Storage};

// Browser storage keys
const STATE_KEY: &str = "taprush_game_state";
const THEME_KEY: &str = "taprush_theme";
const ONBOARDING_KEY: &str = "taprush_onboarding_complete";

/// Load saved progress, falling back to a fresh game.
#[cfg(feature = "web")]
pub fn load_game_state() -> GameState {
    LocalStorage::get(STATE_KEY).unwrap_or_default()
}

#[cfg(not(feature = "web"))]
pub fn load_game_state() -> GameState {
    GameState::default()
}

#[cfg(feature = "web")]
pub fn save_game_state(state: &GameState) {
    if let Err(e) = LocalStorage::set(STATE_KEY, state) {
        tracing::error!("Failed to persist game state: {}", e);
    }
}

#[cfg(not(feature = "web"))]
pub fn save_game_state(_state: &GameState) {}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

#[cfg(feature = "web")]
pub fn load_theme() -> Theme {
    match LocalStorage::get::<String>(THEME_KEY) {
        Ok(value) if value == "light" => Theme::Light,
        _ => Theme::Dark,
    }
}

#[cfg(not(feature = "web"))]
pub fn load_theme() -> Theme {
    Theme::Dark
}

#[cfg(feature = "web")]
pub fn store_theme(theme: Theme) {
    if let Err(e) = LocalStorage::set(THEME_KEY, theme.as_str()) {
        tracing::error!("Failed to persist theme: {}", e);
    }
}

#[cfg(not(feature = "web"))]
pub fn store_theme(_theme: Theme) {}

/// Tag the document root so stylesheet variables follow the chosen theme.
#[cfg(feature = "web")]
pub fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    if let Err(e) = root.set_attribute("data-theme", theme.as_str()) {
        tracing::error!("Failed to apply theme: {:?}", e);
    }
}

#[cfg(not(feature = "web"))]
pub fn apply_theme(_theme: Theme) {}

#[cfg(feature = "web")]
pub fn onboarding_complete() -> bool {
    LocalStorage::get(ONBOARDING_KEY).unwrap_or(false)
}

#[cfg(not(feature = "web"))]
pub fn onboarding_complete() -> bool {
    true
}

#[cfg(feature = "web")]
pub fn mark_onboarding_complete() {
    if let Err(e) = LocalStorage::set(ONBOARDING_KEY, true) {
        tracing::error!("Failed to persist onboarding flag: {}", e);
    }
}

#[cfg(not(feature = "web"))]
pub fn mark_onboarding_complete() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggles_between_both_values() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_theme_names() {
        assert_eq!(Theme::Dark.as_str(), "dark");
        assert_eq!(Theme::Light.as_str(), "light");
    }
}
