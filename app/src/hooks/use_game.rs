use dioxus::prelude::*;
use crate::GameState;
use super::storage::save_game_state;

/// Game progress signal with write-through persistence.
pub fn use_game() -> Signal<GameState> {
    let game = use_context::<Signal<GameState>>();

    // Reading the signal subscribes the effect, so every tap and reset
    // lands in browser storage.
    use_effect(move || {
        save_game_state(&game.read());
    });

    game
}

#[cfg(test)]
mod tests {
    use crate::GameState;

    #[test]
    fn test_tap_increments_both_counters_by_one() {
        let mut game = GameState::default();
        game.tap(1_000.0);
        game.tap(2_500.0);
        assert_eq!(game.score, 2);
        assert_eq!(game.total_clicks, 2);
        assert_eq!(game.last_tap_at_ms, 2_500.0);
    }

    #[test]
    fn test_reset_clears_progress() {
        let mut game = GameState::default();
        game.tap(1.0);
        game.tap(2.0);
        game.reset();
        assert_eq!(game.score, 0);
        assert_eq!(game.total_clicks, 0);
    }

    #[test]
    fn test_corrupt_save_loads_as_fresh_game() {
        // Mirrors the storage load path, which falls back to default on
        // any decode failure.
        let restored = serde_json::from_str::<GameState>("{\"score\":").unwrap_or_default();
        assert_eq!(restored.score, 0);
        assert_eq!(restored.total_clicks, 0);
    }

    #[test]
    fn test_saved_shape_omits_tap_timestamp() {
        let mut game = GameState::default();
        game.tap(5.0);

        let json = serde_json::to_string(&game).unwrap();
        assert!(json.contains("\"score\":1"));
        assert!(json.contains("\"total_clicks\":1"));
        assert!(!json.contains("last_tap_at_ms"));

        let restored: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.score, 1);
        assert_eq!(restored.total_clicks, 1);
        assert_eq!(restored.last_tap_at_ms, 0.0);
    }
}
