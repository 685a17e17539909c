#![allow(non_snake_case)]

mod components;
mod hooks;
mod pages;
mod route;

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use route::Route;

// Configuration
pub const PROGRAM_ID: &str = "Dkmv5Zi6MnieJVLgn6dL1bebGjgUR7Z3ji4g7c5mLbkx";
pub const RPC_URL: &str = "https://api.devnet.solana.com";
pub const HELIUS_API_KEY: &str = "91b6c8a3-4f2e-4c7d-9b1a-3e5d8f60c2aa";

// PDA seeds (matching taprush-api)
pub const ARCADE_SEED: &[u8] = b"arcade";
pub const PLAYER_SEED: &[u8] = b"player";

fn main() {
    #[cfg(feature = "web")]
    {
        tracing_wasm::set_as_global_default();
        dioxus::launch(App);
    }

    #[cfg(feature = "desktop")]
    {
        dioxus::launch(App);
    }
}

#[component]
fn App() -> Element {
    // Global state providers
    use_context_provider(|| Signal::new(WalletState::default()));
    use_context_provider(|| Signal::new(hooks::load_game_state()));
    use_context_provider(|| Signal::new(PlayerState::default()));
    use_context_provider(|| Signal::new(SyncState::default()));

    rsx! {
        Router::<Route> {}
    }
}

// Global state types
#[derive(Clone, Default, Debug)]
pub struct WalletState {
    pub connected: bool,
    pub pubkey: Option<String>,
}

/// Local game progress. Persisted to browser storage after every change.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub score: u64,
    pub total_clicks: u64,
    /// Millisecond timestamp of the most recent tap. Not persisted.
    #[serde(skip)]
    pub last_tap_at_ms: f64,
}

impl GameState {
    /// A tap is worth exactly one point and one click.
    pub fn tap(&mut self, now_ms: f64) {
        self.score += 1;
        self.total_clicks += 1;
        self.last_tap_at_ms = now_ms;
    }

    pub fn reset(&mut self) {
        self.score = 0;
        self.total_clicks = 0;
    }
}

/// Mirror of the on-chain Player account for the connected wallet.
#[derive(Clone, Debug)]
pub struct PlayerState {
    pub exists: bool,
    pub score: u64,
    pub total_clicks: u64,
    pub last_update_at: i64, // Unix timestamp stamped by the program
    pub loading: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            exists: false,
            score: 0,
            total_clicks: 0,
            last_update_at: 0,
            loading: true,
        }
    }
}

/// Score submission bookkeeping shared by the auto-sync loop and the
/// manual save button.
#[derive(Clone, Debug, Default)]
pub struct SyncState {
    /// Highest score known to be recorded on-chain. Submissions fire only
    /// when the local score is above this.
    pub last_saved_score: u64,
    pub submitting: bool,
    pub last_result: Option<Result<String, String>>,
}
