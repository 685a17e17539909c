mod use_game;
mod use_player;
mod use_leaderboard;
mod use_sync;
mod storage;
mod rpc;
pub mod phantom;

pub use use_game::use_game;
pub use use_player::use_player;
pub use use_leaderboard::{use_leaderboard, display_name, avatar_url};
pub use use_sync::{use_sync, submit_score_transaction, now_ms};
pub use storage::*;
pub use rpc::*;
