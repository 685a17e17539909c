mod play;
mod leaderboard;
mod profile;
mod settings;

pub use play::Play;
pub use leaderboard::Leaderboard;
pub use profile::Profile;
pub use settings::Settings;
