mod layout;
mod tap_button;
mod score_display;
mod onboarding;
mod wallet_button;

pub use layout::Layout;
pub use tap_button::TapButton;
pub use score_display::{ScoreDisplay, format_points, group_thousands};
pub use onboarding::Onboarding;
pub use wallet_button::{short_address, WalletButton};
