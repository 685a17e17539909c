use dioxus::prelude::*;

use crate::pages::{Leaderboard, Play, Profile, Settings};
use crate::components::Layout;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Play {},  // Game first - users land on the tap screen
    #[route("/leaderboard")]
    Leaderboard {},
    #[route("/profile")]
    Profile {},
    #[route("/settings")]
    Settings {},
}
