use dioxus::prelude::*;

use crate::components::{format_points, group_thousands, short_address};
use crate::hooks::{avatar_url, display_name, now_ms, use_leaderboard, use_player};
use crate::{GameState, SyncState, WalletState};

#[component]
pub fn Profile() -> Element {
    let mut wallet = use_context::<Signal<WalletState>>();
    let game = use_context::<Signal<GameState>>();
    let sync = use_context::<Signal<SyncState>>();
    let player = use_player();
    let leaderboard = use_leaderboard();

    let wallet_read = wallet.read();
    let wallet_connected = wallet_read.connected;
    let address = wallet_read.pubkey.clone().unwrap_or_default();
    drop(wallet_read);

    if !wallet_connected {
        return rsx! {
            div { class: "max-w-4xl mx-auto",
                h1 { class: "text-3xl font-bold mb-8", "Your Profile" }
                div { class: "card text-center py-12",
                    p { class: "text-gray-500 mb-4", "Connect your wallet to view your profile" }
                }
            }
        };
    }

    let game_read = game.read();
    let score = game_read.score;
    let total_clicks = game_read.total_clicks;
    drop(game_read);

    let player_read = player.read();
    let player_exists = player_read.exists;
    let on_chain_score = player_read.score;
    let on_chain_clicks = player_read.total_clicks;
    let last_update_at = player_read.last_update_at;
    drop(player_read);

    let last_saved = sync.read().last_saved_score;
    let user_rank = leaderboard.read().user_rank;

    let name = display_name(&address);
    let short = short_address(&address);
    let explorer_url = format!(
        "https://explorer.solana.com/address/{}?cluster=devnet",
        address
    );

    rsx! {
        div { class: "max-w-4xl mx-auto",
            h1 { class: "text-3xl font-bold mb-8", "Your Profile" }

            // Identity card
            div { class: "card flex items-center gap-4 mb-6",
                img {
                    class: "w-16 h-16 rounded-full",
                    src: avatar_url(&address),
                    alt: "",
                }
                div { class: "flex-1",
                    p { class: "text-xl font-semibold text-high", "{name}" }
                    a {
                        href: "{explorer_url}",
                        target: "_blank",
                        class: "font-mono text-sm text-gray-500 hover:text-gold transition-colors",
                        "{short}"
                    }
                }
                button {
                    class: "btn btn-secondary text-sm",
                    onclick: move |_| {
                        wallet.write().connected = false;
                        wallet.write().pubkey = None;
                    },
                    "Disconnect"
                }
            }

            // Stat cards
            div { class: "grid md:grid-cols-2 gap-6",
                div { class: "card",
                    h3 { class: "text-lg font-semibold text-gold mb-4", "Local Progress" }
                    div { class: "space-y-3",
                        DetailRow { label: "Points", value: format_points(score) }
                        DetailRow { label: "Total taps", value: group_thousands(total_clicks) }
                        DetailRow { label: "Saved score", value: last_saved.to_string() }
                    }
                }

                div { class: "card",
                    h3 { class: "text-lg font-semibold text-gold mb-4", "On-Chain" }
                    if player_exists {
                        div { class: "space-y-3",
                            DetailRow { label: "Points", value: format_points(on_chain_score) }
                            DetailRow { label: "Total taps", value: group_thousands(on_chain_clicks) }
                            DetailRow {
                                label: "Last saved",
                                value: format_age(now_ms() / 1_000.0 - last_update_at as f64),
                            }
                            if let Some(rank) = user_rank {
                                DetailRow { label: "Rank", value: format!("#{}", rank) }
                            }
                        }
                    } else {
                        p { class: "text-gray-500 text-center py-8",
                            "No score saved yet. Tap and hit Save Score!"
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct DetailRowProps {
    label: &'static str,
    value: String,
}

#[component]
fn DetailRow(props: DetailRowProps) -> Element {
    rsx! {
        div { class: "flex justify-between items-center",
            span { class: "text-gray-500", "{props.label}" }
            span { class: "font-mono text-gray-300", "{props.value}" }
        }
    }
}

/// Rough "how long ago" for the profile card.
fn format_age(seconds: f64) -> String {
    let seconds = seconds.max(0.0) as u64;
    if seconds < 60 {
        "just now".to_string()
    } else if seconds < 3_600 {
        format!("{}m ago", seconds / 60)
    } else if seconds < 86_400 {
        format!("{}h ago", seconds / 3_600)
    } else {
        format!("{}d ago", seconds / 86_400)
    }
}

#[cfg(test)]
mod tests {
    use super::format_age;

    #[test]
    fn test_format_age_tiers() {
        assert_eq!(format_age(-5.0), "just now");
        assert_eq!(format_age(12.0), "just now");
        assert_eq!(format_age(90.0), "1m ago");
        assert_eq!(format_age(7_200.0), "2h ago");
        assert_eq!(format_age(200_000.0), "2d ago");
    }
}
