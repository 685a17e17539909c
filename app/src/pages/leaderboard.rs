use dioxus::prelude::*;
use crate::components::{format_points, short_address};
use crate::hooks::{avatar_url, use_leaderboard};
use crate::WalletState;

#[component]
pub fn Leaderboard() -> Element {
    let wallet = use_context::<Signal<WalletState>>();
    let leaderboard = use_leaderboard();
    let state = leaderboard.read();

    let my_address = wallet.read().pubkey.clone().unwrap_or_default();

    rsx! {
        div { class: "max-w-4xl mx-auto",
            h1 { class: "text-3xl font-bold mb-8", "Leaderboard" }

            div { class: "card",
                if state.demo {
                    div { class: "mb-4 p-2 bg-yellow-500/10 border border-yellow-500/30 rounded text-sm text-yellow-400 text-center",
                        "Sample data - live board unavailable"
                    }
                } else if let Some(error) = &state.error {
                    div { class: "mb-4 text-sm text-red-400 text-center",
                        "Refresh failed: {error} - showing last known board"
                    }
                }

                if state.loading {
                    div { class: "text-center py-12",
                        div { class: "animate-spin w-8 h-8 border-2 border-gold border-t-transparent rounded-full mx-auto mb-4" }
                        p { class: "text-gray-500", "Loading leaderboard..." }
                    }
                } else if state.entries.is_empty() {
                    div { class: "text-center py-12",
                        p { class: "text-gray-500", "No players yet. Be the first!" }
                    }
                } else {
                    // Header
                    div { class: "grid grid-cols-6 gap-4 pb-3 border-b border-gray-700 text-sm text-gray-500",
                        div { "Rank" }
                        div { class: "col-span-3", "Player" }
                        div { class: "text-right", "Points" }
                        div { class: "text-right", "Taps" }
                    }

                    // Entries
                    div { class: "divide-y divide-gray-800",
                        for entry in state.entries.iter() {
                            div {
                                class: "grid grid-cols-6 gap-4 py-3 items-center",
                                class: if !my_address.is_empty() && entry.address == my_address { " bg-gold/5" } else { "" },
                                // Rank
                                div {
                                    if entry.rank <= 3 {
                                        span { class: "text-2xl",
                                            match entry.rank {
                                                1 => "🥇",
                                                2 => "🥈",
                                                3 => "🥉",
                                                _ => "",
                                            }
                                        }
                                    } else {
                                        span { class: "text-gray-400 font-mono", "#{entry.rank}" }
                                    }
                                }

                                // Player
                                div { class: "col-span-3 flex items-center gap-3",
                                    img {
                                        class: "w-8 h-8 rounded-full",
                                        src: avatar_url(if entry.address.is_empty() { &entry.name } else { &entry.address }),
                                        alt: "",
                                    }
                                    div {
                                        p { class: "text-gray-300 text-sm",
                                            "{entry.name}"
                                            if !my_address.is_empty() && entry.address == my_address {
                                                span { class: "ml-2 text-xs text-gold", "(you)" }
                                            }
                                        }
                                        if !entry.address.is_empty() {
                                            {
                                                let short = short_address(&entry.address);
                                                let url = format!("https://explorer.solana.com/address/{}?cluster=devnet", entry.address);
                                                rsx! {
                                                    a {
                                                        href: "{url}",
                                                        target: "_blank",
                                                        class: "font-mono text-xs text-gray-500 hover:text-gold transition-colors",
                                                        "{short}"
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }

                                // Points
                                div { class: "text-right",
                                    span { class: "font-mono text-gold", {format_points(entry.score)} }
                                }

                                // Taps
                                div { class: "text-right font-mono text-gray-400",
                                    {format_points(entry.total_clicks)}
                                }
                            }
                        }
                    }

                    // Your rank
                    if let Some(rank) = state.user_rank {
                        div { class: "pt-4 mt-2 border-t border-gray-700 text-center text-sm",
                            span { class: "text-low", "Your rank: " }
                            span { class: "text-gold font-mono", "#{rank}" }
                        }
                    }
                }
            }
        }
    }
}
