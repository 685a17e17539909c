use dioxus::prelude::*;

use crate::components::{ScoreDisplay, TapButton};
use crate::hooks::{now_ms, submit_score_transaction, use_game, use_player};
use crate::{SyncState, WalletState};

#[component]
pub fn Play() -> Element {
    let wallet = use_context::<Signal<WalletState>>();
    let mut game = use_game();
    let player = use_player();
    let mut sync = use_context::<Signal<SyncState>>();

    // Extract state values
    let game_read = game.read();
    let score = game_read.score;
    let total_clicks = game_read.total_clicks;
    drop(game_read);

    let sync_read = sync.read();
    let submitting = sync_read.submitting;
    let last_saved = sync_read.last_saved_score;
    let last_result = sync_read.last_result.clone();
    drop(sync_read);

    let player_read = player.read();
    let player_exists = player_read.exists;
    let on_chain_score = player_read.score;
    drop(player_read);

    let wallet_read = wallet.read();
    let wallet_connected = wallet_read.connected;
    let wallet_pubkey = wallet_read.pubkey.clone();
    drop(wallet_read);

    let unsaved = score > last_saved;

    rsx! {
        div { class: "max-w-lg mx-auto",
            ScoreDisplay { score: score, total_clicks: total_clicks }

            TapButton {
                on_tap: move |_| game.write().tap(now_ms()),
            }

            // Save panel
            div { class: "elevated rounded-lg p-4 elevated-border border",
                if !wallet_connected {
                    p { class: "text-center text-low text-sm py-2",
                        "Connect wallet to save your score on-chain"
                    }
                } else {
                    div { class: "flex justify-between items-center mb-3",
                        div {
                            span { class: "text-low text-sm", "Saved score " }
                            span { class: "text-high font-mono", "{last_saved}" }
                        }
                        if submitting {
                            span { class: "text-gold text-sm animate-pulse", "Saving..." }
                        } else if unsaved {
                            span { class: "text-gold text-sm", "Unsaved progress" }
                        } else {
                            span { class: "text-low text-sm", "Up to date" }
                        }
                    }

                    button {
                        class: "w-full controls-primary py-3 rounded-lg font-semibold transition-all hover:scale-[1.02]",
                        disabled: !unsaved || submitting,
                        onclick: {
                            let wallet_pubkey = wallet_pubkey.clone();
                            move |_| {
                                let pubkey = wallet_pubkey.clone();
                                if let Some(authority) = pubkey {
                                    sync.write().submitting = true;
                                    sync.write().last_result = None;

                                    spawn(async move {
                                        let (score, total_clicks) = {
                                            let g = game.read();
                                            (g.score, g.total_clicks)
                                        };
                                        let result =
                                            submit_score_transaction(&authority, score, total_clicks)
                                                .await;

                                        let mut sync_mut = sync.write();
                                        if result.is_ok() {
                                            sync_mut.last_saved_score = score;
                                        }
                                        sync_mut.last_result = Some(result);
                                        sync_mut.submitting = false;
                                    });
                                }
                            }
                        },
                        if submitting {
                            "Saving..."
                        } else if unsaved {
                            "Save Score"
                        } else {
                            "Saved"
                        }
                    }

                    p { class: "text-low text-xs text-center mt-2",
                        "Auto-saves a few seconds after you stop tapping"
                    }

                    // Transaction result
                    if let Some(result) = last_result {
                        match result {
                            Ok(sig) => {
                                let explorer_url = format!("https://explorer.solana.com/tx/{}?cluster=devnet", sig);
                                rsx! {
                                    div { class: "mt-3 p-2 bg-green-500/10 border border-green-500/30 rounded text-sm",
                                        a {
                                            href: "{explorer_url}",
                                            target: "_blank",
                                            class: "text-green-400 underline",
                                            "View transaction"
                                        }
                                    }
                                }
                            }
                            Err(e) => {
                                rsx! {
                                    div { class: "mt-3 p-2 bg-red-500/10 border border-red-500/30 rounded text-sm text-red-400",
                                        "{e}"
                                    }
                                }
                            }
                        }
                    }

                    if player_exists {
                        div { class: "flex justify-between pt-3 mt-3 border-t border-gray-700 text-sm",
                            span { class: "text-low", "On-chain score" }
                            span { class: "text-high font-mono", "{on_chain_score}" }
                        }
                    }
                }
            }
        }
    }
}
