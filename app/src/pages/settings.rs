use dioxus::prelude::*;

use crate::hooks::{apply_theme, load_theme, store_theme, use_game, Theme};
use crate::SyncState;

#[component]
pub fn Settings() -> Element {
    let mut game = use_game();
    let mut sync = use_context::<Signal<SyncState>>();

    let mut theme = use_signal(load_theme);
    let mut sound = use_signal(|| true);
    let mut confirm_reset = use_signal(|| false);

    rsx! {
        div { class: "max-w-2xl mx-auto",
            h1 { class: "text-3xl font-bold mb-8", "Settings" }

            // Appearance
            div { class: "card mb-6",
                h3 { class: "text-lg font-semibold text-gold mb-4", "Appearance" }
                div { class: "flex justify-between items-center",
                    div {
                        p { class: "text-high", "Theme" }
                        p { class: "text-low text-sm", "Dark is the default" }
                    }
                    button {
                        class: "btn btn-secondary text-sm",
                        onclick: move |_| {
                            let next = theme.read().toggled();
                            theme.set(next);
                            store_theme(next);
                            apply_theme(next);
                        },
                        if *theme.read() == Theme::Dark { "Dark" } else { "Light" }
                    }
                }
            }

            // Sound
            div { class: "card mb-6",
                h3 { class: "text-lg font-semibold text-gold mb-4", "Sound" }
                div { class: "flex justify-between items-center",
                    div {
                        p { class: "text-high", "Tap sounds" }
                        p { class: "text-low text-sm", "Resets when the tab closes" }
                    }
                    button {
                        class: "btn btn-secondary text-sm",
                        onclick: move |_| {
                            let next = !*sound.read();
                            sound.set(next);
                        },
                        if *sound.read() { "On" } else { "Off" }
                    }
                }
            }

            // About
            div { class: "card mb-6",
                h3 { class: "text-lg font-semibold text-gold mb-4", "About" }
                div { class: "space-y-2 text-sm",
                    p { class: "text-low",
                        "TAPRUSH is a tap-to-earn arcade game. Points live in your browser; "
                        "connect a wallet to save your high score on Solana devnet."
                    }
                    p { class: "text-low",
                        "Program: "
                        code { class: "text-gold", "{crate::PROGRAM_ID}" }
                    }
                }
            }

            // Danger zone
            div { class: "card border border-red-500/30",
                h3 { class: "text-lg font-semibold text-red-400 mb-4", "Danger Zone" }
                div { class: "flex justify-between items-center",
                    div {
                        p { class: "text-high", "Reset progress" }
                        p { class: "text-low text-sm", "Clears local points and taps. On-chain scores stay." }
                    }
                    button {
                        class: "btn text-sm",
                        class: if *confirm_reset.read() { " bg-red-500/20 text-red-400 border border-red-500/40" } else { " btn-secondary" },
                        onclick: move |_| {
                            if *confirm_reset.read() {
                                game.write().reset();
                                sync.write().last_result = None;
                                confirm_reset.set(false);
                            } else {
                                confirm_reset.set(true);
                            }
                        },
                        if *confirm_reset.read() { "Tap again to confirm" } else { "Reset" }
                    }
                }
            }
        }
    }
}
