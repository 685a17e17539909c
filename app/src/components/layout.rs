use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::components::{Onboarding, WalletButton};
use crate::hooks::{
    apply_theme, load_theme, mark_onboarding_complete, onboarding_complete, use_game, use_sync,
};
use crate::route::Route;

#[component]
pub fn Layout() -> Element {
    // Persistence and auto-sync live here so they survive page changes
    use_game();
    use_sync();

    // Apply the stored theme before first paint
    use_hook(|| apply_theme(load_theme()));

    let mut booting = use_signal(|| true);
    let mut onboarded = use_signal(onboarding_complete);

    // Brief splash while the first fetches warm up
    use_future(move || async move {
        TimeoutFuture::new(800).await;
        booting.set(false);
    });

    if *booting.read() {
        return rsx! {
            div { class: "min-h-screen flex items-center justify-center",
                style: "background-color: var(--surface-base);",
                div { class: "text-center",
                    p { class: "text-4xl font-bold text-gold", "TAPRUSH" }
                    p { class: "text-low mt-2 animate-pulse", "Loading..." }
                }
            }
        };
    }

    if !*onboarded.read() {
        return rsx! {
            Onboarding {
                on_complete: move |_| {
                    mark_onboarding_complete();
                    onboarded.set(true);
                },
            }
        };
    }

    rsx! {
        div { class: "min-h-screen",
            style: "background-color: var(--surface-base);",
            // Navigation
            nav { class: "border-b elevated-border backdrop-blur sticky top-0 z-50",
                style: "background-color: var(--surface-base);",
                div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                    div { class: "flex justify-between h-16",
                        // Logo - links to the game
                        div { class: "flex items-center",
                            Link { to: Route::Play {}, class: "flex items-center space-x-2",
                                span { class: "text-2xl font-bold text-gold", "TAPRUSH" }
                            }
                        }

                        // Nav links
                        div { class: "hidden sm:flex sm:items-center sm:space-x-8",
                            NavLink { to: Route::Play {}, label: "Play" }
                            NavLink { to: Route::Leaderboard {}, label: "Leaderboard" }
                            NavLink { to: Route::Profile {}, label: "Profile" }
                            NavLink { to: Route::Settings {}, label: "Settings" }
                        }

                        // Wallet button
                        div { class: "flex items-center",
                            WalletButton {}
                        }
                    }
                }
            }

            // Main content
            main { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8",
                Outlet::<Route> {}
            }

            // Footer
            footer { class: "border-t elevated-border py-8 mt-auto",
                div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center text-low",
                    p { "TAPRUSH - Tap-to-Earn Arcade on Solana" }
                    p { class: "text-sm mt-2",
                        "Program: "
                        code { class: "text-gold", "{crate::PROGRAM_ID}" }
                    }
                }
            }
        }
    }
}

#[component]
fn NavLink(to: Route, label: &'static str) -> Element {
    rsx! {
        Link {
            to: to,
            class: "text-mid hover:text-gold px-3 py-2 text-sm font-medium transition-colors",
            "{label}"
        }
    }
}
