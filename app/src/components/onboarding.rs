use dioxus::prelude::*;
use crate::components::WalletButton;
use crate::WalletState;

struct OnboardingStep {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const STEPS: [OnboardingStep; 3] = [
    OnboardingStep {
        icon: "👆",
        title: "Tap to Earn",
        description: "Every tap is worth one point. No cooldowns, no energy bars.",
    },
    OnboardingStep {
        icon: "🏆",
        title: "Climb the Board",
        description: "Your score ranks against every player on the network.",
    },
    OnboardingStep {
        icon: "💾",
        title: "Own Your Score",
        description: "Connect a wallet and your high score lives on Solana devnet.",
    },
];

#[component]
pub fn Onboarding(on_complete: EventHandler<()>) -> Element {
    let wallet = use_context::<Signal<WalletState>>();
    let mut step = use_signal(|| 0usize);

    // Connecting during the wallet step finishes onboarding
    use_effect(move || {
        if wallet.read().connected {
            on_complete.call(());
        }
    });

    let current = *step.read();

    rsx! {
        div { class: "min-h-screen flex items-center justify-center",
            style: "background-color: var(--surface-base);",
            div { class: "card max-w-md w-full mx-4 text-center py-10",
                if current < STEPS.len() {
                    {
                        let s = &STEPS[current];
                        rsx! {
                            div { class: "text-5xl mb-4", "{s.icon}" }
                            h2 { class: "text-2xl font-bold text-high mb-2", "{s.title}" }
                            p { class: "text-low mb-8", "{s.description}" }
                        }
                    }

                    // Step dots
                    div { class: "flex justify-center gap-2 mb-8",
                        for i in 0..=STEPS.len() {
                            span {
                                class: if i == current { "w-2 h-2 rounded-full bg-gold inline-block" } else { "w-2 h-2 rounded-full bg-gray-600 inline-block" },
                            }
                        }
                    }

                    div { class: "flex justify-center gap-4",
                        if current > 0 {
                            button {
                                class: "btn btn-secondary",
                                onclick: move |_| step.set(current - 1),
                                "Back"
                            }
                        }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| step.set(current + 1),
                            "Next"
                        }
                    }
                } else {
                    // Final step: connect now or play without a wallet
                    div { class: "text-5xl mb-4", "👛" }
                    h2 { class: "text-2xl font-bold text-high mb-2", "Connect a Wallet" }
                    p { class: "text-low mb-8",
                        "Optional. You can tap without one and connect later from the header."
                    }
                    div { class: "flex flex-col items-center gap-4",
                        WalletButton {}
                        button {
                            class: "text-low text-sm underline",
                            onclick: move |_| on_complete.call(()),
                            "Skip for now"
                        }
                    }
                }
            }
        }
    }
}
