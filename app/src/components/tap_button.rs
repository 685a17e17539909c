use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

// How long a floating "+1" stays on screen
const BURST_LIFETIME_MS: u32 = 700;

#[component]
pub fn TapButton(on_tap: EventHandler<()>) -> Element {
    // Short-lived "+1" markers keyed by tap id
    let mut bursts = use_signal(Vec::<u64>::new);
    let mut next_burst = use_signal(|| 0u64);

    let handle_tap = move |_| {
        on_tap.call(());

        let id = *next_burst.read();
        next_burst.set(id + 1);
        bursts.write().push(id);

        spawn(async move {
            TimeoutFuture::new(BURST_LIFETIME_MS).await;
            bursts.write().retain(|burst| *burst != id);
        });
    };

    rsx! {
        div { class: "relative flex justify-center py-10",
            for id in bursts.read().iter().copied() {
                span {
                    key: "{id}",
                    class: "tap-burst absolute top-0 text-2xl font-bold text-gold pointer-events-none",
                    style: format!("transform: translateX({}px);", (id % 7) as i64 * 12 - 36),
                    "+1"
                }
            }
            button {
                class: "tap-button controls-primary rounded-full w-48 h-48 text-3xl font-bold transition-transform active:scale-95",
                onclick: handle_tap,
                "TAP"
            }
        }
    }
}
