use dioxus::prelude::*;
use futures::StreamExt;

use crate::hooks::phantom;
use crate::WalletState;

enum WalletAction {
    Connect,
    Disconnect,
}

/// Header wallet control: connect prompt when disconnected, the short
/// address plus a disconnect button once connected.
#[component]
pub fn WalletButton() -> Element {
    let mut wallet = use_context::<Signal<WalletState>>();

    // Coroutine so an in-flight connect survives re-renders
    let actions = use_coroutine(move |mut rx: UnboundedReceiver<WalletAction>| async move {
        while let Some(action) = rx.next().await {
            match action {
                WalletAction::Connect => match phantom::connect().await {
                    Ok(pubkey) => {
                        tracing::info!("Wallet connected: {}", pubkey);
                        let mut w = wallet.write();
                        w.connected = true;
                        w.pubkey = Some(pubkey);
                    }
                    Err(e) => {
                        tracing::error!("Wallet connection failed: {}", e);
                    }
                },
                WalletAction::Disconnect => {
                    let mut w = wallet.write();
                    w.connected = false;
                    w.pubkey = None;
                }
            }
        }
    });

    let connected = wallet.read().connected;
    let address = wallet.read().pubkey.clone().unwrap_or_default();

    if connected {
        rsx! {
            div { class: "flex items-center space-x-2",
                span { class: "text-sm text-gray-400 font-mono", {short_address(&address)} }
                button {
                    class: "btn btn-secondary text-sm",
                    onclick: move |_| actions.send(WalletAction::Disconnect),
                    "Disconnect"
                }
            }
        }
    } else {
        rsx! {
            button {
                class: "btn btn-primary",
                onclick: move |_| actions.send(WalletAction::Connect),
                "Connect Wallet"
            }
        }
    }
}

/// First and last four characters of an address, for header display.
pub fn short_address(address: &str) -> String {
    if address.len() > 8 {
        format!("{}...{}", &address[..4], &address[address.len() - 4..])
    } else {
        address.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::short_address;

    #[test]
    fn test_short_address_elides_middle() {
        assert_eq!(
            short_address("HB5pijk6kufDEKx5SY3mcapHiuSnLzCmcrxLoKHsAXjh"),
            "HB5p...AXjh"
        );
        assert_eq!(short_address("short"), "short");
    }
}
