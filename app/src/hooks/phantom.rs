//! Phantom wallet interop over the injected `window.solana` object.

#[cfg(feature = "web")]
mod web {
    use js_sys::{Promise, Reflect, Uint8Array};
    use wasm_bindgen::prelude::*;

    /// The injected provider, if the extension is present and is Phantom.
    fn provider() -> Result<JsValue, String> {
        let window = web_sys::window().ok_or("No window")?;
        let solana = Reflect::get(&window, &JsValue::from_str("solana"))
            .map_err(|_| "No wallet provider")?;

        if solana.is_undefined() {
            // Point the user at the extension instead of failing silently
            let _ = window.open_with_url("https://phantom.app/");
            return Err("Phantom is not installed. Install it and refresh.".to_string());
        }

        let is_phantom = Reflect::get(&solana, &JsValue::from_str("isPhantom"))
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or(false);
        if !is_phantom {
            return Err("The injected wallet is not Phantom".to_string());
        }

        Ok(solana)
    }

    fn method_of(target: &JsValue, name: &str) -> Result<js_sys::Function, String> {
        Reflect::get(target, &JsValue::from_str(name))
            .ok()
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
            .ok_or_else(|| format!("Wallet has no {} method", name))
    }

    async fn resolve(promise: JsValue) -> Result<JsValue, String> {
        let promise: Promise = promise
            .dyn_into()
            .map_err(|_| "Wallet call did not return a promise".to_string())?;
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map_err(|e| format!("Wallet request rejected: {:?}", e))
    }

    /// Prompt the connect dialog and return the wallet address.
    pub async fn connect() -> Result<String, String> {
        let solana = provider()?;
        let connect_fn = method_of(&solana, "connect")?;
        let result = resolve(
            connect_fn
                .call0(&solana)
                .map_err(|e| format!("Connect call failed: {:?}", e))?,
        )
        .await?;

        let public_key = Reflect::get(&result, &JsValue::from_str("publicKey"))
            .map_err(|_| "No publicKey in connect response")?;
        let to_string_fn = method_of(&public_key, "toString")?;
        to_string_fn
            .call0(&public_key)
            .ok()
            .and_then(|s| s.as_string())
            .ok_or_else(|| "Wallet address is not a string".to_string())
    }

    /// Hand a serialized transaction to the wallet for signing and
    /// submission. Returns the transaction signature.
    pub async fn sign_and_send(tx_bytes: &[u8]) -> Result<String, String> {
        let solana = provider()?;

        let tx_array = Uint8Array::new_with_length(tx_bytes.len() as u32);
        tx_array.copy_from(tx_bytes);

        let sign_fn = method_of(&solana, "signAndSendTransaction")?;
        let result = resolve(
            sign_fn
                .call1(&solana, &tx_array.into())
                .map_err(|e| format!("Sign call failed: {:?}", e))?,
        )
        .await?;

        Reflect::get(&result, &JsValue::from_str("signature"))
            .ok()
            .and_then(|s| s.as_string())
            .ok_or_else(|| "No signature in wallet response".to_string())
    }
}

#[cfg(feature = "web")]
pub use web::{connect, sign_and_send};

#[cfg(not(feature = "web"))]
pub async fn connect() -> Result<String, String> {
    Err("Wallet connection only available in web mode".to_string())
}

#[cfg(not(feature = "web"))]
pub async fn sign_and_send(_tx_bytes: &[u8]) -> Result<String, String> {
    Err("Transaction signing only available in web mode".to_string())
}
