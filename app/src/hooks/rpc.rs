use base64::Engine;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct RpcRequest {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'static str,
    pub params: Vec<serde_json::Value>,
}

impl RpcRequest {
    pub fn new(method: &'static str, params: Vec<serde_json::Value>) -> Self {
        Self {
            jsonrpc: "2.0",
            id: 1,
            method,
            params,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct RpcResponse<T> {
    pub result: Option<T>,
    pub error: Option<RpcError>,
}

#[derive(Deserialize, Debug)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

#[derive(Deserialize)]
struct AccountEnvelope {
    value: Option<AccountValue>,
}

#[derive(Deserialize)]
struct AccountValue {
    data: (String, String), // (base64 data, encoding)
}

/// Fetch raw account bytes. `Ok(None)` means the account does not exist.
pub async fn fetch_account(rpc_url: &str, pubkey: &str) -> Result<Option<Vec<u8>>, String> {
    let request = RpcRequest::new(
        "getAccountInfo",
        vec![
            serde_json::json!(pubkey),
            serde_json::json!({ "encoding": "base64" }),
        ],
    );

    let response: RpcResponse<AccountEnvelope> = reqwest::Client::new()
        .post(rpc_url)
        .json(&request)
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json()
        .await
        .map_err(|e| e.to_string())?;

    if let Some(error) = response.error {
        return Err(error.message);
    }

    let Some(account) = response.result.and_then(|r| r.value) else {
        return Ok(None);
    };

    let data = base64::engine::general_purpose::STANDARD
        .decode(&account.data.0)
        .map_err(|e| e.to_string())?;
    Ok(Some(data))
}

/// Client-side program address derivation. The bump search mirrors the
/// on-chain algorithm; the off-curve test is a cheap approximation rather
/// than full ed25519 decompression.
pub fn derive_pda(seeds: &[&[u8]], program_id: &str) -> String {
    use sha2::{Digest, Sha256};

    let program_bytes = bs58::decode(program_id).into_vec().unwrap_or_default();

    // Highest bump wins, as in find_program_address
    for bump in (0..=255u8).rev() {
        let mut hasher = Sha256::new();
        for seed in seeds {
            hasher.update(seed);
        }
        hasher.update([bump]);
        hasher.update(&program_bytes);
        hasher.update(b"ProgramDerivedAddress");
        let candidate = hasher.finalize();

        if candidate[31] & 0x80 == 0 {
            return bs58::encode(&candidate[..]).into_string();
        }
    }

    String::new()
}

pub fn arcade_pda() -> String {
    derive_pda(&[crate::ARCADE_SEED], crate::PROGRAM_ID)
}

pub fn player_pda(authority: &str) -> String {
    let auth_bytes = bs58::decode(authority).into_vec().unwrap_or_default();
    derive_pda(&[crate::PLAYER_SEED, &auth_bytes], crate::PROGRAM_ID)
}

#[cfg(test)]
mod tests {
    use super::*;

    const AUTHORITY: &str = "HB5pijk6kufDEKx5SY3mcapHiuSnLzCmcrxLoKHsAXjh";

    #[test]
    fn test_derive_pda_is_deterministic() {
        let first = player_pda(AUTHORITY);
        let second = player_pda(AUTHORITY);
        assert_eq!(first, second);
        assert_eq!(bs58::decode(&first).into_vec().unwrap().len(), 32);
    }

    #[test]
    fn test_derive_pda_depends_on_seeds() {
        assert_ne!(arcade_pda(), player_pda(AUTHORITY));
        assert_ne!(
            player_pda(AUTHORITY),
            player_pda("iNFv8G92x3PvNMuB3axQUuyZvbxPW4ScRvczhpTVPeM"),
        );
    }
}
