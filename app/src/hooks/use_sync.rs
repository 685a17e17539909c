use dioxus::prelude::*;

use crate::{GameState, SyncState, WalletState, PROGRAM_ID, RPC_URL};
use super::rpc::{arcade_pda, player_pda, RpcRequest, RpcResponse};
#[cfg(feature = "web")]
use super::phantom;

pub const SYSTEM_PROGRAM: &str = "11111111111111111111111111111111";

// Instruction discriminators (from api/src/instruction.rs)
const SUBMIT_SCORE_DISCRIMINATOR: u8 = 1;

// A save fires only after tapping has paused this long
const SYNC_DEBOUNCE_MS: f64 = 4_000.0;

/// Millisecond wall clock, usable from both the browser and native tests.
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as f64)
        .unwrap_or_default()
}

/// Background score sync. Pushes the local score on-chain once tapping has
/// paused, but only when it beats the last saved score.
pub fn use_sync() -> Signal<SyncState> {
    let game = use_context::<Signal<GameState>>();
    let mut sync = use_context::<Signal<SyncState>>();
    let wallet = use_context::<Signal<WalletState>>();

    // Extract wallet pubkey as a memo to avoid borrow conflicts
    let wallet_pubkey = use_memo(move || wallet.read().pubkey.clone());

    use_future(move || {
        async move {
            loop {
                if let Some(authority) = wallet_pubkey() {
                    let (score, total_clicks, last_tap_at_ms) = {
                        let g = game.read();
                        (g.score, g.total_clicks, g.last_tap_at_ms)
                    };
                    let (submitting, last_saved) = {
                        let s = sync.read();
                        (s.submitting, s.last_saved_score)
                    };

                    let idle = now_ms() - last_tap_at_ms >= SYNC_DEBOUNCE_MS;
                    if !submitting && score > last_saved && idle {
                        tracing::info!("Auto-saving score {} ({} taps)", score, total_clicks);
                        sync.write().submitting = true;

                        let result =
                            submit_score_transaction(&authority, score, total_clicks).await;

                        let mut sync_mut = sync.write();
                        if result.is_ok() {
                            sync_mut.last_saved_score = score;
                        }
                        sync_mut.last_result = Some(result);
                        sync_mut.submitting = false;
                    }
                }
                // Check the gate every second
                gloo_timers::future::TimeoutFuture::new(1_000).await;
            }
        }
    });

    sync
}

fn submit_score_ix_data(score: u64, total_clicks: u64) -> Vec<u8> {
    // [discriminator (1 byte)] [score (8 bytes)] [total_clicks (8 bytes)]
    let mut ix_data = vec![SUBMIT_SCORE_DISCRIMINATOR];
    ix_data.extend_from_slice(&score.to_le_bytes());
    ix_data.extend_from_slice(&total_clicks.to_le_bytes());
    ix_data
}

/// Build the SubmitScore transaction and send it via Phantom.
/// The program creates the Player account on first submit.
#[cfg(feature = "web")]
pub async fn submit_score_transaction(
    authority: &str,
    score: u64,
    total_clicks: u64,
) -> Result<String, String> {
    let arcade = arcade_pda();
    let player = player_pda(authority);

    let ix_data = submit_score_ix_data(score, total_clicks);

    let blockhash = fetch_recent_blockhash(RPC_URL).await?;

    // Accounts in order (matching sdk.rs submit_score):
    // 0: signer (writable, signer)
    // 1: arcade (writable)
    // 2: player (writable)
    // 3: system_program (readonly)
    let accounts = vec![
        (authority, true, true),
        (&arcade as &str, true, false),
        (&player as &str, true, false),
        (SYSTEM_PROGRAM, false, false),
    ];

    let tx_bytes = build_transaction_bytes(
        authority,
        &accounts,
        PROGRAM_ID,
        &ix_data,
        &blockhash,
    )?;

    phantom::sign_and_send(&tx_bytes).await
}

#[cfg(not(feature = "web"))]
pub async fn submit_score_transaction(
    _authority: &str,
    _score: u64,
    _total_clicks: u64,
) -> Result<String, String> {
    Err("Score sync only available in web mode".to_string())
}

async fn fetch_recent_blockhash(rpc_url: &str) -> Result<String, String> {
    #[derive(serde::Deserialize)]
    struct BlockhashResult {
        value: BlockhashValue,
    }

    #[derive(serde::Deserialize)]
    struct BlockhashValue {
        blockhash: String,
    }

    let request = RpcRequest::new("getLatestBlockhash", vec![]);

    let response: RpcResponse<BlockhashResult> = reqwest::Client::new()
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

    response
        .result
        .map(|r| r.value.blockhash)
        .ok_or_else(|| "No blockhash returned".to_string())
}

fn decode_32(label: &str, value: &str) -> Result<Vec<u8>, String> {
    let bytes = bs58::decode(value).into_vec().map_err(|e| e.to_string())?;
    if bytes.len() != 32 {
        return Err(format!("{} is not 32 bytes: {}", label, value));
    }
    Ok(bytes)
}

/// Serialize an unsigned single-instruction legacy transaction. The leading
/// signature count is zero; the wallet fills signatures in when signing.
///
/// Message layout:
///   header [signers, readonly signed, readonly unsigned]
///   compact-u16 account count, 32-byte keys (fee payer first)
///   32-byte recent blockhash
///   compact-u16 instruction count, then per instruction:
///   program index, compact-u16 index count, indices, compact-u16 data len, data
fn build_transaction_bytes(
    fee_payer: &str,
    accounts: &[(&str, bool, bool)], // (pubkey, writable, signer)
    program_id: &str,
    ix_data: &[u8],
    blockhash: &str,
) -> Result<Vec<u8>, String> {
    // Deduplicated account table. The fee payer always occupies slot 0.
    let mut keys = vec![fee_payer];
    let mut metas: Vec<(usize, bool, bool)> = Vec::with_capacity(accounts.len());
    for &(pubkey, writable, signer) in accounts {
        let idx = match keys.iter().position(|k| *k == pubkey) {
            Some(idx) => idx,
            None => {
                keys.push(pubkey);
                keys.len() - 1
            }
        };
        metas.push((idx, writable, signer));
    }
    let program_idx = match keys.iter().position(|k| *k == program_id) {
        Some(idx) => idx,
        None => {
            keys.push(program_id);
            keys.len() - 1
        }
    };

    // Readonly unsigned keys: never referenced as writable or signer. The
    // fee payer at slot 0 is always the sole signer here.
    let readonly_unsigned = (1..keys.len())
        .filter(|i| !metas.iter().any(|(idx, w, s)| idx == i && (*w || *s)))
        .count() as u8;

    let mut tx = vec![0u8]; // zero signatures on the unsigned wire form
    tx.extend([1u8, 0, readonly_unsigned]);

    tx.extend(compact_u16(keys.len() as u16));
    for key in &keys {
        tx.extend(decode_32("pubkey", key)?);
    }

    tx.extend(decode_32("blockhash", blockhash)?);

    tx.extend(compact_u16(1));
    tx.push(program_idx as u8);
    tx.extend(compact_u16(metas.len() as u16));
    tx.extend(metas.iter().map(|(idx, _, _)| *idx as u8));
    tx.extend(compact_u16(ix_data.len() as u16));
    tx.extend(ix_data);

    Ok(tx)
}

/// Solana shortvec length prefix: 7 bits per byte, high bit marks more.
fn compact_u16(mut val: u16) -> Vec<u8> {
    let mut out = Vec::with_capacity(3);
    loop {
        let byte = (val & 0x7f) as u8;
        val >>= 7;
        if val == 0 {
            out.push(byte);
            return out;
        }
        out.push(byte | 0x80);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AUTHORITY: &str = "HB5pijk6kufDEKx5SY3mcapHiuSnLzCmcrxLoKHsAXjh";
    // Any 32-byte base58 string works as a blockhash here
    const BLOCKHASH: &str = "iNFv8G92x3PvNMuB3axQUuyZvbxPW4ScRvczhpTVPeM";

    #[test]
    fn test_compact_u16_encoding() {
        assert_eq!(compact_u16(0), vec![0x00]);
        assert_eq!(compact_u16(1), vec![0x01]);
        assert_eq!(compact_u16(127), vec![0x7f]);
        assert_eq!(compact_u16(128), vec![0x80, 0x01]);
        assert_eq!(compact_u16(16_383), vec![0xff, 0x7f]);
        assert_eq!(compact_u16(16_384), vec![0x80, 0x80, 0x01]);
    }

    #[test]
    fn test_submit_ix_data_layout() {
        let ix_data = submit_score_ix_data(512, 600);
        assert_eq!(ix_data.len(), 17);
        assert_eq!(ix_data[0], SUBMIT_SCORE_DISCRIMINATOR);
        assert_eq!(u64::from_le_bytes(ix_data[1..9].try_into().unwrap()), 512);
        assert_eq!(u64::from_le_bytes(ix_data[9..17].try_into().unwrap()), 600);
    }

    #[test]
    fn test_build_transaction_bytes_layout() {
        let arcade = arcade_pda();
        let player = player_pda(AUTHORITY);
        let accounts = vec![
            (AUTHORITY, true, true),
            (&arcade as &str, true, false),
            (&player as &str, true, false),
            (SYSTEM_PROGRAM, false, false),
        ];
        let ix_data = submit_score_ix_data(42, 42);

        let tx =
            build_transaction_bytes(AUTHORITY, &accounts, PROGRAM_ID, &ix_data, BLOCKHASH)
                .unwrap();

        // No signatures yet; the wallet adds them
        assert_eq!(tx[0], 0);
        // Header: one signer, no readonly signed, two readonly unsigned
        assert_eq!(&tx[1..4], &[1, 0, 2]);
        // Five unique accounts: signer, arcade, player, system, program
        assert_eq!(tx[4], 5);
        // Fee payer comes first
        let fee_payer = bs58::decode(AUTHORITY).into_vec().unwrap();
        assert_eq!(&tx[5..37], fee_payer.as_slice());

        // Single instruction follows the 32-byte blockhash
        let ix = 1 + 3 + 1 + 5 * 32 + 32;
        assert_eq!(tx[ix], 1);
        assert_eq!(tx[ix + 1], 4); // program index
        assert_eq!(tx[ix + 2], 4); // instruction account count
        assert_eq!(&tx[ix + 3..ix + 7], &[0, 1, 2, 3]);
        assert_eq!(tx[ix + 7] as usize, ix_data.len());
        assert_eq!(&tx[ix + 8..], ix_data.as_slice());
    }

    #[test]
    fn test_build_transaction_bytes_rejects_bad_pubkey() {
        let accounts = vec![("tooshort", true, true)];
        let result = build_transaction_bytes("tooshort", &accounts, PROGRAM_ID, &[], BLOCKHASH);
        assert!(result.is_err());
    }
}
