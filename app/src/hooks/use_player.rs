use dioxus::prelude::*;
use crate::{PlayerState, SyncState, WalletState, RPC_URL};
use super::rpc::{fetch_account, player_pda};

/// First discriminator byte of a Player account (matching taprush-api).
const PLAYER_DISCRIMINATOR: u8 = 101;

pub fn use_player() -> Signal<PlayerState> {
    let mut player = use_context::<Signal<PlayerState>>();
    let mut sync = use_context::<Signal<SyncState>>();
    let wallet = use_context::<Signal<WalletState>>();

    // Extract wallet pubkey as a memo to avoid borrow conflicts
    let wallet_pubkey = use_memo(move || wallet.read().pubkey.clone());

    // Poll the on-chain Player account while a wallet is connected
    use_future(move || {
        async move {
            loop {
                let pubkey = wallet_pubkey();
                if let Some(authority) = pubkey {
                    match fetch_player(&authority).await {
                        Ok(data) => {
                            let mut player_mut = player.write();
                            match &data {
                                Some(account) => {
                                    player_mut.exists = true;
                                    player_mut.score = account.score;
                                    player_mut.total_clicks = account.total_clicks;
                                    player_mut.last_update_at = account.last_update_at;
                                }
                                None => {
                                    player_mut.exists = false;
                                    player_mut.score = 0;
                                    player_mut.total_clicks = 0;
                                    player_mut.last_update_at = 0;
                                }
                            }
                            player_mut.loading = false;
                            drop(player_mut);

                            // Scores recorded from another device count as
                            // saved here too.
                            if let Some(account) = data {
                                let mut sync_mut = sync.write();
                                if account.score > sync_mut.last_saved_score {
                                    sync_mut.last_saved_score = account.score;
                                }
                            }
                        }
                        Err(e) => {
                            tracing::error!("Failed to fetch player: {}", e);
                        }
                    }
                }
                // Poll every 10 seconds
                gloo_timers::future::TimeoutFuture::new(10_000).await;
            }
        }
    });

    player
}

/// Decoded on-chain Player account.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerAccount {
    pub authority: String,
    pub score: u64,
    pub total_clicks: u64,
    pub last_update_at: i64,
}

pub fn parse_player(bytes: &[u8]) -> Option<PlayerAccount> {
    // Layout (matching api/src/state/player.rs):
    // 0-8: discriminator
    // 8-40: authority (32 bytes)
    // 40-48: score (u64)
    // 48-56: total_clicks (u64)
    // 56-64: last_update_at (i64)
    if bytes.len() < 64 || bytes[0] != PLAYER_DISCRIMINATOR {
        return None;
    }

    Some(PlayerAccount {
        authority: bs58::encode(&bytes[8..40]).into_string(),
        score: u64::from_le_bytes(bytes[40..48].try_into().unwrap_or_default()),
        total_clicks: u64::from_le_bytes(bytes[48..56].try_into().unwrap_or_default()),
        last_update_at: i64::from_le_bytes(bytes[56..64].try_into().unwrap_or_default()),
    })
}

async fn fetch_player(authority: &str) -> Result<Option<PlayerAccount>, String> {
    let pda = player_pda(authority);
    let data = fetch_account(RPC_URL, &pda).await?;
    Ok(data.as_deref().and_then(parse_player))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_account(score: u64, total_clicks: u64, last_update_at: i64) -> Vec<u8> {
        let mut bytes = vec![0u8; 64];
        bytes[0] = PLAYER_DISCRIMINATOR;
        bytes[8..40].copy_from_slice(&[7u8; 32]);
        bytes[40..48].copy_from_slice(&score.to_le_bytes());
        bytes[48..56].copy_from_slice(&total_clicks.to_le_bytes());
        bytes[56..64].copy_from_slice(&last_update_at.to_le_bytes());
        bytes
    }

    #[test]
    fn test_parse_player_reads_all_fields() {
        let account = parse_player(&sample_account(1_234, 1_240, 1_756_000_000)).unwrap();
        assert_eq!(account.score, 1_234);
        assert_eq!(account.total_clicks, 1_240);
        assert_eq!(account.last_update_at, 1_756_000_000);
        assert_eq!(account.authority, bs58::encode(&[7u8; 32]).into_string());
    }

    #[test]
    fn test_parse_player_rejects_foreign_accounts() {
        // Wrong discriminator
        let mut bytes = sample_account(1, 1, 0);
        bytes[0] = 100;
        assert!(parse_player(&bytes).is_none());

        // Truncated data
        assert!(parse_player(&sample_account(1, 1, 0)[..32]).is_none());
    }
}
