use base64::Engine;
use dioxus::prelude::*;
use serde::Deserialize;

use crate::{WalletState, HELIUS_API_KEY, PROGRAM_ID};
use super::use_player::parse_player;

// 8-byte discriminator + 56-byte Player body
const PLAYER_ACCOUNT_SIZE: usize = 64;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub address: String,
    pub name: String,
    pub score: u64,
    pub total_clicks: u64,
}

#[derive(Clone)]
pub struct LeaderboardState {
    pub entries: Vec<LeaderboardEntry>,
    /// Rank of the connected wallet across ALL players, not just the
    /// displayed slice.
    pub user_rank: Option<usize>,
    /// True while showing sample data because the RPC never answered.
    pub demo: bool,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for LeaderboardState {
    fn default() -> Self {
        Self {
            entries: vec![],
            user_rank: None,
            demo: false,
            loading: true,
            error: None,
        }
    }
}

pub fn use_leaderboard() -> Signal<LeaderboardState> {
    let mut state = use_signal(LeaderboardState::default);
    let wallet = use_context::<Signal<WalletState>>();

    let wallet_pubkey = use_memo(move || wallet.read().pubkey.clone());

    use_future(move || {
        async move {
            loop {
                let authority = wallet_pubkey();
                match fetch_leaderboard().await {
                    Ok(ranked) => {
                        let user_rank = user_rank_of(&ranked, authority.as_deref());

                        let mut s = state.write();
                        s.user_rank = user_rank;
                        s.entries = ranked.into_iter().take(50).collect();
                        s.demo = false;
                        s.loading = false;
                        s.error = None;
                    }
                    Err(e) => {
                        tracing::error!("Failed to fetch leaderboard: {}", e);
                        let mut s = state.write();
                        // Keep the last good board on a failed refresh. Fall
                        // back to sample data only when nothing ever loaded.
                        if s.entries.is_empty() || s.demo {
                            s.entries = demo_entries();
                            s.demo = true;
                            s.user_rank = None;
                        }
                        s.error = Some(e);
                        s.loading = false;
                    }
                }
                // Refresh every 10 seconds
                gloo_timers::future::TimeoutFuture::new(10_000).await;
            }
        }
    });

    state
}

#[derive(Deserialize)]
struct ScanResponse {
    result: Option<Vec<ScanRow>>,
}

#[derive(Deserialize)]
struct ScanRow {
    account: ScanAccount,
}

#[derive(Deserialize)]
struct ScanAccount {
    data: (String, String),
}

async fn fetch_leaderboard() -> Result<Vec<LeaderboardEntry>, String> {
    let url = format!("https://devnet.helius-rpc.com/?api-key={}", HELIUS_API_KEY);

    // The data-size filter narrows the scan to Player accounts
    let request = serde_json::json!({
        "jsonrpc": "2.0",
        "id": "taprush-leaderboard",
        "method": "getProgramAccounts",
        "params": {
            "programId": PROGRAM_ID,
            "encoding": "base64",
            "filters": [{ "dataSize": PLAYER_ACCOUNT_SIZE }]
        }
    });

    let response: ScanResponse = reqwest::Client::new()
        .post(&url)
        .json(&request)
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json()
        .await
        .map_err(|e| e.to_string())?;

    let mut entries: Vec<LeaderboardEntry> = vec![];
    for row in response.result.unwrap_or_default() {
        let data = base64::engine::general_purpose::STANDARD
            .decode(&row.account.data.0)
            .unwrap_or_default();

        // The board keys on the signing wallet, not the PDA address
        if let Some(player) = parse_player(&data) {
            entries.push(LeaderboardEntry {
                rank: 0,
                name: display_name(&player.authority),
                address: player.authority,
                score: player.score,
                total_clicks: player.total_clicks,
            });
        }
    }

    Ok(rank_entries(entries))
}

/// Sort players by score and assign 1-based ranks. Equal scores keep
/// their fetch order.
fn rank_entries(mut entries: Vec<LeaderboardEntry>) -> Vec<LeaderboardEntry> {
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    for (i, entry) in entries.iter_mut().enumerate() {
        entry.rank = i + 1;
    }
    entries
}

/// Rank of the given wallet in the full ranked list, found before the
/// display cut so players past position 50 still see their rank.
fn user_rank_of(ranked: &[LeaderboardEntry], address: Option<&str>) -> Option<usize> {
    address.and_then(|a| ranked.iter().find(|e| e.address == a).map(|e| e.rank))
}

const NAME_POOL: [&str; 7] = [
    "Tapper",
    "Clicker",
    "Zapper",
    "Vibester",
    "PointMaster",
    "TapKing",
    "ClickWizard",
];

/// Deterministic pseudonym so the board reads better than raw addresses.
pub fn display_name(address: &str) -> String {
    let bytes = bs58::decode(address).into_vec().unwrap_or_default();
    let index = bytes.last().map(|b| *b as usize % NAME_POOL.len()).unwrap_or(0);
    let tail = if address.len() >= 4 {
        &address[address.len() - 4..]
    } else {
        address
    };
    format!("{}{}", NAME_POOL[index], tail.to_uppercase())
}

pub fn avatar_url(seed: &str) -> String {
    format!("https://api.dicebear.com/7.x/identicon/svg?seed={}", seed)
}

/// Sample board shown when the RPC has never answered.
fn demo_entries() -> Vec<LeaderboardEntry> {
    let sample = [
        ("TapKing99", 1_250_000),
        ("VibeQueen", 980_000),
        ("ClickMaster", 750_000),
        ("TapStorm", 620_000),
        ("PointHunter", 480_000),
        ("VibeLord", 350_000),
        ("TapNinja", 275_000),
        ("ClickGod", 190_000),
        ("TapWarrior", 125_000),
        ("VibeStar", 85_000),
    ];

    sample
        .iter()
        .enumerate()
        .map(|(i, (name, score))| LeaderboardEntry {
            rank: i + 1,
            address: String::new(),
            name: name.to_string(),
            score: *score,
            total_clicks: *score,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(address: &str, score: u64) -> LeaderboardEntry {
        LeaderboardEntry {
            rank: 0,
            address: address.to_string(),
            name: display_name(address),
            score,
            total_clicks: score,
        }
    }

    #[test]
    fn test_rank_entries_sorts_descending() {
        let ranked = rank_entries(vec![entry("a", 10), entry("b", 30), entry("c", 20)]);
        let scores: Vec<u64> = ranked.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![30, 20, 10]);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[2].rank, 3);
    }

    #[test]
    fn test_rank_entries_keeps_order_for_ties() {
        let ranked = rank_entries(vec![entry("first", 20), entry("second", 20), entry("top", 50)]);
        assert_eq!(ranked[0].address, "top");
        assert_eq!(ranked[1].address, "first");
        assert_eq!(ranked[2].address, "second");
    }

    #[test]
    fn test_user_rank_found_past_display_cut() {
        let all: Vec<LeaderboardEntry> = (0..60)
            .map(|i| entry(&format!("p{}", i), 1_000 - i as u64))
            .collect();
        let ranked = rank_entries(all);
        assert_eq!(user_rank_of(&ranked, Some("p55")), Some(56));
        assert_eq!(user_rank_of(&ranked, Some("stranger")), None);
        assert_eq!(user_rank_of(&ranked, None), None);
        assert_eq!(ranked.into_iter().take(50).count(), 50);
    }

    #[test]
    fn test_display_name_is_deterministic() {
        let address = "iNFv8G92x3PvNMuB3axQUuyZvbxPW4ScRvczhpTVPeM";
        assert_eq!(display_name(address), display_name(address));
        assert!(display_name(address).ends_with("VPEM"));
    }

    #[test]
    fn test_demo_entries_are_ranked() {
        let entries = demo_entries();
        assert_eq!(entries.len(), 10);
        assert!(entries.windows(2).all(|w| w[0].score >= w[1].score));
        assert_eq!(entries[0].rank, 1);
        assert_eq!(entries[9].rank, 10);
    }
}
