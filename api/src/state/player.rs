use serde::{Deserialize, Serialize};
use steel::*;

use crate::error::TaprushError;
use crate::state::player_pda;

use super::TaprushAccount;

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Player {
    /// The authority of this player account.
    pub authority: Pubkey,

    /// The highest score this player has saved.
    pub score: u64,

    /// The lifetime tap count at the last save.
    pub total_clicks: u64,

    /// The last time this player saved their score.
    pub last_update_at: i64,
}

impl Player {
    pub fn pda(&self) -> (Pubkey, u8) {
        player_pda(self.authority)
    }

    /// Record a save. Scores only move up and click counts never move back.
    /// Returns the click delta since the last save, for arcade totals.
    pub fn try_record(
        &mut self,
        score: u64,
        total_clicks: u64,
        clock: &Clock,
    ) -> Result<u64, TaprushError> {
        if score <= self.score {
            return Err(TaprushError::ScoreRegression);
        }
        if total_clicks < self.total_clicks {
            return Err(TaprushError::ClicksRegression);
        }
        let click_delta = total_clicks - self.total_clicks;
        self.score = score;
        self.total_clicks = total_clicks;
        self.last_update_at = clock.unix_timestamp;
        Ok(click_delta)
    }
}

account!(TaprushAccount, Player);

#[cfg(test)]
mod tests {
    use super::*;

    fn clock_at(unix_timestamp: i64) -> Clock {
        Clock {
            unix_timestamp,
            ..Clock::default()
        }
    }

    #[test]
    fn test_size() {
        // 8 byte discriminator + fields must match the client-side account filter.
        assert_eq!(8 + std::mem::size_of::<Player>(), 64);
    }

    #[test]
    fn test_record_advances_high_water() {
        let mut player = Player {
            authority: Pubkey::new_unique(),
            score: 0,
            total_clicks: 0,
            last_update_at: 0,
        };
        let delta = player.try_record(10, 10, &clock_at(1_700_000_000)).unwrap();
        assert_eq!(delta, 10);
        assert_eq!(player.score, 10);
        assert_eq!(player.total_clicks, 10);
        assert_eq!(player.last_update_at, 1_700_000_000);

        let delta = player.try_record(25, 25, &clock_at(1_700_000_060)).unwrap();
        assert_eq!(delta, 15);
        assert_eq!(player.last_update_at, 1_700_000_060);
    }

    #[test]
    fn test_record_rejects_score_regression() {
        let mut player = Player {
            authority: Pubkey::new_unique(),
            score: 50,
            total_clicks: 50,
            last_update_at: 0,
        };
        assert_eq!(
            player.try_record(50, 51, &clock_at(1)),
            Err(TaprushError::ScoreRegression)
        );
        assert_eq!(
            player.try_record(49, 51, &clock_at(1)),
            Err(TaprushError::ScoreRegression)
        );
        // Rejected saves must not touch the account.
        assert_eq!(player.score, 50);
        assert_eq!(player.total_clicks, 50);
        assert_eq!(player.last_update_at, 0);
    }

    #[test]
    fn test_record_rejects_click_regression() {
        let mut player = Player {
            authority: Pubkey::new_unique(),
            score: 50,
            total_clicks: 50,
            last_update_at: 0,
        };
        assert_eq!(
            player.try_record(51, 49, &clock_at(1)),
            Err(TaprushError::ClicksRegression)
        );
    }

    #[test]
    fn test_record_allows_equal_clicks() {
        let mut player = Player {
            authority: Pubkey::new_unique(),
            score: 5,
            total_clicks: 10,
            last_update_at: 0,
        };
        let delta = player.try_record(6, 10, &clock_at(2)).unwrap();
        assert_eq!(delta, 0);
    }
}
