use serde::{Deserialize, Serialize};
use steel::*;

use crate::state::arcade_pda;

use super::TaprushAccount;

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Arcade {
    /// The admin that initialized the arcade.
    pub admin: Pubkey,

    /// The number of player accounts ever created.
    pub player_count: u64,

    /// The total tap count saved across all players.
    pub total_taps: u64,
}

impl Arcade {
    pub fn pda(&self) -> (Pubkey, u8) {
        arcade_pda()
    }

    /// Count a newly created player account.
    pub fn register_player(&mut self) {
        self.player_count += 1;
    }

    /// Fold a player's click delta into the global tap total.
    pub fn absorb_taps(&mut self, click_delta: u64) {
        self.total_taps += click_delta;
    }
}

account!(TaprushAccount, Arcade);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size() {
        assert_eq!(8 + std::mem::size_of::<Arcade>(), 56);
    }

    #[test]
    fn test_counters() {
        let mut arcade = Arcade {
            admin: Pubkey::new_unique(),
            player_count: 0,
            total_taps: 0,
        };
        arcade.register_player();
        arcade.absorb_taps(120);
        arcade.register_player();
        arcade.absorb_taps(30);
        assert_eq!(arcade.player_count, 2);
        assert_eq!(arcade.total_taps, 150);
    }
}
