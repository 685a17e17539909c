mod arcade;
mod player;

pub use arcade::*;
pub use player::*;

use steel::*;

use crate::consts::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
pub enum TaprushAccount {
    Arcade = 100,
    Player = 101,
}

/// Fetch the PDA of the arcade account.
pub fn arcade_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[ARCADE], &crate::id())
}

/// Fetch the PDA of a player account.
pub fn player_pda(authority: Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[PLAYER, authority.as_ref()], &crate::id())
}
