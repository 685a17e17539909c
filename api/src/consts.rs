use const_crypto::ed25519;
use solana_program::{pubkey, pubkey::Pubkey};

/// The authority allowed to initialize the arcade account.
pub const ADMIN_ADDRESS: Pubkey = pubkey!("HB5pijk6kufDEKx5SY3mcapHiuSnLzCmcrxLoKHsAXjh");

/// The seed of the arcade account PDA.
pub const ARCADE: &[u8] = b"arcade";

/// The seed of player account PDAs.
pub const PLAYER: &[u8] = b"player";

/// The address of the arcade account.
pub const ARCADE_ADDRESS: Pubkey =
    Pubkey::new_from_array(ed25519::derive_program_address(&[ARCADE], &PROGRAM_ID).0);

/// The bump of the arcade account.
pub const ARCADE_BUMP: u8 = ed25519::derive_program_address(&[ARCADE], &PROGRAM_ID).1;

/// Program id for const pda derivations.
const PROGRAM_ID: [u8; 32] = unsafe { *std::mem::transmute::<&Pubkey, &[u8; 32]>(&crate::ID) };
