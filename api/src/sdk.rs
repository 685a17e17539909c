use steel::*;

use crate::prelude::*;

/// Builds an initialize instruction.
pub fn initialize(signer: Pubkey) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(ARCADE_ADDRESS, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: Initialize {}.to_bytes(),
    }
}

/// Builds a submit_score instruction.
pub fn submit_score(signer: Pubkey, score: u64, total_clicks: u64) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(ARCADE_ADDRESS, false),
            AccountMeta::new(player_pda(signer).0, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: SubmitScore {
            score: score.to_le_bytes(),
            total_clicks: total_clicks.to_le_bytes(),
        }
        .to_bytes(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_score_accounts() {
        let signer = Pubkey::new_unique();
        let ix = submit_score(signer, 5, 5);
        assert_eq!(ix.program_id, crate::ID);
        assert_eq!(ix.accounts.len(), 4);
        assert_eq!(ix.accounts[0].pubkey, signer);
        assert!(ix.accounts[0].is_signer);
        assert_eq!(ix.accounts[1].pubkey, ARCADE_ADDRESS);
        assert_eq!(ix.accounts[2].pubkey, player_pda(signer).0);
        assert!(!ix.accounts[3].is_writable);
    }

    #[test]
    fn test_arcade_address_matches_runtime_derivation() {
        assert_eq!(ARCADE_ADDRESS, arcade_pda().0);
        assert_eq!(ARCADE_BUMP, arcade_pda().1);
    }
}
