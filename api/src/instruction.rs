use steel::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, TryFromPrimitive)]
pub enum TaprushInstruction {
    Initialize = 0,
    SubmitScore = 1,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Initialize {}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SubmitScore {
    /// The player's current score.
    pub score: [u8; 8],

    /// The player's lifetime tap count.
    pub total_clicks: [u8; 8],
}

instruction!(TaprushInstruction, Initialize);
instruction!(TaprushInstruction, SubmitScore);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_score_parse() {
        let ix = SubmitScore {
            score: 1250u64.to_le_bytes(),
            total_clicks: 1250u64.to_le_bytes(),
        };
        let bytes = ix.to_bytes();
        assert_eq!(bytes[0], TaprushInstruction::SubmitScore as u8);
        let parsed = SubmitScore::try_from_bytes(&bytes[1..]).unwrap();
        assert_eq!(u64::from_le_bytes(parsed.score), 1250);
        assert_eq!(u64::from_le_bytes(parsed.total_clicks), 1250);
    }
}
