use crate::error::LotteryError;
use anchor_lang::prelude::*;

/// Reduces a 256-bit big-endian random word modulo `participant_count`.
///
/// Uniform over indices up to modulo bias, which is negligible while the
/// word carries far more bits than the participant count; accepted as an
/// approximation.
pub fn winner_index(random_word: &[u8; 32], participant_count: u64) -> Result<u64> {
    require!(participant_count > 0, LotteryError::EmptyPool);

    let modulus = participant_count as u128;
    // acc < modulus <= u64::MAX, so acc * 256 + 255 stays inside u128
    let index = random_word
        .iter()
        .fold(0u128, |acc, byte| ((acc << 8) | *byte as u128) % modulus);

    Ok(index as u64)
}
