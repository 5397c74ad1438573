use crate::{constants::NATIVE_DECIMALS, error::LotteryError};
use anchor_lang::prelude::*;

/// Converts a fee in whole reference units into lamports at `price`
/// reference units per SOL, `price` carrying `price_decimals` decimals.
///
/// The result is rounded up, so the fee never under-collects against the
/// exact conversion. A non-positive price is rejected before any division.
pub fn entry_fee_in_lamports(reference_units: u64, price: i64, price_decimals: u32) -> Result<u64> {
    require!(price > 0, LotteryError::InvalidPrice);

    let scale = 10u128
        .checked_pow(
            NATIVE_DECIMALS
                .checked_add(price_decimals)
                .ok_or(LotteryError::MathOverflow)?,
        )
        .ok_or(LotteryError::MathOverflow)?;
    let numerator = (reference_units as u128)
        .checked_mul(scale)
        .ok_or(LotteryError::MathOverflow)?;
    let denominator = price as u128;

    let mut fee = numerator / denominator;
    if numerator % denominator != 0 {
        fee = fee.checked_add(1).ok_or(LotteryError::MathOverflow)?;
    }

    Ok(u64::try_from(fee).map_err(|_| LotteryError::MathOverflow)?)
}

/// Brings a Pyth style `(price, exponent)` pair to `(price, decimals)`.
pub fn normalize_exponent(price: i64, exponent: i32) -> Result<(i64, u32)> {
    if exponent <= 0 {
        return Ok((price, exponent.unsigned_abs()));
    }
    let mul = 10i64
        .checked_pow(exponent as u32)
        .ok_or(LotteryError::MathOverflow)?;
    let scaled = price.checked_mul(mul).ok_or(LotteryError::MathOverflow)?;
    Ok((scaled, 0))
}
