use crate::{error::LotteryError, utils::normalize_exponent};
use anchor_lang::prelude::*;
use pyth_solana_receiver_sdk::price_update::PriceUpdateV2;

/// A reference-currency price of one SOL as a signed fixed-point number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceAnswer {
    pub value: i64,
    pub decimals: u32,
}

/// Read-only view of the external price feed.
pub trait PriceFeed {
    fn latest_answer(&self) -> Result<PriceAnswer>;
}

/// Reads the configured feed out of a posted Pyth price update.
pub struct PythPriceFeed<'a> {
    pub price_update: &'a PriceUpdateV2,
    pub feed_id: &'a [u8; 32],
}

impl PriceFeed for PythPriceFeed<'_> {
    fn latest_answer(&self) -> Result<PriceAnswer> {
        let price = self
            .price_update
            .get_price_unchecked(self.feed_id)
            .map_err(|_| LotteryError::InvalidPrice)?;
        let (value, decimals) = normalize_exponent(price.price, price.exponent)?;
        Ok(PriceAnswer { value, decimals })
    }
}
