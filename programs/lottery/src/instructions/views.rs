use crate::{constants::*, oracles::PythPriceFeed, state::*};
use anchor_lang::prelude::*;
use pyth_solana_receiver_sdk::price_update::PriceUpdateV2;

/// Read-only accounts for the lottery views. Values are returned as
/// instruction return data.
#[derive(Accounts)]
pub struct ViewLottery<'info> {
    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(
        seeds = [ROUND_SEED.as_bytes()],
        bump = round.bump,
    )]
    pub round: Box<Account<'info, Round>>,
}

#[derive(Accounts)]
pub struct ViewEntryFee<'info> {
    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, Config>>,

    pub price_update: Box<Account<'info, PriceUpdateV2>>,
}

/// Entry fee in lamports at the current rate.
pub fn process_current_entry_fee(ctx: Context<ViewEntryFee>) -> Result<u64> {
    let config = &ctx.accounts.config;
    let feed = PythPriceFeed {
        price_update: &ctx.accounts.price_update,
        feed_id: &config.price_feed_id,
    };
    config.current_entry_fee(&feed)
}

pub fn process_pool_balance_view(ctx: Context<ViewLottery>) -> Result<u64> {
    Ok(ctx.accounts.round.pool_balance)
}

pub fn process_state_view(ctx: Context<ViewLottery>) -> Result<RoundState> {
    Ok(ctx.accounts.round.state)
}

pub fn process_get_subscription_id(ctx: Context<ViewLottery>) -> Result<u64> {
    Ok(ctx.accounts.config.subscription_id)
}
