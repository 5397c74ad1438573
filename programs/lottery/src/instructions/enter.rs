use crate::{constants::*, ledger::Lottery, oracles::PythPriceFeed, state::*};
use anchor_lang::prelude::*;
use anchor_lang::system_program;
use pyth_solana_receiver_sdk::price_update::PriceUpdateV2;

/// Accounts required to enter the current round.
#[derive(Accounts)]
pub struct Enter<'info> {
    /// The participant; pays the entry.
    #[account(mut)]
    pub player: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, Config>>,

    /// Receives the payment as escrow.
    #[account(
        mut,
        seeds = [ROUND_SEED.as_bytes()],
        bump = round.bump,
    )]
    pub round: Box<Account<'info, Round>>,

    /// Posted price update carrying the configured feed.
    pub price_update: Box<Account<'info, PriceUpdateV2>>,

    pub system_program: Program<'info, System>,
}

/// Enters the caller once, paying `amount` lamports.
///
/// Steps:
/// 1. Check that the round is open and `amount` covers the live fee.
/// 2. Append the caller to the registry and grow the pool.
/// 3. Move `amount` lamports from the caller into the round account.
///
/// Any excess above the fee is kept in the pool.
pub fn process_enter(ctx: Context<Enter>, amount: u64) -> Result<()> {
    let player = ctx.accounts.player.key();
    let feed = PythPriceFeed {
        price_update: &ctx.accounts.price_update,
        feed_id: &ctx.accounts.config.price_feed_id,
    };
    let config = &ctx.accounts.config;
    let round = &mut ctx.accounts.round;

    Lottery::new(config, round).enter(player, amount, &feed)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.player.to_account_info(),
                to: ctx.accounts.round.to_account_info(),
            },
        ),
        amount,
    )?;

    Ok(())
}
