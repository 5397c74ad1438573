use crate::{constants::*, ledger::Lottery, payout::LamportPayout, state::*};
use anchor_lang::prelude::*;

/// Accounts for the coordinator's fulfillment callback.
///
/// The drawn winner is only known inside the handler, so the caller passes
/// the winner's account, writable, among the remaining accounts. If it is
/// missing the payout fails and the round stays `Calculating`.
#[derive(Accounts)]
pub struct OnRandomnessFulfilled<'info> {
    /// Coordinator signing PDA; checked against the config.
    pub coordinator_authority: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(
        mut,
        seeds = [ROUND_SEED.as_bytes()],
        bump = round.bump,
    )]
    pub round: Box<Account<'info, Round>>,
}

pub fn process_on_randomness_fulfilled<'info>(
    ctx: Context<'_, '_, 'info, 'info, OnRandomnessFulfilled<'info>>,
    request_id: u64,
    random_words: Vec<[u8; 32]>,
) -> Result<()> {
    let caller = ctx.accounts.coordinator_authority.key();
    let mut payout = LamportPayout {
        escrow: ctx.accounts.round.to_account_info(),
        candidates: ctx.remaining_accounts,
    };

    let config = &ctx.accounts.config;
    let round = &mut ctx.accounts.round;
    Lottery::new(config, round).on_randomness_fulfilled(
        &caller,
        request_id,
        &random_words,
        &mut payout,
    )?;

    Ok(())
}
