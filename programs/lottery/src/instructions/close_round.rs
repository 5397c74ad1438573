use crate::{
    constants::*, error::LotteryError, ledger::Lottery, oracles::CpiRandomnessCoordinator,
    state::*,
};
use anchor_lang::prelude::*;

/// Accounts required to close the round and request randomness.
///
/// Any remaining accounts are forwarded, in order, to the coordinator's
/// `request_random_words` after the round PDA (which signs as requester).
#[derive(Accounts)]
pub struct CloseRound<'info> {
    pub owner: Signer<'info>,

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

    /// CHECK: pinned to the configured coordinator program.
    #[account(
        executable,
        address = config.randomness_coordinator @ LotteryError::Unauthorized,
    )]
    pub randomness_coordinator: UncheckedAccount<'info>,
}

pub fn process_close_round<'info>(
    ctx: Context<'_, '_, 'info, 'info, CloseRound<'info>>,
) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let round_bump = ctx.accounts.round.bump;
    let signer_seeds: &[&[&[u8]]] = &[&[ROUND_SEED.as_bytes(), &[round_bump]]];

    let mut coordinator = CpiRandomnessCoordinator {
        coordinator_program: ctx.accounts.randomness_coordinator.to_account_info(),
        requester: ctx.accounts.round.to_account_info(),
        forwarded_accounts: ctx.remaining_accounts,
        signer_seeds,
    };

    let config = &ctx.accounts.config;
    let round = &mut ctx.accounts.round;
    Lottery::new(config, round).close(&owner, &mut coordinator)?;

    Ok(())
}
