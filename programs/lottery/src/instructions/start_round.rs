use crate::{constants::*, ledger::Lottery, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct StartRound<'info> {
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
}

pub fn process_start_round(ctx: Context<StartRound>) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let config = &ctx.accounts.config;
    let round = &mut ctx.accounts.round;

    Lottery::new(config, round).start(&owner)
}
