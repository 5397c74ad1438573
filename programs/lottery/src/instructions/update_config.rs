use crate::{constants::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,
}

pub fn process_update_subscription_id(ctx: Context<UpdateConfig>, subscription_id: u64) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    ctx.accounts
        .config
        .update_subscription_id(&owner, subscription_id)
}

/// Takes effect for the next entry, including inside an open round.
pub fn process_update_participation_fee(
    ctx: Context<UpdateConfig>,
    reference_units: u64,
) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    ctx.accounts
        .config
        .update_participation_fee(&owner, reference_units)
}
