use crate::{constants::*, state::*};
use anchor_lang::prelude::*;

/// Accounts required to create the lottery.
/// The signer becomes the owner of both PDAs.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Pays for both accounts and becomes the owner.
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init,
        payer = owner,
        space = DISCRIMINATOR_SIZE + Config::INIT_SPACE,
        seeds = [CONFIG_SEED.as_bytes()],
        bump
    )]
    pub config: Box<Account<'info, Config>>,

    /// The round singleton; it also escrows the pool.
    #[account(
        init,
        payer = owner,
        space = DISCRIMINATOR_SIZE + Round::INIT_SPACE,
        seeds = [ROUND_SEED.as_bytes()],
        bump
    )]
    pub round: Box<Account<'info, Round>>,

    pub system_program: Program<'info, System>,
}

/// Writes the configuration and leaves the round `Closed`.
///
/// # Arguments
/// * `subscription_id` - Coordinator subscription that pays for requests
/// * `price_feed_id` - Feed the SOL reference price is read from
/// * `randomness_coordinator` - Coordinator program id
/// * `key_hash` - Coordinator key hash for requests
pub fn process_initialize(
    ctx: Context<Initialize>,
    subscription_id: u64,
    price_feed_id: [u8; 32],
    randomness_coordinator: Pubkey,
    key_hash: [u8; 32],
) -> Result<()> {
    let (coordinator_authority, _) = Pubkey::find_program_address(
        &[COORDINATOR_AUTHORITY_SEED.as_bytes()],
        &randomness_coordinator,
    );

    let config = &mut ctx.accounts.config;
    config.owner = ctx.accounts.owner.key();
    config.randomness_coordinator = randomness_coordinator;
    config.coordinator_authority = coordinator_authority;
    config.entry_fee_reference_units = DEFAULT_ENTRY_FEE_REFERENCE_UNITS;
    config.price_feed_id = price_feed_id;
    config.subscription_id = subscription_id;
    config.key_hash = key_hash;
    config.bump = ctx.bumps.config;

    let round = &mut ctx.accounts.round;
    round.state = RoundState::Closed;
    round.participants = Vec::new();
    round.pool_balance = 0;
    round.pending_request_id = None;
    round.round_number = 0;
    round.last_winner = None;
    round.bump = ctx.bumps.round;

    msg!("Lottery initialized, owner {}", config.owner);

    Ok(())
}
