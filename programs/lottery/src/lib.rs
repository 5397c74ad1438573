#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod ledger;
pub mod oracles;
pub mod payout;
pub mod state;
pub mod utils;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("Hgw6cAaajoWMKc1exafv1RzuZxX7Ap2hXJHpi2AUbWhN");

#[program]
pub mod lottery {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        subscription_id: u64,
        price_feed_id: [u8; 32],
        randomness_coordinator: Pubkey,
        key_hash: [u8; 32],
    ) -> Result<()> {
        process_initialize(
            ctx,
            subscription_id,
            price_feed_id,
            randomness_coordinator,
            key_hash,
        )
    }

    pub fn start_round(ctx: Context<StartRound>) -> Result<()> {
        process_start_round(ctx)
    }

    pub fn enter(ctx: Context<Enter>, amount: u64) -> Result<()> {
        process_enter(ctx, amount)
    }

    pub fn close_round<'info>(
        ctx: Context<'_, '_, 'info, 'info, CloseRound<'info>>,
    ) -> Result<()> {
        process_close_round(ctx)
    }

    pub fn on_randomness_fulfilled<'info>(
        ctx: Context<'_, '_, 'info, 'info, OnRandomnessFulfilled<'info>>,
        request_id: u64,
        random_words: Vec<[u8; 32]>,
    ) -> Result<()> {
        process_on_randomness_fulfilled(ctx, request_id, random_words)
    }

    pub fn update_subscription_id(ctx: Context<UpdateConfig>, subscription_id: u64) -> Result<()> {
        process_update_subscription_id(ctx, subscription_id)
    }

    pub fn update_participation_fee(ctx: Context<UpdateConfig>, reference_units: u64) -> Result<()> {
        process_update_participation_fee(ctx, reference_units)
    }

    pub fn current_entry_fee(ctx: Context<ViewEntryFee>) -> Result<u64> {
        process_current_entry_fee(ctx)
    }

    pub fn pool_balance_view(ctx: Context<ViewLottery>) -> Result<u64> {
        process_pool_balance_view(ctx)
    }

    pub fn state_view(ctx: Context<ViewLottery>) -> Result<RoundState> {
        process_state_view(ctx)
    }

    pub fn get_subscription_id(ctx: Context<ViewLottery>) -> Result<u64> {
        process_get_subscription_id(ctx)
    }
}
