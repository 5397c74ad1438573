use crate::{
    error::LotteryError,
    events::{ParticipationFeeChanged, SubscriptionChanged},
    oracles::PriceFeed,
    utils::entry_fee_in_lamports,
};
use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace, Default)]
pub struct Config {
    // --- Authorities ---
    pub owner: Pubkey,                  // May start/close rounds and update settings.
    pub randomness_coordinator: Pubkey, // Coordinator program that randomness requests are sent to.
    pub coordinator_authority: Pubkey,  // Coordinator PDA that signs fulfillments.

    // --- Pricing ---
    pub entry_fee_reference_units: u64, // Entry fee in whole reference units (USD).
    pub price_feed_id: [u8; 32],        // Feed the reference rate is read from.

    // --- Randomness ---
    pub subscription_id: u64,
    pub key_hash: [u8; 32],

    // --- Metadata ---
    pub bump: u8,
}

impl Config {
    /// Capability check consulted by every administrative operation.
    pub fn require_owner(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.owner, LotteryError::Unauthorized);
        Ok(())
    }

    pub fn require_coordinator(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(
            *caller,
            self.coordinator_authority,
            LotteryError::Unauthorized
        );
        Ok(())
    }

    /// Current entry fee in lamports, priced against the live rate.
    pub fn current_entry_fee<F: PriceFeed>(&self, feed: &F) -> Result<u64> {
        let answer = feed.latest_answer()?;
        entry_fee_in_lamports(self.entry_fee_reference_units, answer.value, answer.decimals)
    }

    pub fn update_subscription_id(&mut self, caller: &Pubkey, subscription_id: u64) -> Result<()> {
        self.require_owner(caller)?;
        self.subscription_id = subscription_id;

        msg!("Subscription id set to {}", subscription_id);
        emit!(SubscriptionChanged { subscription_id });

        Ok(())
    }

    /// Applies to entries made after this call; recorded entries keep the
    /// fee they were accepted at.
    pub fn update_participation_fee(&mut self, caller: &Pubkey, reference_units: u64) -> Result<()> {
        self.require_owner(caller)?;
        self.entry_fee_reference_units = reference_units;

        msg!("Participation fee set to {} reference units", reference_units);
        emit!(ParticipationFeeChanged { reference_units });

        Ok(())
    }
}
