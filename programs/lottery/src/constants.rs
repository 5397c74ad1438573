use anchor_lang::prelude::*;

/// PDA Seeds
#[constant]
pub const CONFIG_SEED: &str = "config";
#[constant]
pub const ROUND_SEED: &str = "round";
/// Seed of the signing PDA the coordinator program delivers fulfillments with.
#[constant]
pub const COORDINATOR_AUTHORITY_SEED: &str = "coordinator-authority";

/// Lamports per SOL expressed as a power of ten.
#[constant]
pub const NATIVE_DECIMALS: u32 = 9;

/// Entry fee in whole reference units (USD) until the owner changes it.
#[constant]
pub const DEFAULT_ENTRY_FEE_REFERENCE_UNITS: u64 = 50;

/// Randomness request parameters
#[constant]
pub const REQUEST_CONFIRMATIONS: u16 = 3;
#[constant]
pub const CALLBACK_COMPUTE_BUDGET: u32 = 100_000;
#[constant]
pub const NUM_WORDS: u32 = 1;

/// Round account space is fixed at creation, so the registry is bounded.
pub const MAX_PARTICIPANTS: usize = 256;

pub const DISCRIMINATOR_SIZE: usize = 8;
