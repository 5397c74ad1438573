use crate::{constants::*, error::LotteryError};
use anchor_lang::prelude::*;
use solana_program::{
    hash::hash,
    instruction::{AccountMeta, Instruction},
    program::{get_return_data, invoke_signed},
};

/// Parameters of one randomness request, borsh-encoded after the
/// coordinator's instruction discriminator.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RandomWordsRequest {
    pub subscription_id: u64,
    pub key_hash: [u8; 32],
    pub minimum_confirmations: u16,
    pub callback_compute_budget: u32,
    pub num_words: u32,
}

impl RandomWordsRequest {
    pub fn new(subscription_id: u64, key_hash: [u8; 32]) -> Self {
        Self {
            subscription_id,
            key_hash,
            minimum_confirmations: REQUEST_CONFIRMATIONS,
            callback_compute_budget: CALLBACK_COMPUTE_BUDGET,
            num_words: NUM_WORDS,
        }
    }
}

/// The outbound half of the randomness protocol. The coordinator answers
/// later through the program's fulfillment instruction.
pub trait RandomnessCoordinator {
    /// Submits the request and returns the coordinator-assigned id.
    fn request_random_words(&mut self, request: &RandomWordsRequest) -> Result<u64>;
}

/// Issues the request as a CPI into the coordinator program, signed by the
/// round PDA, and reads the request id back from return data.
pub struct CpiRandomnessCoordinator<'a, 'info> {
    pub coordinator_program: AccountInfo<'info>,
    pub requester: AccountInfo<'info>,
    pub forwarded_accounts: &'a [AccountInfo<'info>],
    pub signer_seeds: &'a [&'a [&'a [u8]]],
}

impl<'a, 'info> RandomnessCoordinator for CpiRandomnessCoordinator<'a, 'info> {
    fn request_random_words(&mut self, request: &RandomWordsRequest) -> Result<u64> {
        let mut accounts = vec![AccountMeta::new_readonly(self.requester.key(), true)];
        accounts.extend(self.forwarded_accounts.iter().map(|info| {
            if info.is_writable {
                AccountMeta::new(info.key(), info.is_signer)
            } else {
                AccountMeta::new_readonly(info.key(), info.is_signer)
            }
        }));

        let instruction = Instruction {
            program_id: self.coordinator_program.key(),
            accounts,
            data: request_random_words_data(request)?,
        };

        let mut account_infos = Vec::with_capacity(self.forwarded_accounts.len() + 2);
        account_infos.push(self.requester.clone());
        account_infos.extend(self.forwarded_accounts.iter().cloned());
        account_infos.push(self.coordinator_program.clone());

        msg!("requesting randomness");
        invoke_signed(&instruction, &account_infos, self.signer_seeds)?;

        parse_request_id(&self.coordinator_program.key(), get_return_data())
    }
}

/// Instruction data for the coordinator's `request_random_words`.
pub fn request_random_words_data(request: &RandomWordsRequest) -> Result<Vec<u8>> {
    let mut data = hash(b"global:request_random_words").to_bytes()[..DISCRIMINATOR_SIZE].to_vec();
    request
        .serialize(&mut data)
        .map_err(|_| LotteryError::RandomnessRequestFailed)?;
    Ok(data)
}

/// Accepts only return data set by the coordinator itself.
pub fn parse_request_id(coordinator: &Pubkey, return_data: Option<(Pubkey, Vec<u8>)>) -> Result<u64> {
    let (program_id, data) = return_data.ok_or(LotteryError::RandomnessRequestFailed)?;
    require_keys_eq!(
        program_id,
        *coordinator,
        LotteryError::RandomnessRequestFailed
    );

    let bytes: [u8; 8] = data
        .get(..8)
        .and_then(|slice| slice.try_into().ok())
        .ok_or(LotteryError::RandomnessRequestFailed)?;
    Ok(u64::from_le_bytes(bytes))
}
