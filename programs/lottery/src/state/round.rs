use crate::{constants::MAX_PARTICIPANTS, error::LotteryError};
use anchor_lang::prelude::*;

/// The singleton round. The account also escrows the pool lamports.
///
/// `pending_request_id` is `Some` exactly while the round is `Calculating`,
/// and `pool_balance` is the sum of the entry payments accepted since the
/// last payout.
#[account]
#[derive(InitSpace, Default)]
pub struct Round {
    pub state: RoundState,
    /// Entry order; one address may appear several times.
    #[max_len(MAX_PARTICIPANTS)]
    pub participants: Vec<Pubkey>,
    /// Lamports accumulated for the current round.
    pub pool_balance: u64,
    pub pending_request_id: Option<u64>,
    /// Incremented by every successful start.
    pub round_number: u64,
    pub last_winner: Option<Pubkey>,
    pub bump: u8,
}

// Discriminants are observable by clients: Open = 0, Closed = 1, Calculating = 2.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace, Default)]
pub enum RoundState {
    Open,
    #[default]
    Closed,
    Calculating,
}

impl Round {
    /// CLOSED -> OPEN. Clears any stale registry data.
    pub fn open(&mut self) -> Result<()> {
        require!(
            self.state == RoundState::Closed,
            LotteryError::RoundAlreadyActive
        );

        self.round_number = self
            .round_number
            .checked_add(1)
            .ok_or(LotteryError::MathOverflow)?;
        self.participants.clear();
        self.pending_request_id = None;
        self.state = RoundState::Open;

        Ok(())
    }

    pub fn require_accepting_entries(&self) -> Result<()> {
        require!(self.state == RoundState::Open, LotteryError::RoundClosed);
        Ok(())
    }

    /// Appends one entry and returns its 0-based index.
    pub fn record_entry(&mut self, participant: Pubkey, amount: u64) -> Result<u32> {
        self.require_accepting_entries()?;
        require!(
            self.participants.len() < MAX_PARTICIPANTS,
            LotteryError::RoundFull
        );

        let pool_balance = self
            .pool_balance
            .checked_add(amount)
            .ok_or(LotteryError::MathOverflow)?;
        let entry_index = self.participants.len() as u32;

        self.participants.push(participant);
        self.pool_balance = pool_balance;

        Ok(entry_index)
    }

    /// Guards the OPEN -> CALCULATING transition before a request is issued.
    pub fn require_closable(&self) -> Result<()> {
        match self.state {
            RoundState::Open => {}
            RoundState::Closed => return err!(LotteryError::NoActiveRound),
            RoundState::Calculating => return err!(LotteryError::RoundAlreadyClosing),
        }
        require!(!self.participants.is_empty(), LotteryError::EmptyPool);
        Ok(())
    }

    /// OPEN -> CALCULATING, recording the in-flight request.
    pub fn begin_calculating(&mut self, request_id: u64) -> Result<()> {
        self.require_closable()?;
        self.pending_request_id = Some(request_id);
        self.state = RoundState::Calculating;
        Ok(())
    }

    /// True only for the request this round is waiting on.
    pub fn is_awaiting(&self, request_id: u64) -> bool {
        self.state == RoundState::Calculating && self.pending_request_id == Some(request_id)
    }

    /// CALCULATING -> CLOSED after the pool has left the account.
    pub fn settle(&mut self, winner: Pubkey) {
        self.pool_balance = 0;
        self.participants.clear();
        self.pending_request_id = None;
        self.last_winner = Some(winner);
        self.state = RoundState::Closed;
    }
}
