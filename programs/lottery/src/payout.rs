use crate::error::LotteryError;
use anchor_lang::prelude::*;

/// Moves the pool out of escrow to the drawn winner.
pub trait PayoutTransfer {
    fn transfer(&mut self, recipient: &Pubkey, amount: u64) -> Result<()>;
}

/// Debits the program-owned escrow account directly and credits the
/// recipient, who must be among `candidates` and writable.
pub struct LamportPayout<'a, 'info> {
    pub escrow: AccountInfo<'info>,
    pub candidates: &'a [AccountInfo<'info>],
}

impl<'a, 'info> PayoutTransfer for LamportPayout<'a, 'info> {
    fn transfer(&mut self, recipient: &Pubkey, amount: u64) -> Result<()> {
        let destination = self
            .candidates
            .iter()
            .find(|info| info.key == recipient && info.is_writable)
            .ok_or(LotteryError::PayoutFailed)?;

        let escrow_lamports = self
            .escrow
            .lamports()
            .checked_sub(amount)
            .ok_or(LotteryError::PayoutFailed)?;
        let destination_lamports = destination
            .lamports()
            .checked_add(amount)
            .ok_or(LotteryError::PayoutFailed)?;

        **self.escrow.try_borrow_mut_lamports()? = escrow_lamports;
        **destination.try_borrow_mut_lamports()? = destination_lamports;

        Ok(())
    }
}
