use crate::{
    error::LotteryError,
    events::*,
    oracles::{PriceFeed, RandomWordsRequest, RandomnessCoordinator},
    payout::PayoutTransfer,
    state::{Config, Round},
    utils::winner_index,
};
use anchor_lang::prelude::*;

/// Outcome of a fulfillment delivery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fulfillment {
    /// Stale, duplicate or malformed delivery; nothing changed.
    Ignored,
    Paid { winner: Pubkey, amount: u64 },
}

/// The lottery operations over explicit state. Every operation either
/// completes or returns an error with `round` untouched.
pub struct Lottery<'a> {
    config: &'a Config,
    round: &'a mut Round,
}

impl<'a> Lottery<'a> {
    pub fn new(config: &'a Config, round: &'a mut Round) -> Self {
        Self { config, round }
    }

    pub fn start(&mut self, caller: &Pubkey) -> Result<()> {
        self.config.require_owner(caller)?;
        self.round.open()?;

        msg!("Round {} opened", self.round.round_number);
        emit!(RoundStarted {
            round_number: self.round.round_number,
        });

        Ok(())
    }

    /// Records one entry for `participant` paying `amount` lamports and
    /// returns its index. Payment above the fee stays in the pool.
    pub fn enter<F: PriceFeed>(&mut self, participant: Pubkey, amount: u64, feed: &F) -> Result<u32> {
        self.round.require_accepting_entries()?;

        let fee = self.config.current_entry_fee(feed)?;
        if amount < fee {
            msg!("Paid {} lamports, entry fee is {}", amount, fee);
            return err!(LotteryError::InsufficientPayment);
        }

        let entry_index = self.round.record_entry(participant, amount)?;

        emit!(EntryRecorded {
            round_number: self.round.round_number,
            participant,
            entry_index,
            amount,
        });

        Ok(entry_index)
    }

    /// Hands the round to the randomness coordinator and returns the
    /// request id the fulfillment must carry.
    pub fn close<C: RandomnessCoordinator>(&mut self, caller: &Pubkey, coordinator: &mut C) -> Result<u64> {
        self.config.require_owner(caller)?;
        self.round.require_closable()?;

        let request = RandomWordsRequest::new(self.config.subscription_id, self.config.key_hash);
        let request_id = coordinator.request_random_words(&request)?;
        self.round.begin_calculating(request_id)?;

        msg!(
            "Round {} closed with {} entries, awaiting request {}",
            self.round.round_number,
            self.round.participants.len(),
            request_id
        );
        emit!(RandomnessRequested {
            request_id,
            initiator: *caller,
        });

        Ok(request_id)
    }

    /// Inbound half of the randomness protocol. Only the coordinator may
    /// deliver; deliveries for any request other than the pending one are
    /// ignored. If the payout fails the round stays `Calculating`.
    pub fn on_randomness_fulfilled<P: PayoutTransfer>(
        &mut self,
        caller: &Pubkey,
        request_id: u64,
        random_words: &[[u8; 32]],
        payout: &mut P,
    ) -> Result<Fulfillment> {
        self.config.require_coordinator(caller)?;

        if !self.round.is_awaiting(request_id) {
            msg!("Ignoring fulfillment for unexpected request {}", request_id);
            return Ok(Fulfillment::Ignored);
        }
        let Some(random_word) = random_words.first() else {
            msg!("Ignoring fulfillment for request {} without words", request_id);
            return Ok(Fulfillment::Ignored);
        };

        let index = winner_index(random_word, self.round.participants.len() as u64)?;
        let winner = *self
            .round
            .participants
            .get(index as usize)
            .ok_or(LotteryError::EmptyPool)?;
        let amount = self.round.pool_balance;
        let round_number = self.round.round_number;

        payout
            .transfer(&winner, amount)
            .map_err(|_| LotteryError::PayoutFailed)?;
        self.round.settle(winner);

        msg!("Entry {} won {} lamports", index, amount);
        emit!(RandomnessReceived {
            request_id,
            random_word: *random_word,
        });
        emit!(WinnerPaid {
            round_number,
            winner,
            amount,
        });

        Ok(Fulfillment::Paid { winner, amount })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        constants::DEFAULT_ENTRY_FEE_REFERENCE_UNITS,
        oracles::PriceAnswer,
        state::RoundState,
    };
    use anchor_lang::error::{Error, ERROR_CODE_OFFSET};
    use solana_program::native_token::LAMPORTS_PER_SOL;
    use std::collections::HashMap;

    // 1000 USD per SOL with 8 decimals; the default fee is then 0.05 SOL
    const PRICE: i64 = 100_000_000_000;
    const FEE: u64 = LAMPORTS_PER_SOL / 20;

    struct FakePriceFeed {
        price: i64,
    }

    impl PriceFeed for FakePriceFeed {
        fn latest_answer(&self) -> Result<PriceAnswer> {
            Ok(PriceAnswer {
                value: self.price,
                decimals: 8,
            })
        }
    }

    #[derive(Default)]
    struct FakeCoordinator {
        next_request_id: u64,
        requests: Vec<RandomWordsRequest>,
        unavailable: bool,
    }

    impl RandomnessCoordinator for FakeCoordinator {
        fn request_random_words(&mut self, request: &RandomWordsRequest) -> Result<u64> {
            if self.unavailable {
                return err!(LotteryError::RandomnessRequestFailed);
            }
            self.next_request_id += 1;
            self.requests.push(request.clone());
            Ok(self.next_request_id)
        }
    }

    #[derive(Default)]
    struct FakeBank {
        balances: HashMap<Pubkey, u64>,
        rejecting: Option<Pubkey>,
    }

    impl PayoutTransfer for FakeBank {
        fn transfer(&mut self, recipient: &Pubkey, amount: u64) -> Result<()> {
            if self.rejecting == Some(*recipient) {
                return err!(LotteryError::PayoutFailed);
            }
            *self.balances.entry(*recipient).or_default() += amount;
            Ok(())
        }
    }

    struct Harness {
        owner: Pubkey,
        coordinator_authority: Pubkey,
        config: Config,
        round: Round,
        feed: FakePriceFeed,
        coordinator: FakeCoordinator,
        bank: FakeBank,
    }

    impl Harness {
        fn new() -> Self {
            let owner = Pubkey::new_unique();
            let coordinator_authority = Pubkey::new_unique();
            Self {
                owner,
                coordinator_authority,
                config: Config {
                    owner,
                    randomness_coordinator: Pubkey::new_unique(),
                    coordinator_authority,
                    entry_fee_reference_units: DEFAULT_ENTRY_FEE_REFERENCE_UNITS,
                    price_feed_id: [1u8; 32],
                    subscription_id: 1,
                    key_hash: [0xd8; 32],
                    bump: 255,
                },
                round: Round::default(),
                feed: FakePriceFeed { price: PRICE },
                coordinator: FakeCoordinator::default(),
                bank: FakeBank::default(),
            }
        }

        fn start(&mut self) -> Result<()> {
            let owner = self.owner;
            Lottery::new(&self.config, &mut self.round).start(&owner)
        }

        fn enter(&mut self, participant: Pubkey, amount: u64) -> Result<u32> {
            Lottery::new(&self.config, &mut self.round).enter(participant, amount, &self.feed)
        }

        fn close(&mut self) -> Result<u64> {
            let owner = self.owner;
            Lottery::new(&self.config, &mut self.round).close(&owner, &mut self.coordinator)
        }

        fn fulfill(&mut self, request_id: u64, words: &[[u8; 32]]) -> Result<Fulfillment> {
            let caller = self.coordinator_authority;
            Lottery::new(&self.config, &mut self.round).on_randomness_fulfilled(
                &caller,
                request_id,
                words,
                &mut self.bank,
            )
        }

        fn open_with(&mut self, players: &[Pubkey]) {
            self.start().unwrap();
            for player in players {
                self.enter(*player, FEE).unwrap();
            }
        }
    }

    fn word(value: u64) -> [u8; 32] {
        let mut word = [0u8; 32];
        word[24..].copy_from_slice(&value.to_be_bytes());
        word
    }

    fn assert_error<T: std::fmt::Debug>(result: Result<T>, expected: LotteryError) {
        match result {
            Err(Error::AnchorError(error)) => assert_eq!(
                error.error_code_number,
                expected as u32 + ERROR_CODE_OFFSET,
                "got {}",
                error.error_name
            ),
            other => panic!("expected {:?}, got {:?}", expected, other),
        }
    }

    #[test]
    fn test_closed_before_start() {
        let mut h = Harness::new();
        assert_eq!(h.round.state, RoundState::Closed);
        assert_eq!(h.round.pool_balance, 0);

        assert_error(h.close(), LotteryError::NoActiveRound);
        assert_error(h.enter(Pubkey::new_unique(), FEE), LotteryError::RoundClosed);
        assert!(h.coordinator.requests.is_empty());
    }

    #[test]
    fn test_start_is_owner_only() {
        let mut h = Harness::new();
        let stranger = Pubkey::new_unique();

        assert_error(
            Lottery::new(&h.config, &mut h.round).start(&stranger),
            LotteryError::Unauthorized,
        );
        assert_eq!(h.round.state, RoundState::Closed);

        h.start().unwrap();
        assert_eq!(h.round.state, RoundState::Open);
        assert_error(h.start(), LotteryError::RoundAlreadyActive);
    }

    #[test]
    fn test_pool_tracks_accepted_entries() {
        let mut h = Harness::new();
        h.start().unwrap();

        let payments = [FEE, FEE + 1, 3 * FEE, FEE];
        let mut rejected = 0;
        for (i, amount) in payments.iter().enumerate() {
            assert_eq!(h.enter(Pubkey::new_unique(), *amount).unwrap(), i as u32);
            if h.enter(Pubkey::new_unique(), FEE - 1).is_err() {
                rejected += 1;
            }
        }

        assert_eq!(rejected, payments.len());
        assert_eq!(h.round.participants.len(), payments.len());
        assert_eq!(h.round.pool_balance, payments.iter().sum::<u64>());
    }

    #[test]
    fn test_fee_boundary_after_fee_update() {
        let mut h = Harness::new();
        h.start().unwrap();
        let owner = h.owner;
        h.config.update_participation_fee(&owner, 100).unwrap();
        let player = Pubkey::new_unique();

        assert_error(h.enter(player, FEE), LotteryError::InsufficientPayment);
        assert_error(
            h.enter(player, 99 * LAMPORTS_PER_SOL / 1_000),
            LotteryError::InsufficientPayment,
        );
        assert_eq!(h.enter(player, LAMPORTS_PER_SOL / 10).unwrap(), 0);
        assert_eq!(h.round.participants, vec![player]);
    }

    #[test]
    fn test_fee_update_is_not_retroactive() {
        let mut h = Harness::new();
        let early = Pubkey::new_unique();
        h.open_with(&[early]);

        let owner = h.owner;
        h.config.update_participation_fee(&owner, 100).unwrap();

        assert_eq!(h.round.participants, vec![early]);
        assert_eq!(h.round.pool_balance, FEE);
        assert_error(h.enter(Pubkey::new_unique(), FEE), LotteryError::InsufficientPayment);

        let request_id = h.close().unwrap();
        assert_eq!(
            h.fulfill(request_id, &[word(0)]).unwrap(),
            Fulfillment::Paid {
                winner: early,
                amount: FEE
            }
        );
    }

    #[test]
    fn test_overpayment_stays_in_pool() {
        let mut h = Harness::new();
        h.start().unwrap();
        h.enter(Pubkey::new_unique(), 2 * FEE).unwrap();
        assert_eq!(h.round.pool_balance, 2 * FEE);
    }

    #[test]
    fn test_broken_price_feed_blocks_entries() {
        let mut h = Harness::new();
        h.start().unwrap();
        h.feed.price = 0;

        assert_error(h.enter(Pubkey::new_unique(), FEE), LotteryError::InvalidPrice);
        assert!(h.round.participants.is_empty());
    }

    #[test]
    fn test_close_without_participants() {
        let mut h = Harness::new();
        h.start().unwrap();

        assert_error(h.close(), LotteryError::EmptyPool);
        assert_eq!(h.round.state, RoundState::Open);
        assert!(h.coordinator.requests.is_empty());
    }

    #[test]
    fn test_close_issues_exactly_one_request() {
        let mut h = Harness::new();
        h.open_with(&[Pubkey::new_unique()]);

        let request_id = h.close().unwrap();
        assert_eq!(h.round.state, RoundState::Calculating);
        assert_eq!(h.round.pending_request_id, Some(request_id));
        assert_eq!(
            h.coordinator.requests,
            vec![RandomWordsRequest::new(1, [0xd8; 32])]
        );

        assert_error(h.close(), LotteryError::RoundAlreadyClosing);
        assert_error(h.start(), LotteryError::RoundAlreadyActive);
        assert_error(h.enter(Pubkey::new_unique(), FEE), LotteryError::RoundClosed);
        assert_eq!(h.coordinator.requests.len(), 1);
    }

    #[test]
    fn test_close_is_owner_only() {
        let mut h = Harness::new();
        h.open_with(&[Pubkey::new_unique()]);
        let stranger = Pubkey::new_unique();

        assert_error(
            Lottery::new(&h.config, &mut h.round).close(&stranger, &mut h.coordinator),
            LotteryError::Unauthorized,
        );
        assert_eq!(h.round.state, RoundState::Open);
    }

    #[test]
    fn test_failed_request_keeps_round_open() {
        let mut h = Harness::new();
        h.open_with(&[Pubkey::new_unique()]);
        h.coordinator.unavailable = true;

        assert_error(h.close(), LotteryError::RandomnessRequestFailed);
        assert_eq!(h.round.state, RoundState::Open);
        assert_eq!(h.round.pending_request_id, None);
    }

    #[test]
    fn test_mismatched_request_is_ignored() {
        let mut h = Harness::new();
        h.open_with(&[Pubkey::new_unique(), Pubkey::new_unique()]);
        let request_id = h.close().unwrap();

        assert_eq!(
            h.fulfill(request_id + 1, &[word(1)]).unwrap(),
            Fulfillment::Ignored
        );
        assert_eq!(h.round.state, RoundState::Calculating);
        assert_eq!(h.round.pool_balance, 2 * FEE);
        assert_eq!(h.round.participants.len(), 2);
        assert!(h.bank.balances.is_empty());
    }

    #[test]
    fn test_empty_words_are_ignored() {
        let mut h = Harness::new();
        h.open_with(&[Pubkey::new_unique()]);
        let request_id = h.close().unwrap();

        assert_eq!(h.fulfill(request_id, &[]).unwrap(), Fulfillment::Ignored);
        assert!(h.round.is_awaiting(request_id));
    }

    #[test]
    fn test_fulfillment_requires_coordinator() {
        let mut h = Harness::new();
        h.open_with(&[Pubkey::new_unique()]);
        let request_id = h.close().unwrap();
        let owner = h.owner;

        assert_error(
            Lottery::new(&h.config, &mut h.round).on_randomness_fulfilled(
                &owner,
                request_id,
                &[word(0)],
                &mut h.bank,
            ),
            LotteryError::Unauthorized,
        );
        assert!(h.round.is_awaiting(request_id));
    }

    #[test]
    fn test_winner_takes_pool() {
        let players = [
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
        ];
        for r in [0u64, 1, 2, 7, 1_000_003, u64::MAX] {
            let mut h = Harness::new();
            h.open_with(&players);
            let request_id = h.close().unwrap();
            let pool = h.round.pool_balance;
            let expected = players[(r % 3) as usize];

            assert_eq!(
                h.fulfill(request_id, &[word(r)]).unwrap(),
                Fulfillment::Paid {
                    winner: expected,
                    amount: pool
                }
            );
            assert_eq!(h.bank.balances.get(&expected), Some(&pool));
            assert_eq!(h.bank.balances.len(), 1);
            assert_eq!(h.round.pool_balance, 0);
            assert_eq!(h.round.state, RoundState::Closed);
            assert!(h.round.participants.is_empty());
            assert_eq!(h.round.pending_request_id, None);
            assert_eq!(h.round.last_winner, Some(expected));
        }
    }

    #[test]
    fn test_only_first_word_is_used() {
        let players = [Pubkey::new_unique(), Pubkey::new_unique()];
        let mut h = Harness::new();
        h.open_with(&players);
        let request_id = h.close().unwrap();

        let outcome = h.fulfill(request_id, &[word(1), word(0)]).unwrap();
        assert_eq!(
            outcome,
            Fulfillment::Paid {
                winner: players[1],
                amount: 2 * FEE
            }
        );
    }

    #[test]
    fn test_duplicate_delivery_after_payout_is_ignored() {
        let player = Pubkey::new_unique();
        let mut h = Harness::new();
        h.open_with(&[player]);
        let request_id = h.close().unwrap();

        h.fulfill(request_id, &[word(5)]).unwrap();
        assert_eq!(h.fulfill(request_id, &[word(5)]).unwrap(), Fulfillment::Ignored);
        assert_eq!(h.bank.balances.get(&player), Some(&FEE));
    }

    #[test]
    fn test_failed_payout_leaves_round_calculating() {
        let player = Pubkey::new_unique();
        let mut h = Harness::new();
        h.open_with(&[player]);
        let request_id = h.close().unwrap();
        h.bank.rejecting = Some(player);

        assert_error(h.fulfill(request_id, &[word(0)]), LotteryError::PayoutFailed);
        assert_eq!(h.round.state, RoundState::Calculating);
        assert_eq!(h.round.pending_request_id, Some(request_id));
        assert_eq!(h.round.pool_balance, FEE);
        assert_eq!(h.round.participants, vec![player]);

        // No retry happens on its own; a later delivery can still settle.
        h.bank.rejecting = None;
        assert!(matches!(
            h.fulfill(request_id, &[word(0)]).unwrap(),
            Fulfillment::Paid { .. }
        ));
    }

    #[test]
    fn test_duplicate_entries_are_separate_chances() {
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let mut h = Harness::new();
        h.open_with(&[a, a, b]);
        let request_id = h.close().unwrap();

        assert_eq!(
            h.fulfill(request_id, &[word(4)]).unwrap(),
            Fulfillment::Paid {
                winner: a,
                amount: 3 * FEE
            }
        );
    }

    #[test]
    fn test_consecutive_rounds() {
        let mut h = Harness::new();
        let (a, b, c) = (Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique());

        h.open_with(&[a, b, c]);
        let first = h.close().unwrap();
        h.fulfill(first, &[word(2)]).unwrap();

        h.open_with(&[b]);
        assert_eq!(h.round.round_number, 2);
        assert_eq!(h.round.participants, vec![b]);
        assert_eq!(h.round.pool_balance, FEE);

        let second = h.close().unwrap();
        assert_ne!(first, second);
        // the first round's id no longer settles anything
        assert_eq!(h.fulfill(first, &[word(0)]).unwrap(), Fulfillment::Ignored);
        h.fulfill(second, &[word(0)]).unwrap();

        assert_eq!(h.bank.balances.get(&c), Some(&(3 * FEE)));
        assert_eq!(h.bank.balances.get(&b), Some(&FEE));
        assert_eq!(h.round.state, RoundState::Closed);
    }

    #[test]
    fn test_subscription_change_applies_to_next_request() {
        let mut h = Harness::new();
        let owner = h.owner;
        h.config.update_subscription_id(&owner, 777).unwrap();
        h.open_with(&[Pubkey::new_unique()]);
        h.close().unwrap();

        assert_eq!(h.coordinator.requests[0].subscription_id, 777);
    }
}
