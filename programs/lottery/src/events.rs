use anchor_lang::prelude::*;

#[event]
pub struct RoundStarted {
    pub round_number: u64,
}

#[event]
pub struct EntryRecorded {
    pub round_number: u64,
    pub participant: Pubkey,
    pub entry_index: u32,
    pub amount: u64,
}

#[event]
pub struct RandomnessRequested {
    pub request_id: u64,
    pub initiator: Pubkey,
}

#[event]
pub struct RandomnessReceived {
    pub request_id: u64,
    pub random_word: [u8; 32],
}

#[event]
pub struct WinnerPaid {
    pub round_number: u64,
    pub winner: Pubkey,
    pub amount: u64,
}

#[event]
pub struct SubscriptionChanged {
    pub subscription_id: u64,
}

#[event]
pub struct ParticipationFeeChanged {
    pub reference_units: u64,
}
