use anchor_lang::prelude::*;

#[error_code]
pub enum LotteryError {
    // Lifecycle
    #[msg("a round is already active")]
    RoundAlreadyActive,

    #[msg("no active round to close")]
    NoActiveRound,

    #[msg("the round is already closing")]
    RoundAlreadyClosing,

    #[msg("entries are not being accepted")]
    RoundClosed,

    #[msg("cannot select a winner with zero participants")]
    EmptyPool,

    #[msg("the round has reached its participant limit")]
    RoundFull,

    // Payments
    #[msg("payment is below the current entry fee")]
    InsufficientPayment,

    #[msg("transfer of the pool to the winner failed")]
    PayoutFailed,

    // Access control
    #[msg("caller lacks the required identity")]
    Unauthorized,

    // Oracles
    #[msg("price feed returned a non-positive or unusable rate")]
    InvalidPrice,

    #[msg("randomness coordinator did not return a request id")]
    RandomnessRequestFailed,

    // Math
    #[msg("arithmetic overflow")]
    MathOverflow,
}
