pub mod close_round;
pub mod enter;
pub mod initialize;
pub mod on_randomness_fulfilled;
pub mod start_round;
pub mod update_config;
pub mod views;

pub use close_round::*;
pub use enter::*;
pub use initialize::*;
pub use on_randomness_fulfilled::*;
pub use start_round::*;
pub use update_config::*;
pub use views::*;
