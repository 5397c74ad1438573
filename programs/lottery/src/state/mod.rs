pub mod config;
pub mod round;

pub use config::*;
pub use round::*;
