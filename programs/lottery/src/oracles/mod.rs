pub mod coordinator;
pub mod price_feed;

pub use coordinator::*;
pub use price_feed::*;
