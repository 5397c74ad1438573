pub mod draw;
pub mod price;

pub use draw::*;
pub use price::*;
