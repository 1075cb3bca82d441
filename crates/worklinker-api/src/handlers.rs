//! Request handlers.

pub mod bids;
pub mod health;
pub mod jobs;

pub use bids::*;
pub use health::*;
pub use jobs::*;
