//! Shared data models for the WorkLinker backend.
//!
//! This crate provides Serde-serializable types for:
//! - Jobs and their buyer identity
//! - Bids and bid status updates
//! - Boundary validation via `validator`

pub mod bid;
pub mod job;

// Re-export common types
pub use bid::{Bid, BidFields, BidStatusUpdate, DEFAULT_BID_STATUS};
pub use job::{Buyer, Job, JobFields};
