//! MongoDB data access for the WorkLinker backend.
//!
//! This crate provides:
//! - Connection setup with the Stable API pinned to V1
//! - Typed repositories for the `jobs` and `bids` collections
//! - The unique (email, jobId) index that gates duplicate bids
//! - A store error taxonomy shared by all operations

pub mod bid_repo;
pub mod client;
pub mod error;
pub mod ids;
pub mod job_repo;

pub use bid_repo::BidRepository;
pub use client::{StoreClient, StoreConfig, BIDS_COLLECTION, JOBS_COLLECTION};
pub use error::{StoreError, StoreResult};
pub use ids::parse_object_id;
pub use job_repo::JobRepository;
