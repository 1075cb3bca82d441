//! Application state.

use worklinker_store::{BidRepository, JobRepository, StoreClient, StoreConfig};

use crate::config::ApiConfig;

/// Shared application state, injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub store: StoreClient,
    pub jobs: JobRepository,
    pub bids: BidRepository,
}

impl AppState {
    /// Create new application state.
    ///
    /// The store connection is lazy; startup verifies reachability
    /// separately via [`StoreClient::ping`].
    pub async fn new(config: ApiConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let store_config = StoreConfig::from_env()?;
        let store = StoreClient::connect(&store_config).await?;
        let jobs = store.jobs();
        let bids = store.bids();

        Ok(Self {
            config,
            store,
            jobs,
            bids,
        })
    }
}
