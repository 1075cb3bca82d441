//! MongoDB connection setup.

use mongodb::bson::doc;
use mongodb::options::{ClientOptions, ServerApi, ServerApiVersion};
use mongodb::{Client, Database};
use tracing::info;

use crate::bid_repo::BidRepository;
use crate::error::{StoreError, StoreResult};
use crate::job_repo::JobRepository;

pub const JOBS_COLLECTION: &str = "jobs";
pub const BIDS_COLLECTION: &str = "bids";

/// Store connection settings.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Full connection string.
    pub uri: String,
    /// Database name.
    pub database: String,
}

impl StoreConfig {
    /// Read connection settings from the environment.
    ///
    /// `MONGODB_URI` wins when set; otherwise the URI is assembled from
    /// `DB_USER`/`DB_PASS`/`DB_HOST`, with credentials percent-encoded.
    pub fn from_env() -> StoreResult<Self> {
        let database =
            std::env::var("DB_NAME").unwrap_or_else(|_| "workLinker-db".to_string());

        let uri = match std::env::var("MONGODB_URI") {
            Ok(uri) => uri,
            Err(_) => {
                let user = std::env::var("DB_USER")
                    .map_err(|_| StoreError::config("DB_USER is not set"))?;
                let pass = std::env::var("DB_PASS")
                    .map_err(|_| StoreError::config("DB_PASS is not set"))?;
                let host = std::env::var("DB_HOST")
                    .map_err(|_| StoreError::config("DB_HOST is not set"))?;
                format!(
                    "mongodb+srv://{}:{}@{}/?appName=WorkLinker",
                    urlencoding::encode(&user),
                    urlencoding::encode(&pass),
                    host
                )
            }
        };

        Ok(Self { uri, database })
    }
}

/// Shared MongoDB client owning the two collection handles.
#[derive(Clone)]
pub struct StoreClient {
    client: Client,
    db: Database,
}

impl StoreClient {
    /// Build a client with the Stable API pinned to V1 (strict).
    ///
    /// The driver connects lazily; call [`StoreClient::ping`] to verify the
    /// deployment is actually reachable.
    pub async fn connect(config: &StoreConfig) -> StoreResult<Self> {
        let mut options = ClientOptions::parse(&config.uri).await?;
        options.server_api = Some(
            ServerApi::builder()
                .version(ServerApiVersion::V1)
                .strict(true)
                .deprecation_errors(true)
                .build(),
        );

        let client = Client::with_options(options)?;
        let db = client.database(&config.database);

        Ok(Self { client, db })
    }

    /// Issue a `ping` against the admin database.
    pub async fn ping(&self) -> StoreResult<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }

    /// Create the indexes the service relies on.
    pub async fn ensure_indexes(&self) -> StoreResult<()> {
        self.bids().ensure_unique_index().await?;
        info!("Ensured unique (email, jobId) index on {}", BIDS_COLLECTION);
        Ok(())
    }

    /// Repository over the jobs collection.
    pub fn jobs(&self) -> JobRepository {
        JobRepository::new(self.db.collection(JOBS_COLLECTION))
    }

    /// Repository over the bids collection.
    pub fn bids(&self) -> BidRepository {
        BidRepository::new(self.db.collection(BIDS_COLLECTION))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn connect_is_lazy() {
        // No server needs to be listening for client construction to succeed.
        let config = StoreConfig {
            uri: "mongodb://localhost:27017".to_string(),
            database: "workLinker-db".to_string(),
        };
        let store = StoreClient::connect(&config).await.unwrap();
        let _ = store.jobs();
        let _ = store.bids();
    }
}
