//! Typed repository for bid documents.

use futures_util::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::doc;
use mongodb::options::{IndexOptions, ReturnDocument};
use mongodb::{Collection, IndexModel};
use serde::{Deserialize, Serialize};
use tracing::info;

use worklinker_models::{Bid, BidFields, DEFAULT_BID_STATUS};

use crate::error::{map_write_error, StoreError, StoreResult};
use crate::ids::parse_object_id;

fn default_status() -> String {
    DEFAULT_BID_STATUS.to_string()
}

/// A bid as stored in MongoDB.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct BidDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(flatten)]
    pub fields: BidFields,
    #[serde(default = "default_status")]
    pub status: String,
}

impl BidDocument {
    fn into_bid(self) -> StoreResult<Bid> {
        let id = self
            .id
            .ok_or_else(|| StoreError::malformed("bid document missing _id"))?;
        Ok(Bid {
            id: id.to_hex(),
            fields: self.fields,
            status: self.status,
        })
    }
}

/// Repository over the bids collection.
#[derive(Clone)]
pub struct BidRepository {
    collection: Collection<BidDocument>,
}

impl BidRepository {
    pub(crate) fn new(collection: Collection<BidDocument>) -> Self {
        Self { collection }
    }

    /// Create the unique (email, jobId) index.
    ///
    /// This index is the duplicate-bid gate: a second insert by the same user
    /// on the same job fails atomically at the server.
    pub async fn ensure_unique_index(&self) -> StoreResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "email": 1, "jobId": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.collection.create_index(index).await?;
        Ok(())
    }

    /// Insert a new bid with the default status.
    ///
    /// A unique-index violation surfaces as [`StoreError::DuplicateBid`].
    pub async fn insert(&self, fields: BidFields) -> StoreResult<Bid> {
        let document = BidDocument {
            id: None,
            fields,
            status: default_status(),
        };
        let result = self
            .collection
            .insert_one(&document)
            .await
            .map_err(map_write_error)?;
        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::malformed("insert did not return an ObjectId"))?;

        info!(bid_id = %id, job_id = %document.fields.job_id, "Inserted bid");
        Ok(Bid {
            id: id.to_hex(),
            fields: document.fields,
            status: document.status,
        })
    }

    /// Bids placed by the given user.
    pub async fn list_for_bidder(&self, email: &str) -> StoreResult<Vec<Bid>> {
        self.list(doc! { "email": email }).await
    }

    /// Bids on jobs posted by the given buyer.
    pub async fn list_for_buyer(&self, email: &str) -> StoreResult<Vec<Bid>> {
        self.list(doc! { "buyer": email }).await
    }

    async fn list(&self, filter: mongodb::bson::Document) -> StoreResult<Vec<Bid>> {
        let documents: Vec<BidDocument> =
            self.collection.find(filter).await?.try_collect().await?;
        documents.into_iter().map(BidDocument::into_bid).collect()
    }

    /// Set a bid's status, touching nothing else.
    ///
    /// Returns the post-update document, `None` when the id matched nothing.
    pub async fn update_status(&self, id: &str, status: &str) -> StoreResult<Option<Bid>> {
        let oid = parse_object_id(id)?;
        let updated = self
            .collection
            .find_one_and_update(doc! { "_id": oid }, doc! { "$set": { "status": status } })
            .return_document(ReturnDocument::After)
            .await?;
        updated.map(BidDocument::into_bid).transpose()
    }
}
