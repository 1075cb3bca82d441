//! Typed repository for job documents.

use futures_util::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, to_document};
use mongodb::options::ReturnDocument;
use mongodb::Collection;
use serde::{Deserialize, Serialize};
use tracing::info;

use worklinker_models::{Job, JobFields};

use crate::error::{StoreError, StoreResult};
use crate::ids::parse_object_id;

/// A job as stored in MongoDB.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct JobDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(flatten)]
    pub fields: JobFields,
    #[serde(default)]
    pub bid_count: i64,
}

impl JobDocument {
    fn into_job(self) -> StoreResult<Job> {
        let id = self
            .id
            .ok_or_else(|| StoreError::malformed("job document missing _id"))?;
        Ok(Job {
            id: id.to_hex(),
            fields: self.fields,
            bid_count: self.bid_count,
        })
    }
}

/// Repository over the jobs collection.
#[derive(Clone)]
pub struct JobRepository {
    collection: Collection<JobDocument>,
}

impl JobRepository {
    pub(crate) fn new(collection: Collection<JobDocument>) -> Self {
        Self { collection }
    }

    /// Insert a new job with its counter at zero.
    pub async fn insert(&self, fields: JobFields) -> StoreResult<Job> {
        let document = JobDocument {
            id: None,
            fields,
            bid_count: 0,
        };
        let result = self.collection.insert_one(&document).await?;
        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::malformed("insert did not return an ObjectId"))?;

        info!(job_id = %id, "Inserted job");
        Ok(Job {
            id: id.to_hex(),
            fields: document.fields,
            bid_count: 0,
        })
    }

    /// All jobs, natural order.
    pub async fn list_all(&self) -> StoreResult<Vec<Job>> {
        let documents: Vec<JobDocument> =
            self.collection.find(doc! {}).await?.try_collect().await?;
        documents.into_iter().map(JobDocument::into_job).collect()
    }

    /// Jobs posted by the buyer with the given email.
    pub async fn list_by_buyer(&self, email: &str) -> StoreResult<Vec<Job>> {
        let documents: Vec<JobDocument> = self
            .collection
            .find(doc! { "buyer.email": email })
            .await?
            .try_collect()
            .await?;
        documents.into_iter().map(JobDocument::into_job).collect()
    }

    /// Fetch a single job by id.
    pub async fn get(&self, id: &str) -> StoreResult<Option<Job>> {
        let oid = parse_object_id(id)?;
        match self.collection.find_one(doc! { "_id": oid }).await? {
            Some(document) => Ok(Some(document.into_job()?)),
            None => Ok(None),
        }
    }

    /// Overwrite the caller-supplied fields of an existing job.
    ///
    /// Strictly conditional on existence (no upsert), and `bid_count` is
    /// never part of the update. Returns the post-update document, `None`
    /// when the id matched nothing.
    pub async fn update(&self, id: &str, fields: JobFields) -> StoreResult<Option<Job>> {
        let oid = parse_object_id(id)?;
        let update = doc! { "$set": to_document(&fields)? };
        let updated = self
            .collection
            .find_one_and_update(doc! { "_id": oid }, update)
            .return_document(ReturnDocument::After)
            .await?;
        updated.map(JobDocument::into_job).transpose()
    }

    /// Delete a job by id, returning the number of documents removed.
    ///
    /// Bids referencing the job are left in place.
    pub async fn delete(&self, id: &str) -> StoreResult<u64> {
        let oid = parse_object_id(id)?;
        let result = self.collection.delete_one(doc! { "_id": oid }).await?;
        Ok(result.deleted_count)
    }

    /// Atomically bump a job's bid counter.
    ///
    /// Returns false when no job matched the id.
    pub async fn increment_bid_count(&self, id: &str) -> StoreResult<bool> {
        let oid = parse_object_id(id)?;
        let result = self
            .collection
            .update_one(doc! { "_id": oid }, doc! { "$inc": { "bid_count": 1 } })
            .await?;
        Ok(result.matched_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{from_document, to_document};
    use worklinker_models::Buyer;

    fn sample_fields() -> JobFields {
        JobFields {
            title: "Logo design".to_string(),
            description: "Vector logo with two revisions".to_string(),
            category: "Graphics Design".to_string(),
            deadline: "2026-10-15".to_string(),
            min_price: 50.0,
            max_price: 120.0,
            buyer: Buyer {
                email: "buyer@example.com".to_string(),
                name: None,
                photo: None,
            },
        }
    }

    #[test]
    fn unsaved_document_omits_id() {
        let document = JobDocument {
            id: None,
            fields: sample_fields(),
            bid_count: 0,
        };
        let bson = to_document(&document).unwrap();
        assert!(!bson.contains_key("_id"));
        assert_eq!(bson.get_str("title").unwrap(), "Logo design");
        assert_eq!(
            bson.get_document("buyer").unwrap().get_str("email").unwrap(),
            "buyer@example.com"
        );
    }

    #[test]
    fn stored_document_round_trips() {
        let oid = ObjectId::new();
        let mut bson = to_document(&sample_fields()).unwrap();
        bson.insert("_id", oid);
        bson.insert("bid_count", 2i64);

        let document: JobDocument = from_document(bson).unwrap();
        let job = document.into_job().unwrap();
        assert_eq!(job.id, oid.to_hex());
        assert_eq!(job.bid_count, 2);
        assert_eq!(job.fields, sample_fields());
    }

    #[test]
    fn missing_counter_defaults_to_zero() {
        let mut bson = to_document(&sample_fields()).unwrap();
        bson.insert("_id", ObjectId::new());

        let document: JobDocument = from_document(bson).unwrap();
        assert_eq!(document.bid_count, 0);
    }

    #[test]
    fn missing_id_is_malformed() {
        let document = JobDocument {
            id: None,
            fields: sample_fields(),
            bid_count: 0,
        };
        assert!(matches!(
            document.into_job(),
            Err(StoreError::Malformed(_))
        ));
    }
}
