//! Job models.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// The buyer identity embedded in a job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Buyer {
    /// Buyer's email address, used for job filtering and bid reverse lookup.
    #[validate(email)]
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

/// Caller-supplied job fields, shared by the create and update payloads.
///
/// `bid_count` is deliberately not part of this set: it is owned by the
/// service and only ever changed by the bid-creation flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct JobFields {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    #[validate(length(min = 1, message = "category must not be empty"))]
    pub category: String,
    /// Caller-supplied deadline, stored opaquely.
    pub deadline: String,
    #[validate(range(min = 0.0))]
    pub min_price: f64,
    #[validate(range(min = 0.0))]
    pub max_price: f64,
    #[validate(nested)]
    pub buyer: Buyer,
}

/// A stored job, as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Hex form of the store-assigned identifier.
    pub id: String,
    #[serde(flatten)]
    pub fields: JobFields,
    /// Number of bids placed on this job.
    #[serde(default)]
    pub bid_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn sample_fields() -> JobFields {
        JobFields {
            title: "Build a landing page".to_string(),
            description: "Responsive landing page with a contact form".to_string(),
            category: "Web Development".to_string(),
            deadline: "2026-09-30".to_string(),
            min_price: 100.0,
            max_price: 250.0,
            buyer: Buyer {
                email: "buyer@example.com".to_string(),
                name: Some("Buyer".to_string()),
                photo: None,
            },
        }
    }

    #[test]
    fn valid_job_fields_pass_validation() {
        assert!(sample_fields().validate().is_ok());
    }

    #[test]
    fn bad_buyer_email_fails_validation() {
        let mut fields = sample_fields();
        fields.buyer.email = "not-an-email".to_string();
        assert!(fields.validate().is_err());
    }

    #[test]
    fn empty_title_fails_validation() {
        let mut fields = sample_fields();
        fields.title.clear();
        assert!(fields.validate().is_err());
    }

    #[test]
    fn negative_price_fails_validation() {
        let mut fields = sample_fields();
        fields.min_price = -1.0;
        assert!(fields.validate().is_err());
    }

    #[test]
    fn job_serializes_flat() {
        let job = Job {
            id: "64f1c0ffee0ddba11ca77e57".to_string(),
            fields: sample_fields(),
            bid_count: 3,
        };
        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["id"], "64f1c0ffee0ddba11ca77e57");
        assert_eq!(value["title"], "Build a landing page");
        assert_eq!(value["buyer"]["email"], "buyer@example.com");
        assert_eq!(value["bid_count"], 3);
        // `fields` must not appear as a nested key
        assert!(value.get("fields").is_none());
    }

    #[test]
    fn job_bid_count_defaults_to_zero() {
        let value = serde_json::json!({
            "id": "64f1c0ffee0ddba11ca77e57",
            "title": "t",
            "description": "d",
            "category": "c",
            "deadline": "2026-01-01",
            "min_price": 1.0,
            "max_price": 2.0,
            "buyer": { "email": "buyer@example.com" }
        });
        let job: Job = serde_json::from_value(value).unwrap();
        assert_eq!(job.bid_count, 0);
    }
}
