//! Bid models.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Status a bid carries when first created.
///
/// The status field itself is a free string; no transition graph is enforced
/// on later updates.
pub const DEFAULT_BID_STATUS: &str = "pending";

/// Caller-supplied bid fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct BidFields {
    /// The bidding user's email address.
    #[validate(email)]
    pub email: String,
    /// Hex identifier of the job this bid targets.
    #[serde(rename = "jobId")]
    #[validate(length(min = 1, message = "jobId must not be empty"))]
    pub job_id: String,
    /// Email of the buyer who posted the job, kept for reverse lookup.
    #[validate(email)]
    pub buyer: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    /// Denormalized job title for listing views.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
}

/// A stored bid, as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    /// Hex form of the store-assigned identifier.
    pub id: String,
    #[serde(flatten)]
    pub fields: BidFields,
    pub status: String,
}

/// Payload for the bid status update endpoint.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BidStatusUpdate {
    #[validate(length(min = 1, message = "status must not be empty"))]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn sample_fields() -> BidFields {
        BidFields {
            email: "bidder@example.com".to_string(),
            job_id: "64f1c0ffee0ddba11ca77e57".to_string(),
            buyer: "buyer@example.com".to_string(),
            price: 150.0,
            comment: Some("Can deliver in a week".to_string()),
            deadline: None,
            job_title: None,
        }
    }

    #[test]
    fn valid_bid_fields_pass_validation() {
        assert!(sample_fields().validate().is_ok());
    }

    #[test]
    fn bad_bidder_email_fails_validation() {
        let mut fields = sample_fields();
        fields.email = "nope".to_string();
        assert!(fields.validate().is_err());
    }

    #[test]
    fn job_reference_uses_wire_name() {
        let value = serde_json::to_value(sample_fields()).unwrap();
        assert_eq!(value["jobId"], "64f1c0ffee0ddba11ca77e57");
        assert!(value.get("job_id").is_none());
    }

    #[test]
    fn bid_deserializes_from_wire_shape() {
        let value = serde_json::json!({
            "id": "64f1c0ffee0ddba11ca77e58",
            "email": "bidder@example.com",
            "jobId": "64f1c0ffee0ddba11ca77e57",
            "buyer": "buyer@example.com",
            "price": 99.0,
            "status": "pending"
        });
        let bid: Bid = serde_json::from_value(value).unwrap();
        assert_eq!(bid.fields.job_id, "64f1c0ffee0ddba11ca77e57");
        assert_eq!(bid.status, DEFAULT_BID_STATUS);
    }

    #[test]
    fn empty_status_update_fails_validation() {
        let update = BidStatusUpdate {
            status: String::new(),
        };
        assert!(update.validate().is_err());
    }
}
