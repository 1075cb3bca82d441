//! Document id parsing.

use mongodb::bson::oid::ObjectId;

use crate::error::{StoreError, StoreResult};

/// Parse a caller-supplied hex id into an [`ObjectId`].
///
/// Malformed input is a [`StoreError::InvalidId`], never a round-trip to the
/// server.
pub fn parse_object_id(id: &str) -> StoreResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| StoreError::invalid_id(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_hex_ids() {
        assert!(parse_object_id("64f1c0ffee0ddba11ca77e57").is_ok());
    }

    #[test]
    fn rejects_malformed_ids() {
        for id in ["", "short", "not-hexadecimal-at-all!!", "64f1c0ffee0ddba11ca77e5"] {
            match parse_object_id(id) {
                Err(StoreError::InvalidId(bad)) => assert_eq!(bad, id),
                other => panic!("expected InvalidId for {id:?}, got {other:?}"),
            }
        }
    }
}
