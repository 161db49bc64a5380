//! Stored document shape of the `reviews` collection.

use std::collections::BTreeMap;

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::{Review, ReviewId, StoredReview};

/// One review document. Field names match the wire names callers use.
///
/// Every field defaults so documents written by older producers still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ReviewDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(rename = "productID", default)]
    pub product_id: String,
    #[serde(rename = "userID", default)]
    pub user_id: String,
    #[serde(default)]
    pub rating: i32,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl From<&Review> for ReviewDocument {
    fn from(review: &Review) -> Self {
        Self {
            id: None,
            product_id: review.product_id.clone(),
            user_id: review.user_id.clone(),
            rating: review.rating,
            comment: review.comment.clone(),
            attributes: review.attributes.clone(),
        }
    }
}

pub(crate) fn object_id_to_review_id(id: ObjectId) -> Option<ReviewId> {
    ReviewId::parse(&id.to_hex()).ok()
}

impl ReviewDocument {
    /// Convert into a domain record; `None` when the document lacks an
    /// ObjectId `_id`.
    pub fn into_stored(self) -> Option<StoredReview> {
        let id = self.id.and_then(object_id_to_review_id)?;
        Some(StoredReview {
            id,
            review: Review {
                product_id: self.product_id,
                user_id: self.user_id,
                rating: self.rating,
                comment: self.comment,
                attributes: self.attributes,
            },
        })
    }
}
