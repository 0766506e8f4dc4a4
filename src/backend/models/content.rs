// src/backend/models/content.rs
use crate::models::common::{CallerId, ContentId, Timestamp};
use candid::CandidType;
use serde::{Deserialize, Serialize};

/// A versioned document held by the hub.
///
/// `id`, `owner` and `created_at` never change after creation. `version`
/// starts at 1 and grows by exactly 1 per successful update; `updated_at`
/// stays `None` until the first update.
#[derive(CandidType, Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Content {
    pub id: ContentId,
    pub title: String,
    pub body: String, // Text payload or a reference such as a URL
    pub owner: CallerId,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
    pub version: u64,
}
