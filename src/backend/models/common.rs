// src/backend/models/common.rs

// Identifiers are opaque strings: content ids come from the id sequence,
// caller ids arrive with each request and are authenticated upstream.
pub type ContentId = String;
pub type CallerId = String;

pub type Timestamp = u64; // Nanoseconds since epoch
