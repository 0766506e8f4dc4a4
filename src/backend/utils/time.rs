// src/backend/utils/time.rs
use crate::models::common::Timestamp;

/// Source of the current time as nanoseconds since epoch.
///
/// A trait seam so the hub can run natively under test with a scripted
/// clock; on the canister the only implementation is [`IcTime`].
pub trait TimeSource {
    fn now_ns(&self) -> Timestamp;
}

/// Internet Computer system time.
pub struct IcTime;

impl TimeSource for IcTime {
    fn now_ns(&self) -> Timestamp {
        ic_cdk::api::time()
    }
}
