// src/backend/utils/ids.rs
use crate::error::HubError;
use crate::models::common::ContentId;
use ic_stable_structures::{Memory, StableCell};

/// Generator of collision-free content identifiers.
pub trait IdSource {
    fn next_id(&mut self) -> Result<ContentId, HubError>;
}

/// Identifier generator backed by a stable counter, so ids issued before an
/// upgrade are never reissued after it.
pub struct SequenceIds<M: Memory> {
    counter: StableCell<u64, M>,
}

impl<M: Memory> SequenceIds<M> {
    pub fn init(memory: M) -> Self {
        Self {
            counter: StableCell::init(memory, 0).expect("Failed to initialize id sequence cell"),
        }
    }
}

impl<M: Memory> IdSource for SequenceIds<M> {
    fn next_id(&mut self) -> Result<ContentId, HubError> {
        let current = *self.counter.get();
        let next = current
            .checked_add(1)
            .ok_or_else(|| HubError::InternalError("Id sequence overflow".to_string()))?;
        self.counter
            .set(next)
            .map_err(|e| HubError::StorageError(format!("Failed to advance id sequence: {:?}", e)))?;
        Ok(format!("content-{:012}", next))
    }
}
