// src/backend/storage/access.rs
use crate::error::HubError;
use crate::models::AccessRecord;
use crate::storage::storable::{check_entry_bounds, Cbor, StorableString};
use ic_stable_structures::{Memory, StableBTreeMap};

type StorableAccessRecord = Cbor<AccessRecord>;

/// Outcome of an authorization check for a single content id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessDecision {
    Allowed,
    Denied,
    NotFound,
}

/// Map from content id to its access record, keyed identically to the
/// content store so the two stay 1:1.
pub struct AccessStore<M: Memory> {
    map: StableBTreeMap<StorableString, StorableAccessRecord, M>,
}

impl<M: Memory> AccessStore<M> {
    pub fn init(memory: M) -> Self {
        Self {
            map: StableBTreeMap::init(memory),
        }
    }

    /// Inserts or replaces an access record, returning the previous record if any.
    pub fn insert(&mut self, record: &AccessRecord) -> Result<Option<AccessRecord>, HubError> {
        let key = Cbor(record.content_id.clone());
        let storable_record = Cbor(record.clone());
        check_entry_bounds(&key, &storable_record)?;
        Ok(self.map.insert(key, storable_record).map(|prev| prev.0))
    }

    pub fn get(&self, content_id: &str) -> Option<AccessRecord> {
        self.map.get(&Cbor(content_id.to_string())).map(|r| r.0)
    }

    pub fn remove(&mut self, content_id: &str) -> Option<AccessRecord> {
        self.map.remove(&Cbor(content_id.to_string())).map(|r| r.0)
    }

    /// Decides whether `caller` may read the content behind `content_id`.
    pub fn authorize(&self, content_id: &str, caller: &str) -> AccessDecision {
        match self.get(content_id) {
            None => AccessDecision::NotFound,
            Some(record) if record.permits(caller) => AccessDecision::Allowed,
            Some(_) => AccessDecision::Denied,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ic_stable_structures::VectorMemory;

    #[test]
    fn authorize_distinguishes_missing_denied_and_allowed() {
        let mut store = AccessStore::init(VectorMemory::default());
        assert_eq!(store.authorize("c-1", "alice"), AccessDecision::NotFound);

        store
            .insert(&AccessRecord::for_owner("c-1".to_string(), "alice"))
            .unwrap();
        assert_eq!(store.authorize("c-1", "alice"), AccessDecision::Allowed);
        assert_eq!(store.authorize("c-1", "bob"), AccessDecision::Denied);
    }

    #[test]
    fn empty_allow_list_admits_anyone() {
        let mut store = AccessStore::init(VectorMemory::default());
        let mut record = AccessRecord::for_owner("c-1".to_string(), "alice");
        record.revoke("alice");
        store.insert(&record).unwrap();

        assert_eq!(store.authorize("c-1", "stranger"), AccessDecision::Allowed);
    }

    #[test]
    fn insert_replaces_existing_record() {
        let mut store = AccessStore::init(VectorMemory::default());
        let mut record = AccessRecord::for_owner("c-1".to_string(), "alice");
        store.insert(&record).unwrap();

        record.grant("bob");
        let prev = store.insert(&record).unwrap().unwrap();
        assert!(!prev.allowed_users.contains("bob"));
        assert!(store.get("c-1").unwrap().allowed_users.contains("bob"));
    }
}
