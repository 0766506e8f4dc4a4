// src/backend/storage/contents.rs
use crate::error::HubError;
use crate::models::Content;
use crate::storage::storable::{check_entry_bounds, Cbor, StorableString};
use ic_stable_structures::{Memory, StableBTreeMap};

type StorableContent = Cbor<Content>;

/// Map from content id to the current content record.
///
/// The store owns its map instead of living in a thread local so tests can
/// build isolated instances over any `Memory` implementation.
pub struct ContentStore<M: Memory> {
    map: StableBTreeMap<StorableString, StorableContent, M>,
}

impl<M: Memory> ContentStore<M> {
    pub fn init(memory: M) -> Self {
        Self {
            map: StableBTreeMap::init(memory),
        }
    }

    /// Inserts or replaces a content record, returning the previous record if any.
    pub fn insert(&mut self, content: &Content) -> Result<Option<Content>, HubError> {
        let key = Cbor(content.id.clone());
        let storable_content = Cbor(content.clone());
        check_entry_bounds(&key, &storable_content)?;
        Ok(self.map.insert(key, storable_content).map(|prev| prev.0))
    }

    /// Retrieves a content record by its id. No authorization here, access is
    /// checked by the caller before the record leaves the hub.
    pub fn get(&self, content_id: &str) -> Option<Content> {
        self.map.get(&Cbor(content_id.to_string())).map(|c| c.0)
    }

    pub fn remove(&mut self, content_id: &str) -> Option<Content> {
        self.map.remove(&Cbor(content_id.to_string())).map(|c| c.0)
    }

    /// Snapshot of every stored record, in the map's native key order.
    pub fn list(&self) -> Vec<Content> {
        self.map.iter().map(|(_key, content)| content.0).collect()
    }

    pub fn len(&self) -> u64 {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::storable::MAX_VALUE_BYTES;
    use ic_stable_structures::VectorMemory;

    fn sample(id: &str, owner: &str) -> Content {
        Content {
            id: id.to_string(),
            title: "Field notes".to_string(),
            body: "ipfs://bafy...".to_string(),
            owner: owner.to_string(),
            created_at: 1_000,
            updated_at: None,
            version: 1,
        }
    }

    #[test]
    fn insert_then_get_returns_same_record() {
        let mut store = ContentStore::init(VectorMemory::default());
        let content = sample("c-1", "alice");
        assert!(store.insert(&content).unwrap().is_none());
        assert_eq!(store.get("c-1"), Some(content));
        assert_eq!(store.get("c-2"), None);
    }

    #[test]
    fn insert_replaces_and_returns_previous() {
        let mut store = ContentStore::init(VectorMemory::default());
        let first = sample("c-1", "alice");
        store.insert(&first).unwrap();

        let mut second = first.clone();
        second.title = "Revised notes".to_string();
        second.version = 2;
        let prev = store.insert(&second).unwrap();
        assert_eq!(prev, Some(first));
        assert_eq!(store.get("c-1"), Some(second));
    }

    #[test]
    fn list_snapshots_all_records() {
        let mut store = ContentStore::init(VectorMemory::default());
        for i in 0..4 {
            store.insert(&sample(&format!("c-{}", i), "alice")).unwrap();
        }
        let listed = store.list();
        assert_eq!(listed.len(), 4);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn oversized_record_is_rejected_and_not_stored() {
        let mut store = ContentStore::init(VectorMemory::default());
        let mut content = sample("c-big", "alice");
        content.body = "x".repeat(MAX_VALUE_BYTES + 1);
        assert!(matches!(
            store.insert(&content),
            Err(HubError::StorageError(_))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn records_survive_reattaching_to_the_same_memory() {
        let memory = VectorMemory::default();
        {
            let mut store = ContentStore::init(memory.clone());
            store.insert(&sample("c-1", "alice")).unwrap();
        }
        let store = ContentStore::init(memory);
        assert_eq!(store.get("c-1"), Some(sample("c-1", "alice")));
    }
}
