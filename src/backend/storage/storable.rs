// src/backend/storage/storable.rs
use crate::error::HubError;
use ic_stable_structures::{storable::Bound, Storable};
use serde::{de::DeserializeOwned, Serialize};
use std::borrow::Cow;

/// Helper struct to wrap any type T that implements Serialize and DeserializeOwned
/// to make it Storable using CBOR encoding.
#[derive(Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct Cbor<T>(pub T)
where
    T: Serialize + DeserializeOwned;

impl<T> Storable for Cbor<T>
where
    T: Serialize + DeserializeOwned,
{
    fn to_bytes(&self) -> Cow<[u8]> {
        let mut writer = vec![];
        ciborium::ser::into_writer(&self.0, &mut writer)
            .expect("Failed to serialize value to CBOR for stable storage");
        Cow::Owned(writer)
    }

    fn from_bytes(bytes: Cow<[u8]>) -> Self {
        let value: T = ciborium::de::from_reader(bytes.as_ref())
            .expect("Failed to deserialize value from CBOR from stable storage");
        Cbor(value)
    }

    // The wrapper itself stays unbounded; entry size limits are enforced
    // by check_entry_bounds before every insert.
    const BOUND: Bound = Bound::Unbounded;
}

// Define a simple Storable key type using String
pub type StorableString = Cbor<String>;

// Byte limits the underlying map holds us to. Oversized entries must be
// rejected up front, the map itself would not truncate them gracefully.
pub const MAX_KEY_BYTES: usize = 512;
pub const MAX_VALUE_BYTES: usize = 2 * 1024 * 1024; // 2 MiB

/// Rejects entries whose encoded key or value exceeds the storage limits.
pub fn check_entry_bounds<K: Storable, V: Storable>(key: &K, value: &V) -> Result<(), HubError> {
    let key_len = key.to_bytes().len();
    if key_len > MAX_KEY_BYTES {
        return Err(HubError::StorageError(format!(
            "Key size {} exceeds limit {}",
            key_len, MAX_KEY_BYTES
        )));
    }
    let value_len = value.to_bytes().len();
    if value_len > MAX_VALUE_BYTES {
        return Err(HubError::StorageError(format!(
            "Value size {} exceeds limit {}",
            value_len, MAX_VALUE_BYTES
        )));
    }
    Ok(())
}
