// src/backend/models/access_record.rs
use crate::models::common::{CallerId, ContentId};
use candid::CandidType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Read allow-list for a single content item, created together with it.
///
/// An empty `allowed_users` set is the public marker: every caller may read.
/// A record whose last reader was revoked therefore becomes globally
/// readable, it does not become unreadable.
#[derive(CandidType, Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct AccessRecord {
    pub content_id: ContentId,
    pub allowed_users: BTreeSet<CallerId>,
}

impl AccessRecord {
    /// A fresh record listing only the owner.
    pub fn for_owner(content_id: ContentId, owner: &str) -> Self {
        let mut allowed_users = BTreeSet::new();
        allowed_users.insert(owner.to_string());
        Self {
            content_id,
            allowed_users,
        }
    }

    pub fn permits(&self, caller: &str) -> bool {
        self.allowed_users.is_empty() || self.allowed_users.contains(caller)
    }

    pub fn grant(&mut self, user: &str) {
        self.allowed_users.insert(user.to_string());
    }

    /// Revoking a user that holds no grant is a no-op.
    pub fn revoke(&mut self, user: &str) {
        self.allowed_users.remove(user);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_is_listed_and_permitted() {
        let record = AccessRecord::for_owner("c-1".to_string(), "alice");
        assert_eq!(record.allowed_users.len(), 1);
        assert!(record.permits("alice"));
        assert!(!record.permits("bob"));
    }

    #[test]
    fn grant_admits_new_reader() {
        let mut record = AccessRecord::for_owner("c-1".to_string(), "alice");
        record.grant("bob");
        assert!(record.permits("bob"));
        assert!(record.permits("alice"));
    }

    #[test]
    fn emptied_list_is_public() {
        let mut record = AccessRecord::for_owner("c-1".to_string(), "alice");
        record.revoke("alice");
        assert!(record.allowed_users.is_empty());
        assert!(record.permits("someone-never-seen"));
    }

    #[test]
    fn revoking_non_member_changes_nothing() {
        let mut record = AccessRecord::for_owner("c-1".to_string(), "alice");
        record.revoke("bob");
        assert!(record.permits("alice"));
        assert!(!record.permits("bob"));
    }
}
