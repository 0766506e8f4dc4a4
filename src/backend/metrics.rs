// src/backend/metrics.rs
use crate::storage::memory::{get_metrics_memory, Memory};
use crate::storage::Cbor;
use candid::CandidType;
use ic_stable_structures::StableCell;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

/// Mutation counters, kept in stable memory so they survive upgrades.
/// Reads are served by queries and are not counted.
#[derive(CandidType, Serialize, Deserialize, Clone, Debug, Default)]
pub struct HubMetrics {
    pub uploads_total: u64,
    pub updates_total: u64,
    pub grants_total: u64,
    pub revokes_total: u64,
}

type StorableHubMetrics = Cbor<HubMetrics>;

thread_local! {
    static METRICS_CELL: RefCell<StableCell<StorableHubMetrics, Memory>> = RefCell::new(
        StableCell::init(get_metrics_memory(), Cbor(HubMetrics::default()))
            .expect("Failed to initialize metrics stable cell")
    );
}

pub fn get_metrics() -> HubMetrics {
    METRICS_CELL.with(|cell| cell.borrow().get().0.clone())
}

/// Helper function to update metrics.
pub fn update_metrics<F>(update_fn: F) -> Result<(), String>
where
    F: FnOnce(&mut HubMetrics),
{
    METRICS_CELL.with(|cell| {
        let mut metrics = cell.borrow().get().0.clone();
        update_fn(&mut metrics);
        cell.borrow_mut()
            .set(Cbor(metrics))
            .map_err(|e| format!("Failed to update metrics: {:?}", e))?;
        Ok(())
    })
}

pub fn record_upload() -> Result<(), String> {
    update_metrics(|metrics| {
        metrics.uploads_total = metrics.uploads_total.saturating_add(1);
    })
}

pub fn record_update() -> Result<(), String> {
    update_metrics(|metrics| {
        metrics.updates_total = metrics.updates_total.saturating_add(1);
    })
}

pub fn record_access_change(grant: bool) -> Result<(), String> {
    update_metrics(|metrics| {
        if grant {
            metrics.grants_total = metrics.grants_total.saturating_add(1);
        } else {
            metrics.revokes_total = metrics.revokes_total.saturating_add(1);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let before = get_metrics();
        record_upload().unwrap();
        record_upload().unwrap();
        record_update().unwrap();
        record_access_change(true).unwrap();
        record_access_change(false).unwrap();

        let after = get_metrics();
        assert_eq!(after.uploads_total, before.uploads_total + 2);
        assert_eq!(after.updates_total, before.updates_total + 1);
        assert_eq!(after.grants_total, before.grants_total + 1);
        assert_eq!(after.revokes_total, before.revokes_total + 1);
    }
}
