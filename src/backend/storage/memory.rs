// src/backend/storage/memory.rs
use ic_stable_structures::memory_manager::{MemoryId, MemoryManager, VirtualMemory};
use ic_stable_structures::DefaultMemoryImpl;
use std::cell::RefCell;

// Define Memory IDs for stable structures
// Choose non-overlapping IDs
const CONTENT_RECORDS_MEM_ID: MemoryId = MemoryId::new(0);
const ACCESS_RECORDS_MEM_ID: MemoryId = MemoryId::new(1);
const ID_SEQUENCE_MEM_ID: MemoryId = MemoryId::new(2);
const METRICS_MEM_ID: MemoryId = MemoryId::new(3);
// IDs 4+ stay free for future structures

// Define memory type alias
pub type Memory = VirtualMemory<DefaultMemoryImpl>;

thread_local! {
    // Memory manager
    static MEMORY_MANAGER: RefCell<MemoryManager<DefaultMemoryImpl>> = RefCell::new(
        MemoryManager::init(DefaultMemoryImpl::default())
    );
}

/// Get memory instance for a specific MemoryId.
pub fn get_memory(id: MemoryId) -> Memory {
    MEMORY_MANAGER.with(|m| m.borrow().get(id))
}

// Functions to get specific memory instances
pub fn get_content_records_memory() -> Memory {
    get_memory(CONTENT_RECORDS_MEM_ID)
}

pub fn get_access_records_memory() -> Memory {
    get_memory(ACCESS_RECORDS_MEM_ID)
}

pub fn get_id_sequence_memory() -> Memory {
    get_memory(ID_SEQUENCE_MEM_ID)
}

pub fn get_metrics_memory() -> Memory {
    get_memory(METRICS_MEM_ID)
}
