// src/backend/lib.rs

pub mod api;
pub mod error;
pub mod metrics;
pub mod models;
pub mod services;
pub mod storage;
pub mod utils;

// Bring endpoint request/response types and referenced types into scope so the
// `export_candid!()` macro below can resolve them by their bare names.
use crate::api::{
    GetContentRequest, SetAccessRequest, UpdateContentRequest, UpdateContentResponse,
    UploadContentRequest, UploadContentResponse,
};
use crate::error::HubError;
use crate::metrics::HubMetrics;
use crate::models::Content;

#[ic_cdk::init]
fn init() {
    api::warm_up();
    ic_cdk::println!("ContentHub backend canister initialized.");
}

#[ic_cdk::post_upgrade]
fn post_upgrade() {
    api::warm_up();
    ic_cdk::println!("ContentHub backend canister upgraded.");
}

// Export Candid interface
ic_cdk::export_candid!();
