// src/backend/api.rs
// Candid API endpoint definitions (query/update functions)

use crate::{
    error::HubError,
    metrics::{self, HubMetrics},
    models::{
        common::{CallerId, ContentId},
        Content,
    },
    services::Hub,
    storage::{
        memory::{
            get_access_records_memory, get_content_records_memory, get_id_sequence_memory, Memory,
        },
        AccessStore, ContentStore,
    },
    utils::{ids::SequenceIds, time::IcTime},
};
use candid::CandidType;
use ic_cdk_macros::{query, update};
use serde::Deserialize;
use std::cell::RefCell;
use validator::Validate;

thread_local! {
    // The one hub instance behind every endpoint. Message execution is
    // single-threaded, so each borrow below is exclusive for the whole call
    // and mutations on the same content id never interleave.
    static HUB: RefCell<Hub<Memory>> = RefCell::new(bootstrap_hub());
}

fn bootstrap_hub() -> Hub<Memory> {
    Hub::new(
        ContentStore::init(get_content_records_memory()),
        AccessStore::init(get_access_records_memory()),
        Box::new(IcTime),
        Box::new(SequenceIds::init(get_id_sequence_memory())),
    )
}

/// Touches the hub so stable structures attach to their memory regions
/// during init/post_upgrade rather than lazily on the first call.
pub fn warm_up() {
    HUB.with(|_| ());
}

// --- Validation Helper ---
fn validate_request<T: Validate>(req: &T) -> Result<(), HubError> {
    req.validate()
        .map_err(|e| HubError::InvalidInput(e.to_string()))
}

fn log_metric_failure(counter: &str, error: String) {
    ic_cdk::println!("WARN: failed to record {} metric: {}", counter, error);
}

// --- Request/Response Structs ---

#[derive(CandidType, Deserialize, Clone, Debug, Validate)]
pub struct UploadContentRequest {
    #[validate(length(min = 1, max = 128))]
    pub owner: CallerId,
    pub title: String,
    pub body: String,
}

#[derive(CandidType, Deserialize, Clone, Debug)]
pub struct UploadContentResponse {
    pub content_id: ContentId,
}

#[derive(CandidType, Deserialize, Clone, Debug, Validate)]
pub struct GetContentRequest {
    #[validate(length(min = 1, max = 512))]
    pub content_id: ContentId,
    #[validate(length(min = 1, max = 128))]
    pub caller_id: CallerId,
}

#[derive(CandidType, Deserialize, Clone, Debug, Validate)]
pub struct UpdateContentRequest {
    #[validate(length(min = 1, max = 512))]
    pub content_id: ContentId,
    #[validate(length(min = 1, max = 128))]
    pub updater: CallerId,
    pub new_title: Option<String>,
    pub new_body: Option<String>,
}

#[derive(CandidType, Deserialize, Clone, Debug)]
pub struct UpdateContentResponse {
    pub content_id: ContentId,
    pub version: u64,
}

#[derive(CandidType, Deserialize, Clone, Debug, Validate)]
pub struct SetAccessRequest {
    #[validate(length(min = 1, max = 512))]
    pub content_id: ContentId,
    #[validate(length(min = 1, max = 128))]
    pub requester: CallerId,
    #[validate(length(min = 1, max = 128))]
    pub target_user: CallerId,
    pub grant: bool,
}

// --- Endpoints ---

#[update]
fn upload_content(req: UploadContentRequest) -> Result<UploadContentResponse, HubError> {
    validate_request(&req)?;
    let UploadContentRequest { owner, title, body } = req;

    let content_id = HUB.with(|hub| hub.borrow_mut().upload_content(&owner, title, body))?;

    if let Err(e) = metrics::record_upload() {
        log_metric_failure("upload", e);
    }
    ic_cdk::println!("📝 INFO: Content {} uploaded by {}.", content_id, owner);
    Ok(UploadContentResponse { content_id })
}

#[query]
fn get_content(req: GetContentRequest) -> Result<Content, HubError> {
    validate_request(&req)?;
    HUB.with(|hub| hub.borrow().get_content(&req.content_id, &req.caller_id))
}

#[update]
fn update_content(req: UpdateContentRequest) -> Result<UpdateContentResponse, HubError> {
    validate_request(&req)?;
    let UpdateContentRequest {
        content_id,
        updater,
        new_title,
        new_body,
    } = req;

    let updated = HUB.with(|hub| {
        hub.borrow_mut()
            .update_content(&content_id, &updater, new_title, new_body)
    })?;

    if let Err(e) = metrics::record_update() {
        log_metric_failure("update", e);
    }
    ic_cdk::println!(
        "📝 INFO: Content {} updated to version {} by {}.",
        updated.id,
        updated.version,
        updater
    );
    Ok(UpdateContentResponse {
        content_id: updated.id,
        version: updated.version,
    })
}

#[update]
fn set_access(req: SetAccessRequest) -> Result<(), HubError> {
    validate_request(&req)?;

    HUB.with(|hub| {
        hub.borrow_mut()
            .set_access(&req.content_id, &req.requester, &req.target_user, req.grant)
    })?;

    if let Err(e) = metrics::record_access_change(req.grant) {
        log_metric_failure("access change", e);
    }
    ic_cdk::println!(
        "📝 INFO: Access {} for {} on content {} requested by {}.",
        if req.grant { "granted" } else { "revoked" },
        req.target_user,
        req.content_id,
        req.requester
    );
    Ok(())
}

#[query]
fn get_all_content() -> Vec<Content> {
    HUB.with(|hub| hub.borrow().list_all())
}

#[query]
fn get_hub_metrics() -> HubMetrics {
    metrics::get_metrics()
}
