// src/backend/services/hub.rs
// Orchestration over the content and access stores

use crate::{
    error::HubError,
    models::{common::ContentId, AccessRecord, Content},
    storage::{AccessDecision, AccessStore, ContentStore},
    utils::{ids::IdSource, time::TimeSource},
};
use ic_stable_structures::Memory;

/// The orchestration context: both record stores plus the time and id
/// oracles, passed around as one owned value. The canister keeps a single
/// instance; tests build isolated ones over in-memory storage.
pub struct Hub<M: Memory> {
    contents: ContentStore<M>,
    access: AccessStore<M>,
    time: Box<dyn TimeSource>,
    ids: Box<dyn IdSource>,
}

impl<M: Memory> Hub<M> {
    pub fn new(
        contents: ContentStore<M>,
        access: AccessStore<M>,
        time: Box<dyn TimeSource>,
        ids: Box<dyn IdSource>,
    ) -> Self {
        Self {
            contents,
            access,
            time,
            ids,
        }
    }

    /// Creates a new content record together with its access record.
    ///
    /// # Arguments
    /// * `owner` - Caller id recorded as the immutable owner.
    /// * `title`, `body` - Initial document fields.
    ///
    /// # Returns
    /// * `Result<ContentId, HubError>` - The id of the new record or an error.
    pub fn upload_content(
        &mut self,
        owner: &str,
        title: String,
        body: String,
    ) -> Result<ContentId, HubError> {
        let content_id = self.ids.next_id()?;
        let created_at = self.time.now_ns();

        let content = Content {
            id: content_id.clone(),
            title,
            body,
            owner: owner.to_string(),
            created_at,
            updated_at: None,
            version: 1,
        };

        if self.contents.insert(&content)?.is_some() {
            // The id generator promises collision-free ids
            return Err(HubError::InternalError(format!(
                "Duplicate content id issued: {}",
                content_id
            )));
        }

        let record = AccessRecord::for_owner(content_id.clone(), owner);
        if let Err(err) = self.access.insert(&record) {
            // Roll the content write back so no record exists without its
            // access companion.
            self.contents.remove(&content_id);
            return Err(err);
        }

        Ok(content_id)
    }

    /// Fetches a content record on behalf of `caller`.
    ///
    /// The access check runs before the lookup: a caller without access gets
    /// the same shape of denial whether or not anything is stored under the
    /// id, and the denial carries no content fields.
    pub fn get_content(&self, content_id: &str, caller: &str) -> Result<Content, HubError> {
        match self.access.authorize(content_id, caller) {
            AccessDecision::NotFound => {
                Err(HubError::NotFound(format!("No content with id {}", content_id)))
            }
            AccessDecision::Denied => Err(HubError::AccessDenied(format!(
                "Caller {} may not read content {}",
                caller, content_id
            ))),
            AccessDecision::Allowed => self
                .contents
                .get(content_id)
                .ok_or_else(|| HubError::NotFound(format!("No content with id {}", content_id))),
        }
    }

    /// Applies a partial update to a content record.
    ///
    /// Updates are owner-only; read grants play no part here. A patch field
    /// that is absent or an empty string leaves the stored value unchanged.
    /// Every successful call bumps `version` by 1 and stamps `updated_at`,
    /// even when both patch fields were left out.
    ///
    /// # Returns
    /// * `Result<Content, HubError>` - The record as stored after the update.
    pub fn update_content(
        &mut self,
        content_id: &str,
        updater: &str,
        new_title: Option<String>,
        new_body: Option<String>,
    ) -> Result<Content, HubError> {
        // 1. Fetch the current record
        let mut content = self
            .contents
            .get(content_id)
            .ok_or_else(|| HubError::NotFound(format!("No content with id {}", content_id)))?;

        // 2. Ownership check
        if content.owner != updater {
            return Err(HubError::NotAuthorized(format!(
                "Caller {} is not the owner of content {}",
                updater, content_id
            )));
        }

        // 3. Apply provided fields, stamp, bump, and persist the full record
        if let Some(title) = new_title.filter(|t| !t.is_empty()) {
            content.title = title;
        }
        if let Some(body) = new_body.filter(|b| !b.is_empty()) {
            content.body = body;
        }
        content.updated_at = Some(self.time.now_ns());
        content.version += 1;

        self.contents.insert(&content)?;
        Ok(content)
    }

    /// Grants or revokes read access to `target_user`.
    ///
    /// Grant management is deliberately open: any caller may add or remove
    /// readers, ownership gates only `update_content`. Revoking a user that
    /// holds no grant is a no-op; revoking the last reader makes the content
    /// public.
    pub fn set_access(
        &mut self,
        content_id: &str,
        _requester: &str,
        target_user: &str,
        grant: bool,
    ) -> Result<(), HubError> {
        let mut record = self
            .access
            .get(content_id)
            .ok_or_else(|| HubError::NotFound(format!("No content with id {}", content_id)))?;

        if grant {
            record.grant(target_user);
        } else {
            record.revoke(target_user);
        }

        self.access.insert(&record)?;
        Ok(())
    }

    /// Snapshot of every stored content record, unsorted.
    pub fn list_all(&self) -> Vec<Content> {
        self.contents.list()
    }

    pub fn content_count(&self) -> u64 {
        self.contents.len()
    }
}
