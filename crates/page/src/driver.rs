//! Async page driver
//!
//! [`ResourcePage`] couples a [`PageModel`] with a [`ResourceClient`] and
//! runs the full lifecycle: mount-time load, validated submission with the
//! follow-up refresh, delete with the follow-up refresh. The client calls
//! are the only suspension points; the refresh after a mutation is issued
//! strictly after that mutation's response, so it always reflects it.
//!
//! Dropping a driver future mid-await (the page went away) simply stops at
//! the suspension point; no state is written afterwards.

use salon_client::ResourceClient;
use salon_core::Record;
use salon_schema::{ResourceSchema, ValidationReport};

use crate::model::{NextAction, PageModel, SubmitPlan};

/// Outcome of a [`ResourcePage::submit`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The round trip ran; success or failure is recorded in the model.
    Completed,
    /// Another mutation was in flight; nothing was sent.
    Busy,
    /// The draft failed validation; field errors for the form, nothing sent.
    Invalid(ValidationReport),
}

/// One resource page: model plus client.
pub struct ResourcePage<C> {
    model: PageModel,
    client: C,
}

impl<C: ResourceClient> ResourcePage<C> {
    /// Create a page for a schema and client. The model starts `Idle`;
    /// call [`load`](Self::load) to populate it.
    pub fn new(schema: ResourceSchema, client: C) -> Self {
        Self {
            model: PageModel::new(schema),
            client,
        }
    }

    /// Read access to the page state.
    pub fn model(&self) -> &PageModel {
        &self.model
    }

    /// Fetch the collection and apply the result.
    pub async fn load(&mut self) {
        if !self.model.begin_load() {
            return;
        }
        let result = self.client.list().await;
        self.model.finish_load(result);
    }

    /// Target a collection entity for editing.
    pub fn edit(&mut self, id: &str) -> bool {
        self.model.edit(id)
    }

    /// Leave edit mode without submitting.
    pub fn cancel(&mut self) {
        self.model.cancel_edit();
    }

    /// Dismiss the current error message.
    pub fn dismiss_error(&mut self) {
        self.model.dismiss_error();
    }

    /// Submit a form draft: update when an entity is selected, create
    /// otherwise, then refresh the collection from the server.
    pub async fn submit(&mut self, draft: Record) -> SubmitOutcome {
        let plan = self.model.begin_submit(&draft);

        let result = match plan {
            SubmitPlan::Busy => return SubmitOutcome::Busy,
            SubmitPlan::Invalid(report) => return SubmitOutcome::Invalid(report),
            SubmitPlan::Create(payload) => self.client.create(&payload).await,
            SubmitPlan::Update { id, draft } => self.client.update(&id, &draft).await,
        };

        if self.model.finish_submit(result) == NextAction::Reload {
            self.reload().await;
        }
        SubmitOutcome::Completed
    }

    /// Delete an entity, then refresh the collection from the server. An
    /// already-deleted entity counts as deleted.
    pub async fn delete(&mut self, id: &str) {
        if !self.model.begin_delete(id) {
            return;
        }
        let result = self.client.remove(id).await;
        if self.model.finish_delete(result) == NextAction::Reload {
            self.reload().await;
        }
    }

    /// Post-mutation refresh: issued only after the mutation's response,
    /// so the list reflects at least that mutation.
    async fn reload(&mut self) {
        if self.model.begin_load() {
            let result = self.client.list().await;
            self.model.finish_load(result);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
