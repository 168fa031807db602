//! Page lifecycle state machine
//!
//! [`PageModel`] is the page-scoped state container behind every resource
//! page: the collection, the edit selection, the request status and the
//! user-facing error. All transitions are synchronous `begin_*` /
//! `finish_*` pairs; the suspension between them (the client round trip)
//! happens outside the model, in the async driver or in a UI task. That
//! keeps every lifecycle rule in one testable place while leaving the
//! caller free to run the round trip however it likes.
//!
//! Rules enforced here:
//!
//! - a successful list replaces the collection wholesale, in response order
//! - a failed list leaves the previous collection visible and sets the
//!   error; stale data beats a blank screen
//! - at most one mutating request (create/update/delete) is in flight at a
//!   time; further attempts while `Submitting` are rejected
//! - a successful submission clears the selection before anything else and
//!   asks for a refresh; entities are never spliced in locally
//! - a `NotFound` failure on delete counts as success: the entity is gone
//!   either way
//! - the selection always references an id present in the collection
//! - every failure maps to one fixed user-facing message per operation

use salon_core::{ClientError, ClientResult, Record};
use salon_schema::{ResourceSchema, ValidationReport};

// ============================================================================
// PageStatus
// ============================================================================

/// Request status of a resource page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageStatus {
    /// Mounted, no fetch started yet.
    #[default]
    Idle,
    /// A list fetch is in flight.
    Loading,
    /// Collection loaded and displayable.
    Ready,
    /// A create/update/delete is in flight.
    Submitting,
    /// The last operation failed; the error message is set.
    Error,
}

impl PageStatus {
    /// Whether a mutating request is in flight.
    pub fn is_submitting(&self) -> bool {
        matches!(self, PageStatus::Submitting)
    }

    /// Whether a list fetch is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, PageStatus::Loading)
    }
}

// ============================================================================
// Transition outcomes
// ============================================================================

/// What a `begin_submit` call decided.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitPlan {
    /// Another mutation is in flight; nothing was started.
    Busy,
    /// The draft failed its schema rules; nothing was started.
    Invalid(ValidationReport),
    /// Create the draft (no selection).
    Create(Record),
    /// Update the selected entity with the draft.
    Update {
        /// Id of the selected entity.
        id: String,
        /// The cleaned draft payload.
        draft: Record,
    },
}

/// What the caller must do after a `finish_*` transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextAction {
    /// Nothing further.
    None,
    /// Re-issue `list()` to resynchronise with the server.
    Reload,
}

// ============================================================================
// PageModel
// ============================================================================

/// Page-scoped state for one resource.
///
/// Each page instance owns its model exclusively; there is no global store
/// and no cross-page sharing.
#[derive(Debug, Clone, PartialEq)]
pub struct PageModel {
    schema: ResourceSchema,
    status: PageStatus,
    collection: Vec<Record>,
    selection: Option<Record>,
    error: Option<String>,
    flash: Option<String>,
    /// Id targeted by the in-flight delete, if any.
    pending_delete: Option<String>,
}

impl PageModel {
    /// Create a model for a resource schema. Starts `Idle` with an empty
    /// collection.
    pub fn new(schema: ResourceSchema) -> Self {
        Self {
            schema,
            status: PageStatus::Idle,
            collection: Vec::new(),
            selection: None,
            error: None,
            flash: None,
            pending_delete: None,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The resource schema this page serves.
    pub fn schema(&self) -> &ResourceSchema {
        &self.schema
    }

    /// Current request status.
    pub fn status(&self) -> PageStatus {
        self.status
    }

    /// The collection, in server response order.
    pub fn collection(&self) -> &[Record] {
        &self.collection
    }

    /// The collection in display order (sort hint applied).
    pub fn display_rows(&self) -> Vec<Record> {
        self.schema.sorted_for_display(&self.collection)
    }

    /// The entity currently targeted for editing, or `None` in create mode.
    pub fn selection(&self) -> Option<&Record> {
        self.selection.as_ref()
    }

    /// The current user-facing error message, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The current success flash message, if any.
    pub fn flash(&self) -> Option<&str> {
        self.flash.as_deref()
    }

    /// Whether submit/delete triggers should be disabled.
    pub fn is_busy(&self) -> bool {
        self.status.is_submitting()
    }

    // ========================================================================
    // List lifecycle
    // ========================================================================

    /// Start a list fetch. Refused (returns `false`) while a mutation is in
    /// flight; that mutation issues its own refresh when it completes.
    pub fn begin_load(&mut self) -> bool {
        if self.status.is_submitting() {
            return false;
        }
        tracing::debug!(resource = %self.schema.key, "loading collection");
        self.status = PageStatus::Loading;
        true
    }

    /// Apply the result of a list fetch.
    pub fn finish_load(&mut self, result: ClientResult<Vec<Record>>) {
        match result {
            Ok(rows) => {
                tracing::debug!(resource = %self.schema.key, rows = rows.len(), "collection loaded");
                // The response is the new source of truth, wholesale.
                self.collection = rows;
                self.status = PageStatus::Ready;
                self.error = None;

                // An edited-then-removed entity must not stay selected.
                if let Some(selected) = &self.selection {
                    let still_present = selected
                        .id()
                        .is_some_and(|id| self.collection.iter().any(|r| r.id() == Some(id.clone())));
                    if !still_present {
                        self.selection = None;
                    }
                }
            }
            Err(error) => {
                tracing::debug!(resource = %self.schema.key, %error, "collection load failed");
                // Keep the stale collection visible.
                self.status = PageStatus::Error;
                self.error = Some(self.fetch_error_message());
            }
        }
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Target a collection entity for editing. Returns `false` if the id is
    /// not in the collection (the selection is then left unchanged).
    pub fn edit(&mut self, id: &str) -> bool {
        match self.collection.iter().find(|r| r.id().as_deref() == Some(id)) {
            Some(record) => {
                self.selection = Some(record.clone());
                true
            }
            None => false,
        }
    }

    /// Leave edit mode without submitting. Status stays as it was.
    pub fn cancel_edit(&mut self) {
        self.selection = None;
    }

    // ========================================================================
    // Submission lifecycle
    // ========================================================================

    /// Start a create/update for a form draft.
    ///
    /// Rejects the attempt while another mutation is in flight, and rejects
    /// drafts that fail their schema rules without touching the status.
    pub fn begin_submit(&mut self, draft: &Record) -> SubmitPlan {
        if self.status.is_submitting() {
            return SubmitPlan::Busy;
        }

        let cleaned = self.schema.draft_from(draft);
        let report = self.schema.validate_draft(&cleaned);
        if report.has_errors() {
            return SubmitPlan::Invalid(report);
        }

        self.status = PageStatus::Submitting;
        self.error = None;
        self.flash = None;

        match self.selection.as_ref().and_then(Record::id) {
            Some(id) => {
                tracing::debug!(resource = %self.schema.key, %id, "updating entity");
                SubmitPlan::Update { id, draft: cleaned }
            }
            None => {
                tracing::debug!(resource = %self.schema.key, "creating entity");
                SubmitPlan::Create(cleaned)
            }
        }
    }

    /// Apply the result of a create/update round trip.
    pub fn finish_submit(&mut self, result: ClientResult<Record>) -> NextAction {
        match result {
            Ok(_) => {
                // Selection clears before anything else; the refresh below
                // resynchronises instead of splicing the response in.
                self.selection = None;
                self.status = PageStatus::Ready;
                self.error = None;
                self.flash = Some(format!("Saved {}", self.schema.singular));
                NextAction::Reload
            }
            Err(error) => {
                tracing::debug!(resource = %self.schema.key, %error, "submission failed");
                self.status = PageStatus::Error;
                self.error = Some(self.save_error_message());
                NextAction::None
            }
        }
    }

    // ========================================================================
    // Delete lifecycle
    // ========================================================================

    /// Start a delete for an entity id. Refused while another mutation is
    /// in flight.
    pub fn begin_delete(&mut self, id: &str) -> bool {
        if self.status.is_submitting() {
            return false;
        }
        tracing::debug!(resource = %self.schema.key, %id, "deleting entity");
        self.status = PageStatus::Submitting;
        self.error = None;
        self.flash = None;
        self.pending_delete = Some(id.to_string());
        true
    }

    /// Apply the result of a delete round trip.
    ///
    /// `NotFound` counts as success: deleting an entity that is already
    /// gone achieved the goal.
    pub fn finish_delete(&mut self, result: ClientResult<()>) -> NextAction {
        let deleted_id = self.pending_delete.take();

        match result {
            Ok(()) | Err(ClientError::NotFound { .. }) => {
                if self.selection.as_ref().and_then(Record::id) == deleted_id {
                    self.selection = None;
                }
                self.status = PageStatus::Ready;
                self.error = None;
                self.flash = Some(format!("Deleted {}", self.schema.singular));
                NextAction::Reload
            }
            Err(error) => {
                tracing::debug!(resource = %self.schema.key, %error, "delete failed");
                self.status = PageStatus::Error;
                self.error = Some(self.delete_error_message());
                NextAction::None
            }
        }
    }

    // ========================================================================
    // Messages
    // ========================================================================

    /// Dismiss the error message. The status itself is left alone.
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Dismiss the success flash.
    pub fn dismiss_flash(&mut self) {
        self.flash = None;
    }

    fn fetch_error_message(&self) -> String {
        format!("Failed to fetch {}", self.schema.plural)
    }

    fn save_error_message(&self) -> String {
        format!("Failed to save {}", self.schema.singular)
    }

    fn delete_error_message(&self) -> String {
        format!("Failed to delete {}", self.schema.singular)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use salon_schema::catalog;

    fn model() -> PageModel {
        PageModel::new(catalog::testimonial())
    }

    fn row(id: &str, author: &str) -> Record {
        Record::new()
            .with("id", id)
            .with("author_name", author)
            .with("content", "Lovely salon")
    }

    fn valid_draft() -> Record {
        Record::new()
            .with("author_name", "Amina")
            .with("content", "Lovely salon")
    }

    #[test]
    fn test_starts_idle_and_empty() {
        let model = model();
        assert_eq!(model.status(), PageStatus::Idle);
        assert!(model.collection().is_empty());
        assert!(model.selection().is_none());
        assert!(model.error().is_none());
    }

    #[test]
    fn test_list_replaces_collection_wholesale() {
        // P1: after a successful list the collection equals the response,
        // in response order, regardless of what was there before.
        let mut model = model();
        model.finish_load(Ok(vec![row("1", "Old"), row("2", "Older")]));

        assert!(model.begin_load());
        model.finish_load(Ok(vec![row("9", "New")]));

        assert_eq!(model.status(), PageStatus::Ready);
        assert_eq!(model.collection().len(), 1);
        assert_eq!(model.collection()[0].id().unwrap(), "9");
    }

    #[test]
    fn test_failed_list_keeps_stale_collection() {
        // P2: a failing list leaves the rows visible and sets the error.
        let mut model = model();
        model.finish_load(Ok(vec![row("1", "A"), row("2", "B")]));

        assert!(model.begin_load());
        model.finish_load(Err(ClientError::network("connection refused")));

        assert_eq!(model.status(), PageStatus::Error);
        assert_eq!(model.collection().len(), 2);
        assert_eq!(model.error(), Some("Failed to fetch testimonials"));
    }

    #[test]
    fn test_error_message_hides_raw_failure() {
        let mut model = model();
        model.finish_load(Err(ClientError::server(500, "stack trace here")));
        assert!(!model.error().unwrap().contains("stack trace"));
    }

    #[test]
    fn test_single_in_flight_mutation() {
        // P3: while submitting, another submit must not start a second call.
        let mut model = model();
        model.finish_load(Ok(vec![]));

        let first = model.begin_submit(&valid_draft());
        assert!(matches!(first, SubmitPlan::Create(_)));
        assert!(model.is_busy());

        let second = model.begin_submit(&valid_draft());
        assert_eq!(second, SubmitPlan::Busy);

        // Delete is a mutation too.
        assert!(!model.begin_delete("1"));
        // And a refresh does not interleave with the mutation.
        assert!(!model.begin_load());
    }

    #[test]
    fn test_invalid_draft_never_starts_a_request() {
        let mut model = model();
        model.finish_load(Ok(vec![]));

        let plan = model.begin_submit(&Record::new());
        match plan {
            SubmitPlan::Invalid(report) => {
                assert!(report.error_for("author_name").is_some());
            }
            other => panic!("expected Invalid, got {other:?}"),
        }
        // Status untouched: the form shows field errors, nothing was sent.
        assert_eq!(model.status(), PageStatus::Ready);
    }

    #[test]
    fn test_selection_drives_update_vs_create() {
        let mut model = model();
        model.finish_load(Ok(vec![row("5", "A")]));

        assert!(model.edit("5"));
        let plan = model.begin_submit(&valid_draft());
        match plan {
            SubmitPlan::Update { id, draft } => {
                assert_eq!(id, "5");
                // The payload carries schema fields only, no id.
                assert!(!draft.has_id());
            }
            other => panic!("expected Update, got {other:?}"),
        }
    }

    #[test]
    fn test_successful_submit_clears_selection_and_reloads() {
        // P5: selection clears on success, before the refresh.
        let mut model = model();
        model.finish_load(Ok(vec![row("1", "A")]));
        model.edit("1");

        let _ = model.begin_submit(&valid_draft());
        let next = model.finish_submit(Ok(row("1", "A")));

        assert!(model.selection().is_none());
        assert_eq!(next, NextAction::Reload);
        assert!(model.error().is_none());
        assert_eq!(model.flash(), Some("Saved testimonial"));
    }

    #[test]
    fn test_failed_submit_keeps_selection_and_collection() {
        let mut model = model();
        model.finish_load(Ok(vec![row("1", "A")]));
        model.edit("1");

        let _ = model.begin_submit(&valid_draft());
        let next = model.finish_submit(Err(ClientError::server(500, "boom")));

        assert_eq!(next, NextAction::None);
        assert_eq!(model.status(), PageStatus::Error);
        assert_eq!(model.error(), Some("Failed to save testimonial"));
        // The user may retry or cancel; nothing was lost.
        assert!(model.selection().is_some());
        assert_eq!(model.collection().len(), 1);
    }

    #[test]
    fn test_delete_not_found_is_success() {
        // P4: deleting an id the server no longer has leaves no error and
        // still triggers a refresh.
        let mut model = model();
        model.finish_load(Ok(vec![row("1", "A")]));

        assert!(model.begin_delete("1"));
        let next = model.finish_delete(Err(ClientError::not_found("testimonial", "1")));

        assert_eq!(next, NextAction::Reload);
        assert!(model.error().is_none());
        assert_eq!(model.status(), PageStatus::Ready);
    }

    #[test]
    fn test_delete_failure_sets_message() {
        let mut model = model();
        model.finish_load(Ok(vec![row("1", "A")]));

        assert!(model.begin_delete("1"));
        let next = model.finish_delete(Err(ClientError::network("offline")));

        assert_eq!(next, NextAction::None);
        assert_eq!(model.error(), Some("Failed to delete testimonial"));
    }

    #[test]
    fn test_delete_clears_matching_selection() {
        let mut model = model();
        model.finish_load(Ok(vec![row("1", "A"), row("2", "B")]));
        model.edit("1");

        model.begin_delete("1");
        model.finish_delete(Ok(()));
        assert!(model.selection().is_none());

        // Deleting a different row leaves the selection alone.
        model.edit("2");
        model.begin_delete("1");
        model.finish_delete(Ok(()));
        assert!(model.selection().is_some());
    }

    #[test]
    fn test_refresh_drops_vanished_selection() {
        let mut model = model();
        model.finish_load(Ok(vec![row("1", "A"), row("2", "B")]));
        model.edit("2");

        // The server no longer returns entity 2.
        model.begin_load();
        model.finish_load(Ok(vec![row("1", "A")]));

        assert!(model.selection().is_none());
    }

    #[test]
    fn test_cancel_keeps_status() {
        let mut model = model();
        model.finish_load(Err(ClientError::network("offline")));
        model.finish_load(Ok(vec![row("1", "A")]));
        model.begin_load();
        model.finish_load(Err(ClientError::network("offline")));

        model.edit("1");
        assert_eq!(model.status(), PageStatus::Error);

        model.cancel_edit();
        assert!(model.selection().is_none());
        // Status returns to what it was, untouched by cancel.
        assert_eq!(model.status(), PageStatus::Error);
    }

    #[test]
    fn test_edit_unknown_id_is_refused() {
        let mut model = model();
        model.finish_load(Ok(vec![row("1", "A")]));
        assert!(!model.edit("99"));
        assert!(model.selection().is_none());
    }

    #[test]
    fn test_display_rows_follow_sort_hint() {
        let mut model = PageModel::new(catalog::service_item());
        let cheap = Record::new().with("id", "a").with("price", 10.0);
        let pricey = Record::new().with("id", "b").with("price", 90.0);
        model.finish_load(Ok(vec![pricey, cheap]));

        let rows = model.display_rows();
        assert_eq!(rows[0].id().unwrap(), "a");
        // Server order is what the collection keeps.
        assert_eq!(model.collection()[0].id().unwrap(), "b");
    }

    #[test]
    fn test_dismissals() {
        let mut model = model();
        model.finish_load(Err(ClientError::network("offline")));
        model.dismiss_error();
        assert!(model.error().is_none());

        model.begin_delete("1");
        model.finish_delete(Ok(()));
        assert!(model.flash().is_some());
        model.dismiss_flash();
        assert!(model.flash().is_none());
    }
}
