use std::sync::Arc;

use validator::Validate;

use super::{ConfirmDelete, LoadState, title_case};
use crate::{
    domain::entities::{Draft, Resource},
    interfaces::{clients::CollectionClient, notifications::Notifier},
};

/// Generic controller for the remote-CRUD sections (educations,
/// internships, projects, skills): a draft, the fetched collection, and
/// the create-or-update submit state machine keyed on `editing_id`.
pub struct CrudForm<T, C>
where
    T: Resource,
    C: CollectionClient<T>,
{
    client: Arc<C>,
    notifier: Notifier,
    confirm: Arc<dyn ConfirmDelete>,
    draft: T,
    editing_id: Option<String>,
    records: LoadState<T>,
    submitting: bool,
}

impl<T, C> CrudForm<T, C>
where
    T: Resource,
    C: CollectionClient<T>,
{
    pub fn new(client: Arc<C>, notifier: Notifier, confirm: Arc<dyn ConfirmDelete>) -> Self {
        CrudForm {
            client,
            notifier,
            confirm,
            draft: T::empty(),
            editing_id: None,
            records: LoadState::Loading,
            submitting: false,
        }
    }

    pub fn draft(&self) -> &T {
        &self.draft
    }

    /// Field-level edits go through the draft itself; setters on the
    /// entity replace one field and preserve the rest.
    pub fn draft_mut(&mut self) -> &mut T {
        &mut self.draft
    }

    pub fn records(&self) -> &LoadState<T> {
        &self.records
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.editing_id.as_deref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Fetches the collection into local state. On failure the collection
    /// becomes an empty sequence and exactly one failure notification is
    /// raised; stale data never survives a failed fetch.
    pub async fn refresh(&mut self) {
        self.records = LoadState::Loading;
        match self.client.list().await {
            Ok(records) => {
                tracing::debug!(resource = T::LABEL, count = records.len(), "collection fetched");
                self.records = LoadState::Ready(records);
            }
            Err(err) => {
                tracing::error!(resource = T::LABEL, %err, "collection fetch failed");
                self.notifier.error(format!("Failed to fetch {}", T::LABEL_PLURAL));
                self.records = LoadState::Ready(Vec::new());
            }
        }
    }

    /// Runs the submit state machine. Returns whether the mutation
    /// succeeded. While a submit is in flight further calls are rejected
    /// without issuing a second request; the form always returns to idle.
    pub async fn submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        if let Err(err) = self.draft.validate() {
            tracing::warn!(resource = T::LABEL, %err, "draft rejected");
            self.notifier.error(format!("Failed to save {}", T::LABEL));
            return false;
        }

        self.submitting = true;
        let mut payload = self.draft.clone();
        payload.prune();

        let was_editing = self.editing_id.is_some();
        let result = match self.editing_id.clone() {
            Some(id) => self.client.update(id, payload).await,
            None => self.client.create(payload).await.map(|_| ()),
        };
        // Released before any follow-up work, success or failure.
        self.submitting = false;

        match result {
            Ok(()) => {
                self.draft = T::empty();
                self.editing_id = None;
                let verb = if was_editing { "updated" } else { "saved" };
                self.notifier
                    .success(format!("{} {} successfully", title_case(T::LABEL), verb));
                self.refresh().await;
                true
            }
            Err(err) => {
                tracing::error!(resource = T::LABEL, %err, "submit failed");
                self.notifier.error(format!("Failed to save {}", T::LABEL));
                false
            }
        }
    }

    /// Copies an existing record into the draft and switches to update
    /// mode.
    pub fn start_edit(&mut self, record: &T) {
        self.draft = record.clone();
        self.editing_id = record.id().map(str::to_owned);
    }

    /// Restores the empty draft and leaves update mode without contacting
    /// the server.
    pub fn cancel_edit(&mut self) {
        self.draft = T::empty();
        self.editing_id = None;
    }

    /// Deletes a record after the injected confirmation step. On success
    /// the record is dropped from the local list; on failure the list is
    /// left unchanged.
    pub async fn delete(&mut self, id: &str) -> bool {
        if !self.confirm.confirm(T::LABEL) {
            return false;
        }

        match self.client.remove(id.to_string()).await {
            Ok(()) => {
                if let LoadState::Ready(records) = &mut self.records {
                    records.retain(|record| record.id() != Some(id));
                }
                self.notifier
                    .success(format!("{} deleted successfully", title_case(T::LABEL)));
                true
            }
            Err(err) => {
                tracing::error!(resource = T::LABEL, %err, "delete failed");
                self.notifier.error(format!("Failed to delete {}", T::LABEL));
                false
            }
        }
    }
}
