use std::sync::Arc;

use validator::Validate;

use super::title_case;
use crate::{
    domain::entities::{Draft, Resource},
    interfaces::{clients::CollectionClient, notifications::Notifier},
};

/// Controller for the batch-submitted sections (achievements): a local
/// list of drafts posted wholesale in one request. The list keeps at
/// least one entry and is retained after a successful submit.
pub struct BatchForm<T, C>
where
    T: Resource,
    C: CollectionClient<T>,
{
    client: Arc<C>,
    notifier: Notifier,
    entries: Vec<T>,
    submitting: bool,
}

impl<T, C> BatchForm<T, C>
where
    T: Resource,
    C: CollectionClient<T>,
{
    pub fn new(client: Arc<C>, notifier: Notifier) -> Self {
        BatchForm {
            client,
            notifier,
            entries: vec![T::empty()],
            submitting: false,
        }
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn entry_mut(&mut self, index: usize) -> Option<&mut T> {
        self.entries.get_mut(index)
    }

    pub fn add_entry(&mut self) {
        self.entries.push(T::empty());
    }

    /// No-op if only one entry remains.
    pub fn remove_entry(&mut self, index: usize) -> bool {
        if self.entries.len() <= 1 || index >= self.entries.len() {
            return false;
        }
        self.entries.remove(index);
        true
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Posts the whole list as one batch request.
    pub async fn submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        if let Some(err) = self.entries.iter().find_map(|entry| entry.validate().err()) {
            tracing::warn!(resource = T::LABEL, %err, "batch rejected");
            self.notifier
                .error(format!("Failed to save {}", T::LABEL_PLURAL));
            return false;
        }

        self.submitting = true;
        let payload: Vec<T> = self
            .entries
            .iter()
            .cloned()
            .map(|mut entry| {
                entry.prune();
                entry
            })
            .collect();
        let result = self.client.create_batch(payload).await;
        self.submitting = false;

        match result {
            Ok(()) => {
                self.notifier
                    .success(format!("{} saved successfully", title_case(T::LABEL_PLURAL)));
                true
            }
            Err(err) => {
                tracing::error!(resource = T::LABEL, %err, "batch submit failed");
                self.notifier
                    .error(format!("Failed to save {}", T::LABEL_PLURAL));
                false
            }
        }
    }
}
