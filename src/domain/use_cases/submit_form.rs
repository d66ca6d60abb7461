use std::sync::Arc;

use validator::Validate;

use super::title_case;
use crate::{
    domain::entities::{Draft, Resource},
    interfaces::{clients::CollectionClient, notifications::Notifier},
};

/// Controller for the create-only sections (certifications): a single
/// draft submitted to the API and reset on success, with no list view.
pub struct SubmitForm<T, C>
where
    T: Resource,
    C: CollectionClient<T>,
{
    client: Arc<C>,
    notifier: Notifier,
    draft: T,
    submitting: bool,
}

impl<T, C> SubmitForm<T, C>
where
    T: Resource,
    C: CollectionClient<T>,
{
    pub fn new(client: Arc<C>, notifier: Notifier) -> Self {
        SubmitForm {
            client,
            notifier,
            draft: T::empty(),
            submitting: false,
        }
    }

    pub fn draft(&self) -> &T {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut T {
        &mut self.draft
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Creates the draft remotely; resets it on success, retains it on
    /// failure. Rejected while a submit is already in flight.
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
        let result = self.client.create(payload).await;
        self.submitting = false;

        match result {
            Ok(_) => {
                self.draft = T::empty();
                self.notifier
                    .success(format!("{} saved successfully", title_case(T::LABEL)));
                true
            }
            Err(err) => {
                tracing::error!(resource = T::LABEL, %err, "submit failed");
                self.notifier.error(format!("Failed to save {}", T::LABEL));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::entities::certification::Certification,
        errors::AdminError,
        interfaces::clients::MockCollectionClient,
    };

    fn rust_cert() -> Certification {
        Certification {
            title: "Rust Certified".into(),
            issuer: "Ferris Institute".into(),
            date: "2024-03".into(),
            credential_url: "https://example.com/cert/1".into(),
        }
    }

    #[tokio::test]
    async fn successful_submit_resets_the_draft() {
        let mut client = MockCollectionClient::new();
        client
            .expect_create()
            .times(1)
            .returning(|record| Ok(record));

        let notifier = Notifier::new();
        let mut form = SubmitForm::new(Arc::new(client), notifier.clone());
        *form.draft_mut() = rust_cert();

        assert!(form.submit().await);
        assert_eq!(form.draft(), &Certification::empty());
        assert_eq!(notifier.len(), 1);
    }

    #[tokio::test]
    async fn failed_submit_keeps_the_draft() {
        let mut client = MockCollectionClient::new();
        client
            .expect_create()
            .times(1)
            .returning(|_| Err(AdminError::Network("unreachable".into())));

        let notifier = Notifier::new();
        let mut form = SubmitForm::new(Arc::new(client), notifier.clone());
        *form.draft_mut() = rust_cert();

        assert!(!form.submit().await);
        assert_eq!(form.draft(), &rust_cert());
        assert!(!form.is_submitting());
    }
}
