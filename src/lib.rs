use std::sync::Arc;

mod domain;
mod infrastructure;
mod interfaces;
pub mod constants;
pub mod errors;
pub mod settings;

pub use domain::{entities, fields, use_cases};
pub use infrastructure::files;
pub use interfaces::{clients, notifications};

use clients::{HttpClient, build_http_client};
use entities::{
    achievement::Achievement, book::Book, certification::Certification, contact::ContactInfo,
    education::Education, hobby::Hobby, internship::Internship, project::Project, skill::Skill,
};
use errors::AdminError;
use notifications::Notifier;
use settings::AppConfig;
use use_cases::{
    AlwaysConfirm, BatchForm, ConfirmDelete, CrudForm, LocalForm, LocalListForm, SubmitForm,
};

/// A remote-CRUD form wired to the HTTP client.
pub type RemoteForm<T> = CrudForm<T, HttpClient<T>>;

/// One form controller per content section, all sharing a notification
/// queue and one HTTP connection pool. Sections are independent: calls on
/// different forms may be outstanding simultaneously.
pub struct AdminState {
    pub notifier: Notifier,
    pub achievements: BatchForm<Achievement, HttpClient<Achievement>>,
    pub certifications: SubmitForm<Certification, HttpClient<Certification>>,
    pub educations: RemoteForm<Education>,
    pub internships: RemoteForm<Internship>,
    pub projects: RemoteForm<Project>,
    pub skills: RemoteForm<Skill>,
    pub contact: LocalForm<ContactInfo>,
    pub hobbies: LocalListForm<Hobby>,
    pub books: LocalListForm<Book>,
}

impl AdminState {
    pub fn new(config: &AppConfig) -> Result<Self, AdminError> {
        Self::with_confirmation(config, Arc::new(AlwaysConfirm))
    }

    pub fn with_confirmation(
        config: &AppConfig,
        confirm: Arc<dyn ConfirmDelete>,
    ) -> Result<Self, AdminError> {
        let notifier = Notifier::new();
        let http = build_http_client(config)?;
        let base_url = config.base_url().to_string();

        fn shared<T: entities::Resource>(
            http: &reqwest::Client,
            base_url: &str,
        ) -> Arc<HttpClient<T>> {
            Arc::new(HttpClient::with_client(http.clone(), base_url.to_string()))
        }

        Ok(AdminState {
            achievements: BatchForm::new(shared(&http, &base_url), notifier.clone()),
            certifications: SubmitForm::new(shared(&http, &base_url), notifier.clone()),
            educations: CrudForm::new(shared(&http, &base_url), notifier.clone(), confirm.clone()),
            internships: CrudForm::new(shared(&http, &base_url), notifier.clone(), confirm.clone()),
            projects: CrudForm::new(shared(&http, &base_url), notifier.clone(), confirm.clone()),
            skills: CrudForm::new(shared(&http, &base_url), notifier.clone(), confirm),
            contact: LocalForm::new(notifier.clone(), ContactInfo::LABEL_PLURAL),
            hobbies: LocalListForm::new(notifier.clone(), Hobby::LABEL_PLURAL),
            books: LocalListForm::new(notifier.clone(), Book::LABEL_PLURAL),
            notifier,
        })
    }

    /// Initial fetch of every remote-listing section, concurrently. The
    /// sections share no state, so ordering between them is irrelevant.
    pub async fn refresh_all(&mut self) {
        let AdminState {
            educations,
            internships,
            projects,
            skills,
            ..
        } = self;

        futures::join!(
            educations.refresh(),
            internships.refresh(),
            projects.refresh(),
            skills.refresh(),
        );
    }
}
