use serde::{Serialize, de::DeserializeOwned};
use validator::Validate;

pub mod achievement;
pub mod book;
pub mod certification;
pub mod contact;
pub mod education;
pub mod hobby;
pub mod internship;
pub mod project;
pub mod skill;

/// A locally held, not-yet-persisted record the user is editing.
pub trait Draft: Clone + Send + Sync {
    /// The shape a fresh form starts with and resets to after a
    /// successful submit.
    fn empty() -> Self;
}

/// Shape of the create request body for a resource. The portfolio API is
/// not uniform: most resources take the record itself, projects take an
/// array of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateWire {
    Record,
    Array,
}

/// A content section persisted through the remote portfolio API.
pub trait Resource: Draft + Validate + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Resource path under the API base URL, e.g. `/api/skills`.
    const PATH: &'static str;
    /// Singular label used in notifications ("internship").
    const LABEL: &'static str;
    /// Plural label used in notifications ("internships").
    const LABEL_PLURAL: &'static str;
    /// How the create request body is shaped.
    const CREATE_WIRE: CreateWire = CreateWire::Record;
    /// Key wrapping the records of a batch create request.
    const BATCH_KEY: &'static str = "items";

    /// Server-assigned identity, if this record has been persisted.
    fn id(&self) -> Option<&str> {
        None
    }

    /// Drops blank entries from list-valued sub-fields before the record
    /// is sent over the wire.
    fn prune(&mut self) {}
}
