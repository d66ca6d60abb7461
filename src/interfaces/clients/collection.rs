use async_trait::async_trait;
use mockall::automock;

use crate::{domain::entities::Resource, errors::AdminError};

/// Remote access to one resource collection. Forms depend on this trait,
/// not on the HTTP implementation.
#[automock]
#[async_trait]
pub trait CollectionClient<T: Resource>: Send + Sync {
    /// Fetches the full collection. Callers treat failure as
    /// "collection unavailable", never as a crash.
    async fn list(&self) -> Result<Vec<T>, AdminError>;

    /// Creates a record; the server assigns its identity.
    async fn create(&self, record: T) -> Result<T, AdminError>;

    /// Creates a whole batch of records in one request.
    async fn create_batch(&self, records: Vec<T>) -> Result<(), AdminError>;

    /// Full replace of the record with the given id.
    async fn update(&self, id: String, record: T) -> Result<(), AdminError>;

    async fn remove(&self, id: String) -> Result<(), AdminError>;
}
