pub mod collection;
pub mod http;

pub use collection::{CollectionClient, MockCollectionClient};
pub use http::HttpClient;
pub use http::build_http_client;
