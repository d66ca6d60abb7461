pub mod clients;
pub mod notifications;
