use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

pub const USER_AGENT: &str = concat!("portfolio-admin/", env!("CARGO_PKG_VERSION"));
