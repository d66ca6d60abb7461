use serde::{Deserialize, Serialize};

use super::Draft;

/// Contact details edited locally; this section has no remote persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub address: String,
    pub website: String,
    pub linkedin: String,
    pub github: String,
    pub message: String,
}

impl Draft for ContactInfo {
    fn empty() -> Self {
        ContactInfo {
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            website: String::new(),
            linkedin: String::new(),
            github: String::new(),
            message: String::new(),
        }
    }
}

impl ContactInfo {
    pub const LABEL_PLURAL: &'static str = "contact details";
}
