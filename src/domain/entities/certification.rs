use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Draft, Resource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub issuer: String,
    #[validate(length(min = 1))]
    pub date: String,
    pub credential_url: String,
}

impl Draft for Certification {
    fn empty() -> Self {
        Certification {
            title: String::new(),
            issuer: String::new(),
            date: String::new(),
            credential_url: String::new(),
        }
    }
}

impl Resource for Certification {
    const PATH: &'static str = "/api/certifications";
    const LABEL: &'static str = "certification";
    const LABEL_PLURAL: &'static str = "certifications";
}
