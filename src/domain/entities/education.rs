use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Draft, Resource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Education {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[validate(length(min = 1))]
    pub institution: String,
    #[validate(length(min = 1))]
    pub degree: String,
    #[validate(length(min = 1))]
    pub period: String,
    pub score: String,
}

impl Draft for Education {
    fn empty() -> Self {
        Education {
            id: None,
            institution: String::new(),
            degree: String::new(),
            period: String::new(),
            score: String::new(),
        }
    }
}

impl Resource for Education {
    const PATH: &'static str = "/api/educations";
    const LABEL: &'static str = "education entry";
    const LABEL_PLURAL: &'static str = "education entries";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
