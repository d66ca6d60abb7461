use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Draft, Resource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Achievement {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub organization: String,
    #[validate(length(min = 1))]
    pub date: String,
    #[validate(length(min = 1))]
    pub description: String,
}

impl Draft for Achievement {
    fn empty() -> Self {
        Achievement {
            title: String::new(),
            organization: String::new(),
            date: String::new(),
            description: String::new(),
        }
    }
}

impl Resource for Achievement {
    const PATH: &'static str = "/api/achievements";
    const LABEL: &'static str = "achievement";
    const LABEL_PLURAL: &'static str = "achievements";
    const BATCH_KEY: &'static str = "achievements";
}
