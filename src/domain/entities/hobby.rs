use serde::{Deserialize, Serialize};

use super::Draft;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hobby {
    pub name: String,
    pub description: String,
    pub level: String,
}

impl Draft for Hobby {
    fn empty() -> Self {
        Hobby {
            name: String::new(),
            description: String::new(),
            level: String::new(),
        }
    }
}

impl Hobby {
    pub const LABEL_PLURAL: &'static str = "hobbies";
}
