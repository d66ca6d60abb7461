use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Draft, Resource};
use crate::domain::fields;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Internship {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[validate(length(min = 1))]
    pub company: String,
    #[validate(length(min = 1))]
    pub role: String,
    #[validate(length(min = 1))]
    pub period: String,
    pub responsibilities: Vec<String>,
}

impl Internship {
    pub fn add_responsibility(&mut self) {
        fields::push_entry(&mut self.responsibilities);
    }

    /// No-op if only one responsibility remains.
    pub fn remove_responsibility(&mut self, index: usize) -> bool {
        fields::remove_entry(&mut self.responsibilities, index)
    }

    pub fn set_responsibility(&mut self, index: usize, value: impl Into<String>) -> bool {
        fields::set_entry(&mut self.responsibilities, index, value)
    }
}

impl Draft for Internship {
    fn empty() -> Self {
        Internship {
            id: None,
            company: String::new(),
            role: String::new(),
            period: String::new(),
            responsibilities: vec![String::new()],
        }
    }
}

impl Resource for Internship {
    const PATH: &'static str = "/api/internships";
    const LABEL: &'static str = "internship";
    const LABEL_PLURAL: &'static str = "internships";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn prune(&mut self) {
        fields::prune_blanks(&mut self.responsibilities);
    }
}
