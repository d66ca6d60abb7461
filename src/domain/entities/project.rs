use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{CreateWire, Draft, Resource};
use crate::domain::fields;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    pub technologies: Vec<String>,
    pub github_url: String,
    pub live_url: String,
    /// Either a remote URL or a `data:<mime>;base64,...` string produced
    /// by local file selection.
    pub image: String,
}

impl Project {
    pub fn add_technology(&mut self) {
        fields::push_entry(&mut self.technologies);
    }

    /// No-op if only one technology remains.
    pub fn remove_technology(&mut self, index: usize) -> bool {
        fields::remove_entry(&mut self.technologies, index)
    }

    pub fn set_technology(&mut self, index: usize, value: impl Into<String>) -> bool {
        fields::set_entry(&mut self.technologies, index, value)
    }

    pub fn set_image(&mut self, data_url: impl Into<String>) {
        self.image = data_url.into();
    }
}

impl Draft for Project {
    fn empty() -> Self {
        Project {
            id: None,
            title: String::new(),
            description: String::new(),
            technologies: vec![String::new()],
            github_url: String::new(),
            live_url: String::new(),
            image: String::new(),
        }
    }
}

impl Resource for Project {
    const PATH: &'static str = "/api/projects";
    const LABEL: &'static str = "project";
    const LABEL_PLURAL: &'static str = "projects";
    // The API expects project creation as an array of records.
    const CREATE_WIRE: CreateWire = CreateWire::Array;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn prune(&mut self) {
        fields::prune_blanks(&mut self.technologies);
    }
}
