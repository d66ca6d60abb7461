use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Draft, Resource};

pub const LEVEL_STEP: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillCategory {
    #[serde(rename = "Programming Languages")]
    ProgrammingLanguages,
    #[serde(rename = "Blockchain Development")]
    BlockchainDevelopment,
    #[serde(rename = "Frameworks & Tools")]
    FrameworksAndTools,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Skill {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[validate(length(min = 1))]
    pub name: String,
    pub level: i32,
    #[validate(required)]
    pub category: Option<SkillCategory>,
}

impl Skill {
    /// Clamps to [0, 100] and snaps to the slider's steps of five.
    pub fn set_level(&mut self, level: i32) {
        let clamped = level.clamp(0, 100);
        self.level = (clamped + LEVEL_STEP / 2) / LEVEL_STEP * LEVEL_STEP;
    }
}

impl Draft for Skill {
    fn empty() -> Self {
        Skill {
            id: None,
            name: String::new(),
            level: 50,
            category: None,
        }
    }
}

impl Resource for Skill {
    const PATH: &'static str = "/api/skills";
    const LABEL: &'static str = "skill";
    const LABEL_PLURAL: &'static str = "skills";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
