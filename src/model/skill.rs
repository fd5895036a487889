//! Skill and skill category records.

use crate::config::ResourceKind;
use crate::model::Resource;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Wire values of the skill `category` field, used by the form's choice
/// options.
pub const SKILL_DOMAINS: &[&str] = &["FRONTEND", "BACKEND", "DATABASE", "TOOLS"];

/// Fixed classification of a skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkillDomain {
    Frontend,
    Backend,
    Database,
    Tools,
}

impl SkillDomain {
    pub fn as_str(self) -> &'static str {
        match self {
            SkillDomain::Frontend => "FRONTEND",
            SkillDomain::Backend => "BACKEND",
            SkillDomain::Database => "DATABASE",
            SkillDomain::Tools => "TOOLS",
        }
    }
}

impl fmt::Display for SkillDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    pub category: SkillDomain,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resource for Skill {
    const KIND: ResourceKind = ResourceKind::Skill;

    fn id(&self) -> Uuid {
        self.id
    }
}

/// Named grouping of skills shown on the portfolio site. Distinct from
/// `SkillDomain`, which is the fixed per-skill classification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategory {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resource for SkillCategory {
    const KIND: ResourceKind = ResourceKind::SkillCategory;

    fn id(&self) -> Uuid {
        self.id
    }
}
