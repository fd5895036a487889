//! Typed records for the eight managed resources.
//!
//! Shapes mirror the backend JSON (camelCase wire format): a server-assigned
//! id, the kind's fields, and creation/update timestamps. Relationships are
//! plain id fields; the client enforces no referential integrity.

mod about;
mod blog;
mod education;
mod project;
mod skill;

pub use about::About;
pub use blog::Blog;
pub use education::Education;
pub use project::{Project, ProjectCredential, ProjectFeature};
pub use skill::{Skill, SkillCategory, SkillDomain, SKILL_DOMAINS};

use crate::config::ResourceKind;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

/// A record kind the generic page machinery can manage.
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const KIND: ResourceKind;

    fn id(&self) -> Uuid;
}
