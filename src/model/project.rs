//! Project record and its nested features and credentials.

use crate::config::ResourceKind;
use crate::model::Resource;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub image: String,
    pub overview: String,
    pub frontend_tech: Vec<String>,
    pub backend_tech: Vec<String>,
    pub database_tech: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_demo_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_repo_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_repo_link: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resource for Project {
    const KIND: ResourceKind = ResourceKind::Project;

    fn id(&self) -> Uuid {
        self.id
    }
}

/// Highlighted feature of a project, shown with an icon and gradient.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFeature {
    pub id: Uuid,
    pub icon: String,
    pub label: String,
    pub gradient: String,
    pub project_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resource for ProjectFeature {
    const KIND: ResourceKind = ResourceKind::ProjectFeature;

    fn id(&self) -> Uuid {
        self.id
    }
}

/// Demo login published alongside a project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCredential {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub project_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resource for ProjectCredential {
    const KIND: ResourceKind = ResourceKind::ProjectCredential;

    fn id(&self) -> Uuid {
        self.id
    }
}
