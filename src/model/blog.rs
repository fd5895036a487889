//! Blog post record.

use crate::config::ResourceKind;
use crate::model::Resource;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: Uuid,
    pub title: String,
    pub image: String,
    pub excerpt: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resource for Blog {
    const KIND: ResourceKind = ResourceKind::Blog;

    fn id(&self) -> Uuid {
        self.id
    }
}
