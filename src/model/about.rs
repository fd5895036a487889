//! Biographical "about" record.

use crate::config::ResourceKind;
use crate::model::Resource;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub bio: String,
    pub experience: String,
    pub location: String,
    pub email: String,
    #[serde(default)]
    pub interests: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resource for About {
    const KIND: ResourceKind = ResourceKind::About;

    fn id(&self) -> Uuid {
        self.id
    }
}
