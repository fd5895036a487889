//! Education record, referencing an About record by id.

use crate::config::ResourceKind;
use crate::model::Resource;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: Uuid,
    pub degree: String,
    pub institution: String,
    pub year: String,
    /// Owning About record. Deleting the About does not cascade here; the
    /// reference is left dangling.
    pub about_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resource for Education {
    const KIND: ResourceKind = ResourceKind::Education;

    fn id(&self) -> Uuid {
        self.id
    }
}
