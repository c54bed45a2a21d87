use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::Record;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct School {
    pub id: Uuid,
    pub name: String,
    pub region: String,
    pub students: i64,
    pub status: String,
}

impl Record for School {
    fn id(&self) -> Uuid {
        self.id
    }
}
