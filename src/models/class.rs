use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::Record;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    pub id: Uuid,
    pub name: String,
    pub teacher_id: Option<String>,
    pub teacher_name: Option<String>,
}

impl Record for Class {
    fn id(&self) -> Uuid {
        self.id
    }
}
