use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::Record;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectAssignment {
    pub id: Uuid,
    pub teacher_id: String,
    pub subject: String,
    pub class_id: String,
}

impl Record for SubjectAssignment {
    fn id(&self) -> Uuid {
        self.id
    }
}
