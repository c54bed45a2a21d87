use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::Record;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentSubmission {
    pub id: Uuid,
    pub student_id: String,
    pub assignment_id: String,
    pub teacher_id: String,
    pub subject: String,
    pub submitted_at: DateTime<Utc>,
}

impl Record for AssignmentSubmission {
    fn id(&self) -> Uuid {
        self.id
    }
}
