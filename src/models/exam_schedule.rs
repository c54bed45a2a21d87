use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::Record;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamSchedule {
    pub id: Uuid,
    pub class_id: String,
    pub subject: String,
    pub exam_type: String,
    pub date: NaiveDate,
    pub created_by: String,
}

impl Record for ExamSchedule {
    fn id(&self) -> Uuid {
        self.id
    }
}
