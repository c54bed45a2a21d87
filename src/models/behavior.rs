use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::Record;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorRecord {
    pub id: Uuid,
    pub date: NaiveDate,
    pub student_id: String,
    pub description: String,
    pub points: i32,
}

impl Record for BehaviorRecord {
    fn id(&self) -> Uuid {
        self.id
    }
}
