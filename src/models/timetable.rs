use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::Record;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableEntry {
    pub id: Uuid,
    pub class_id: String,
    pub day: String,
    #[serde(with = "crate::utils::time::hhmm")]
    pub start_time: NaiveTime,
    pub teacher_id: String,
}

impl Record for TimetableEntry {
    fn id(&self) -> Uuid {
        self.id
    }
}
