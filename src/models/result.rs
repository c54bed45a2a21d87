use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::Record;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentResult {
    pub id: Uuid,
    pub student_id: String,
    pub subject: String,
    pub assessment_type: String,
    pub score: f64,
    pub max_score: f64,
    pub date: NaiveDate,
    /// Derived once at creation; never recomputed.
    pub grade: String,
}

impl Record for StudentResult {
    fn id(&self) -> Uuid {
        self.id
    }
}
