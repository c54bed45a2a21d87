use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceEntry {
    pub student_id: String,
    pub name: String,
    pub status: String,
}

/// Singular per (class, date); saves for the same pair overwrite.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: Uuid,
    pub class_id: String,
    pub class_name: String,
    pub date: NaiveDate,
    pub records: Vec<AttendanceEntry>,
}
