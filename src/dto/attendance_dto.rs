use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::attendance::AttendanceEntry;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAttendancePayload {
    #[validate(length(min = 1))]
    pub class_id: String,
    #[validate(length(min = 1))]
    pub class_name: String,
    pub date: NaiveDate,
    pub records: Vec<AttendanceEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct AttendanceQuery {
    pub class_id: Option<String>,
    pub date: Option<String>,
}
