use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassPayload {
    #[validate(length(min = 1))]
    pub name: String,
    pub teacher_id: Option<String>,
    pub teacher_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClassPayload {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub teacher_id: Option<String>,
    pub teacher_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AssignTeacherPayload {
    #[validate(length(min = 1))]
    pub teacher_id: String,
    #[validate(length(min = 1))]
    pub teacher_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassListQuery {
    pub teacher_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubjectAssignmentPayload {
    #[validate(length(min = 1))]
    pub teacher_id: String,
    #[validate(length(min = 1))]
    pub subject: String,
    #[validate(length(min = 1))]
    pub class_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct SubjectAssignmentListQuery {
    pub teacher_id: Option<String>,
    pub class_id: Option<String>,
    pub subject: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTimetablePayload {
    #[validate(length(min = 1))]
    pub class_id: String,
    #[validate(length(min = 1))]
    pub day: String,
    #[serde(with = "crate::utils::time::hhmm")]
    pub start_time: NaiveTime,
    #[validate(length(min = 1))]
    pub teacher_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTimetablePayload {
    #[validate(length(min = 1))]
    pub class_id: Option<String>,
    pub day: Option<String>,
    #[serde(default, with = "crate::utils::time::hhmm::option")]
    pub start_time: Option<NaiveTime>,
    pub teacher_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct TimetableListQuery {
    pub class_id: Option<String>,
    pub teacher_id: Option<String>,
    pub day: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateExamSchedulePayload {
    #[validate(length(min = 1))]
    pub class_id: String,
    #[validate(length(min = 1))]
    pub subject: String,
    #[validate(length(min = 1))]
    pub exam_type: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExamSchedulePayload {
    pub class_id: Option<String>,
    pub subject: Option<String>,
    pub exam_type: Option<String>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ExamScheduleListQuery {
    pub class_id: Option<String>,
    pub exam_type: Option<String>,
}
