pub mod admin_user_service;
pub mod attendance_service;
pub mod behavior_service;
pub mod class_service;
pub mod exam_schedule_service;
pub mod grading_service;
pub mod result_service;
pub mod school_service;
pub mod subject_assignment_service;
pub mod submission_service;
pub mod timetable_service;
pub mod user_service;
