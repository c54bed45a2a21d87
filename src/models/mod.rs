pub mod admin_user;
pub mod attendance;
pub mod behavior;
pub mod class;
pub mod exam_schedule;
pub mod result;
pub mod school;
pub mod subject_assignment;
pub mod submission;
pub mod timetable;
pub mod user;
