pub mod admin_users;
pub mod attendance;
pub mod behavior;
pub mod classes;
pub mod exam_schedules;
pub mod health;
pub mod results;
pub mod schools;
pub mod subject_assignments;
pub mod submissions;
pub mod timetable;
