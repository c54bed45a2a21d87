pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
pub mod utils;

use crate::services::{
    admin_user_service::AdminUserService, attendance_service::AttendanceService,
    behavior_service::BehaviorService, class_service::ClassService,
    exam_schedule_service::ExamScheduleService, result_service::ResultService,
    school_service::SchoolService, subject_assignment_service::SubjectAssignmentService,
    submission_service::SubmissionService, timetable_service::TimetableService,
    user_service::UserService,
};
use crate::store::SharedStore;

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub school_service: SchoolService,
    pub attendance_service: AttendanceService,
    pub admin_user_service: AdminUserService,
    pub user_service: UserService,
    pub behavior_service: BehaviorService,
    pub result_service: ResultService,
    pub class_service: ClassService,
    pub subject_assignment_service: SubjectAssignmentService,
    pub timetable_service: TimetableService,
    pub exam_schedule_service: ExamScheduleService,
    pub submission_service: SubmissionService,
}

impl AppState {
    pub fn new(store: SharedStore) -> Self {
        let school_service = SchoolService::new(store.clone());
        let attendance_service = AttendanceService::new(store.clone());
        let admin_user_service = AdminUserService::new(store.clone());
        let user_service = UserService::new(store.clone());
        let behavior_service = BehaviorService::new(store.clone());
        let result_service = ResultService::new(store.clone());
        let class_service = ClassService::new(store.clone());
        let subject_assignment_service = SubjectAssignmentService::new(store.clone());
        let timetable_service = TimetableService::new(store.clone());
        let exam_schedule_service = ExamScheduleService::new(store.clone());
        let submission_service = SubmissionService::new(store.clone());

        Self {
            store,
            school_service,
            attendance_service,
            admin_user_service,
            user_service,
            behavior_service,
            result_service,
            class_service,
            subject_assignment_service,
            timetable_service,
            exam_schedule_service,
            submission_service,
        }
    }
}
