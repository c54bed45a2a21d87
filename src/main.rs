use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use school_backend::{
    config::{get_config, init_config},
    routes, store, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let store = store::new_shared();
    let app_state = AppState::new(store);

    let base_routes = Router::new().route("/health", get(routes::health::health));

    let api = Router::new()
        .route(
            "/api/schools",
            get(routes::schools::list_schools).post(routes::schools::create_school),
        )
        .route(
            "/api/attendance",
            get(routes::attendance::get_attendance).post(routes::attendance::save_attendance),
        )
        .route(
            "/api/admin/users",
            get(routes::admin_users::list_admin_users)
                .post(routes::admin_users::create_admin_user),
        )
        .route(
            "/api/behavior",
            get(routes::behavior::list_behavior_records)
                .post(routes::behavior::create_behavior_record),
        )
        .route(
            "/api/student-results",
            get(routes::results::list_results).post(routes::results::create_result),
        )
        .route(
            "/api/classes",
            get(routes::classes::list_classes).post(routes::classes::create_class),
        )
        .route(
            "/api/classes/:id",
            get(routes::classes::get_class)
                .patch(routes::classes::update_class)
                .delete(routes::classes::delete_class),
        )
        .route(
            "/api/classes/:id/assign-teacher",
            post(routes::classes::assign_teacher),
        )
        .route(
            "/api/subject-assignments",
            get(routes::subject_assignments::list_subject_assignments)
                .post(routes::subject_assignments::create_subject_assignment),
        )
        .route(
            "/api/subject-assignments/:id",
            axum::routing::delete(routes::subject_assignments::delete_subject_assignment),
        )
        .route(
            "/api/timetable",
            get(routes::timetable::list_timetable).post(routes::timetable::create_timetable_entry),
        )
        .route(
            "/api/timetable/:id",
            axum::routing::patch(routes::timetable::update_timetable_entry)
                .delete(routes::timetable::delete_timetable_entry),
        )
        .route(
            "/api/exam-schedules",
            get(routes::exam_schedules::list_exam_schedules)
                .post(routes::exam_schedules::create_exam_schedule),
        )
        .route(
            "/api/exam-schedules/:id",
            axum::routing::patch(routes::exam_schedules::update_exam_schedule)
                .delete(routes::exam_schedules::delete_exam_schedule),
        )
        .route(
            "/api/assignment-submissions",
            get(routes::submissions::list_submissions)
                .post(routes::submissions::create_submission),
        );

    let app = base_routes
        .merge(api)
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(2 * 1024 * 1024));

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
