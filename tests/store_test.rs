use school_backend::dto::directory_dto::CreateUserPayload;
use school_backend::{store, AppState};
use uuid::Uuid;

// The users collection has no REST surface; it backs the client-side sign-in
// mock and is reachable through the service layer only.
#[test]
fn users_are_stored_and_found_by_username() {
    let state = AppState::new(store::new_shared());

    let created = state.user_service.create(CreateUserPayload {
        username: "aziza".to_string(),
        password: "pw".to_string(),
    });

    let by_name = state
        .user_service
        .get_by_username("aziza")
        .expect("user by username");
    assert_eq!(by_name.id, created.id);
    assert_eq!(by_name.password, "pw");

    let by_id = state.user_service.get(created.id).expect("user by id");
    assert_eq!(by_id.username, "aziza");

    assert!(state.user_service.get_by_username("nobody").is_none());
    assert!(state.user_service.get(Uuid::new_v4()).is_none());
}

#[test]
fn stores_are_isolated_per_instance() {
    let first = AppState::new(store::new_shared());
    let second = AppState::new(store::new_shared());

    first.user_service.create(CreateUserPayload {
        username: "only-here".to_string(),
        password: "pw".to_string(),
    });

    assert!(first.user_service.get_by_username("only-here").is_some());
    assert!(second.user_service.get_by_username("only-here").is_none());
}
