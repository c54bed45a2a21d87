use uuid::Uuid;

use crate::dto::directory_dto::CreateUserPayload;
use crate::models::user::User;
use crate::store::SharedStore;

// No REST surface exposes users; the collection exists for the client-side
// sign-in mock and is reachable through this service only.
#[derive(Clone)]
pub struct UserService {
    store: SharedStore,
}

impl UserService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub fn create(&self, payload: CreateUserPayload) -> User {
        let user = User {
            id: Uuid::new_v4(),
            username: payload.username,
            password: payload.password,
        };
        let mut store = self.store.write().expect("store lock poisoned");
        store.users.insert(user)
    }

    pub fn get(&self, id: Uuid) -> Option<User> {
        let store = self.store.read().expect("store lock poisoned");
        store.users.get(id).cloned()
    }

    pub fn get_by_username(&self, username: &str) -> Option<User> {
        let store = self.store.read().expect("store lock poisoned");
        store.user_by_username(username).cloned()
    }
}
