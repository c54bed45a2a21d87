use uuid::Uuid;

use crate::dto::directory_dto::CreateAdminUserPayload;
use crate::models::admin_user::AdminUser;
use crate::store::SharedStore;

#[derive(Clone)]
pub struct AdminUserService {
    store: SharedStore,
}

impl AdminUserService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub fn create(&self, payload: CreateAdminUserPayload) -> AdminUser {
        let user = AdminUser {
            id: Uuid::new_v4(),
            name: payload.name,
            username: payload.username,
            email: payload.email,
            password: payload.password,
            role: payload.role,
            status: payload.status.unwrap_or_else(|| "active".to_string()),
        };
        let mut store = self.store.write().expect("store lock poisoned");
        store.admin_users.insert(user)
    }

    pub fn list(&self) -> Vec<AdminUser> {
        let store = self.store.read().expect("store lock poisoned");
        store.admin_users.all().to_vec()
    }
}
