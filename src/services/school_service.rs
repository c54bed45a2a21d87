use uuid::Uuid;

use crate::dto::directory_dto::CreateSchoolPayload;
use crate::models::school::School;
use crate::store::SharedStore;

#[derive(Clone)]
pub struct SchoolService {
    store: SharedStore,
}

impl SchoolService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub fn create(&self, payload: CreateSchoolPayload) -> School {
        let school = School {
            id: Uuid::new_v4(),
            name: payload.name,
            region: payload.region,
            students: payload.students,
            status: payload.status.unwrap_or_else(|| "active".to_string()),
        };
        let mut store = self.store.write().expect("store lock poisoned");
        store.schools.insert(school)
    }

    pub fn list(&self) -> Vec<School> {
        let store = self.store.read().expect("store lock poisoned");
        store.schools.all().to_vec()
    }
}
