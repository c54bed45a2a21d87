use uuid::Uuid;

use crate::dto::academics_dto::CreateBehaviorPayload;
use crate::models::behavior::BehaviorRecord;
use crate::store::SharedStore;

#[derive(Clone)]
pub struct BehaviorService {
    store: SharedStore,
}

impl BehaviorService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub fn create(&self, payload: CreateBehaviorPayload) -> BehaviorRecord {
        let record = BehaviorRecord {
            id: Uuid::new_v4(),
            date: payload.date,
            student_id: payload.student_id,
            description: payload.description,
            points: payload.points,
        };
        let mut store = self.store.write().expect("store lock poisoned");
        store.behavior.insert(record)
    }

    /// Most recent first; insertion order breaks ties.
    pub fn list(&self) -> Vec<BehaviorRecord> {
        let store = self.store.read().expect("store lock poisoned");
        let mut items = store.behavior.all().to_vec();
        items.sort_by(|a, b| b.date.cmp(&a.date));
        items
    }
}
