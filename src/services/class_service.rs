use uuid::Uuid;

use crate::dto::scheduling_dto::{ClassListQuery, CreateClassPayload, UpdateClassPayload};
use crate::error::Result;
use crate::models::class::Class;
use crate::store::SharedStore;

#[derive(Clone)]
pub struct ClassService {
    store: SharedStore,
}

impl ClassService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub fn create(&self, payload: CreateClassPayload) -> Class {
        let class = Class {
            id: Uuid::new_v4(),
            name: payload.name,
            teacher_id: payload.teacher_id,
            teacher_name: payload.teacher_name,
        };
        let mut store = self.store.write().expect("store lock poisoned");
        store.classes.insert(class)
    }

    pub fn list(&self, query: ClassListQuery) -> Vec<Class> {
        let store = self.store.read().expect("store lock poisoned");
        let mut items: Vec<Class> = store
            .classes
            .all()
            .iter()
            .filter(|c| {
                query
                    .teacher_id
                    .as_deref()
                    .map_or(true, |v| c.teacher_id.as_deref() == Some(v))
            })
            .cloned()
            .collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        items
    }

    pub fn get_by_id(&self, id: Uuid) -> Result<Class> {
        let store = self.store.read().expect("store lock poisoned");
        store
            .classes
            .get(id)
            .cloned()
            .ok_or_else(|| crate::error::Error::NotFound(format!("Class {} not found", id)))
    }

    pub fn update(&self, id: Uuid, payload: UpdateClassPayload) -> Result<Class> {
        let mut store = self.store.write().expect("store lock poisoned");
        store.classes.update(id, |class| {
            if let Some(name) = payload.name {
                class.name = name;
            }
            if let Some(teacher_id) = payload.teacher_id {
                class.teacher_id = Some(teacher_id);
            }
            if let Some(teacher_name) = payload.teacher_name {
                class.teacher_name = Some(teacher_name);
            }
        })
    }

    pub fn assign_teacher(&self, id: Uuid, teacher_id: String, teacher_name: String) -> Result<Class> {
        let mut store = self.store.write().expect("store lock poisoned");
        store.classes.update(id, |class| {
            class.teacher_id = Some(teacher_id);
            class.teacher_name = Some(teacher_name);
        })
    }

    pub fn delete(&self, id: Uuid) -> Result<()> {
        let mut store = self.store.write().expect("store lock poisoned");
        store.classes.remove(id)?;
        Ok(())
    }
}
