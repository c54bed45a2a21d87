use uuid::Uuid;

use crate::dto::scheduling_dto::{CreateSubjectAssignmentPayload, SubjectAssignmentListQuery};
use crate::error::Result;
use crate::models::subject_assignment::SubjectAssignment;
use crate::store::SharedStore;

#[derive(Clone)]
pub struct SubjectAssignmentService {
    store: SharedStore,
}

impl SubjectAssignmentService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub fn create(&self, payload: CreateSubjectAssignmentPayload) -> SubjectAssignment {
        let assignment = SubjectAssignment {
            id: Uuid::new_v4(),
            teacher_id: payload.teacher_id,
            subject: payload.subject,
            class_id: payload.class_id,
        };
        let mut store = self.store.write().expect("store lock poisoned");
        store.subject_assignments.insert(assignment)
    }

    /// Insertion order; no defined sort for this collection.
    pub fn list(&self, query: SubjectAssignmentListQuery) -> Vec<SubjectAssignment> {
        let store = self.store.read().expect("store lock poisoned");
        store
            .subject_assignments
            .all()
            .iter()
            .filter(|a| {
                query
                    .teacher_id
                    .as_deref()
                    .map_or(true, |v| a.teacher_id == v)
            })
            .filter(|a| query.class_id.as_deref().map_or(true, |v| a.class_id == v))
            .filter(|a| query.subject.as_deref().map_or(true, |v| a.subject == v))
            .cloned()
            .collect()
    }

    pub fn delete(&self, id: Uuid) -> Result<()> {
        let mut store = self.store.write().expect("store lock poisoned");
        store.subject_assignments.remove(id)?;
        Ok(())
    }
}
