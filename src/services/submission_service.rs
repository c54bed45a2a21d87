use uuid::Uuid;

use crate::dto::academics_dto::{CreateSubmissionPayload, SubmissionListQuery};
use crate::models::submission::AssignmentSubmission;
use crate::store::SharedStore;
use crate::utils::time;

#[derive(Clone)]
pub struct SubmissionService {
    store: SharedStore,
}

impl SubmissionService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub fn create(&self, payload: CreateSubmissionPayload) -> AssignmentSubmission {
        let submission = AssignmentSubmission {
            id: Uuid::new_v4(),
            student_id: payload.student_id,
            assignment_id: payload.assignment_id,
            teacher_id: payload.teacher_id,
            subject: payload.subject,
            submitted_at: time::now(),
        };
        let mut store = self.store.write().expect("store lock poisoned");
        store.submissions.insert(submission)
    }

    /// Most recent first.
    pub fn list(&self, query: SubmissionListQuery) -> Vec<AssignmentSubmission> {
        let store = self.store.read().expect("store lock poisoned");
        let mut items: Vec<AssignmentSubmission> = store
            .submissions
            .all()
            .iter()
            .filter(|s| {
                query
                    .student_id
                    .as_deref()
                    .map_or(true, |v| s.student_id == v)
            })
            .filter(|s| {
                query
                    .teacher_id
                    .as_deref()
                    .map_or(true, |v| s.teacher_id == v)
            })
            .filter(|s| {
                query
                    .assignment_id
                    .as_deref()
                    .map_or(true, |v| s.assignment_id == v)
            })
            .filter(|s| query.subject.as_deref().map_or(true, |v| s.subject == v))
            .cloned()
            .collect();
        items.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        items
    }
}
