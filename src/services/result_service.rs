use uuid::Uuid;

use crate::dto::academics_dto::{CreateResultPayload, ResultListQuery};
use crate::models::result::StudentResult;
use crate::services::grading_service::GradingService;
use crate::store::SharedStore;

#[derive(Clone)]
pub struct ResultService {
    store: SharedStore,
}

impl ResultService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub fn create(&self, payload: CreateResultPayload) -> StudentResult {
        let grade = GradingService::letter_grade(payload.score, payload.max_score);
        let result = StudentResult {
            id: Uuid::new_v4(),
            student_id: payload.student_id,
            subject: payload.subject,
            assessment_type: payload.assessment_type,
            score: payload.score,
            max_score: payload.max_score,
            date: payload.date,
            grade: grade.to_string(),
        };
        let mut store = self.store.write().expect("store lock poisoned");
        store.results.insert(result)
    }

    /// Exact-match filters, ANDed; absent fields are ignored. Most recent
    /// first; insertion order breaks ties.
    pub fn list(&self, query: ResultListQuery) -> Vec<StudentResult> {
        let store = self.store.read().expect("store lock poisoned");
        let mut items: Vec<StudentResult> = store
            .results
            .all()
            .iter()
            .filter(|r| {
                query
                    .student_id
                    .as_deref()
                    .map_or(true, |v| r.student_id == v)
            })
            .filter(|r| query.subject.as_deref().map_or(true, |v| r.subject == v))
            .filter(|r| {
                query
                    .assessment_type
                    .as_deref()
                    .map_or(true, |v| r.assessment_type == v)
            })
            .cloned()
            .collect();
        items.sort_by(|a, b| b.date.cmp(&a.date));
        items
    }
}
