use uuid::Uuid;

use crate::dto::scheduling_dto::{
    CreateExamSchedulePayload, ExamScheduleListQuery, UpdateExamSchedulePayload,
};
use crate::error::Result;
use crate::models::exam_schedule::ExamSchedule;
use crate::store::SharedStore;

#[derive(Clone)]
pub struct ExamScheduleService {
    store: SharedStore,
}

impl ExamScheduleService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub fn create(&self, payload: CreateExamSchedulePayload) -> ExamSchedule {
        let schedule = ExamSchedule {
            id: Uuid::new_v4(),
            class_id: payload.class_id,
            subject: payload.subject,
            exam_type: payload.exam_type,
            date: payload.date,
            // Fixed author string regardless of caller, as in the source.
            created_by: "Director".to_string(),
        };
        let mut store = self.store.write().expect("store lock poisoned");
        store.exam_schedules.insert(schedule)
    }

    /// Soonest first.
    pub fn list(&self, query: ExamScheduleListQuery) -> Vec<ExamSchedule> {
        let store = self.store.read().expect("store lock poisoned");
        let mut items: Vec<ExamSchedule> = store
            .exam_schedules
            .all()
            .iter()
            .filter(|s| query.class_id.as_deref().map_or(true, |v| s.class_id == v))
            .filter(|s| {
                query
                    .exam_type
                    .as_deref()
                    .map_or(true, |v| s.exam_type == v)
            })
            .cloned()
            .collect();
        items.sort_by(|a, b| a.date.cmp(&b.date));
        items
    }

    pub fn update(&self, id: Uuid, payload: UpdateExamSchedulePayload) -> Result<ExamSchedule> {
        let mut store = self.store.write().expect("store lock poisoned");
        store.exam_schedules.update(id, |schedule| {
            if let Some(class_id) = payload.class_id {
                schedule.class_id = class_id;
            }
            if let Some(subject) = payload.subject {
                schedule.subject = subject;
            }
            if let Some(exam_type) = payload.exam_type {
                schedule.exam_type = exam_type;
            }
            if let Some(date) = payload.date {
                schedule.date = date;
            }
        })
    }

    pub fn delete(&self, id: Uuid) -> Result<()> {
        let mut store = self.store.write().expect("store lock poisoned");
        store.exam_schedules.remove(id)?;
        Ok(())
    }
}
