use chrono::NaiveDate;
use uuid::Uuid;

use crate::dto::attendance_dto::CreateAttendancePayload;
use crate::error::{Error, Result};
use crate::models::attendance::AttendanceRecord;
use crate::store::SharedStore;

#[derive(Clone)]
pub struct AttendanceService {
    store: SharedStore,
}

impl AttendanceService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Last write wins per (class, date): a repeat save replaces the prior
    /// record and issues a fresh id.
    pub fn save(&self, payload: CreateAttendancePayload) -> AttendanceRecord {
        let record = AttendanceRecord {
            id: Uuid::new_v4(),
            class_id: payload.class_id,
            class_name: payload.class_name,
            date: payload.date,
            records: payload.records,
        };
        let mut store = self.store.write().expect("store lock poisoned");
        store.save_attendance(record)
    }

    pub fn for_class_date(&self, class_id: &str, date: NaiveDate) -> Result<AttendanceRecord> {
        let store = self.store.read().expect("store lock poisoned");
        store
            .attendance_for(class_id, date)
            .cloned()
            .ok_or_else(|| {
                Error::NotFound(format!(
                    "No attendance record for class {} on {}",
                    class_id, date
                ))
            })
    }
}
