use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::{
    admin_user::AdminUser, attendance::AttendanceRecord, behavior::BehaviorRecord, class::Class,
    exam_schedule::ExamSchedule, school::School, subject_assignment::SubjectAssignment,
    submission::AssignmentSubmission, result::StudentResult, timetable::TimetableEntry,
    user::User,
};

/// A stored record addressable by its generated identifier.
pub trait Record {
    fn id(&self) -> Uuid;
}

/// One insertion-ordered collection per entity type. Rows keep the order they
/// were inserted in; lookups are linear, which matches the collection sizes
/// this store is meant for.
#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: Vec<T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<T: Record + Clone> Table<T> {
    pub fn insert(&mut self, row: T) -> T {
        self.rows.push(row.clone());
        row
    }

    pub fn get(&self, id: Uuid) -> Option<&T> {
        self.rows.iter().find(|r| r.id() == id)
    }

    pub fn all(&self) -> &[T] {
        &self.rows
    }

    /// Shallow-merges via the supplied closure and returns the merged record.
    pub fn update(&mut self, id: Uuid, apply: impl FnOnce(&mut T)) -> Result<T> {
        let row = self
            .rows
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| Error::NotFound(format!("Record {} not found", id)))?;
        apply(row);
        Ok(row.clone())
    }

    pub fn remove(&mut self, id: Uuid) -> Result<T> {
        let pos = self
            .rows
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| Error::NotFound(format!("Record {} not found", id)))?;
        Ok(self.rows.remove(pos))
    }
}

/// Natural key for attendance: at most one record per class per calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttendanceKey {
    pub class_id: String,
    pub date: NaiveDate,
}

/// The whole in-memory data set. Nothing survives a process restart.
#[derive(Debug, Default)]
pub struct Store {
    pub users: Table<User>,
    pub schools: Table<School>,
    pub attendance: HashMap<AttendanceKey, AttendanceRecord>,
    pub admin_users: Table<AdminUser>,
    pub behavior: Table<BehaviorRecord>,
    pub results: Table<StudentResult>,
    pub classes: Table<Class>,
    pub subject_assignments: Table<SubjectAssignment>,
    pub timetable: Table<TimetableEntry>,
    pub exam_schedules: Table<ExamSchedule>,
    pub submissions: Table<AssignmentSubmission>,
}

impl Store {
    /// Saving again for the same (class, date) replaces the prior record,
    /// fresh id included. The old id becomes unretrievable.
    pub fn save_attendance(&mut self, record: AttendanceRecord) -> AttendanceRecord {
        let key = AttendanceKey {
            class_id: record.class_id.clone(),
            date: record.date,
        };
        self.attendance.insert(key, record.clone());
        record
    }

    pub fn attendance_for(&self, class_id: &str, date: NaiveDate) -> Option<&AttendanceRecord> {
        self.attendance.get(&AttendanceKey {
            class_id: class_id.to_string(),
            date,
        })
    }

    pub fn user_by_username(&self, username: &str) -> Option<&User> {
        self.users.all().iter().find(|u| u.username == username)
    }
}

pub type SharedStore = Arc<RwLock<Store>>;

pub fn new_shared() -> SharedStore {
    Arc::new(RwLock::new(Store::default()))
}
