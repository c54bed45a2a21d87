use uuid::Uuid;

use crate::dto::scheduling_dto::{CreateTimetablePayload, TimetableListQuery, UpdateTimetablePayload};
use crate::error::{Error, Result};
use crate::models::timetable::TimetableEntry;
use crate::store::SharedStore;

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

fn day_rank(day: &str) -> Option<usize> {
    WEEKDAYS.iter().position(|d| *d == day)
}

#[derive(Clone)]
pub struct TimetableService {
    store: SharedStore,
}

impl TimetableService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub fn create(&self, payload: CreateTimetablePayload) -> Result<TimetableEntry> {
        check_weekday(&payload.day)?;
        let entry = TimetableEntry {
            id: Uuid::new_v4(),
            class_id: payload.class_id,
            day: payload.day,
            start_time: payload.start_time,
            teacher_id: payload.teacher_id,
        };
        let mut store = self.store.write().expect("store lock poisoned");
        Ok(store.timetable.insert(entry))
    }

    /// Weekday order dominates start time.
    pub fn list(&self, query: TimetableListQuery) -> Vec<TimetableEntry> {
        let store = self.store.read().expect("store lock poisoned");
        let mut items: Vec<TimetableEntry> = store
            .timetable
            .all()
            .iter()
            .filter(|e| query.class_id.as_deref().map_or(true, |v| e.class_id == v))
            .filter(|e| {
                query
                    .teacher_id
                    .as_deref()
                    .map_or(true, |v| e.teacher_id == v)
            })
            .filter(|e| query.day.as_deref().map_or(true, |v| e.day == v))
            .cloned()
            .collect();
        items.sort_by(|a, b| {
            let rank_a = day_rank(&a.day).unwrap_or(WEEKDAYS.len());
            let rank_b = day_rank(&b.day).unwrap_or(WEEKDAYS.len());
            rank_a.cmp(&rank_b).then(a.start_time.cmp(&b.start_time))
        });
        items
    }

    pub fn update(&self, id: Uuid, payload: UpdateTimetablePayload) -> Result<TimetableEntry> {
        if let Some(ref day) = payload.day {
            check_weekday(day)?;
        }
        let mut store = self.store.write().expect("store lock poisoned");
        store.timetable.update(id, |entry| {
            if let Some(class_id) = payload.class_id {
                entry.class_id = class_id;
            }
            if let Some(day) = payload.day {
                entry.day = day;
            }
            if let Some(start_time) = payload.start_time {
                entry.start_time = start_time;
            }
            if let Some(teacher_id) = payload.teacher_id {
                entry.teacher_id = teacher_id;
            }
        })
    }

    pub fn delete(&self, id: Uuid) -> Result<()> {
        let mut store = self.store.write().expect("store lock poisoned");
        store.timetable.remove(id)?;
        Ok(())
    }
}

fn check_weekday(day: &str) -> Result<()> {
    if day_rank(day).is_none() {
        return Err(Error::BadRequest(format!("Unknown weekday: {}", day)));
    }
    Ok(())
}
