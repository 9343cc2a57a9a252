//! Assignments ("trabajos"), tied to a course

use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::id::RecordId;
use crate::config::DUE_SOON_DAYS;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// What the user typed in the assignment form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewAssignment {
    pub course_id: RecordId,
    pub title: String,
    pub description: String,
    /// Usually `YYYY-MM-DD`, as produced by a date input. It is not validated
    pub due_date: String,
    pub priority: String,
}

/// An assignment
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    id: RecordId,
    #[serde(rename = "usuarioId")]
    owner_id: RecordId,
    /// The course is not guaranteed to exist
    #[serde(rename = "materiaId")]
    course_id: RecordId,

    #[serde(rename = "titulo")]
    title: String,
    #[serde(rename = "descripcion", default)]
    description: String,
    /// Kept as entered, so that an unparseable date never prevents saving
    #[serde(rename = "fechaEntrega")]
    due_date: String,
    /// Open set of tags ("alta", "media", "baja"...), rendered as a class suffix
    #[serde(rename = "prioridad")]
    priority: String,
    #[serde(rename = "completado", default)]
    completed: bool,

    #[serde(rename = "fechaCreacion")]
    creation_date: DateTime<Utc>,
}

/// How close a due date is
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DueStatus {
    /// Overdue
    Past,
    /// Due within [`DUE_SOON_DAYS`]
    Soon,
    Later,
    /// The due date could not be parsed
    Unknown,
}

impl DueStatus {
    /// The class the page uses to highlight the item (empty when nothing is highlighted)
    pub fn css_class(&self) -> &'static str {
        match self {
            DueStatus::Past => "fecha-pasada",
            DueStatus::Soon => "fecha-proxima",
            DueStatus::Later | DueStatus::Unknown => "",
        }
    }
}

impl Assignment {
    /// Create a brand new, uncompleted assignment.
    /// This will pick a new (random) ID.
    pub fn new(owner_id: RecordId, new: NewAssignment) -> Self {
        Self {
            id: RecordId::random(),
            owner_id,
            course_id: new.course_id,
            title: new.title,
            description: new.description,
            due_date: new.due_date,
            priority: new.priority,
            completed: false,
            creation_date: Utc::now(),
        }
    }

    pub fn id(&self) -> &RecordId           { &self.id            }
    pub fn owner_id(&self) -> &RecordId     { &self.owner_id      }
    pub fn course_id(&self) -> &RecordId    { &self.course_id     }
    pub fn title(&self) -> &str             { &self.title         }
    pub fn description(&self) -> &str       { &self.description   }
    pub fn due_date(&self) -> &str          { &self.due_date      }
    pub fn priority(&self) -> &str          { &self.priority      }
    pub fn completed(&self) -> bool         { self.completed      }
    pub fn creation_date(&self) -> &DateTime<Utc> { &self.creation_date }

    pub fn is_owned_by(&self, user_id: &RecordId) -> bool {
        &self.owner_id == user_id
    }

    /// Flip the completion flag
    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }

    /// The due date as a point in time, if it can be parsed.
    /// Date-only values are taken as midnight UTC.
    pub fn parsed_due_date(&self) -> Option<DateTime<Utc>> {
        parse_due_date(&self.due_date)
    }

    /// Number of days left before the due date, rounded up (negative when overdue)
    pub fn days_left(&self, now: DateTime<Utc>) -> Option<i64> {
        let due = self.parsed_due_date()?;
        let millis = (due - now).num_milliseconds();
        Some(-(-millis).div_euclid(MILLIS_PER_DAY))
    }

    pub fn due_status(&self, now: DateTime<Utc>) -> DueStatus {
        match self.days_left(now) {
            None => DueStatus::Unknown,
            Some(days) if days < 0 => DueStatus::Past,
            Some(days) if days <= DUE_SOON_DAYS => DueStatus::Soon,
            Some(_) => DueStatus::Later,
        }
    }
}

fn parse_due_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M") {
        return Some(Utc.from_utc_datetime(&datetime));
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}


#[cfg(test)]
mod tests {
    use super::*;

    fn assignment_due(due_date: &str) -> Assignment {
        Assignment::new(RecordId::from("u1"), NewAssignment {
            course_id: RecordId::from("c1"),
            title: "Lab 3".into(),
            due_date: due_date.into(),
            priority: "alta".into(),
            ..NewAssignment::default()
        })
    }

    fn noon(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn toggling_twice_restores_the_flag() {
        let mut a = assignment_due("2024-05-10");
        assert_eq!(a.completed(), false);
        a.toggle_completed();
        assert_eq!(a.completed(), true);
        a.toggle_completed();
        assert_eq!(a.completed(), false);
    }

    #[test]
    fn days_left_rounds_up() {
        let a = assignment_due("2024-05-10");
        // 9.5 days before midnight of the due date
        assert_eq!(a.days_left(noon(2024, 4, 30)), Some(10));
        assert_eq!(a.days_left(noon(2024, 5, 9)), Some(1));
        // Half a day late
        assert_eq!(a.days_left(noon(2024, 5, 10)), Some(0));
        assert_eq!(a.days_left(noon(2024, 5, 12)), Some(-2));
    }

    #[test]
    fn due_status_thresholds() {
        let a = assignment_due("2024-05-10");
        assert_eq!(a.due_status(noon(2024, 5, 1)), DueStatus::Later);
        assert_eq!(a.due_status(noon(2024, 5, 7)), DueStatus::Soon);
        assert_eq!(a.due_status(noon(2024, 5, 12)), DueStatus::Past);
        assert_eq!(assignment_due("next friday").due_status(noon(2024, 5, 1)), DueStatus::Unknown);
    }

    #[test]
    fn legacy_snapshot_loads() {
        let json = r#"{"id": 1700000000001, "usuarioId": 3, "materiaId": 1700000000000,
            "titulo": "Informe", "descripcion": "", "fechaEntrega": "", "prioridad": "media",
            "completado": true, "fechaCreacion": "2023-11-14T22:13:20.000Z"}"#;
        let a: Assignment = serde_json::from_str(json).unwrap();
        assert_eq!(a.course_id(), &RecordId::from("1700000000000"));
        assert!(a.completed());
        assert_eq!(a.parsed_due_date(), None);
    }
}
