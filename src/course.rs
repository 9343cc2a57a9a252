//! Courses ("materias") registered by a user

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::id::RecordId;

/// A course. Courses are never updated once created
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Course {
    id: RecordId,
    #[serde(rename = "usuarioId")]
    owner_id: RecordId,

    #[serde(rename = "nombre")]
    name: String,
    #[serde(rename = "codigo")]
    code: String,
    /// Free-form term tag, e.g. "3" or "2024-II"
    #[serde(rename = "semestre")]
    term: String,

    #[serde(rename = "fechaCreacion")]
    creation_date: DateTime<Utc>,
}

impl Course {
    /// Create a brand new course.
    /// This will pick a new (random) ID, and upper-case the course code
    pub fn new(owner_id: RecordId, name: String, code: &str, term: String) -> Self {
        Self {
            id: RecordId::random(),
            owner_id,
            name,
            code: code.to_uppercase(),
            term,
            creation_date: Utc::now(),
        }
    }

    pub fn id(&self) -> &RecordId           { &self.id            }
    pub fn owner_id(&self) -> &RecordId     { &self.owner_id      }
    pub fn name(&self) -> &str              { &self.name          }
    pub fn code(&self) -> &str              { &self.code          }
    pub fn term(&self) -> &str              { &self.term          }
    pub fn creation_date(&self) -> &DateTime<Utc> { &self.creation_date }

    pub fn is_owned_by(&self, user_id: &RecordId) -> bool {
        &self.owner_id == user_id
    }
}
