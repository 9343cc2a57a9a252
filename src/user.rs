//! Users of the planner, as listed in the roster

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::id::RecordId;

/// A student that may log in.
///
/// Users are only ever created by the seed roster document, they are read-only at runtime.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Some hand-written rosters omit it. Such users may log in, but cannot own any record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<RecordId>,

    /// The student identifier, used as the login name
    #[serde(deserialize_with = "crate::id::string_or_number")]
    carnet: String,
    #[serde(deserialize_with = "crate::id::string_or_number")]
    password: String,

    #[serde(rename = "nombre", alias = "name", default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    /// Roster fields this crate does not use. They are kept so that re-saving the roster does not lose them
    #[serde(flatten)]
    extra_fields: Map<String, Value>,
}

impl User {
    pub fn new(id: RecordId, carnet: String, password: String, name: Option<String>) -> Self {
        Self {
            id: Some(id),
            carnet,
            password,
            name,
            extra_fields: Map::new(),
        }
    }

    pub fn id(&self) -> Option<&RecordId>  { self.id.as_ref()    }
    pub fn carnet(&self) -> &str            { &self.carnet        }
    pub fn name(&self) -> Option<&str>      { self.name.as_deref() }
    pub fn extra_fields(&self) -> &Map<String, Value> { &self.extra_fields }

    /// The name shown in the page header
    pub fn display_label(&self) -> &str {
        match &self.name {
            Some(name) if name.is_empty() == false => name,
            _ => &self.carnet,
        }
    }

    /// Plain-text comparison of both credentials
    pub fn matches_credentials(&self, carnet: &str, password: &str) -> bool {
        self.carnet == carnet && self.password == password
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_entry_with_numbers_and_extra_fields() {
        let user: User = serde_json::from_str(r#"{"id": 7, "carnet": "AB123456", "password": 1234, "carrera": "Sistemas"}"#).unwrap();
        assert_eq!(user.id(), Some(&RecordId::from("7")));
        assert!(user.matches_credentials("AB123456", "1234"));
        assert_eq!(user.display_label(), "AB123456");

        let saved = serde_json::to_value(&user).unwrap();
        assert_eq!(saved["carrera"], "Sistemas");
    }

    #[test]
    fn display_label_prefers_the_name() {
        let user = User::new(RecordId::from("1"), "XY000001".into(), "pw".into(), Some("Ana".into()));
        assert_eq!(user.display_label(), "Ana");
    }
}
