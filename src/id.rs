//! Identifiers of persisted records

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de::{self, Visitor};

/// The identifier of a user, a course or an assignment.
///
/// Older snapshots stored numeric identifiers (millisecond timestamps), newer records use UUIDs.
/// Both are kept as their string representation, so that they compare the same way.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId {
    content: String,
}

impl RecordId {
    /// Generate a random RecordId.
    pub fn random() -> Self {
        let random = uuid::Uuid::new_v4().to_hyphenated().to_string();
        Self { content: random }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self { content: s }
    }
}
impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self { content: s.to_string() }
    }
}
impl From<u64> for RecordId {
    fn from(n: u64) -> Self {
        Self { content: n.to_string() }
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content)
    }
}

/// Used to support serde
impl Serialize for RecordId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.content)
    }
}
/// Used to support serde
impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<RecordId, D::Error>
    where
        D: Deserializer<'de>,
    {
        let content = deserializer.deserialize_any(StringOrNumberVisitor)?;
        Ok(RecordId{ content })
    }
}


/// Accepts a JSON string or number, and returns it as a string.
///
/// Roster documents are written by hand, and carnets or passwords are sometimes given as bare numbers.
pub(crate) struct StringOrNumberVisitor;

impl<'de> Visitor<'de> for StringOrNumberVisitor {
    type Value = String;

    fn expecting(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "a string or a number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
        Ok(v.to_string())
    }
    fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
        Ok(v)
    }
    fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
        Ok(v.to_string())
    }
    fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
        Ok(v.to_string())
    }
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
        Ok(v.to_string())
    }
    /// A course picked from an empty `<select>` used to be saved as `null`
    fn visit_unit<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }
}

/// For `#[serde(deserialize_with)]` on plain `String` fields
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(StringOrNumberVisitor)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_string_ids_compare_equal() {
        let from_number: RecordId = serde_json::from_str("1700000000000").unwrap();
        let from_string: RecordId = serde_json::from_str("\"1700000000000\"").unwrap();
        assert_eq!(from_number, from_string);
        assert_eq!(serde_json::to_string(&from_number).unwrap(), "\"1700000000000\"");
    }

    #[test]
    fn null_id_is_empty() {
        let id: RecordId = serde_json::from_str("null").unwrap();
        assert_eq!(id.as_str(), "");
    }

    #[test]
    fn random_ids_differ() {
        assert_ne!(RecordId::random(), RecordId::random());
    }
}
