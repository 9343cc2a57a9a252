//! The seed roster: the list of users allowed to log in
//!
//! It is read once when the page starts, either from a local file or over HTTP.

use std::error::Error;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use reqwest::header::CACHE_CONTROL;
use serde_json::Value;
use url::Url;

use crate::traits::RosterSource;
use crate::user::User;


/// Extract the users of a roster document.
///
/// Two shapes are accepted: a bare list of users, or an object holding that list in a `usuarios` (or `users`) field.
/// Entries that are not valid users (e.g. without a password) are skipped, the others are kept.
pub fn parse_roster(document: &str) -> Result<Vec<User>, Box<dyn Error>> {
    let value: Value = serde_json::from_str(document)?;
    let list = match value {
        Value::Array(list) => list,
        Value::Object(mut map) => {
            match (map.remove("usuarios"), map.remove("users")) {
                (Some(Value::Array(list)), _) => list,
                (_, Some(Value::Array(list))) => list,
                _ => return Err("Unexpected roster format: no 'usuarios' or 'users' list".into()),
            }
        },
        _ => return Err("Unexpected roster format: expected a list or an object".into()),
    };

    let mut users = Vec::with_capacity(list.len());
    for (index, entry) in list.into_iter().enumerate() {
        match serde_json::from_value::<User>(entry) {
            Ok(user) => users.push(user),
            Err(err) => log::warn!("Skipping roster entry #{}: {}", index, err),
        }
    }
    Ok(users)
}


/// A roster served over HTTP
pub struct HttpRoster {
    url: Url,
}

impl HttpRoster {
    pub fn new<S: AsRef<str>>(url: S) -> Result<Self, Box<dyn Error>> {
        let url = Url::parse(url.as_ref())?;
        Ok(Self { url })
    }
}

#[async_trait]
impl RosterSource for HttpRoster {
    fn describe(&self) -> String {
        self.url.to_string()
    }

    async fn fetch(&self) -> Result<String, Box<dyn Error>> {
        let res = reqwest::Client::new()
            .get(self.url.as_str())
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await?;
        if res.status().is_success() == false {
            return Err(format!("Unexpected HTTP status {} for {}", res.status(), self.url).into());
        }
        let text = res.text().await?;
        Ok(text)
    }
}


/// A roster stored in a local file
pub struct FileRoster {
    path: PathBuf,
}

impl FileRoster {
    pub fn new(path: &Path) -> Self {
        Self { path: PathBuf::from(path) }
    }
}

#[async_trait]
impl RosterSource for FileRoster {
    fn describe(&self) -> String {
        format!("{:?}", self.path)
    }

    async fn fetch(&self) -> Result<String, Box<dyn Error>> {
        match tokio::fs::read_to_string(&self.path).await {
            Err(err) => Err(format!("Unable to open file {:?}: {}", self.path, err).into()),
            Ok(text) => Ok(text),
        }
    }
}

/// Pick a source for a configured location: URLs are fetched over HTTP, anything else is a file path
pub fn source_for(location: &str) -> Box<dyn RosterSource + Send + Sync> {
    match HttpRoster::new(location) {
        Ok(http) if location.starts_with("http://") || location.starts_with("https://") => Box::new(http),
        _ => Box::new(FileRoster::new(Path::new(location))),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_shapes() {
        let entry = r#"{"id": 1, "carnet": "AB123456", "password": "x"}"#;

        let bare = parse_roster(&format!("[{}]", entry)).unwrap();
        let spanish = parse_roster(&format!(r#"{{"usuarios": [{}]}}"#, entry)).unwrap();
        let english = parse_roster(&format!(r#"{{"users": [{}, {}]}}"#, entry, entry)).unwrap();

        assert_eq!(bare.len(), 1);
        assert_eq!(spanish, bare);
        assert_eq!(english.len(), 2);
    }

    #[test]
    fn rejected_shapes() {
        assert!(parse_roster(r#"{"alumnos": []}"#).is_err());
        assert!(parse_roster(r#"{"usuarios": "none"}"#).is_err());
        assert!(parse_roster("42").is_err());
        assert!(parse_roster("<html>404</html>").is_err());
    }

    #[test]
    fn invalid_entries_are_skipped() {
        let _ = env_logger::builder().is_test(true).try_init();

        assert!(parse_roster(r#"[{"carnet": "AB123456"}]"#).unwrap().is_empty());

        let mixed = parse_roster(r#"{"usuarios": [
            {"id": 1, "carnet": "AB123456", "password": "x"},
            {"id": 2, "carnet": "CD000001"},
            {"id": 3, "carnet": true, "password": "y"},
            "EF000002",
            {"id": 4, "carnet": 20240001, "password": 1234}
        ]}"#).unwrap();
        let carnets: Vec<&str> = mixed.iter().map(|u| u.carnet()).collect();
        assert_eq!(carnets, vec!["AB123456", "20240001"]);
    }

    #[test]
    fn source_selection() {
        assert_eq!(source_for("https://example.com/udb_usuarios.json").describe(), "https://example.com/udb_usuarios.json");
        assert_eq!(source_for("udb_usuarios.json").describe(), "\"udb_usuarios.json\"");
    }
}
