use std::error::Error;

use async_trait::async_trait;

/// A persistent store of string values under string keys, in the manner of the browser `localStorage`.
///
/// Writes are expected to be atomic per call.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, if any
    fn get_item(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`, replacing any previous value
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), Box<dyn Error>>;
    /// Remove `key`. Removing a missing key is not an error
    fn remove_item(&mut self, key: &str) -> Result<(), Box<dyn Error>>;
}

/// Where the seed roster document comes from
#[async_trait]
pub trait RosterSource {
    /// A human-readable description of this source, used in log messages
    fn describe(&self) -> String;

    /// Returns the raw document. This may be a long process (e.g. when fetching it over the network)
    async fn fetch(&self) -> Result<String, Box<dyn Error>>;
}
