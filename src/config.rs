//! Support for library configuration options

use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// Where the seed roster document is fetched from when the page starts (a relative path or an URL).
/// Feel free to override it when initing this library.
pub static SEED_ROSTER_LOCATION: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("udb_usuarios.json".to_string())));

/// Storage key of the logged-in user
pub const CURRENT_USER_KEY: &str = "udb_usuario_actual";
/// Storage key of the whole course list
pub const COURSES_KEY: &str = "udb_materias";
/// Storage key of the whole assignment list
pub const ASSIGNMENTS_KEY: &str = "udb_trabajos";
/// Storage key of the user roster
pub const ROSTER_KEY: &str = "udb_usuarios";

/// An assignment due within this many days (and not overdue yet) is flagged as "soon"
pub const DUE_SOON_DAYS: i64 = 3;

/// Returns the currently configured seed roster location
pub fn seed_roster_location() -> String {
    match SEED_ROSTER_LOCATION.lock() {
        Ok(location) => location.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}
