//! The session and data store of the planner
//!
//! A [`Planner`] holds every record in memory, and mirrors whole collections to a [`KeyValueStore`].
//! Loading and saving are explicit: nothing is written until [`Planner::save`] (or an operation documented as persisting) is called.

use std::error::Error;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::traits::{KeyValueStore, RosterSource};
use crate::config::{ASSIGNMENTS_KEY, COURSES_KEY, CURRENT_USER_KEY, ROSTER_KEY};
use crate::id::RecordId;
use crate::user::User;
use crate::course::Course;
use crate::assignment::{Assignment, NewAssignment};
use crate::roster::parse_roster;

/// Shown to the user when no roster entry matches the credentials
pub const REJECTED_CREDENTIALS: &str = "Carnet o contraseña incorrectos";
/// Returned by operations that need a logged-in user with an id
pub const NOT_AUTHENTICATED: &str = "No hay usuario autenticado";


/// Users, courses and assignments, together with the store they are persisted to
#[derive(Debug)]
pub struct Planner<S: KeyValueStore> {
    storage: S,

    roster: Vec<User>,
    current_user: Option<User>,
    courses: Vec<Course>,
    assignments: Vec<Assignment>,
}

impl<S: KeyValueStore> Planner<S> {
    /// Read every collection from `storage`.
    ///
    /// Missing keys give empty collections. Unparseable values are logged and ignored.
    pub fn load(storage: S) -> Self {
        let roster: Vec<User> = read_key(&storage, ROSTER_KEY).unwrap_or_default();
        let current_user: Option<User> = read_key(&storage, CURRENT_USER_KEY);
        let courses: Vec<Course> = read_key(&storage, COURSES_KEY).unwrap_or_default();
        let assignments: Vec<Assignment> = read_key(&storage, ASSIGNMENTS_KEY).unwrap_or_default();

        Self { storage, roster, current_user, courses, assignments }
    }

    /// Write the roster, the courses and the assignments to the store
    pub fn save(&mut self) -> Result<(), Box<dyn Error>> {
        write_key(&mut self.storage, ROSTER_KEY, &self.roster)?;
        write_key(&mut self.storage, COURSES_KEY, &self.courses)?;
        write_key(&mut self.storage, ASSIGNMENTS_KEY, &self.assignments)?;
        Ok(())
    }

    /// Get the underlying store
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give the underlying store back
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Replace the roster by the one from `source`, and persist it.
    ///
    /// In case the source cannot be read or has an unexpected shape, the roster that was previously persisted is used (or an empty one).
    /// Returns the number of known users.
    pub async fn load_roster<R>(&mut self, source: &R) -> usize
    where
        R: RosterSource + ?Sized,
    {
        let fetched = match source.fetch().await {
            Err(err) => Err(err),
            Ok(document) => parse_roster(&document),
        };

        match fetched {
            Ok(users) => {
                self.roster = users;
                if let Err(err) = write_key(&mut self.storage, ROSTER_KEY, &self.roster) {
                    log::warn!("Unable to persist the roster: {}", err);
                }
                log::info!("Users loaded from {} (total: {})", source.describe(), self.roster.len());
            },
            Err(err) => {
                log::warn!("Unable to load users from {}: {}. Using the stored roster", source.describe(), err);
                self.roster = read_key(&self.storage, ROSTER_KEY).unwrap_or_default();
            },
        }
        self.roster.len()
    }

    pub fn roster(&self) -> &[User] {
        &self.roster
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    fn current_user_id(&self) -> Result<RecordId, Box<dyn Error>> {
        match self.current_user.as_ref().and_then(|u| u.id()) {
            Some(id) => Ok(id.clone()),
            None => Err(NOT_AUTHENTICATED.into()),
        }
    }

    /// Look for a roster entry with these credentials, and make it the current user.
    ///
    /// The carnet is trimmed and upper-cased before being compared.
    pub fn login(&mut self, carnet: &str, password: &str) -> Result<&User, Box<dyn Error>> {
        let carnet = carnet.trim().to_uppercase();
        let user = match self.roster.iter().find(|u| u.matches_credentials(&carnet, password)) {
            None => {
                log::debug!("Rejected login attempt for {}", carnet);
                return Err(REJECTED_CREDENTIALS.into());
            },
            Some(user) => user.clone(),
        };

        write_key(&mut self.storage, CURRENT_USER_KEY, &user)?;
        log::info!("{} logged in", user.carnet());
        Ok(self.current_user.insert(user))
    }

    pub fn logout(&mut self) -> Result<(), Box<dyn Error>> {
        self.current_user = None;
        self.storage.remove_item(CURRENT_USER_KEY)
    }

    /// Register a course for the current user, and persist the data.
    ///
    /// In case the data cannot be saved, the course is not kept.
    pub fn add_course(&mut self, name: String, code: &str, term: String) -> Result<&Course, Box<dyn Error>> {
        let owner = self.current_user_id()?;
        let index = self.courses.len();
        self.courses.push(Course::new(owner, name, code, term));
        if let Err(err) = self.save() {
            self.courses.pop();
            return Err(err);
        }
        Ok(&self.courses[index])
    }

    /// Courses of the current user, in creation order
    pub fn courses_for_current_user(&self) -> Vec<&Course> {
        match self.current_user_id() {
            Err(_) => Vec::new(),
            Ok(uid) => self.courses_for_user(&uid),
        }
    }

    pub fn courses_for_user(&self, user_id: &RecordId) -> Vec<&Course> {
        self.courses.iter()
            .filter(|c| c.is_owned_by(user_id))
            .collect()
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Add an assignment for the current user, and persist the data.
    ///
    /// The course is not checked to exist. In case the data cannot be saved, the assignment is not kept.
    pub fn add_assignment(&mut self, new: NewAssignment) -> Result<&Assignment, Box<dyn Error>> {
        let owner = self.current_user_id()?;
        let index = self.assignments.len();
        self.assignments.push(Assignment::new(owner, new));
        if let Err(err) = self.save() {
            self.assignments.pop();
            return Err(err);
        }
        Ok(&self.assignments[index])
    }

    pub fn assignments_for_user(&self, user_id: &RecordId) -> Vec<&Assignment> {
        self.assignments.iter()
            .filter(|a| a.is_owned_by(user_id))
            .collect()
    }

    /// Assignments of the current user that belong to this course
    pub fn assignments_for_course(&self, course_id: &RecordId) -> Vec<&Assignment> {
        let uid = match self.current_user_id() {
            Err(_) => return Vec::new(),
            Ok(uid) => uid,
        };
        self.assignments.iter()
            .filter(|a| a.course_id() == course_id && a.is_owned_by(&uid))
            .collect()
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn get_assignment(&self, id: &RecordId) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.id() == id)
    }

    /// Flip the completion flag of an assignment, and persist the data.
    /// Returns `false` in case there is no such assignment
    pub fn toggle_completed(&mut self, id: &RecordId) -> Result<bool, Box<dyn Error>> {
        match self.assignments.iter_mut().find(|a| a.id() == id) {
            None => return Ok(false),
            Some(assignment) => assignment.toggle_completed(),
        }
        self.save()?;
        Ok(true)
    }

    /// Remove an assignment, and persist the data.
    /// Returns whether an assignment has been removed
    pub fn delete_assignment(&mut self, id: &RecordId) -> Result<bool, Box<dyn Error>> {
        let count_before = self.assignments.len();
        self.assignments.retain(|a| a.id() != id);
        if self.assignments.len() == count_before {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    /// Assignments whose course does not exist (or belongs to somebody else)
    pub fn orphaned_assignments(&self) -> Vec<&Assignment> {
        self.assignments.iter()
            .filter(|a| {
                self.courses.iter().any(|c| c.id() == a.course_id() && c.is_owned_by(a.owner_id())) == false
            })
            .collect()
    }
}


fn read_key<S, T>(storage: &S, key: &str) -> Option<T>
where
    S: KeyValueStore,
    T: DeserializeOwned,
{
    let raw = storage.get_item(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("Invalid content for key {}: {}. Ignoring it", key, err);
            None
        },
    }
}

fn write_key<S, T>(storage: &mut S, key: &str, value: &T) -> Result<(), Box<dyn Error>>
where
    S: KeyValueStore,
    T: Serialize + ?Sized,
{
    let serialized = serde_json::to_string(value)?;
    storage.set_item(key, &serialized)
}
