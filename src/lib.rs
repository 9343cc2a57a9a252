//! This crate is the logic layer of a student planner.
//!
//! Students log in against a roster, register their courses and the assignments of these courses, and mark them as completed.
//! All of this lives in a [`Planner`](store::Planner), which mirrors its data to a [`KeyValueStore`](traits::KeyValueStore)
//! (e.g. a [`FolderStore`](storage::FolderStore)).
//!
//! The page itself is only reached through the [`Page`](view::Page) trait, driven by a [`Controller`](view::Controller).
//!
//! This crate also provides a full-year [`Calendar`] (month grids, a carousel and day annotations),
//! and the pointer-following effect of the navigation buttons in the [`hover`] module.

pub mod traits;
pub mod config;

mod id;
pub use id::RecordId;
pub mod user;
pub use user::User;
pub mod course;
pub use course::Course;
pub mod assignment;
pub use assignment::Assignment;

pub mod storage;
pub mod roster;
pub mod store;
pub use store::Planner;

pub mod view;
pub mod calendar;
pub use calendar::Calendar;
pub mod hover;

pub mod utils;
