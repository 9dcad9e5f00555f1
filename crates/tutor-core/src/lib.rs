pub mod action;
pub mod activity;
pub mod catalog;
pub mod error;
pub mod io;
pub mod paths;
pub mod persist;
pub mod pose;
pub mod predicate;
pub mod snapshot;
pub mod types;

pub use error::{Result, TutorError};
