pub mod checks;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod logo;
pub mod outcome;
pub mod sanitize;
pub mod ui;
pub mod version_file;

pub use error::{HygieneError, Result};
