//! User interface module - terminal output.

pub mod formatter;

pub use formatter::{
    display_bump, display_check_report, display_error, display_failure, display_findings,
    display_logo_summary, display_status, display_success, display_unexpected_error,
    display_validation,
};
