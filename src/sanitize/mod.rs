//! Test-data sanitization scanner.
//!
//! Extracts string literals from Python test sources and flags values that look
//! like real emails, phone numbers or street addresses.

pub mod literals;
pub mod predicates;
pub mod scanner;

pub use literals::{extract_literals, parse_literals, LexError};
pub use predicates::{
    contains_real_city, is_generic_email, is_generic_location, is_generic_phone,
    looks_like_address,
};
pub use scanner::{scan_file, scan_files, scan_literals, Finding, FindingCategory};
