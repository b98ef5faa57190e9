use std::fmt;
use std::path::{Path, PathBuf};

use regex::Regex;

use super::literals::extract_literals;
use super::predicates::{is_generic_email, is_generic_location, is_generic_phone, looks_like_address};

const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b";

const PHONE_PATTERNS: [&str; 3] = [
    r"\+\d{1,3}\s*\d{2,3}\s*\d{3,4}\s*\d{3,4}",
    r"\+\d{1,3}\s*\d{3}\s*\d{4}",
    r"\d{9,}",
];

/// Phone candidates shorter than this, once `+` and spaces are removed, are ignored.
const MIN_PHONE_DIGITS: usize = 9;

/// Kind of personal data a finding looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FindingCategory {
    Email,
    Phone,
    Location,
}

impl fmt::Display for FindingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FindingCategory::Email => write!(f, "email"),
            FindingCategory::Phone => write!(f, "phone"),
            FindingCategory::Location => write!(f, "location"),
        }
    }
}

/// A string literal fragment that looks like real personal data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub file: PathBuf,
    pub category: FindingCategory,
    pub value: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.category {
            FindingCategory::Email => {
                write!(f, "{}: non-generic email '{}'", self.file.display(), self.value)
            }
            FindingCategory::Phone => {
                write!(f, "{}: non-generic phone '{}'", self.file.display(), self.value)
            }
            FindingCategory::Location => write!(
                f,
                "{}: potential real address '{}'",
                self.file.display(),
                self.value
            ),
        }
    }
}

struct Patterns {
    email: Regex,
    phones: Vec<Regex>,
}

impl Patterns {
    fn compile() -> Option<Self> {
        let email = Regex::new(EMAIL_PATTERN).ok()?;
        let phones = PHONE_PATTERNS
            .iter()
            .map(|p| Regex::new(p))
            .collect::<Result<Vec<_>, _>>()
            .ok()?;
        Some(Patterns { email, phones })
    }
}

fn phone_digits(candidate: &str) -> usize {
    candidate.chars().filter(|c| *c != '+' && *c != ' ').count()
}

/// Applies the email, phone and address heuristics to literals taken from `file`.
pub fn scan_literals<S: AsRef<str>>(file: &Path, literals: &[S]) -> Vec<Finding> {
    let Some(patterns) = Patterns::compile() else {
        return Vec::new();
    };

    let mut findings = Vec::new();
    let mut push = |category: FindingCategory, value: &str| {
        let finding = Finding {
            file: file.to_path_buf(),
            category,
            value: value.to_string(),
        };
        if !findings.contains(&finding) {
            findings.push(finding);
        }
    };

    for literal in literals {
        let literal = literal.as_ref();

        for email in patterns.email.find_iter(literal) {
            if !is_generic_email(email.as_str()) {
                push(FindingCategory::Email, email.as_str());
            }
        }

        for pattern in &patterns.phones {
            for phone in pattern.find_iter(literal) {
                let phone = phone.as_str();
                if phone_digits(phone) < MIN_PHONE_DIGITS {
                    continue;
                }
                if !is_generic_phone(phone) && !phone.trim().is_empty() {
                    push(FindingCategory::Phone, phone);
                }
            }
        }

        if looks_like_address(literal) && !is_generic_location(literal) {
            push(FindingCategory::Location, literal);
        }
    }

    findings
}

/// Scans one Python source file.
///
/// Files that cannot be read or tokenized produce no findings.
pub fn scan_file(path: &Path) -> Vec<Finding> {
    let literals = extract_literals(path);
    log::debug!("{}: {} string literal(s)", path.display(), literals.len());
    scan_literals(path, &literals)
}

/// Scans each file under `root`; missing files are skipped.
pub fn scan_files<P: AsRef<Path>>(root: &Path, files: &[P]) -> Vec<Finding> {
    files
        .iter()
        .map(|file| root.join(file.as_ref()))
        .filter(|path| {
            let exists = path.is_file();
            if !exists {
                log::debug!("{} not found, skipping", path.display());
            }
            exists
        })
        .flat_map(|path| scan_file(&path))
        .collect()
}
