use crate::error::{HygieneError, Result};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Semantic version representation (`MAJOR.MINOR.PATCH`)
///
/// Field order matters: the derived `Ord` compares major, then minor, then patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SemanticVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl SemanticVersion {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        SemanticVersion {
            major,
            minor,
            patch,
        }
    }

    /// Parse a strict `X.Y.Z` string.
    ///
    /// No prefix, pre-release or build metadata is accepted: `"v1.2.3"`,
    /// `"1.2.3-rc.1"` and `"1.2"` are all `InvalidFormat`.
    pub fn parse(text: &str) -> Result<Self> {
        let parts: Vec<&str> = text.split('.').collect();
        if parts.len() != 3 {
            return Err(HygieneError::invalid_format(text));
        }

        let mut numbers = [0u32; 3];
        for (slot, part) in numbers.iter_mut().zip(&parts) {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(HygieneError::invalid_format(text));
            }
            *slot = part
                .parse::<u32>()
                .map_err(|_| HygieneError::invalid_format(text))?;
        }

        Ok(SemanticVersion::new(numbers[0], numbers[1], numbers[2]))
    }

    /// Bump version according to bump kind, returning a new value
    ///
    /// A component already at `u32::MAX` cannot be incremented and yields
    /// `InvalidFormat` instead of wrapping.
    pub fn bump(&self, kind: BumpKind) -> Result<Self> {
        let exhausted = || HygieneError::invalid_format(self.to_string());
        let next = match kind {
            BumpKind::Major => {
                SemanticVersion::new(self.major.checked_add(1).ok_or_else(exhausted)?, 0, 0)
            }
            BumpKind::Minor => SemanticVersion::new(
                self.major,
                self.minor.checked_add(1).ok_or_else(exhausted)?,
                0,
            ),
            BumpKind::Patch => SemanticVersion::new(
                self.major,
                self.minor,
                self.patch.checked_add(1).ok_or_else(exhausted)?,
            ),
        };
        Ok(next)
    }

    /// The `(major, minor, patch)` tuple
    pub fn as_tuple(&self) -> (u32, u32, u32) {
        (self.major, self.minor, self.patch)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for SemanticVersion {
    type Err = HygieneError;

    fn from_str(s: &str) -> Result<Self> {
        SemanticVersion::parse(s)
    }
}

/// Magnitude of a version bump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
}

impl BumpKind {
    /// Name as accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Patch => "patch",
        }
    }
}

impl FromStr for BumpKind {
    type Err = HygieneError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(BumpKind::Major),
            "minor" => Ok(BumpKind::Minor),
            "patch" => Ok(BumpKind::Patch),
            other => Err(HygieneError::InvalidBumpKind(other.to_string())),
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compare two versions component-wise; the first unequal component decides.
pub fn compare(a: &SemanticVersion, b: &SemanticVersion) -> Ordering {
    a.cmp(b)
}

/// Parse both strings and report whether `new` is strictly greater than `old`.
pub fn is_greater(new: &str, old: &str) -> Result<bool> {
    let new = SemanticVersion::parse(new)?;
    let old = SemanticVersion::parse(old)?;
    Ok(compare(&new, &old) == Ordering::Greater)
}
