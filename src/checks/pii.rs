//! Personal data in prose documentation.

use regex::Regex;

const CONTEXT_CHARS: usize = 50;
const ALLOWED_CONTEXT: &str = "Lisbon, Portugal";
const FORBIDDEN_CONTEXT: &str = "Address:";

const PII_PATTERNS: [(&str, &str); 4] = [
    (r"\+3\d{2}\s*\d{2}\s*\d{3}\s*\d{4}", "non-generic phone number"),
    (r"\+3\d{2}\s*9[1-9]\s*\d{3}\s*\d{4}", "non-generic mobile number"),
    (r"(?i)\bJoão\b|\bSilva\b", "Portuguese name"),
    (r"(?i)\bLisbon\b|\bLisboa\b", "Lisbon address"),
];

/// Returns one reason per kind of personal data found in `content`.
pub fn scan(content: &str) -> Vec<String> {
    let mut reasons = Vec::new();

    for (pattern, label) in PII_PATTERNS {
        if let Ok(re) = Regex::new(pattern) {
            if let Some(found) = re.find(content) {
                reasons.push(format!("{} '{}'", label, found.as_str()));
            }
        }
    }

    if let Ok(re) = Regex::new(r"(?i)\bPortugal\b") {
        for found in re.find_iter(content) {
            let context = surrounding(content, found.start(), found.end());
            if !context.contains(ALLOWED_CONTEXT) || context.contains(FORBIDDEN_CONTEXT) {
                reasons.push(format!("Portugal reference: {}", context.trim()));
            }
        }
    }

    reasons
}

/// Up to [CONTEXT_CHARS] characters on either side of a match.
fn surrounding(content: &str, start: usize, end: usize) -> &str {
    let from = content[..start]
        .char_indices()
        .rev()
        .nth(CONTEXT_CHARS - 1)
        .map(|(i, _)| i)
        .unwrap_or(0);
    let to = content[end..]
        .char_indices()
        .nth(CONTEXT_CHARS)
        .map(|(i, _)| end + i)
        .unwrap_or(content.len());
    &content[from..to]
}
