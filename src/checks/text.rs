//! Content checks over plain text and Markdown.
//!
//! Every function returns the list of failure reasons; empty means passed.

use regex::Regex;

pub fn contains_any(content: &str, groups: &[Vec<String>]) -> Vec<String> {
    let lower = content.to_lowercase();
    groups
        .iter()
        .filter(|group| {
            !group
                .iter()
                .any(|keyword| lower.contains(&keyword.to_lowercase()))
        })
        .map(|group| format!("none of [{}] found", group.join(", ")))
        .collect()
}

pub fn contains_all(content: &str, needles: &[String]) -> Vec<String> {
    needles
        .iter()
        .filter(|needle| !content.contains(needle.as_str()))
        .map(|needle| format!("missing '{}'", needle))
        .collect()
}

pub fn absent(content: &str, needles: &[String]) -> Vec<String> {
    needles
        .iter()
        .filter(|needle| content.contains(needle.as_str()))
        .map(|needle| format!("must not contain '{}'", needle))
        .collect()
}

pub fn count(content: &str, needle: &str, min: usize) -> Vec<String> {
    let found = content.matches(needle).count();
    if found >= min {
        Vec::new()
    } else {
        vec![format!(
            "expected at least {} occurrence(s) of '{}', found {}",
            min, needle, found
        )]
    }
}

pub fn matches_any(content: &str, patterns: &[String]) -> Vec<String> {
    let mut compiled = Vec::with_capacity(patterns.len());
    for pattern in patterns {
        match Regex::new(pattern) {
            Ok(re) => compiled.push(re),
            Err(e) => return vec![format!("invalid pattern '{}': {}", pattern, e)],
        }
    }

    if compiled.iter().any(|re| re.is_match(content)) {
        Vec::new()
    } else {
        vec![format!("no match for any of [{}]", patterns.join(", "))]
    }
}

/// Number of lines that start a Markdown ATX heading.
pub fn heading_count(content: &str) -> usize {
    content
        .lines()
        .filter(|line| line.trim_start().starts_with('#'))
        .count()
}

pub fn min_headings(content: &str, min: usize) -> Vec<String> {
    let found = heading_count(content);
    if found >= min {
        Vec::new()
    } else {
        vec![format!("expected at least {} headings, found {}", min, found)]
    }
}

pub fn min_size(content: &str, bytes: u64, lines: usize) -> Vec<String> {
    let mut reasons = Vec::new();
    let size = content.len() as u64;
    if size < bytes {
        reasons.push(format!("expected at least {} bytes, found {}", bytes, size));
    }
    let line_count = content.lines().count();
    if line_count < lines {
        reasons.push(format!(
            "expected at least {} lines, found {}",
            lines, line_count
        ));
    }
    reasons
}
