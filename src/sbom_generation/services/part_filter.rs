use crate::sbom_generation::domain::PartRecord;
use crate::shared::error::SbomError;
use crate::shared::Result;
use regex::Regex;
use std::cell::Cell;

/// Maximum number of exclude patterns
const MAX_EXCLUDE_PATTERNS: usize = 64;

/// Maximum length of a single exclude pattern
const MAX_PATTERN_LENGTH: usize = 255;

/// PartFilter - Drops parts whose declared name matches an exclusion pattern
///
/// Patterns match the whole part name; `*` matches zero or more characters.
/// Matching is case-sensitive, as snapcraft part names are.
#[derive(Debug)]
pub struct PartFilter {
    patterns: Vec<ExcludePattern>,
}

impl PartFilter {
    /// Creates a new PartFilter from raw pattern strings
    ///
    /// # Errors
    /// - Too many patterns (> 64)
    /// - Invalid pattern (empty, too long, bad characters, wildcard-only)
    pub fn new(patterns: Vec<String>) -> Result<Self> {
        if patterns.len() > MAX_EXCLUDE_PATTERNS {
            return Err(SbomError::Validation {
                message: format!(
                    "Too many exclusion patterns: {} (maximum: {})",
                    patterns.len(),
                    MAX_EXCLUDE_PATTERNS
                ),
            }
            .into());
        }

        let patterns = patterns
            .into_iter()
            .map(ExcludePattern::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Returns only the parts that match no exclusion pattern, keeping their order
    pub fn filter_parts(&self, parts: Vec<PartRecord>) -> Vec<PartRecord> {
        parts
            .into_iter()
            .filter(|part| !self.matches(part.name()))
            .collect()
    }

    fn matches(&self, part_name: &str) -> bool {
        // Evaluate every pattern so each one records whether it was used.
        self.patterns
            .iter()
            .fold(false, |hit, p| p.matches(part_name) || hit)
    }

    /// Patterns that did not match any part seen by `filter_parts`
    pub fn unmatched_patterns(&self) -> Vec<String> {
        self.patterns
            .iter()
            .filter(|p| !p.matched.get())
            .map(|p| p.original.clone())
            .collect()
    }
}

#[derive(Debug)]
struct ExcludePattern {
    original: String,
    matcher: Regex,
    matched: Cell<bool>,
}

impl ExcludePattern {
    fn new(pattern: String) -> Result<Self> {
        validate_pattern(&pattern)?;
        let matcher = compile_glob(&pattern)?;

        Ok(Self {
            original: pattern,
            matcher,
            matched: Cell::new(false),
        })
    }

    fn matches(&self, part_name: &str) -> bool {
        let is_match = self.matcher.is_match(part_name);
        if is_match {
            self.matched.set(true);
        }
        is_match
    }
}

fn validate_pattern(pattern: &str) -> Result<()> {
    let invalid = |message: String| -> Result<()> { Err(SbomError::Validation { message }.into()) };

    if pattern.is_empty() {
        return invalid("Exclusion pattern cannot be empty".to_string());
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        return invalid(format!(
            "Exclusion pattern is too long: {} chars (maximum: {})",
            pattern.len(),
            MAX_PATTERN_LENGTH
        ));
    }

    if let Some(ch) = pattern.chars().find(|c| !is_valid_pattern_char(*c)) {
        return invalid(format!(
            "Exclusion pattern contains invalid character '{}' in pattern '{}'. \
             Only alphanumeric, hyphens, underscores, dots, and asterisks (*) are allowed.",
            ch, pattern
        ));
    }

    if pattern.chars().all(|c| c == '*') {
        return invalid(format!(
            "Exclusion pattern cannot contain only wildcards: '{}'",
            pattern
        ));
    }

    Ok(())
}

fn is_valid_pattern_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_' || c == '.' || c == '*'
}

/// `lib-*` -> `^lib-.*$`, with every literal piece escaped
fn compile_glob(pattern: &str) -> Result<Regex> {
    let body = pattern
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");

    Regex::new(&format!("^{}$", body))
        .map_err(|e| anyhow::anyhow!("Invalid exclusion pattern '{}': {}", pattern, e))
}
