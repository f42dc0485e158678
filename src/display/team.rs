//! Team-name cleanup
//!
//! Team entries on the published table carry age-group tags: "Oakwood
//! (U13)", "Riverside U13s", "Parkside Under 13". Three removal passes run
//! in order (bracketed tag, bare tag, "Under N" phrase), then spacing and
//! any dangling trailing hyphen are tidied.

use regex::Regex;

/// Removes age-group tags from team names.
#[derive(Debug, Clone)]
pub struct TeamNameCleaner {
    bracketed_tag: Regex,
    bare_tag: Regex,
    under_phrase: Regex,
    double_space: Regex,
    trailing_hyphen: Regex,
}

impl TeamNameCleaner {
    /// Compile the age-tag patterns.
    pub fn new() -> Self {
        Self {
            // (U13), [U13A], {U13's} with optional spacing inside the brackets
            bracketed_tag: Regex::new(r"(?i)[(\[{]\s*U\s*\d{1,2}[A-Za-z]?'?s?\s*[)\]}]").unwrap(),
            // standalone U13 / U13A / U13's
            bare_tag: Regex::new(r"(?i)\bU\s*\d{1,2}[A-Za-z]?'?s?\b").unwrap(),
            // "Under 13"
            under_phrase: Regex::new(r"(?i)\bUnder\s*\d{1,2}\b").unwrap(),
            double_space: Regex::new(r"\s{2,}").unwrap(),
            trailing_hyphen: Regex::new(r"\s*-\s*$").unwrap(),
        }
    }

    /// Strip age-group tags and tidy the remainder.
    pub fn clean(&self, name: &str) -> String {
        let name = self.bracketed_tag.replace_all(name, "");
        let name = self.bare_tag.replace_all(&name, "");
        let name = self.under_phrase.replace_all(&name, "");
        let name = self.double_space.replace_all(&name, " ");
        let name = self.trailing_hyphen.replace_all(&name, "");
        name.trim().to_string()
    }
}

impl Default for TeamNameCleaner {
    fn default() -> Self {
        Self::new()
    }
}
