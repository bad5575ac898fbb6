use regex::Regex;

/// Decides whether a catalog term occurs in the lowercased classifier text.
///
/// Scoring only ever asks "is this term present", so swapping the strategy
/// leaves the scoring rules untouched.
pub trait TextMatcher: Send + Sync {
    fn matches(&self, text: &str, term: &str) -> bool;
}

/// Plain substring containment. The default strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl TextMatcher for SubstringMatcher {
    fn matches(&self, text: &str, term: &str) -> bool {
        !term.is_empty() && text.contains(term)
    }
}

/// Requires the term to start and end on word boundaries, so "rib" no longer
/// fires inside "ribbon". Plural suffixes are tolerated ("noodle" matches
/// "noodles").
#[derive(Debug, Clone, Copy, Default)]
pub struct WordBoundaryMatcher;

impl TextMatcher for WordBoundaryMatcher {
    fn matches(&self, text: &str, term: &str) -> bool {
        if term.is_empty() {
            return false;
        }

        let pattern = format!(r"\b{}(?:s|es)?\b", regex::escape(term));
        match Regex::new(&pattern) {
            Ok(re) => re.is_match(text),
            Err(_) => text.contains(term),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_matches_inside_words() {
        let matcher = SubstringMatcher;
        assert!(matcher.matches("pork ribbon", "rib"));
        assert!(matcher.matches("laksa curry noodle soup", "noodle"));
        assert!(!matcher.matches("laksa", ""));
    }

    #[test]
    fn word_boundary_rejects_partial_words() {
        let matcher = WordBoundaryMatcher;
        assert!(!matcher.matches("pork ribbon", "rib"));
        assert!(matcher.matches("pork rib soup", "rib"));
        assert!(matcher.matches("fried noodles", "noodle"));
        assert!(matcher.matches("char siew noodle", "char siew"));
    }
}
