//! Opaque wrapper around the regex engine used for `pattern` and `patternProperties`.
//!
//! The ECMA-262 regex dialect used by JSON Schema is treated as a black box here: construction
//! either succeeds and exposes `matches`, or fails with `BadPattern`. The `regex` crate's syntax
//! is a close enough superset/subset for the schemas this crate is asked to compile; callers
//! never see which engine sits behind the wrapper.
use regex::Regex;

/// A compiled pattern. `matches` performs an unanchored search, matching JSON Schema's
/// `pattern` semantics (no implicit `^`/`$`).
#[derive(Debug)]
pub(crate) struct PatternMatcher(Regex);

impl PatternMatcher {
    pub(crate) fn compile(pattern: &str) -> Result<PatternMatcher, regex::Error> {
        Ok(PatternMatcher(Regex::new(pattern)?))
    }

    #[inline]
    pub(crate) fn matches(&self, haystack: &str) -> bool {
        self.0.is_match(haystack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_unanchored() {
        let pattern = PatternMatcher::compile("abc").unwrap();
        assert!(pattern.matches("xxabcxx"));
        assert!(!pattern.matches("xyz"));
    }

    #[test]
    fn bad_pattern_fails_to_compile() {
        assert!(PatternMatcher::compile("(unterminated").is_err());
    }
}
