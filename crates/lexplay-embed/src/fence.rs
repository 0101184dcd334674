//! Fence info string parsing.

use std::collections::HashMap;

/// Parse a fence info string into language and attributes.
///
/// Format: `language [key=value ...]`. A bare word after the language is
/// kept as the positional `language` attribute (the listing language of a
/// godbolt block), matching the block syntax of the documentation source.
#[must_use]
pub fn parse_fence_info(info: &str) -> (String, HashMap<String, String>) {
    let mut parts = info.split_whitespace();
    let language = parts.next().unwrap_or("").to_owned();

    let mut attrs = HashMap::new();
    for part in parts {
        if let Some((key, value)) = part.split_once('=') {
            // Strip quotes if present
            let value = value.trim_matches('"').trim_matches('\'');
            attrs.insert(key.to_owned(), value.to_owned());
        } else if !attrs.contains_key("language") {
            attrs.insert("language".to_owned(), part.to_owned());
        }
    }

    (language, attrs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_language_only() {
        let (lang, attrs) = parse_fence_info("godbolt");
        assert_eq!(lang, "godbolt");
        assert!(attrs.is_empty());
    }

    #[test]
    fn test_id_attribute() {
        let (lang, attrs) = parse_fence_info("godbolt id=abc123");
        assert_eq!(lang, "godbolt");
        assert_eq!(attrs.get("id"), Some(&"abc123".to_owned()));
    }

    #[test]
    fn test_positional_language() {
        let (lang, attrs) = parse_fence_info("godbolt cpp id=abc123");
        assert_eq!(lang, "godbolt");
        assert_eq!(attrs.get("language"), Some(&"cpp".to_owned()));
        assert_eq!(attrs.get("id"), Some(&"abc123".to_owned()));
    }

    #[test]
    fn test_quoted_values() {
        let (_, attrs) = parse_fence_info("godbolt id=abc123 title=\"Example\"");
        assert_eq!(attrs.get("title"), Some(&"Example".to_owned()));
    }

    #[test]
    fn test_empty() {
        let (lang, attrs) = parse_fence_info("");
        assert_eq!(lang, "");
        assert!(attrs.is_empty());
    }
}
