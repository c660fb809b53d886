//! Serifu Search
//!
//! Case-insensitive substring filtering over card text.

/// Whether `text` matches the search `query`.
/// Matching is lower-cased substring only; an empty or whitespace-only
/// query matches everything.
pub fn matches(text: &str, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    query.is_empty() || text.to_lowercase().contains(&query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_matches_everything() {
        assert!(matches("こんにちは世界", ""));
        assert!(matches("anything", "   "));
        assert!(matches("", ""));
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        assert!(matches("ABCDEF", "abc"));
        assert!(matches("abcdef", "CDE"));
        assert!(matches("こんにちは世界", "にち"));
    }

    #[test]
    fn test_no_match_hides_item() {
        assert!(!matches("こんにちは世界", "さようなら"));
        assert!(!matches("", "x"));
    }
}
