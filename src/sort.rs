//! Sort Engine
//!
//! Total orderings over the visible card list.

use crate::models::CardEntry;

/// Closed set of sort orders; unknown select values parse to None and
/// leave the current ordering untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortType {
    #[default]
    Newest,
    Oldest,
    Featured,
    AddedNewest,
    AddedOldest,
}

impl SortType {
    pub fn parse(value: &str) -> Option<SortType> {
        match value {
            "newest" => Some(SortType::Newest),
            "oldest" => Some(SortType::Oldest),
            "featured" => Some(SortType::Featured),
            "added-newest" => Some(SortType::AddedNewest),
            "added-oldest" => Some(SortType::AddedOldest),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortType::Newest => "newest",
            SortType::Oldest => "oldest",
            SortType::Featured => "featured",
            SortType::AddedNewest => "added-newest",
            SortType::AddedOldest => "added-oldest",
        }
    }
}

/// Return a new ordering of `entries` for `sort`. Creation dates compare
/// lexically (ISO strings); favorite-added timestamps compare numerically
/// with missing values treated as 0. Ties keep their incoming order.
pub fn sorted(entries: &[CardEntry], sort: SortType) -> Vec<CardEntry> {
    let mut result = entries.to_vec();
    match sort {
        SortType::Newest => {
            result.sort_by(|a, b| b.serifu.created_at.cmp(&a.serifu.created_at));
        }
        SortType::Oldest => {
            result.sort_by(|a, b| a.serifu.created_at.cmp(&b.serifu.created_at));
        }
        SortType::Featured => {
            // featured first, then ascending creation date in each partition
            result.sort_by(|a, b| {
                b.serifu
                    .featured
                    .cmp(&a.serifu.featured)
                    .then_with(|| a.serifu.created_at.cmp(&b.serifu.created_at))
            });
        }
        SortType::AddedNewest => {
            result.sort_by_key(|entry| std::cmp::Reverse(added_ms(entry)));
        }
        SortType::AddedOldest => {
            result.sort_by_key(added_ms);
        }
    }
    result
}

fn added_ms(entry: &CardEntry) -> i64 {
    entry.added_at.unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Serifu;

    fn make_entry(id: &str, created_at: &str, featured: bool, added_at: Option<i64>) -> CardEntry {
        CardEntry {
            serifu: Serifu {
                id: id.to_string(),
                text: format!("serifu {id}"),
                created_at: created_at.to_string(),
                featured,
            },
            category: "test".to_string(),
            added_at,
        }
    }

    fn ids(entries: &[CardEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.serifu.id.as_str()).collect()
    }

    #[test]
    fn test_oldest_and_newest_by_creation_date() {
        let entries = vec![
            make_entry("a", "2024-01-01", false, None),
            make_entry("b", "2024-03-01", false, None),
            make_entry("c", "2024-02-01", false, None),
        ];

        assert_eq!(ids(&sorted(&entries, SortType::Oldest)), vec!["a", "c", "b"]);
        assert_eq!(ids(&sorted(&entries, SortType::Newest)), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_featured_partition_then_ascending_date() {
        let entries = vec![
            make_entry("plain", "2024-02-01", false, None),
            make_entry("late", "2024-03-01", true, None),
            make_entry("early", "2024-01-01", true, None),
        ];

        assert_eq!(
            ids(&sorted(&entries, SortType::Featured)),
            vec!["early", "late", "plain"]
        );
    }

    #[test]
    fn test_added_orders_treat_missing_timestamp_as_zero() {
        let entries = vec![
            make_entry("old", "2024-01-01", false, Some(1_000)),
            make_entry("unknown", "2024-01-02", false, None),
            make_entry("new", "2024-01-03", false, Some(2_000)),
        ];

        assert_eq!(
            ids(&sorted(&entries, SortType::AddedNewest)),
            vec!["new", "old", "unknown"]
        );
        assert_eq!(
            ids(&sorted(&entries, SortType::AddedOldest)),
            vec!["unknown", "old", "new"]
        );
    }

    #[test]
    fn test_parse_round_trip_and_unknown() {
        for sort in [
            SortType::Newest,
            SortType::Oldest,
            SortType::Featured,
            SortType::AddedNewest,
            SortType::AddedOldest,
        ] {
            assert_eq!(SortType::parse(sort.as_str()), Some(sort));
        }
        assert_eq!(SortType::parse("shuffled"), None);
        assert_eq!(SortType::parse(""), None);
    }
}
