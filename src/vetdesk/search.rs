//! Free-text and categorical filtering over in-memory collections.
//!
//! Every list view filters with the same two predicates, composed with AND:
//! a lowercased substring match over a fixed per-domain field list, and an
//! exact match on one categorical field with an "all"/empty sentinel meaning
//! no filtering. Linear scans; collections are small and entirely in memory.

/// True when the lowercased query is a substring of any field.
/// An empty (or whitespace-only) query matches everything.
pub fn matches_query(query: &str, fields: &[&str]) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields.iter().any(|f| f.to_lowercase().contains(&needle))
}

/// Exact match on a categorical field. `None`, `""` and `"all"` (any case)
/// are sentinels that match everything.
pub fn category_matches(selected: Option<&str>, value: &str) -> bool {
    match selected {
        None => true,
        Some(s) => {
            let s = s.trim();
            s.is_empty() || s.eq_ignore_ascii_case("all") || s.eq_ignore_ascii_case(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_is_case_insensitive_substring() {
        assert!(matches_query("sim", &["Simba", "A-001"]));
        assert!(matches_query("SIM", &["Simba"]));
        assert!(matches_query("mwangi", &["Simba", "John Mwangi"]));
        assert!(!matches_query("zzz", &["Simba", "A-001", "John Mwangi"]));
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(matches_query("", &["anything"]));
        assert!(matches_query("   ", &["anything"]));
        assert!(matches_query("", &[]));
    }

    #[test]
    fn category_sentinels_disable_filtering() {
        assert!(category_matches(None, "Scheduled"));
        assert!(category_matches(Some(""), "Scheduled"));
        assert!(category_matches(Some("All"), "Scheduled"));
        assert!(category_matches(Some("all"), "Scheduled"));
    }

    #[test]
    fn category_filters_by_exact_value() {
        assert!(category_matches(Some("Nairobi"), "Nairobi"));
        assert!(category_matches(Some("nairobi"), "Nairobi"));
        assert!(!category_matches(Some("Nairobi"), "Mombasa"));
    }
}
