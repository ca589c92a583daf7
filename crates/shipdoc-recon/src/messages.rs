//! # Warning Message Merging
//!
//! A store-layer helper, deliberately kept beside — not inside — the
//! engine: when a document is re-validated after an edit, the persistence
//! layer folds the fresh warnings into whatever it kept from earlier
//! revisions. The engine itself has no notion of previous runs.

/// Merge two warning lists into one deduplicated, order-preserving list.
///
/// First occurrence wins: `old` entries keep their positions, `new`
/// entries append in order, duplicates drop.
pub fn merge_messages(old: &[String], new: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(old.len() + new.len());
    let mut seen = std::collections::HashSet::new();
    for message in old.iter().chain(new) {
        if seen.insert(message.clone()) {
            merged.push(message.clone());
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_merge_preserves_order_first_occurrence_wins() {
        let old = strings(&["a", "b"]);
        let new = strings(&["b", "c", "a", "d"]);
        assert_eq!(merge_messages(&old, &new), strings(&["a", "b", "c", "d"]));
    }

    #[test]
    fn test_merge_dedupes_within_one_side() {
        let new = strings(&["x", "x", "y"]);
        assert_eq!(merge_messages(&[], &new), strings(&["x", "y"]));
    }

    #[test]
    fn test_merge_empty_sides() {
        assert!(merge_messages(&[], &[]).is_empty());
        let old = strings(&["only"]);
        assert_eq!(merge_messages(&old, &[]), old);
    }
}
