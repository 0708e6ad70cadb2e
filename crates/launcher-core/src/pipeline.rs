use std::collections::HashSet;

use crate::models::RepositoryRecord;

/// Keep the first record seen for each identity, preserving order.
/// Records with a blank identity are dropped.
pub fn dedup(records: Vec<RepositoryRecord>) -> Vec<RepositoryRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|r| !r.is_blank())
        .filter(|r| seen.insert(r.identity.clone()))
        .collect()
}

/// Stable partition: non-forks first, then forks
pub fn rank_forks_last(records: Vec<RepositoryRecord>) -> Vec<RepositoryRecord> {
    let (mut primary, forks): (Vec<_>, Vec<_>) = records.into_iter().partition(|r| !r.is_fork);
    primary.extend(forks);
    primary
}

/// Case-insensitive substring match against identity and description.
/// A blank query keeps everything.
pub fn filter_by_query(records: Vec<RepositoryRecord>, query: &str) -> Vec<RepositoryRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return records;
    }

    records
        .into_iter()
        .filter(|r| r.search_text().to_lowercase().contains(&needle))
        .collect()
}

/// Dedup, rank forks last, then filter by `query`
pub fn select(records: Vec<RepositoryRecord>, query: &str) -> Vec<RepositoryRecord> {
    let unique = dedup(records);
    tracing::debug!(count = unique.len(), "deduplicated repositories");

    let ranked = rank_forks_last(unique);
    let matched = filter_by_query(ranked, query);
    tracing::debug!(count = matched.len(), query, "filtered repositories");

    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(identity: &str, description: Option<&str>, is_fork: bool) -> RepositoryRecord {
        RepositoryRecord::new(identity, description.map(str::to_string), is_fork)
    }

    fn identities(records: &[RepositoryRecord]) -> Vec<&str> {
        records.iter().map(|r| r.identity.as_str()).collect()
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        // Arrange: the second "a/x" carries a different description
        let records = vec![
            rec("a/x", Some("from user repos"), false),
            rec("b/y", None, false),
            rec("a/x", Some("from starred"), true),
        ];
        // Act
        let unique = dedup(records);
        // Assert
        assert_eq!(identities(&unique), vec!["a/x", "b/y"]);
        assert_eq!(unique[0].description.as_deref(), Some("from user repos"));
        assert!(!unique[0].is_fork);
    }

    #[test]
    fn dedup_drops_blank_identities() {
        let records = vec![rec("", None, false), rec("a/x", None, false), rec("   ", None, true)];
        assert_eq!(identities(&dedup(records)), vec!["a/x"]);
    }

    #[test]
    fn rank_forks_last_preserves_relative_order() {
        let records = vec![
            rec("f/1", None, true),
            rec("p/1", None, false),
            rec("f/2", None, true),
            rec("p/2", None, false),
        ];

        let ranked = rank_forks_last(records);

        assert_eq!(identities(&ranked), vec!["p/1", "p/2", "f/1", "f/2"]);
    }

    #[test]
    fn filter_is_case_insensitive_on_identity_and_description() {
        let records = vec![
            rec("Me/Dotfiles", None, false),
            rec("me/notes", Some("Personal DOTFILES backup"), false),
            rec("me/other", Some("unrelated"), false),
        ];

        let matched = filter_by_query(records, "dotfiles");

        assert_eq!(identities(&matched), vec!["Me/Dotfiles", "me/notes"]);
    }

    #[test]
    fn empty_query_matches_everything() {
        let records = vec![rec("a/x", None, false), rec("b/y", None, true)];
        assert_eq!(filter_by_query(records.clone(), "").len(), 2);
        assert_eq!(filter_by_query(records, "  ").len(), 2);
    }

    #[test]
    fn filter_spans_identity_and_description_boundary() {
        let records = vec![rec("me/tool", Some("cli helper"), false)];
        assert_eq!(filter_by_query(records, "tool cli").len(), 1);
    }

    #[test]
    fn select_runs_dedup_rank_and_filter() {
        let records = vec![
            rec("orgA/repo1", Some("desc1"), false),
            rec("orgA/repo1", Some("desc1"), false),
            rec("me/forked", Some("desc2"), true),
            rec("me/repo1-fork", None, true),
            rec("me/repo10", None, false),
        ];

        let selected = select(records, "REPO1");

        assert_eq!(
            identities(&selected),
            vec!["orgA/repo1", "me/repo10", "me/repo1-fork"]
        );
    }
}
