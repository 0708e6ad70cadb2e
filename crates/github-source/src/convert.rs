use launcher_core::RepositoryRecord;

use crate::models::{GitHubOrgMembership, GitHubRepo};

/// Convert a GitHub repository to the pipeline record
pub fn convert_repo(repo: GitHubRepo) -> RepositoryRecord {
    RepositoryRecord::new(repo.full_name, repo.description, repo.fork)
}

/// Logins of the organizations the user is an active member of
pub fn active_org_logins(memberships: Vec<GitHubOrgMembership>) -> Vec<String> {
    memberships
        .into_iter()
        .filter(GitHubOrgMembership::is_active)
        .map(|m| m.organization.login)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn converts_repo_payload() {
        let repo: GitHubRepo = serde_json::from_value(json!({
            "id": 1,
            "full_name": "octo/hello",
            "description": null,
            "fork": true,
            "owner": {"login": "octo", "id": 2}
        }))
        .unwrap();

        let record = convert_repo(repo);

        assert_eq!(record.identity, "octo/hello");
        assert_eq!(record.description, None);
        assert!(record.is_fork);
    }

    #[test]
    fn repo_without_full_name_becomes_blank_record() {
        let repo: GitHubRepo = serde_json::from_value(json!({"description": "x"})).unwrap();
        assert!(convert_repo(repo).is_blank());
    }

    #[test]
    fn pending_memberships_are_skipped() {
        let memberships: Vec<GitHubOrgMembership> = serde_json::from_value(json!([
            {"state": "active", "organization": {"login": "acme"}},
            {"state": "pending", "organization": {"login": "invited"}},
            {"organization": {"login": "legacy"}}
        ]))
        .unwrap();

        assert_eq!(active_org_logins(memberships), vec!["acme", "legacy"]);
    }
}
