use launcher_core::{RepositoryRecord, RepositorySource, Result};

use crate::client::GitHubClient;
use crate::convert::{active_org_logins, convert_repo};

impl RepositorySource for GitHubClient {
    fn user_repositories(&self, page: u32, per_page: u32) -> Result<Vec<RepositoryRecord>> {
        let repos = self.list_user_repos(page, per_page)?;
        Ok(repos.into_iter().map(convert_repo).collect())
    }

    fn starred_repositories(&self, page: u32, per_page: u32) -> Result<Vec<RepositoryRecord>> {
        let repos = self.list_starred(page, per_page)?;
        Ok(repos.into_iter().map(convert_repo).collect())
    }

    fn organizations(&self, page: u32, per_page: u32) -> Result<Vec<String>> {
        let memberships = self.list_org_memberships(page, per_page)?;
        Ok(active_org_logins(memberships))
    }

    fn organization_repositories(
        &self,
        org: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<RepositoryRecord>> {
        let repos = self.list_org_repos(org, page, per_page)?;
        Ok(repos.into_iter().map(convert_repo).collect())
    }
}
