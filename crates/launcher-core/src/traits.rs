use crate::error::Result;
use crate::models::RepositoryRecord;

/// A provider of repository listings
///
/// Every method fetches exactly one page. Looping over pages is left to
/// [`crate::pagination::fetch_all_pages`], so implementations stay a thin
/// mapping from one HTTP request to one page of results.
pub trait RepositorySource {
    /// Repositories the user owns, collaborates on, or can see through an organization
    fn user_repositories(&self, page: u32, per_page: u32) -> Result<Vec<RepositoryRecord>>;

    /// Repositories the user has starred
    fn starred_repositories(&self, page: u32, per_page: u32) -> Result<Vec<RepositoryRecord>>;

    /// Logins of the organizations the user belongs to
    fn organizations(&self, page: u32, per_page: u32) -> Result<Vec<String>>;

    /// Repositories belonging to one organization
    fn organization_repositories(
        &self,
        org: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<RepositoryRecord>>;
}
