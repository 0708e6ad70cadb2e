use crate::models::RepositoryRecord;
use crate::pagination::fetch_all_pages;
use crate::traits::RepositorySource;

/// Collect records from every source in a fixed order.
///
/// Order: the user's own and affiliated repositories, starred repositories,
/// each organization's repositories in discovery order, then `supplemental`.
/// No deduplication happens here.
pub fn aggregate(
    source: &dyn RepositorySource,
    supplemental: &[RepositoryRecord],
) -> Vec<RepositoryRecord> {
    let mut records = fetch_all_pages("user", |page, per_page| {
        source.user_repositories(page, per_page)
    });
    tracing::debug!(count = records.len(), "fetched user repositories");

    let starred = fetch_all_pages("starred", |page, per_page| {
        source.starred_repositories(page, per_page)
    });
    tracing::debug!(count = starred.len(), "fetched starred repositories");
    records.extend(starred);

    let orgs = fetch_all_pages("orgs", |page, per_page| source.organizations(page, per_page));
    tracing::debug!(count = orgs.len(), "discovered organizations");

    for org in &orgs {
        let org_repos = fetch_all_pages(org, |page, per_page| {
            source.organization_repositories(org, page, per_page)
        });
        tracing::debug!(org = %org, count = org_repos.len(), "fetched organization repositories");
        records.extend(org_repos);
    }

    if !supplemental.is_empty() {
        tracing::debug!(count = supplemental.len(), "appending supplemental repositories");
        records.extend_from_slice(supplemental);
    }

    records
}
