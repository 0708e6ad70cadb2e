use serde::Deserialize;

/// The subset of a GitHub repository payload the launcher needs
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubRepo {
    /// "owner/name"; left empty when the payload lacks it so dedup can drop the record
    #[serde(default)]
    pub full_name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub fork: bool,
}

/// GitHub organization (minimal representation)
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubOrg {
    pub login: String,
}

/// Entry of `/user/memberships/orgs`
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubOrgMembership {
    #[serde(default)]
    pub state: Option<String>,
    pub organization: GitHubOrg,
}

impl GitHubOrgMembership {
    /// Pending invitations grant no access to the organization's repositories
    pub fn is_active(&self) -> bool {
        self.state.as_deref().map_or(true, |s| s == "active")
    }
}
