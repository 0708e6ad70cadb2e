use serde::de::DeserializeOwned;
use std::time::Duration;
use ureq::Agent;

use crate::error::{GitHubError, Result};
use crate::models::*;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Affiliations covered by the combined "my repositories" query
const USER_AFFILIATION: &str = "owner,collaborator,organization_member";

/// GitHub REST API client
pub struct GitHubClient {
    agent: Agent,
    base_url: String,
    user: Option<String>,
    token: String,
}

impl GitHubClient {
    /// Create a new GitHub client targeting api.github.com
    pub fn new(user: Option<&str>, token: &str) -> Self {
        Self::with_base_url(DEFAULT_API_URL, user, token)
    }

    /// Create a new GitHub client with a custom base URL (for GitHub Enterprise or testing)
    pub fn with_base_url(base_url: &str, user: Option<&str>, token: &str) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(30)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            user: user.filter(|u| !u.is_empty()).map(str::to_string),
            token: token.to_string(),
        }
    }

    /// Get the account this client lists starred repositories for, if any
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Build the Authorization header value
    fn auth_header(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// Check response status and return error if not successful
    fn check_response(
        &self,
        mut response: ureq::http::Response<ureq::Body>,
    ) -> Result<ureq::http::Response<ureq::Body>> {
        let status = response.status().as_u16();

        if (200..300).contains(&status) {
            return Ok(response);
        }

        // Detect rate limiting: 403 with x-ratelimit-remaining: 0
        if status == 403 {
            if let Some(remaining) = response.headers().get("x-ratelimit-remaining") {
                if remaining.to_str().unwrap_or("") == "0" {
                    return Err(GitHubError::RateLimited);
                }
            }
        }

        let body = response
            .body_mut()
            .read_to_string()
            .unwrap_or_else(|_| String::new());

        let message = if let Ok(error_response) = serde_json::from_str::<serde_json::Value>(&body) {
            error_response
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or(&body)
                .to_string()
        } else if body.is_empty() {
            format!("HTTP {}", status)
        } else {
            body
        };

        if status == 401 {
            Err(GitHubError::Unauthorized)
        } else {
            Err(GitHubError::Api { status, message })
        }
    }

    /// GET one page of a list endpoint. `path` may already carry a query string.
    fn get_page<T: DeserializeOwned>(&self, path: &str, page: u32, per_page: u32) -> Result<Vec<T>> {
        let separator = if path.contains('?') { '&' } else { '?' };
        let url = format!(
            "{}{}{}per_page={}&page={}",
            self.base_url, path, separator, per_page, page
        );
        tracing::debug!(%url, "GET");

        let response = self
            .agent
            .get(&url)
            .header("Authorization", &self.auth_header())
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .call()
            .map_err(GitHubError::Http)?;

        let mut response = self.check_response(response)?;
        let items: Vec<T> = response.body_mut().read_json()?;
        Ok(items)
    }

    // ==================== Repository Operations ====================

    /// List repositories the user owns, collaborates on, or reaches through an organization
    pub fn list_user_repos(&self, page: u32, per_page: u32) -> Result<Vec<GitHubRepo>> {
        let path = format!("/user/repos?affiliation={}", USER_AFFILIATION);
        self.get_page(&path, page, per_page)
    }

    /// List starred repositories; uses the public listing when a user name is configured
    pub fn list_starred(&self, page: u32, per_page: u32) -> Result<Vec<GitHubRepo>> {
        let path = match &self.user {
            Some(user) => format!("/users/{}/starred", urlencoding::encode(user)),
            None => "/user/starred".to_string(),
        };
        self.get_page(&path, page, per_page)
    }

    /// List repositories of an organization
    pub fn list_org_repos(&self, org: &str, page: u32, per_page: u32) -> Result<Vec<GitHubRepo>> {
        let path = format!("/orgs/{}/repos", urlencoding::encode(org));
        self.get_page(&path, page, per_page)
    }

    // ==================== Organization Operations ====================

    /// List the authenticated user's organization memberships
    pub fn list_org_memberships(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<GitHubOrgMembership>> {
        self.get_page("/user/memberships/orgs", page, per_page)
    }
}
