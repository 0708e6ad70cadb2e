use crate::models::{ActionItem, RepositoryRecord};

/// Subtitle used when a repository has no description
pub const NO_DESCRIPTION: &str = "No description provided";

/// Token the launcher replaces with the user's argument when an item is run
pub const QUERY_PLACEHOLDER: &str = "{query}";

pub const DEFAULT_WEB_URL: &str = "https://github.com";

/// Collaboration shortcuts rendered for every non-fork repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoAction {
    Issues,
    NewIssue,
    IssueNumber,
    OpenBugs,
    PullRequests,
    NewPullRequest,
    PullRequestNumber,
    Tags,
    CreatePullRequest,
}

impl RepoAction {
    /// Render order
    pub const ALL: [RepoAction; 9] = [
        RepoAction::Issues,
        RepoAction::NewIssue,
        RepoAction::IssueNumber,
        RepoAction::OpenBugs,
        RepoAction::PullRequests,
        RepoAction::NewPullRequest,
        RepoAction::PullRequestNumber,
        RepoAction::Tags,
        RepoAction::CreatePullRequest,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RepoAction::Issues => "Issues",
            RepoAction::NewIssue => "New Issue",
            RepoAction::IssueNumber => "Issue #",
            RepoAction::OpenBugs => "Open Bugs",
            RepoAction::PullRequests => "Pull Requests",
            RepoAction::NewPullRequest => "New PR",
            RepoAction::PullRequestNumber => "PR #",
            RepoAction::Tags => "Tags",
            RepoAction::CreatePullRequest => "Create PR",
        }
    }

    fn subtitle(self) -> &'static str {
        match self {
            RepoAction::Issues => "Open the issue list",
            RepoAction::NewIssue => "Open a new issue",
            RepoAction::IssueNumber => "Open an issue by number",
            RepoAction::OpenBugs => "Search open issues labelled bug",
            RepoAction::PullRequests => "Open the pull request list",
            RepoAction::NewPullRequest => "Compare branches for a new pull request",
            RepoAction::PullRequestNumber => "Open a pull request by number",
            RepoAction::Tags => "Browse tags",
            RepoAction::CreatePullRequest => "Create a pull request from a branch",
        }
    }

    fn copy_subtitle(self) -> &'static str {
        match self {
            RepoAction::Issues => "Copy issues URL to clipboard",
            RepoAction::NewIssue => "Copy new issue URL to clipboard",
            RepoAction::IssueNumber => "Copy issue URL to clipboard",
            RepoAction::OpenBugs => "Copy open bugs URL to clipboard",
            RepoAction::PullRequests => "Copy pull requests URL to clipboard",
            RepoAction::NewPullRequest => "Copy compare URL to clipboard",
            RepoAction::PullRequestNumber => "Copy pull request URL to clipboard",
            RepoAction::Tags => "Copy tags URL to clipboard",
            RepoAction::CreatePullRequest => "Copy create PR URL to clipboard",
        }
    }

    /// Path appended to the repository URL
    fn path(self) -> String {
        match self {
            RepoAction::Issues => "/issues".to_string(),
            RepoAction::NewIssue => "/issues/new".to_string(),
            RepoAction::IssueNumber => format!("/issues/{QUERY_PLACEHOLDER}"),
            RepoAction::OpenBugs => "/issues?q=is%3Aissue+is%3Aopen+label%3Abug".to_string(),
            RepoAction::PullRequests => "/pulls".to_string(),
            RepoAction::NewPullRequest => "/compare".to_string(),
            RepoAction::PullRequestNumber => format!("/pull/{QUERY_PLACEHOLDER}"),
            RepoAction::Tags => "/tags".to_string(),
            RepoAction::CreatePullRequest => format!("/compare/{QUERY_PLACEHOLDER}?expand=1"),
        }
    }
}

/// Turns repository records into launcher items
#[derive(Debug, Clone)]
pub struct Renderer {
    web_url: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(DEFAULT_WEB_URL)
    }
}

impl Renderer {
    pub fn new(web_url: &str) -> Self {
        Self {
            web_url: web_url.trim_end_matches('/').to_string(),
        }
    }

    /// Canonical web address of a repository
    pub fn repo_url(&self, record: &RepositoryRecord) -> String {
        format!("{}/{}", self.web_url, record.identity)
    }

    /// The "open repository" item, followed by the collaboration shortcuts for non-forks
    pub fn render_record(&self, record: &RepositoryRecord) -> Vec<ActionItem> {
        let description = match record.description.as_deref() {
            Some(desc) if !desc.trim().is_empty() => desc,
            _ => NO_DESCRIPTION,
        };
        let repo_url = self.repo_url(record);

        let mut items = vec![ActionItem::new(
            format!("{} - {}", record.identity, description),
            description,
            repo_url.clone(),
        )
        .with_copy("Copy URL to clipboard")];

        if record.is_fork {
            return items;
        }

        items.extend(RepoAction::ALL.iter().map(|action| {
            ActionItem::new(
                format!("{}: {}", record.identity, action.label()),
                action.subtitle(),
                format!("{}{}", repo_url, action.path()),
            )
            .with_copy(action.copy_subtitle())
        }));

        items
    }

    pub fn render_items(&self, records: &[RepositoryRecord]) -> Vec<ActionItem> {
        let items: Vec<ActionItem> = records
            .iter()
            .flat_map(|record| self.render_record(record))
            .collect();
        tracing::debug!(records = records.len(), items = items.len(), "rendered items");
        items
    }
}
