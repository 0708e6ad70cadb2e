use launcher_core::SourceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("HTTP error: {0}")]
    Http(#[from] ureq::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Authentication failed")]
    Unauthorized,

    #[error("Rate limited")]
    RateLimited,

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, GitHubError>;

impl From<GitHubError> for SourceError {
    fn from(err: GitHubError) -> Self {
        match err {
            // ureq surfaces body decoding failures as its own error type
            GitHubError::Http(ureq::Error::Json(e)) => SourceError::Parse(e.to_string()),
            GitHubError::Http(e) => SourceError::Http(e.to_string()),
            GitHubError::Parse(e) => SourceError::Parse(e.to_string()),
            GitHubError::Unauthorized => SourceError::Unauthorized,
            GitHubError::RateLimited => SourceError::RateLimited,
            GitHubError::Api { status, message } => SourceError::Api { status, message },
        }
    }
}
