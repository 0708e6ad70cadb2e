pub mod client;
mod convert;
pub mod error;
pub mod models;
mod trait_impl;


pub use client::GitHubClient;
pub use error::{GitHubError, Result};
pub use models::*;

// Re-export launcher-core types for convenience
pub use launcher_core::{RepositorySource, SourceError};
