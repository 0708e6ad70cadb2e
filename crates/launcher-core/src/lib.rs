pub mod aggregate;
pub mod envelope;
pub mod error;
pub mod models;
pub mod pagination;
pub mod pipeline;
pub mod render;
pub mod traits;

pub use aggregate::aggregate;
pub use envelope::build_envelope;
pub use error::{Result, SourceError};
pub use models::*;
pub use pagination::{fetch_all_pages, PAGE_SIZE};
pub use pipeline::{dedup, filter_by_query, rank_forks_last, select};
pub use render::{RepoAction, Renderer, DEFAULT_WEB_URL, NO_DESCRIPTION, QUERY_PLACEHOLDER};
pub use traits::RepositorySource;
