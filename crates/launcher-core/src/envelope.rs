use crate::aggregate::aggregate;
use crate::models::{Envelope, RepositoryRecord};
use crate::pipeline::select;
use crate::render::Renderer;
use crate::traits::RepositorySource;

/// Run one full invocation: aggregate, dedup, rank, filter, render, wrap.
///
/// Never fails. Source errors only shrink the item list, and an empty list
/// still yields a well-formed envelope.
pub fn build_envelope(
    source: &dyn RepositorySource,
    supplemental: &[RepositoryRecord],
    renderer: &Renderer,
    query: &str,
    cache_seconds: u64,
) -> Envelope {
    let records = aggregate(source, supplemental);
    tracing::debug!(count = records.len(), "aggregated repositories");

    let selected = select(records, query);
    Envelope::new(cache_seconds, renderer.render_items(&selected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Result, SourceError};

    /// Source whose every endpoint fails, as with a revoked token
    struct RejectingSource;

    impl RepositorySource for RejectingSource {
        fn user_repositories(&self, _: u32, _: u32) -> Result<Vec<RepositoryRecord>> {
            Err(SourceError::Unauthorized)
        }

        fn starred_repositories(&self, _: u32, _: u32) -> Result<Vec<RepositoryRecord>> {
            Err(SourceError::Unauthorized)
        }

        fn organizations(&self, _: u32, _: u32) -> Result<Vec<String>> {
            Err(SourceError::Unauthorized)
        }

        fn organization_repositories(&self, _: &str, _: u32, _: u32) -> Result<Vec<RepositoryRecord>> {
            Err(SourceError::Unauthorized)
        }
    }

    #[test]
    fn failing_source_yields_empty_envelope() {
        // Arrange
        let renderer = Renderer::default();
        // Act
        let envelope = build_envelope(&RejectingSource, &[], &renderer, "", 300);
        // Assert
        assert!(envelope.items.is_empty());
        assert_eq!(
            serde_json::to_string(&envelope).unwrap(),
            r#"{"cache":{"seconds":300,"loosereload":true},"items":[]}"#
        );
    }

    #[test]
    fn supplemental_records_are_rendered_when_sources_fail() {
        let renderer = Renderer::default();
        let supplemental = vec![
            RepositoryRecord::new("corp/private", None, false),
            RepositoryRecord::new("corp/mirror", Some("upstream mirror".to_string()), true),
        ];

        let envelope = build_envelope(&RejectingSource, &supplemental, &renderer, "corp", 60);

        assert_eq!(envelope.items.len(), 11);
        assert_eq!(envelope.items[0].subtitle, "No description provided");
        assert_eq!(envelope.items[10].title, "corp/mirror - upstream mirror");
    }

    #[test]
    fn unmatched_query_yields_empty_items() {
        let renderer = Renderer::default();
        let supplemental = vec![RepositoryRecord::new("corp/private", None, false)];

        let envelope = build_envelope(&RejectingSource, &supplemental, &renderer, "zzz", 60);

        assert!(envelope.items.is_empty());
        assert!(envelope.cache.loosereload);
    }
}
