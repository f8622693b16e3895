use crate::core::{classifier::classify_duplicates, scorer::Scorer};
use crate::models::{
    CandidateQuery, DuplicateConfig, DuplicateVerdict, MatchResult, MatchingConfig, QueryRecord,
    ScoreWeights,
};
use crate::services::source::{CandidateSource, FetchError};
use chrono::{Duration, Utc};
use thiserror::Error;
use validator::Validate;

/// Errors the engine can surface to its caller
///
/// The taxonomy is narrow on purpose: empty text and empty candidate sets are
/// valid outcomes, not failures.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The candidate source could not complete its read. Propagated as-is,
    /// never retried and never converted into an empty-result success.
    #[error("candidate fetch failed: {0}")]
    CandidateFetchFailed(#[from] FetchError),

    /// Query coordinate outside valid latitude/longitude ranges, rejected
    /// before any distance computation.
    #[error("invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },
}

/// Similarity engine - the async orchestrator over a candidate source
///
/// Stateless between calls: each invocation fetches a snapshot, scores it in
/// memory and returns. Invocations may run concurrently without coordination;
/// cancellation simply drops the in-flight fetch.
///
/// The engine carries two named configurations. `find_similar` scans with the
/// standard inclusion bound (0.3 by default), while `check_duplicate` re-runs
/// the same scan with the looser evidence bound (0.5) before applying the
/// strict duplicate threshold (0.8).
#[derive(Debug, Clone)]
pub struct SimilarityEngine<S> {
    source: S,
    scorer: Scorer,
    matching: MatchingConfig,
    duplicate: DuplicateConfig,
}

impl<S: CandidateSource> SimilarityEngine<S> {
    /// Create an engine with default policy constants
    pub fn new(source: S) -> Self {
        Self {
            source,
            scorer: Scorer::with_default_weights(),
            matching: MatchingConfig::default(),
            duplicate: DuplicateConfig::default(),
        }
    }

    /// Create an engine with explicit policy configuration
    pub fn with_config(
        source: S,
        weights: ScoreWeights,
        matching: MatchingConfig,
        duplicate: DuplicateConfig,
    ) -> Self {
        Self {
            source,
            scorer: Scorer::new(weights),
            matching,
            duplicate,
        }
    }

    /// Find records similar to the query, ranked by overall score descending
    ///
    /// An empty result is a valid, successful outcome.
    pub async fn find_similar(&self, query: &QueryRecord) -> Result<Vec<MatchResult>, EngineError> {
        self.find_similar_with(query, &self.matching).await
    }

    /// Decide whether the query is a duplicate of an existing record
    ///
    /// The evidence list holds the strongest candidates whether or not the
    /// verdict is positive.
    pub async fn check_duplicate(
        &self,
        query: &QueryRecord,
    ) -> Result<DuplicateVerdict, EngineError> {
        let evidence_scan = MatchingConfig {
            similarity_threshold: self.duplicate.evidence_threshold,
            ..self.matching
        };

        let results = self.find_similar_with(query, &evidence_scan).await?;

        Ok(classify_duplicates(results, &self.duplicate))
    }

    async fn find_similar_with(
        &self,
        query: &QueryRecord,
        config: &MatchingConfig,
    ) -> Result<Vec<MatchResult>, EngineError> {
        // Fail fast before any distance math
        query
            .coordinates
            .validate()
            .map_err(|_| EngineError::InvalidCoordinate {
                latitude: query.coordinates.latitude,
                longitude: query.coordinates.longitude,
            })?;

        let candidate_query = CandidateQuery {
            category: query.category,
            created_after: Utc::now() - Duration::days(config.recency_window_days),
            exclude_id: query.exclude_id.clone(),
        };

        let candidates = self.source.fetch_candidates(&candidate_query).await?;
        let total = candidates.len();

        let results = self.scorer.score_candidates(query, candidates, config);

        tracing::debug!(
            "scored {} of {} candidates above threshold {}",
            results.len(),
            total,
            config.similarity_threshold
        );

        Ok(results)
    }
}
