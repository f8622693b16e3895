use crate::core::{distance::haversine_distance_m, text::jaccard_similarity};
use crate::models::{CandidateRecord, MatchResult, MatchingConfig, QueryRecord, ScoreWeights};

/// Similarity scorer - fuses location and text signals into one ranked list
///
/// # Pipeline per candidate
/// 1. Distance gate: beyond `max_distance_meters` the candidate is discarded
///    before any scoring happens
/// 2. Text score over the `"title description"` concatenations
/// 3. `location_score = 1 - distance / max_distance_meters`
/// 4. `overall = location_weight * location_score + text_weight * text_score`
/// 5. Inclusion threshold on the overall score
#[derive(Debug, Clone)]
pub struct Scorer {
    weights: ScoreWeights,
}

impl Scorer {
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoreWeights::default(),
        }
    }

    /// Score a candidate snapshot against a query record
    ///
    /// Candidates arrive in no particular order; the returned list is sorted
    /// by overall score descending, ties broken by creation time descending
    /// so the most recent record ranks first. Pure computation: the result is
    /// a function of (query, candidates, config) alone.
    pub fn score_candidates(
        &self,
        query: &QueryRecord,
        candidates: Vec<CandidateRecord>,
        config: &MatchingConfig,
    ) -> Vec<MatchResult> {
        let query_text = format!("{} {}", query.title, query.description);

        let mut results: Vec<MatchResult> = candidates
            .into_iter()
            .filter_map(|candidate| {
                let distance = haversine_distance_m(&query.coordinates, &candidate.coordinates);

                // Hard gate: out-of-range candidates never reach scoring
                if distance > config.max_distance_meters {
                    return None;
                }

                let candidate_text = format!("{} {}", candidate.title, candidate.description);
                let text_score = jaccard_similarity(&query_text, &candidate_text);

                let location_score = 1.0 - (distance / config.max_distance_meters);
                let overall =
                    self.weights.location * location_score + self.weights.text * text_score;

                // Threshold applies to the unrounded score
                if overall < config.similarity_threshold {
                    return None;
                }

                Some(MatchResult {
                    id: candidate.id,
                    title: candidate.title,
                    status: candidate.status,
                    distance_meters: round2(distance),
                    text_similarity: round2(text_score),
                    overall_similarity: round2(overall),
                    created_at: candidate.created_at,
                })
            })
            .collect();

        results.sort_by(|a, b| {
            b.overall_similarity
                .partial_cmp(&a.overall_similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });

        results
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Round to 2 decimals for presentation
#[inline]
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
