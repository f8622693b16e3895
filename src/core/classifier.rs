use crate::models::{DuplicateConfig, DuplicateVerdict, MatchResult};

/// Turn a ranked scorer output into a duplicate verdict
///
/// The verdict is positive iff at least one result reaches the duplicate
/// threshold. The evidence list is the top of the ranked input either way, so
/// a negative verdict can still carry related-but-unconfirmed candidates.
pub fn classify_duplicates(
    mut results: Vec<MatchResult>,
    config: &DuplicateConfig,
) -> DuplicateVerdict {
    let is_duplicate = results
        .iter()
        .any(|r| r.overall_similarity >= config.duplicate_threshold);

    results.truncate(config.max_evidence);

    DuplicateVerdict {
        is_duplicate,
        evidence: results,
    }
}
