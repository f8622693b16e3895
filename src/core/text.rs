use std::collections::HashSet;

/// Calculate Jaccard similarity between two text blobs (0.0 to 1.0)
///
/// Word sets are lower-cased and whitespace-tokenized; the score is
/// intersection size over union size. This is deliberately a cheap lexical
/// heuristic: no stemming, no punctuation stripping. If either blob
/// tokenizes to an empty set the score is 0.0, so emptiness never reads as
/// similarity.
pub fn jaccard_similarity(text1: &str, text2: &str) -> f64 {
    let lower1 = text1.to_lowercase();
    let lower2 = text2.to_lowercase();

    let words1: HashSet<&str> = lower1.split_whitespace().collect();
    let words2: HashSet<&str> = lower2.split_whitespace().collect();

    if words1.is_empty() || words2.is_empty() {
        return 0.0;
    }

    let intersection = words1.intersection(&words2).count();
    let union = words1.union(&words2).count();

    intersection as f64 / union as f64
}
