// Unit tests for Civic Match

use chrono::{Duration, Utc};
use civic_match::core::{haversine_distance_m, jaccard_similarity, Scorer};
use civic_match::models::{CandidateRecord, Category, Coordinate, MatchingConfig, QueryRecord};

fn create_query(lat: f64, lon: f64, title: &str, description: &str) -> QueryRecord {
    QueryRecord {
        title: title.to_string(),
        description: description.to_string(),
        category: Category::Pothole,
        coordinates: Coordinate::new(lat, lon),
        exclude_id: None,
    }
}

fn create_candidate(
    id: &str,
    lat: f64,
    lon: f64,
    title: &str,
    description: &str,
    hours_ago: i64,
) -> CandidateRecord {
    CandidateRecord {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category: Category::Pothole,
        coordinates: Coordinate::new(lat, lon),
        status: "Submitted".to_string(),
        created_at: Utc::now() - Duration::hours(hours_ago),
    }
}

#[test]
fn test_haversine_zero_for_identical_points() {
    let point = Coordinate::new(12.9716, 77.5946);
    assert_eq!(haversine_distance_m(&point, &point), 0.0);
}

#[test]
fn test_haversine_commutative() {
    let a = Coordinate::new(12.9716, 77.5946);
    let b = Coordinate::new(12.9750, 77.6000);

    let forward = haversine_distance_m(&a, &b);
    let backward = haversine_distance_m(&b, &a);

    assert!((forward - backward).abs() < 1.0);
    assert!(forward > 0.0);
}

#[test]
fn test_haversine_known_distance() {
    // Manhattan to Brooklyn is approximately 5-10 km
    let manhattan = Coordinate::new(40.7580, -73.9855);
    let brooklyn = Coordinate::new(40.6782, -73.9442);

    let distance = haversine_distance_m(&manhattan, &brooklyn);
    assert!(distance > 5_000.0 && distance < 15_000.0);
}

#[test]
fn test_jaccard_symmetric() {
    let a = "deep pothole near the school gate";
    let b = "pothole near school";

    assert_eq!(jaccard_similarity(a, b), jaccard_similarity(b, a));
}

#[test]
fn test_jaccard_range() {
    let pairs = [
        ("pothole on main street", "pothole on main street"),
        ("garbage not collected", "streetlight flickering"),
        ("water leak", "water leak near park"),
    ];

    for (a, b) in pairs {
        let score = jaccard_similarity(a, b);
        assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
    }
}

#[test]
fn test_jaccard_empty_is_zero() {
    assert_eq!(jaccard_similarity("", "pothole on main street"), 0.0);
    assert_eq!(jaccard_similarity("pothole on main street", ""), 0.0);
}

#[test]
fn test_scorer_never_exceeds_distance_gate() {
    let scorer = Scorer::with_default_weights();
    let query = create_query(12.9716, 77.5946, "pothole", "deep pothole");
    let config = MatchingConfig::default();

    // Spread candidates from on-the-spot to ~550m away
    let candidates: Vec<CandidateRecord> = (0..10)
        .map(|i| {
            create_candidate(
                &i.to_string(),
                12.9716 + i as f64 * 0.0005,
                77.5946,
                "pothole",
                "deep pothole",
                1,
            )
        })
        .collect();

    let results = scorer.score_candidates(&query, candidates, &config);

    assert!(!results.is_empty());
    for result in &results {
        assert!(
            result.distance_meters <= config.max_distance_meters,
            "result at {}m leaked past the {}m gate",
            result.distance_meters,
            config.max_distance_meters
        );
    }
}

#[test]
fn test_scorer_never_returns_below_threshold() {
    let scorer = Scorer::with_default_weights();
    let query = create_query(12.9716, 77.5946, "overflowing garbage bin", "smells bad");
    let config = MatchingConfig::default();

    let candidates: Vec<CandidateRecord> = (0..20)
        .map(|i| {
            create_candidate(
                &i.to_string(),
                12.9716 + i as f64 * 0.00004,
                77.5946,
                if i % 2 == 0 { "overflowing garbage bin" } else { "completely unrelated words" },
                if i % 2 == 0 { "smells bad" } else { "nothing shared here" },
                1,
            )
        })
        .collect();

    let results = scorer.score_candidates(&query, candidates, &config);

    for result in &results {
        assert!(result.overall_similarity >= config.similarity_threshold);
    }
}

#[test]
fn test_scorer_output_sorted_non_increasing() {
    let scorer = Scorer::with_default_weights();
    let query = create_query(12.9716, 77.5946, "pothole on main street", "");

    let candidates: Vec<CandidateRecord> = (0..8)
        .map(|i| {
            create_candidate(
                &i.to_string(),
                12.9716 + i as f64 * 0.00005,
                77.5946,
                "pothole on main street",
                "",
                i,
            )
        })
        .collect();

    let results = scorer.score_candidates(&query, candidates, &MatchingConfig::default());

    for window in results.windows(2) {
        assert!(window[0].overall_similarity >= window[1].overall_similarity);
    }
}

#[test]
fn test_scorer_respects_custom_gate() {
    let scorer = Scorer::with_default_weights();
    let query = create_query(12.9716, 77.5946, "pothole", "");
    let config = MatchingConfig {
        max_distance_meters: 500.0,
        ..MatchingConfig::default()
    };

    // ~200m away: outside the default 50m gate, inside a 500m one
    let candidate = create_candidate("1", 12.9734, 77.5946, "pothole", "", 1);

    let results = scorer.score_candidates(&query, vec![candidate.clone()], &config);
    assert_eq!(results.len(), 1);

    let default_results =
        scorer.score_candidates(&query, vec![candidate], &MatchingConfig::default());
    assert!(default_results.is_empty());
}
