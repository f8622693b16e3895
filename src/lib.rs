//! Civic Match - duplicate and similarity detection engine for citizen issue reports
//!
//! This library decides whether a newly reported issue is the same real-world
//! event as previously recorded issues, using location proximity, recency,
//! category match and free-text overlap. It consumes a read-only candidate
//! snapshot through the [`CandidateSource`] trait and returns ranked results;
//! storage, transport and record lifecycle belong to the surrounding system.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    haversine_distance_m, jaccard_similarity, EngineError, Scorer, SimilarityEngine,
};
pub use crate::models::{
    CandidateQuery, CandidateRecord, Category, Coordinate, DuplicateConfig, DuplicateVerdict,
    MatchResult, MatchingConfig, QueryRecord, ScoreWeights,
};
pub use crate::services::{CandidateSource, FetchError, InMemoryCandidateSource};
