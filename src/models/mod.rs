// Model exports
pub mod domain;

pub use domain::{
    CandidateQuery, CandidateRecord, Category, Coordinate, DuplicateConfig, DuplicateVerdict,
    MatchResult, MatchingConfig, QueryRecord, ScoreWeights,
};
