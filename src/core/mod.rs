// Core algorithm exports
pub mod classifier;
pub mod distance;
pub mod engine;
pub mod scorer;
pub mod text;

pub use classifier::classify_duplicates;
pub use distance::haversine_distance_m;
pub use engine::{EngineError, SimilarityEngine};
pub use scorer::Scorer;
pub use text::jaccard_similarity;
