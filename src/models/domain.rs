use serde::{Deserialize, Serialize};
use validator::Validate;

/// A WGS84 point in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct Coordinate {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Report category assigned before duplicate checking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Pothole,
    Garbage,
    Streetlight,
    Drainage,
    WaterLeakage,
    PowerOutage,
    Other,
}

impl Category {
    /// Department responsible for this category of report
    ///
    /// This mapping is a caller-side capability: the engine itself never
    /// routes reports, it only matches them.
    pub fn department(&self) -> &'static str {
        match self {
            Category::Pothole => "Roads Department",
            Category::Garbage => "Sanitation Department",
            Category::Streetlight | Category::PowerOutage => "Electricity Department",
            Category::Drainage | Category::WaterLeakage => "Water Department",
            Category::Other => "Other",
        }
    }
}

/// The prospective new report being checked against existing records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRecord {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    pub coordinates: Coordinate,
    /// Stored record to leave out of matching, when refreshing the
    /// similar-reports view for a record that already exists.
    /// New submissions carry no exclusion.
    #[serde(default)]
    pub exclude_id: Option<String>,
}

/// An existing stored record, as a read-only snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    pub coordinates: Coordinate,
    pub status: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// One scored candidate, with presentation-rounded fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub id: String,
    pub title: String,
    pub status: String,
    pub distance_meters: f64,
    pub text_similarity: f64,
    pub overall_similarity: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Duplicate decision plus the strongest evidence, capped at
/// `DuplicateConfig::max_evidence` entries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicateVerdict {
    pub is_duplicate: bool,
    pub evidence: Vec<MatchResult>,
}

/// Parameters handed to the candidate source for the fetch stage
#[derive(Debug, Clone)]
pub struct CandidateQuery {
    pub category: Category,
    pub created_after: chrono::DateTime<chrono::Utc>,
    pub exclude_id: Option<String>,
}

/// Score fusion weights
///
/// These are the tuning surface of the algorithm: 60% location, 40% text.
#[derive(Debug, Clone, Copy)]
pub struct ScoreWeights {
    pub location: f64,
    pub text: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            location: 0.6,
            text: 0.4,
        }
    }
}

/// Candidate scan policy for the similarity lookup path
#[derive(Debug, Clone, Copy)]
pub struct MatchingConfig {
    /// Hard distance gate; candidates beyond it are never scored
    pub max_distance_meters: f64,
    /// Recency window measured backward from "now"
    pub recency_window_days: i64,
    /// Minimum overall score to be included in results at all
    pub similarity_threshold: f64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            max_distance_meters: 50.0,
            recency_window_days: 7,
            similarity_threshold: 0.3,
        }
    }
}

/// Policy for the duplicate-check path
///
/// Kept separate from `MatchingConfig` on purpose: duplicate checking scans
/// with a looser inclusion bound (0.5) to surface more evidence, then applies
/// the stricter duplicate threshold (0.8) to the verdict.
#[derive(Debug, Clone, Copy)]
pub struct DuplicateConfig {
    /// Inclusion bound used when scanning for duplicate evidence
    pub evidence_threshold: f64,
    /// Minimum overall score for a positive duplicate verdict
    pub duplicate_threshold: f64,
    /// Cap on the evidence list in the verdict
    pub max_evidence: usize,
}

impl Default for DuplicateConfig {
    fn default() -> Self {
        Self {
            evidence_threshold: 0.5,
            duplicate_threshold: 0.8,
            max_evidence: 5,
        }
    }
}
