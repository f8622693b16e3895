use crate::models::{CandidateQuery, CandidateRecord};
use crate::services::source::{CandidateSource, FetchError};

/// In-memory candidate source
///
/// Reference implementation of the collaborator contract, used by tests and
/// by embedders that already hold a record snapshot. Applies the category,
/// recency and exclusion filters the contract requires and nothing else.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCandidateSource {
    records: Vec<CandidateRecord>,
}

impl InMemoryCandidateSource {
    pub fn new(records: Vec<CandidateRecord>) -> Self {
        Self { records }
    }

    pub fn push(&mut self, record: CandidateRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl CandidateSource for InMemoryCandidateSource {
    async fn fetch_candidates(
        &self,
        query: &CandidateQuery,
    ) -> Result<Vec<CandidateRecord>, FetchError> {
        let matches = self
            .records
            .iter()
            .filter(|record| record.category == query.category)
            .filter(|record| record.created_at >= query.created_after)
            .filter(|record| query.exclude_id.as_deref() != Some(record.id.as_str()))
            .cloned()
            .collect();

        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Coordinate};
    use chrono::{Duration, Utc};

    fn record(id: &str, category: Category, days_ago: i64) -> CandidateRecord {
        CandidateRecord {
            id: id.to_string(),
            title: "pothole near market".to_string(),
            description: String::new(),
            category,
            coordinates: Coordinate::new(12.9716, 77.5946),
            status: "Submitted".to_string(),
            created_at: Utc::now() - Duration::days(days_ago),
        }
    }

    fn window_query(category: Category, exclude_id: Option<&str>) -> CandidateQuery {
        CandidateQuery {
            category,
            created_after: Utc::now() - Duration::days(7),
            exclude_id: exclude_id.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_filters_by_category() {
        let source = InMemoryCandidateSource::new(vec![
            record("1", Category::Pothole, 1),
            record("2", Category::Garbage, 1),
        ]);

        let results = source
            .fetch_candidates(&window_query(Category::Pothole, None))
            .await
            .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "1");
    }

    #[tokio::test]
    async fn test_filters_by_recency() {
        let source = InMemoryCandidateSource::new(vec![
            record("recent", Category::Pothole, 1),
            record("stale", Category::Pothole, 10),
        ]);

        let results = source
            .fetch_candidates(&window_query(Category::Pothole, None))
            .await
            .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "recent");
    }

    #[tokio::test]
    async fn test_excludes_by_id() {
        let source = InMemoryCandidateSource::new(vec![
            record("1", Category::Pothole, 1),
            record("2", Category::Pothole, 1),
        ]);

        let results = source
            .fetch_candidates(&window_query(Category::Pothole, Some("1")))
            .await
            .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "2");
    }

    #[tokio::test]
    async fn test_no_exclusion_when_id_absent() {
        let source = InMemoryCandidateSource::new(vec![
            record("1", Category::Pothole, 1),
            record("2", Category::Pothole, 1),
        ]);

        let results = source
            .fetch_candidates(&window_query(Category::Pothole, None))
            .await
            .unwrap();

        assert_eq!(results.len(), 2);
    }
}
