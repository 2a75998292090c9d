//! Shared fixtures for the integration tests

use async_trait::async_trait;
use gscores::models::{
    ScoreRecord, StatisticsBucket, StatisticsData, StatisticsMetadata, SubjectInfo, TopStudent,
};
use gscores::statistics::StatisticsQuery;
use gscores::{ApiError, Block, ScoreLevel, ScoresApi};
use mockall::mock;

mock! {
    pub Api {}

    #[async_trait]
    impl ScoresApi for Api {
        async fn search_by_sbd(&self, sbd: &str) -> Result<ScoreRecord, ApiError>;
        async fn metadata(&self) -> Result<StatisticsMetadata, ApiError>;
        async fn filtered_statistics(
            &self,
            query: &StatisticsQuery,
        ) -> Result<StatisticsData, ApiError>;
        async fn top_students(&self, block: Block) -> Result<Vec<TopStudent>, ApiError>;
    }
}

#[allow(dead_code)]
pub fn metadata(keys: &[&str]) -> StatisticsMetadata {
    StatisticsMetadata {
        subjects: keys
            .iter()
            .map(|key| SubjectInfo {
                key: key.to_string(),
                name: gscores::catalog::subject_display_name(key).to_string(),
            })
            .collect(),
    }
}

#[allow(dead_code)]
pub fn statistics(entries: &[(&str, &[(ScoreLevel, u64)])]) -> StatisticsData {
    entries
        .iter()
        .map(|(subject, counts)| {
            let bucket = counts
                .iter()
                .fold(StatisticsBucket::default(), |bucket, &(level, count)| {
                    bucket.with_count(level, count)
                });
            (subject.to_string(), bucket)
        })
        .collect()
}

#[allow(dead_code)]
pub fn ranked(block: Block, sbds: &[&str]) -> Vec<TopStudent> {
    sbds.iter()
        .enumerate()
        .map(|(i, sbd)| {
            let mut value = serde_json::json!({
                "id": i + 1,
                "sbd": sbd,
                "rank": i + 1,
                "total_score": 30.0 - i as f64,
            });
            if let Some(obj) = value.as_object_mut() {
                for subject in block.subjects() {
                    obj.insert(subject.key.to_string(), serde_json::json!(10.0 - i as f64 / 3.0));
                }
            }
            serde_json::from_value(value).expect("valid top student fixture")
        })
        .collect()
}
