use crate::catalog::{Block, ScoreLevel, SubjectLabel, SUBJECTS};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Envelope shared by every scoring API response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Absent on some endpoints; only an explicit `false` is a failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

/// One exam candidate's score record
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Registration number
    pub sbd: String,
    pub toan: Option<f64>,
    pub ngu_van: Option<f64>,
    pub ngoai_ngu: Option<f64>,
    pub vat_li: Option<f64>,
    pub hoa_hoc: Option<f64>,
    pub sinh_hoc: Option<f64>,
    pub lich_su: Option<f64>,
    pub dia_li: Option<f64>,
    pub gdcd: Option<f64>,
    /// Foreign-language variant code, e.g. "N1"
    pub ma_ngoai_ngu: Option<String>,
    #[serde(rename = "tongDiemKhoiA", default, skip_serializing_if = "Option::is_none")]
    pub block_a_total: Option<f64>,
    #[serde(rename = "tongDiemKhoiB", default, skip_serializing_if = "Option::is_none")]
    pub block_b_total: Option<f64>,
    #[serde(rename = "tongDiemKhoiC", default, skip_serializing_if = "Option::is_none")]
    pub block_c_total: Option<f64>,
    #[serde(rename = "tongDiemKhoiD", default, skip_serializing_if = "Option::is_none")]
    pub block_d_total: Option<f64>,
    #[serde(rename = "diemTrungBinh", default, skip_serializing_if = "Option::is_none")]
    pub average: Option<f64>,
}

impl ScoreRecord {
    pub fn new(sbd: impl Into<String>) -> Self {
        Self {
            sbd: sbd.into(),
            ..Default::default()
        }
    }

    /// Score for a subject key, `None` when the candidate did not sit it
    pub fn score(&self, key: &str) -> Option<f64> {
        match key {
            "toan" => self.toan,
            "ngu_van" => self.ngu_van,
            "ngoai_ngu" => self.ngoai_ngu,
            "vat_li" => self.vat_li,
            "hoa_hoc" => self.hoa_hoc,
            "sinh_hoc" => self.sinh_hoc,
            "lich_su" => self.lich_su,
            "dia_li" => self.dia_li,
            "gdcd" => self.gdcd,
            _ => None,
        }
    }

    /// Present subject scores in display order
    pub fn subject_scores(&self) -> Vec<(SubjectLabel, f64)> {
        SUBJECTS
            .iter()
            .filter_map(|subject| self.score(subject.key).map(|score| (*subject, score)))
            .collect()
    }

    /// Block total as precomputed by the server
    pub fn precomputed_block_total(&self, block: Block) -> Option<f64> {
        match block {
            Block::A => self.block_a_total,
            Block::B => self.block_b_total,
            Block::C => self.block_c_total,
            Block::D => self.block_d_total,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectInfo {
    pub key: String,
    pub name: String,
}

/// Authoritative list of subjects the statistics endpoints understand
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatisticsMetadata {
    #[serde(default)]
    pub subjects: Vec<SubjectInfo>,
}

impl StatisticsMetadata {
    pub fn subject_keys(&self) -> impl Iterator<Item = &str> {
        self.subjects.iter().map(|s| s.key.as_str())
    }

    pub fn subject_name<'a>(&'a self, key: &'a str) -> &'a str {
        self.subjects
            .iter()
            .find(|s| s.key == key)
            .map(|s| s.name.as_str())
            .unwrap_or_else(|| crate::catalog::subject_display_name(key))
    }
}

/// Candidate counts per score band for one subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatisticsBucket {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excellent: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub good: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poor: Option<u64>,
}

impl StatisticsBucket {
    pub fn count(&self, level: ScoreLevel) -> Option<u64> {
        match level {
            ScoreLevel::Excellent => self.excellent,
            ScoreLevel::Good => self.good,
            ScoreLevel::Average => self.average,
            ScoreLevel::Poor => self.poor,
        }
    }

    pub fn with_count(mut self, level: ScoreLevel, count: u64) -> Self {
        let slot = match level {
            ScoreLevel::Excellent => &mut self.excellent,
            ScoreLevel::Good => &mut self.good,
            ScoreLevel::Average => &mut self.average,
            ScoreLevel::Poor => &mut self.poor,
        };
        *slot = Some(count);
        self
    }
}

/// Filtered statistics keyed by subject, in the order the server sent them
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatisticsData(pub Vec<(String, StatisticsBucket)>);

impl StatisticsData {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StatisticsBucket)> {
        self.0.iter().map(|(subject, bucket)| (subject.as_str(), bucket))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, StatisticsBucket)> for StatisticsData {
    fn from_iter<I: IntoIterator<Item = (String, StatisticsBucket)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for StatisticsData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (subject, bucket) in &self.0 {
            map.serialize_entry(subject, bucket)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for StatisticsData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedBuckets;

        impl<'de> Visitor<'de> for OrderedBuckets {
            type Value = StatisticsData;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of subject keys to score level counts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((subject, bucket)) =
                    map.next_entry::<String, Option<StatisticsBucket>>()?
                {
                    entries.push((subject, bucket.unwrap_or_default()));
                }
                Ok(StatisticsData(entries))
            }
        }

        deserializer.deserialize_map(OrderedBuckets)
    }
}

/// One ranked candidate for a block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopStudent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub sbd: String,
    pub rank: u32,
    pub total_score: f64,
    /// Remaining fields: the per-subject scores of the block's triple
    #[serde(flatten)]
    pub scores: HashMap<String, serde_json::Value>,
}

impl TopStudent {
    /// Per-subject score, accepting numbers and numeric strings
    pub fn subject_score(&self, key: &str) -> Option<f64> {
        match self.scores.get(key)? {
            serde_json::Value::Number(n) => n.as_f64(),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn statistics_keep_response_order() {
        // Parsed from text: a `serde_json::Value` map would sort the keys
        let data: StatisticsData = serde_json::from_str(
            r#"{
                "toan": { "excellent": 10, "poor": 2 },
                "ngu_van": { "good": 4 },
                "dia_li": null
            }"#,
        )
        .unwrap();

        let keys: Vec<_> = data.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["toan", "ngu_van", "dia_li"]);
        assert_eq!(data.0[0].1.count(ScoreLevel::Excellent), Some(10));
        assert_eq!(data.0[0].1.count(ScoreLevel::Good), None);
        assert_eq!(data.0[2].1, StatisticsBucket::default());
    }

    #[test]
    fn score_record_reads_block_totals_and_missing_subjects() {
        let record: ScoreRecord = serde_json::from_value(json!({
            "sbd": "01000001",
            "toan": 8.4,
            "ngu_van": 6.75,
            "gdcd": null,
            "ma_ngoai_ngu": "N1",
            "tongDiemKhoiA": 19.65,
            "diemTrungBinh": 6.57
        }))
        .unwrap();

        assert_eq!(record.score("toan"), Some(8.4));
        assert_eq!(record.score("gdcd"), None);
        assert_eq!(record.precomputed_block_total(Block::A), Some(19.65));
        assert_eq!(record.precomputed_block_total(Block::B), None);
        assert_eq!(record.average, Some(6.57));
        assert_eq!(record.subject_scores().len(), 2);
    }

    #[test]
    fn top_student_scores_accept_numeric_strings() {
        let student: TopStudent = serde_json::from_value(json!({
            "id": 7,
            "sbd": "02000123",
            "rank": 1,
            "total_score": 29.5,
            "toan": 10,
            "vat_li": "9.75",
            "hoa_hoc": null
        }))
        .unwrap();

        assert_eq!(student.subject_score("toan"), Some(10.0));
        assert_eq!(student.subject_score("vat_li"), Some(9.75));
        assert_eq!(student.subject_score("hoa_hoc"), None);
        assert_eq!(student.subject_score("sinh_hoc"), None);
    }
}
