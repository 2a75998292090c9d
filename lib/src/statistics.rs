//! Statistics fetch-and-transform pipeline: turns the filter selection into
//! a request and the filtered-statistics response into chart rows.

use crate::catalog::ScoreLevel;
use crate::error::{ApiError, FilterAxis};
use crate::filter::FilterSelection;
use crate::models::StatisticsData;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Parameters of `GET /statistics/filter`. Both lists are non-empty by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatisticsQuery {
    subjects: Vec<String>,
    levels: Vec<ScoreLevel>,
}

impl StatisticsQuery {
    /// Build the request for the current selection. Empty sets are rejected
    /// client-side and never reach the server.
    pub fn from_selection(selection: &FilterSelection) -> Result<Self, ApiError> {
        if let Some(axis) = selection.empty_axis() {
            return Err(ApiError::EmptyFilter(axis));
        }
        Ok(Self {
            subjects: selection.subjects().iter().cloned().collect(),
            levels: selection.level_list(),
        })
    }

    /// Build a request from explicit lists. Duplicates are dropped and both
    /// lists come out in canonical order, as with [`Self::from_selection`].
    pub fn new(subjects: Vec<String>, levels: Vec<ScoreLevel>) -> Result<Self, ApiError> {
        let subjects: Vec<String> = subjects
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let levels: Vec<ScoreLevel> = levels
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        if subjects.is_empty() {
            return Err(ApiError::EmptyFilter(FilterAxis::Subjects));
        }
        if levels.is_empty() {
            return Err(ApiError::EmptyFilter(FilterAxis::Levels));
        }
        Ok(Self { subjects, levels })
    }

    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    pub fn levels(&self) -> &[ScoreLevel] {
        &self.levels
    }

    /// `subjects` query value, e.g. `toan,ngu_van`
    pub fn subjects_param(&self) -> String {
        self.subjects.join(",")
    }

    /// `levels` query value, e.g. `excellent,poor`
    pub fn levels_param(&self) -> String {
        self.levels
            .iter()
            .map(|level| level.key())
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// One stacked bar worth of data: a subject and a count for each selected
/// level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartRow {
    pub subject: String,
    pub levels: BTreeMap<ScoreLevel, u64>,
}

impl ChartRow {
    pub fn count(&self, level: ScoreLevel) -> u64 {
        self.levels.get(&level).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.levels.values().sum()
    }
}

/// Reshape the response into one row per subject the server returned, in
/// response order. Every row carries exactly `levels`; a level the server
/// omitted counts as zero.
pub fn transform_statistics(data: &StatisticsData, levels: &[ScoreLevel]) -> Vec<ChartRow> {
    data.iter()
        .map(|(subject, bucket)| ChartRow {
            subject: subject.to_string(),
            levels: levels
                .iter()
                .map(|&level| (level, bucket.count(level).unwrap_or(0)))
                .collect(),
        })
        .collect()
}
