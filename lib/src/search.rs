//! Registration-number lookup: state, transitions and the score card shown
//! for a found candidate.

use crate::api::ScoresApi;
use crate::catalog::{Block, SubjectLabel};
use crate::error::ApiError;
use crate::generation::{Generation, RequestGenerations};
use crate::models::ScoreRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct SubjectScore {
    pub subject: SubjectLabel,
    pub score: f64,
}

/// Display model for one candidate's results
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreCard {
    pub sbd: String,
    pub language_code: Option<String>,
    pub subjects: Vec<SubjectScore>,
    pub block_totals: Vec<(Block, f64)>,
    pub average: Option<f64>,
}

impl ScoreCard {
    pub fn from_record(record: &ScoreRecord) -> Self {
        let subjects: Vec<SubjectScore> = record
            .subject_scores()
            .into_iter()
            .map(|(subject, score)| SubjectScore { subject, score })
            .collect();

        let block_totals = Block::ALL
            .into_iter()
            .filter_map(|block| block_total(record, block).map(|total| (block, total)))
            .collect();

        Self {
            sbd: record.sbd.clone(),
            language_code: record
                .ma_ngoai_ngu
                .as_deref()
                .map(str::trim)
                .filter(|code| !code.is_empty())
                .map(str::to_string),
            average: record.average.or_else(|| mean_score(&subjects)),
            subjects,
            block_totals,
        }
    }

    /// Average as shown on the card: two decimals, `0` without any subject
    pub fn average_display(&self) -> String {
        match self.average {
            Some(average) => format!("{average:.2}"),
            None => "0".to_string(),
        }
    }

    /// "Based on N subject(s)"
    pub fn basis_display(&self) -> String {
        let n = self.subjects.len();
        format!("Based on {n} subject{}", if n == 1 { "" } else { "s" })
    }
}

/// Server total when present, else the sum of the block's three subjects
/// when the candidate sat all of them.
fn block_total(record: &ScoreRecord, block: Block) -> Option<f64> {
    record.precomputed_block_total(block).or_else(|| {
        block
            .subjects()
            .iter()
            .map(|s| record.score(s.key))
            .sum::<Option<f64>>()
            .map(round2)
    })
}

fn mean_score(subjects: &[SubjectScore]) -> Option<f64> {
    if subjects.is_empty() {
        return None;
    }
    let sum: f64 = subjects.iter().map(|s| s.score).sum();
    Some(round2(sum / subjects.len() as f64))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchStatus {
    /// Nothing searched yet
    #[default]
    Idle,
    Loading,
    Found(ScoreCard),
    Failed(ApiError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchAction {
    Submit(String),
    Completed {
        generation: Generation,
        result: Result<ScoreRecord, ApiError>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchEffect {
    Lookup { generation: Generation, sbd: String },
}

impl SearchEffect {
    pub async fn run<A: ScoresApi + ?Sized>(self, api: &A) -> SearchAction {
        match self {
            SearchEffect::Lookup { generation, sbd } => SearchAction::Completed {
                generation,
                result: api.search_by_sbd(&sbd).await,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    /// Last submitted registration number
    pub query: Option<String>,
    pub status: SearchStatus,
    requests: RequestGenerations,
}

impl SearchState {
    pub fn apply(&mut self, action: SearchAction) -> Option<SearchEffect> {
        match action {
            SearchAction::Submit(input) => {
                let sbd = input.trim();
                if sbd.is_empty() {
                    return None;
                }
                self.query = Some(sbd.to_string());
                self.status = SearchStatus::Loading;
                Some(SearchEffect::Lookup {
                    generation: self.requests.issue(),
                    sbd: sbd.to_string(),
                })
            }
            SearchAction::Completed { generation, result } => {
                if !self.requests.is_current(generation) {
                    log::debug!("Dropping stale search response {generation}");
                    return None;
                }
                self.status = match result {
                    Ok(record) => SearchStatus::Found(ScoreCard::from_record(&record)),
                    Err(e) => {
                        log::warn!("Score lookup failed: {e}");
                        SearchStatus::Failed(e)
                    }
                };
                None
            }
        }
    }

    pub fn has_searched(&self) -> bool {
        !matches!(self.status, SearchStatus::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, SearchStatus::Loading)
    }

    pub fn card(&self) -> Option<&ScoreCard> {
        match &self.status {
            SearchStatus::Found(card) => Some(card),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match &self.status {
            SearchStatus::Failed(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ScoreRecord {
        ScoreRecord {
            toan: Some(8.4),
            ngu_van: Some(6.75),
            ngoai_ngu: Some(8.0),
            vat_li: Some(6.0),
            hoa_hoc: Some(5.25),
            sinh_hoc: Some(5.0),
            ma_ngoai_ngu: Some("N1".into()),
            ..ScoreRecord::new("01000001")
        }
    }

    #[test]
    fn mean_is_rounded_to_two_decimals() {
        let card = ScoreCard::from_record(&sample());
        // (8.4 + 6.75 + 8.0 + 6.0 + 5.25 + 5.0) / 6 = 6.5666...
        assert_eq!(card.average, Some(6.57));
        assert_eq!(card.average_display(), "6.57");
        assert_eq!(card.basis_display(), "Based on 6 subjects");
        assert_eq!(card.language_code.as_deref(), Some("N1"));
    }

    #[test]
    fn server_average_wins() {
        let record = ScoreRecord {
            average: Some(7.1),
            ..sample()
        };
        assert_eq!(ScoreCard::from_record(&record).average, Some(7.1));
    }

    #[test]
    fn no_subjects_means_no_average() {
        let card = ScoreCard::from_record(&ScoreRecord::new("x"));
        assert_eq!(card.average, None);
        assert_eq!(card.average_display(), "0");
        assert!(card.block_totals.is_empty());
    }

    #[test]
    fn block_totals_are_summed_only_when_complete() {
        let card = ScoreCard::from_record(&sample());
        // A = toan + vat_li + hoa_hoc, B = toan + hoa_hoc + sinh_hoc, D = toan + ngu_van + ngoai_ngu
        assert_eq!(
            card.block_totals,
            [(Block::A, 19.65), (Block::B, 18.65), (Block::D, 23.15)]
        );

        let record = ScoreRecord {
            block_c_total: Some(21.0),
            ..sample()
        };
        let card = ScoreCard::from_record(&record);
        assert!(card.block_totals.contains(&(Block::C, 21.0)));
    }

    #[test]
    fn blank_submissions_are_ignored() {
        let mut state = SearchState::default();
        assert_eq!(state.apply(SearchAction::Submit("   ".into())), None);
        assert!(!state.has_searched());
    }
}
