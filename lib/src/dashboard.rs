//! Dashboard page state and its transition function.
//!
//! Every UI event is an [`DashboardAction`]; [`DashboardState::apply`]
//! performs the transition and returns the fetches to start. Each fetch is
//! tagged with a [`Generation`] and its completion comes back as another
//! action, which is dropped if a newer request on the same axis has been
//! issued since.

use crate::api::ScoresApi;
use crate::catalog::{Block, ScoreLevel};
use crate::chart::StackedBarChart;
use crate::error::{ApiError, FilterAxis};
use crate::filter::FilterSelection;
use crate::generation::{Generation, RequestGenerations};
use crate::models::{StatisticsData, StatisticsMetadata, TopStudent};
use crate::statistics::{transform_statistics, ChartRow, StatisticsQuery};
use crate::top_students::TopStudentsTable;

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    /// Page opened: load metadata and the initial block's ranking
    Mounted,
    MetadataLoaded(Result<StatisticsMetadata, ApiError>),
    ToggleSubject(String),
    ToggleLevel(ScoreLevel),
    SelectAllSubjects,
    ClearSubjects,
    SelectAllLevels,
    ClearLevels,
    SetBlock(Block),
    ToggleSubjectsDropdown,
    ToggleLevelsDropdown,
    StatisticsLoaded {
        generation: Generation,
        levels: Vec<ScoreLevel>,
        result: Result<StatisticsData, ApiError>,
    },
    TopStudentsLoaded {
        generation: Generation,
        block: Block,
        result: Result<Vec<TopStudent>, ApiError>,
    },
}

impl DashboardAction {
    /// The failure carried by a completion, if any
    pub fn error(&self) -> Option<&ApiError> {
        match self {
            DashboardAction::MetadataLoaded(Err(e))
            | DashboardAction::StatisticsLoaded { result: Err(e), .. }
            | DashboardAction::TopStudentsLoaded { result: Err(e), .. } => Some(e),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEffect {
    FetchMetadata,
    FetchStatistics {
        generation: Generation,
        query: StatisticsQuery,
    },
    FetchTopStudents {
        generation: Generation,
        block: Block,
    },
}

impl DashboardEffect {
    /// Perform the fetch and produce the action that reports its outcome
    pub async fn run<A: ScoresApi + ?Sized>(self, api: &A) -> DashboardAction {
        match self {
            DashboardEffect::FetchMetadata => DashboardAction::MetadataLoaded(api.metadata().await),
            DashboardEffect::FetchStatistics { generation, query } => {
                DashboardAction::StatisticsLoaded {
                    generation,
                    levels: query.levels().to_vec(),
                    result: api.filtered_statistics(&query).await,
                }
            }
            DashboardEffect::FetchTopStudents { generation, block } => {
                DashboardAction::TopStudentsLoaded {
                    generation,
                    block,
                    result: api.top_students(block).await,
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    pub metadata: Option<StatisticsMetadata>,
    pub filters: FilterSelection,
    pub chart_rows: Vec<ChartRow>,
    pub loading_statistics: bool,
    pub top_students: Vec<TopStudent>,
    pub loading_top_students: bool,
    pub subjects_dropdown_open: bool,
    pub levels_dropdown_open: bool,
    /// Message for a failed metadata load, shown until the next success
    pub metadata_error: Option<String>,
    statistics_requests: RequestGenerations,
    top_students_requests: RequestGenerations,
}

impl DashboardState {
    pub fn new(initial_block: Block) -> Self {
        Self {
            filters: FilterSelection::new(initial_block),
            // Nothing to show until metadata arrives
            loading_statistics: true,
            ..Default::default()
        }
    }

    pub fn apply(&mut self, action: DashboardAction) -> Vec<DashboardEffect> {
        match action {
            DashboardAction::Mounted => {
                let mut effects = vec![DashboardEffect::FetchMetadata];
                effects.push(self.request_top_students());
                effects
            }
            DashboardAction::MetadataLoaded(Ok(metadata)) => {
                self.filters = FilterSelection::all_from(&metadata, self.filters.block());
                self.metadata = Some(metadata);
                self.metadata_error = None;
                self.refresh_statistics().into_iter().collect()
            }
            DashboardAction::MetadataLoaded(Err(e)) => {
                log::warn!("Failed to fetch metadata: {e}");
                self.metadata_error = Some(e.user_message());
                self.loading_statistics = false;
                Vec::new()
            }
            DashboardAction::ToggleSubject(key) => {
                self.filters.toggle_subject(&key);
                self.refresh_statistics().into_iter().collect()
            }
            DashboardAction::ToggleLevel(level) => {
                self.filters.toggle_level(level);
                self.refresh_statistics().into_iter().collect()
            }
            DashboardAction::SelectAllSubjects => match &self.metadata {
                Some(metadata) => {
                    self.filters.select_all_subjects(metadata);
                    self.refresh_statistics().into_iter().collect()
                }
                None => Vec::new(),
            },
            DashboardAction::ClearSubjects => {
                self.filters.clear_subjects();
                self.refresh_statistics().into_iter().collect()
            }
            DashboardAction::SelectAllLevels => {
                self.filters.select_all_levels();
                self.refresh_statistics().into_iter().collect()
            }
            DashboardAction::ClearLevels => {
                self.filters.clear_levels();
                self.refresh_statistics().into_iter().collect()
            }
            DashboardAction::SetBlock(block) => {
                self.filters.set_block(block);
                vec![self.request_top_students()]
            }
            DashboardAction::ToggleSubjectsDropdown => {
                self.subjects_dropdown_open = !self.subjects_dropdown_open;
                Vec::new()
            }
            DashboardAction::ToggleLevelsDropdown => {
                self.levels_dropdown_open = !self.levels_dropdown_open;
                Vec::new()
            }
            DashboardAction::StatisticsLoaded {
                generation,
                levels,
                result,
            } => {
                if !self.statistics_requests.is_current(generation) {
                    log::debug!("Dropping stale statistics response {generation}");
                    return Vec::new();
                }
                self.loading_statistics = false;
                self.chart_rows = match result {
                    Ok(data) => transform_statistics(&data, &levels),
                    Err(e) => {
                        log::warn!("Failed to fetch statistics: {e}");
                        Vec::new()
                    }
                };
                Vec::new()
            }
            DashboardAction::TopStudentsLoaded {
                generation,
                block,
                result,
            } => {
                if !self.top_students_requests.is_current(generation) {
                    log::debug!("Dropping stale top students response {generation} for block {block}");
                    return Vec::new();
                }
                self.loading_top_students = false;
                self.top_students = result.unwrap_or_else(|e| {
                    log::warn!("Failed to fetch top students for block {block}: {e}");
                    Vec::new()
                });
                Vec::new()
            }
        }
    }

    /// Whether `apply` would act on this action. Only completions of
    /// superseded requests are rejected.
    pub fn accepts(&self, action: &DashboardAction) -> bool {
        match action {
            DashboardAction::StatisticsLoaded { generation, .. } => {
                self.statistics_requests.is_current(*generation)
            }
            DashboardAction::TopStudentsLoaded { generation, .. } => {
                self.top_students_requests.is_current(*generation)
            }
            _ => true,
        }
    }

    /// Re-query statistics for the current selection, or clear the chart and
    /// invalidate in-flight requests when a set is empty.
    fn refresh_statistics(&mut self) -> Option<DashboardEffect> {
        match StatisticsQuery::from_selection(&self.filters) {
            Ok(query) => {
                self.loading_statistics = true;
                Some(DashboardEffect::FetchStatistics {
                    generation: self.statistics_requests.issue(),
                    query,
                })
            }
            Err(_) => {
                self.statistics_requests.invalidate();
                self.loading_statistics = false;
                self.chart_rows.clear();
                None
            }
        }
    }

    fn request_top_students(&mut self) -> DashboardEffect {
        self.loading_top_students = true;
        DashboardEffect::FetchTopStudents {
            generation: self.top_students_requests.issue(),
            block: self.filters.block(),
        }
    }

    /// Axis whose empty selection currently suppresses the chart
    pub fn empty_filter(&self) -> Option<FilterAxis> {
        self.metadata.as_ref()?;
        self.filters.empty_axis()
    }

    /// Both axes have a selection, so the chart and table are shown
    pub fn has_selection(&self) -> bool {
        self.filters.empty_axis().is_none()
    }

    pub fn chart(&self) -> Option<StackedBarChart> {
        if !self.has_selection() {
            return None;
        }
        StackedBarChart::build(&self.chart_rows, &self.filters.level_list())
    }

    pub fn top_students_table(&self) -> TopStudentsTable {
        TopStudentsTable::build(self.filters.block(), &self.top_students)
    }

    /// Full-page spinner: statistics are loading and nothing is drawn yet
    pub fn is_initial_load(&self) -> bool {
        self.loading_statistics && self.chart_rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{StatisticsBucket, SubjectInfo};

    fn metadata() -> StatisticsMetadata {
        StatisticsMetadata {
            subjects: vec![
                SubjectInfo {
                    key: "toan".into(),
                    name: "Mathematics".into(),
                },
                SubjectInfo {
                    key: "vat_li".into(),
                    name: "Physics".into(),
                },
            ],
        }
    }

    fn fetch_statistics(effects: &[DashboardEffect]) -> (Generation, StatisticsQuery) {
        match effects {
            [DashboardEffect::FetchStatistics { generation, query }] => (*generation, query.clone()),
            other => panic!("expected one statistics fetch, got {other:?}"),
        }
    }

    fn loaded_state() -> DashboardState {
        let mut state = DashboardState::new(Block::A);
        state.apply(DashboardAction::Mounted);
        state.apply(DashboardAction::MetadataLoaded(Ok(metadata())));
        state
    }

    #[test]
    fn mount_fetches_metadata_and_initial_block() {
        let mut state = DashboardState::new(Block::C);
        let effects = state.apply(DashboardAction::Mounted);
        assert_eq!(effects.len(), 2);
        assert_eq!(effects[0], DashboardEffect::FetchMetadata);
        assert!(matches!(
            effects[1],
            DashboardEffect::FetchTopStudents { block: Block::C, .. }
        ));
        assert!(state.loading_top_students);
    }

    #[test]
    fn metadata_selects_everything_and_queries() {
        let mut state = DashboardState::new(Block::A);
        let effects = state.apply(DashboardAction::MetadataLoaded(Ok(metadata())));
        let (_, query) = fetch_statistics(&effects);
        assert_eq!(query.subjects_param(), "toan,vat_li");
        assert_eq!(query.levels_param(), "excellent,good,average,poor");
    }

    #[test]
    fn stale_statistics_never_overwrite_newer_ones() {
        let mut state = DashboardState::new(Block::A);
        let (old, _) = fetch_statistics(&state.apply(DashboardAction::MetadataLoaded(Ok(
            metadata(),
        ))));
        let (new, _) =
            fetch_statistics(&state.apply(DashboardAction::ToggleLevel(ScoreLevel::Poor)));

        let bucket = StatisticsBucket::default().with_count(ScoreLevel::Good, 1);
        let fresh: StatisticsData = [("toan".to_string(), bucket)].into_iter().collect();
        state.apply(DashboardAction::StatisticsLoaded {
            generation: new,
            levels: vec![ScoreLevel::Good],
            result: Ok(fresh),
        });
        let stale: StatisticsData = [("vat_li".to_string(), bucket)].into_iter().collect();
        state.apply(DashboardAction::StatisticsLoaded {
            generation: old,
            levels: ScoreLevel::ALL.to_vec(),
            result: Ok(stale),
        });

        assert_eq!(state.chart_rows.len(), 1);
        assert_eq!(state.chart_rows[0].subject, "toan");
    }

    #[test]
    fn emptying_a_set_clears_and_invalidates() {
        let mut state = loaded_state();
        let (generation, _) = fetch_statistics(&state.apply(DashboardAction::SelectAllLevels));

        assert!(state.apply(DashboardAction::ClearSubjects).is_empty());
        assert_eq!(state.empty_filter(), Some(FilterAxis::Subjects));

        let data: StatisticsData = [("toan".to_string(), StatisticsBucket::default())]
            .into_iter()
            .collect();
        state.apply(DashboardAction::StatisticsLoaded {
            generation,
            levels: ScoreLevel::ALL.to_vec(),
            result: Ok(data),
        });
        assert!(state.chart_rows.is_empty());
        assert!(state.chart().is_none());
    }

    #[test]
    fn statistics_failure_clears_the_chart() {
        let mut state = loaded_state();
        state.chart_rows = vec![ChartRow {
            subject: "toan".into(),
            levels: Default::default(),
        }];
        let (generation, _) =
            fetch_statistics(&state.apply(DashboardAction::ToggleSubject("vat_li".into())));
        state.apply(DashboardAction::StatisticsLoaded {
            generation,
            levels: ScoreLevel::ALL.to_vec(),
            result: Err(ApiError::RequestFailed("boom".into())),
        });
        assert!(state.chart_rows.is_empty());
        assert!(!state.loading_statistics);
    }

    #[test]
    fn select_all_subjects_waits_for_metadata() {
        let mut state = DashboardState::new(Block::A);
        assert!(state.apply(DashboardAction::SelectAllSubjects).is_empty());
        assert!(state.filters.subjects().is_empty());
    }

    #[test]
    fn dropdowns_toggle_without_fetching() {
        let mut state = loaded_state();
        assert!(state.apply(DashboardAction::ToggleSubjectsDropdown).is_empty());
        assert!(state.subjects_dropdown_open);
        assert!(state.apply(DashboardAction::ToggleSubjectsDropdown).is_empty());
        assert!(!state.subjects_dropdown_open);
        assert!(state.apply(DashboardAction::ToggleLevelsDropdown).is_empty());
        assert!(state.levels_dropdown_open);
    }

    #[test]
    fn metadata_failure_is_reported_once() {
        let mut state = DashboardState::new(Block::A);
        state.apply(DashboardAction::MetadataLoaded(Err(ApiError::RequestFailed(
            "down".into(),
        ))));
        assert_eq!(state.metadata_error.as_deref(), Some("down"));
        assert!(!state.is_initial_load());
        state.apply(DashboardAction::MetadataLoaded(Ok(metadata())));
        assert_eq!(state.metadata_error, None);
    }

    #[test]
    fn superseded_failures_are_not_accepted() {
        let mut state = loaded_state();
        let (old, _) = fetch_statistics(&state.apply(DashboardAction::ToggleLevel(ScoreLevel::Poor)));
        let (new, _) = fetch_statistics(&state.apply(DashboardAction::ToggleLevel(ScoreLevel::Poor)));

        let failure = |generation| DashboardAction::StatisticsLoaded {
            generation,
            levels: vec![ScoreLevel::Good],
            result: Err(ApiError::RequestFailed("Failed to load statistics.".into())),
        };
        assert!(!state.accepts(&failure(old)));
        assert!(state.accepts(&failure(new)));
        assert_eq!(
            failure(new).error().map(ApiError::user_message).as_deref(),
            Some("Failed to load statistics.")
        );
        assert!(state.accepts(&DashboardAction::ClearSubjects));
    }
}
