use crate::catalog::{Block, ScoreLevel};
use crate::error::FilterAxis;
use crate::models::StatisticsMetadata;
use std::collections::BTreeSet;

/// The dashboard's filter selection: two independent multi-select sets and
/// the single-select block.
///
/// Both sets have set semantics. An empty set means "nothing selected" and
/// is never widened to "all".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSelection {
    subjects: BTreeSet<String>,
    levels: BTreeSet<ScoreLevel>,
    block: Block,
}

impl FilterSelection {
    pub fn new(block: Block) -> Self {
        Self {
            block,
            ..Default::default()
        }
    }

    /// Everything the metadata offers selected, every level selected
    pub fn all_from(metadata: &StatisticsMetadata, block: Block) -> Self {
        let mut selection = Self::new(block);
        selection.select_all_subjects(metadata);
        selection.select_all_levels();
        selection
    }

    pub fn subjects(&self) -> &BTreeSet<String> {
        &self.subjects
    }

    pub fn levels(&self) -> &BTreeSet<ScoreLevel> {
        &self.levels
    }

    /// Selected levels in canonical order
    pub fn level_list(&self) -> Vec<ScoreLevel> {
        self.levels.iter().copied().collect()
    }

    pub fn block(&self) -> Block {
        self.block
    }

    pub fn is_subject_selected(&self, key: &str) -> bool {
        self.subjects.contains(key)
    }

    pub fn is_level_selected(&self, level: ScoreLevel) -> bool {
        self.levels.contains(&level)
    }

    /// Add the subject if absent, remove it if present. Returns whether the
    /// subject is selected afterwards.
    pub fn toggle_subject(&mut self, key: &str) -> bool {
        if self.subjects.remove(key) {
            false
        } else {
            self.subjects.insert(key.to_string());
            true
        }
    }

    pub fn toggle_level(&mut self, level: ScoreLevel) -> bool {
        if self.levels.remove(&level) {
            false
        } else {
            self.levels.insert(level);
            true
        }
    }

    pub fn select_all_subjects(&mut self, metadata: &StatisticsMetadata) {
        self.subjects = metadata.subject_keys().map(str::to_string).collect();
    }

    pub fn clear_subjects(&mut self) {
        self.subjects.clear();
    }

    pub fn select_all_levels(&mut self) {
        self.levels = ScoreLevel::ALL.into_iter().collect();
    }

    pub fn clear_levels(&mut self) {
        self.levels.clear();
    }

    /// Plain replace, selecting the current block again is a no-op
    pub fn set_block(&mut self, block: Block) {
        self.block = block;
    }

    /// First axis whose set is empty, if any
    pub fn empty_axis(&self) -> Option<FilterAxis> {
        if self.subjects.is_empty() {
            Some(FilterAxis::Subjects)
        } else if self.levels.is_empty() {
            Some(FilterAxis::Levels)
        } else {
            None
        }
    }

    /// Button caption of the subjects dropdown
    pub fn subjects_summary(&self, metadata: Option<&StatisticsMetadata>) -> String {
        let total = metadata.map(|m| m.subjects.len());
        summarize(self.subjects.len(), total, "subjects")
    }

    /// Button caption of the levels dropdown
    pub fn levels_summary(&self) -> String {
        summarize(self.levels.len(), Some(ScoreLevel::ALL.len()), "levels")
    }
}

fn summarize(selected: usize, total: Option<usize>, noun: &str) -> String {
    if selected == 0 {
        format!("Select {noun}...")
    } else if Some(selected) == total {
        format!("All {noun}")
    } else {
        format!("{selected} selected")
    }
}
