use crate::catalog::Block;
use crate::models::TopStudent;

/// Placeholder for a subject score the candidate does not have
pub const MISSING_SCORE: &str = "-";

/// Two decimals, or the dash placeholder when absent. A zero score still
/// prints as `0.00`.
pub fn format_score(score: Option<f64>) -> String {
    match score {
        Some(score) => format!("{score:.2}"),
        None => MISSING_SCORE.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopStudentRow {
    pub rank: u32,
    pub sbd: String,
    pub scores: Vec<String>,
    pub total: String,
}

/// Table of the top candidates for one block, columns derived from the
/// block's subject triple.
#[derive(Debug, Clone, PartialEq)]
pub struct TopStudentsTable {
    pub block: Block,
    pub headers: Vec<String>,
    pub rows: Vec<TopStudentRow>,
}

impl TopStudentsTable {
    /// Rows keep the server's order; ranks are shown as sent.
    pub fn build(block: Block, students: &[TopStudent]) -> Self {
        let subjects = block.subjects();

        let headers = ["Rank", "Registration Number"]
            .into_iter()
            .map(str::to_string)
            .chain(subjects.iter().map(|s| s.name.to_string()))
            .chain(std::iter::once("Total".to_string()))
            .collect();

        let rows = students
            .iter()
            .map(|student| TopStudentRow {
                rank: student.rank,
                sbd: student.sbd.clone(),
                scores: subjects
                    .iter()
                    .map(|s| format_score(student.subject_score(s.key)))
                    .collect(),
                total: format!("{:.2}", student.total_score),
            })
            .collect();

        Self {
            block,
            headers,
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
