//! Fixed catalog data shared by every front end: the four score bands, the
//! four admission blocks and the display names of the subject keys the
//! scoring API uses.

use serde::{Deserialize, Serialize};

/// A subject key as sent by the API together with its English display name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubjectLabel {
    pub key: &'static str,
    pub name: &'static str,
}

const fn subject(key: &'static str, name: &'static str) -> SubjectLabel {
    SubjectLabel { key, name }
}

pub const MATHEMATICS: SubjectLabel = subject("toan", "Mathematics");
pub const LITERATURE: SubjectLabel = subject("ngu_van", "Literature");
pub const FOREIGN_LANGUAGE: SubjectLabel = subject("ngoai_ngu", "Foreign Language");
pub const PHYSICS: SubjectLabel = subject("vat_li", "Physics");
pub const CHEMISTRY: SubjectLabel = subject("hoa_hoc", "Chemistry");
pub const BIOLOGY: SubjectLabel = subject("sinh_hoc", "Biology");
pub const HISTORY: SubjectLabel = subject("lich_su", "History");
pub const GEOGRAPHY: SubjectLabel = subject("dia_li", "Geography");
pub const CIVIC_EDUCATION: SubjectLabel = subject("gdcd", "Civic Education");

/// Every subject a score record can carry, in display order
pub const SUBJECTS: [SubjectLabel; 9] = [
    MATHEMATICS,
    LITERATURE,
    FOREIGN_LANGUAGE,
    PHYSICS,
    CHEMISTRY,
    BIOLOGY,
    HISTORY,
    GEOGRAPHY,
    CIVIC_EDUCATION,
];

/// Display name for a subject key, falling back to the key itself for
/// subjects this build does not know about.
pub fn subject_display_name(key: &str) -> &str {
    SUBJECTS
        .iter()
        .find(|s| s.key == key)
        .map(|s| s.name)
        .unwrap_or(key)
}

/// One of the four fixed score bands used to bucket subject scores.
///
/// Declaration order is the canonical stacking order of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreLevel {
    Excellent,
    Good,
    Average,
    Poor,
}

impl ScoreLevel {
    pub const ALL: [ScoreLevel; 4] = [
        ScoreLevel::Excellent,
        ScoreLevel::Good,
        ScoreLevel::Average,
        ScoreLevel::Poor,
    ];

    /// Wire key used in query strings and response buckets
    pub fn key(self) -> &'static str {
        match self {
            ScoreLevel::Excellent => "excellent",
            ScoreLevel::Good => "good",
            ScoreLevel::Average => "average",
            ScoreLevel::Poor => "poor",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.key() == key)
    }

    /// Short name used in tooltips
    pub fn name(self) -> &'static str {
        match self {
            ScoreLevel::Excellent => "Excellent",
            ScoreLevel::Good => "Good",
            ScoreLevel::Average => "Average",
            ScoreLevel::Poor => "Poor",
        }
    }

    /// Legend and filter label including the band bounds
    pub fn label(self) -> &'static str {
        match self {
            ScoreLevel::Excellent => "Excellent (≥ 8)",
            ScoreLevel::Good => "Good (6-8)",
            ScoreLevel::Average => "Average (4-6)",
            ScoreLevel::Poor => "Poor (< 4)",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ScoreLevel::Excellent => "#10b981",
            ScoreLevel::Good => "#3b82f6",
            ScoreLevel::Average => "#f59e0b",
            ScoreLevel::Poor => "#ef4444",
        }
    }

    /// Inclusive lower bound of the band. Informational only, bucketing
    /// happens server-side.
    pub fn min(self) -> f64 {
        match self {
            ScoreLevel::Excellent => 8.0,
            ScoreLevel::Good => 6.0,
            ScoreLevel::Average => 4.0,
            ScoreLevel::Poor => 0.0,
        }
    }

    /// Upper bound of the band (exclusive except for Excellent)
    pub fn max(self) -> f64 {
        match self {
            ScoreLevel::Excellent => 10.0,
            ScoreLevel::Good => 8.0,
            ScoreLevel::Average => 6.0,
            ScoreLevel::Poor => 4.0,
        }
    }
}

impl std::fmt::Display for ScoreLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for ScoreLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s.trim()).ok_or_else(|| {
            format!("unknown score level '{s}' (expected excellent, good, average or poor)")
        })
    }
}

/// University-admission subject block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Block {
    #[default]
    A,
    B,
    C,
    D,
}

impl Block {
    pub const ALL: [Block; 4] = [Block::A, Block::B, Block::C, Block::D];

    pub fn key(self) -> &'static str {
        match self {
            Block::A => "A",
            Block::B => "B",
            Block::C => "C",
            Block::D => "D",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|block| block.key().eq_ignore_ascii_case(key.trim()))
    }

    /// The fixed, ordered subject triple scored for this block
    pub fn subjects(self) -> [SubjectLabel; 3] {
        match self {
            Block::A => [MATHEMATICS, PHYSICS, CHEMISTRY],
            Block::B => [MATHEMATICS, CHEMISTRY, BIOLOGY],
            Block::C => [LITERATURE, HISTORY, GEOGRAPHY],
            Block::D => [MATHEMATICS, LITERATURE, FOREIGN_LANGUAGE],
        }
    }

    /// Selector label. Block D lists its subjects in a different order than
    /// the table columns.
    pub fn name(self) -> &'static str {
        match self {
            Block::A => "Block A (Mathematics - Physics - Chemistry)",
            Block::B => "Block B (Mathematics - Chemistry - Biology)",
            Block::C => "Block C (Literature - History - Geography)",
            Block::D => "Block D (Mathematics - Foreign Language - Literature)",
        }
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Block {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| format!("unknown block '{s}' (expected A, B, C or D)"))
    }
}
