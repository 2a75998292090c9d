//! Stacked bar chart view model. Front ends only draw what this computes.

use crate::catalog::{subject_display_name, ScoreLevel};
use crate::statistics::ChartRow;

#[derive(Debug, Clone, PartialEq)]
pub struct BarSegment {
    pub level: ScoreLevel,
    pub count: u64,
    /// Sum of the segments stacked below this one
    pub offset: u64,
}

impl BarSegment {
    pub fn color(&self) -> &'static str {
        self.level.color()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StackedBar {
    pub subject: String,
    pub label: String,
    pub segments: Vec<BarSegment>,
}

impl StackedBar {
    pub fn total(&self) -> u64 {
        self.segments.iter().map(|s| s.count).sum()
    }

    /// Tooltip lines: the subject name, then `Level: count` per segment
    pub fn tooltip(&self) -> Vec<String> {
        std::iter::once(self.label.clone())
            .chain(
                self.segments
                    .iter()
                    .map(|s| format!("{}: {}", s.level.name(), format_count(s.count))),
            )
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub level: ScoreLevel,
    pub label: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StackedBarChart {
    pub bars: Vec<StackedBar>,
    pub series: Vec<ScoreLevel>,
    pub max_total: u64,
}

impl StackedBarChart {
    /// Build the chart, or `None` when there is nothing to draw
    pub fn build(rows: &[ChartRow], selected: &[ScoreLevel]) -> Option<Self> {
        let first = rows.first()?;
        let mut series: Vec<ScoreLevel> = selected
            .iter()
            .copied()
            .filter(|level| first.levels.contains_key(level))
            .collect();
        series.sort();
        series.dedup();
        if series.is_empty() {
            return None;
        }

        let bars: Vec<StackedBar> = rows
            .iter()
            .map(|row| {
                let mut offset = 0;
                let segments = series
                    .iter()
                    .map(|&level| {
                        let count = row.count(level);
                        let segment = BarSegment {
                            level,
                            count,
                            offset,
                        };
                        offset += count;
                        segment
                    })
                    .collect();
                StackedBar {
                    subject: row.subject.clone(),
                    label: subject_display_name(&row.subject).to_string(),
                    segments,
                }
            })
            .collect();

        let max_total = bars.iter().map(StackedBar::total).max().unwrap_or(0);
        Some(Self {
            bars,
            series,
            max_total,
        })
    }

    pub fn legend(&self) -> Vec<LegendEntry> {
        self.series
            .iter()
            .map(|&level| LegendEntry {
                level,
                label: level.label(),
                color: level.color(),
            })
            .collect()
    }

    /// Top of the value axis, rounded up to a readable step
    pub fn axis_max(&self, ticks: u32) -> u64 {
        nice_step(self.max_total, ticks) * u64::from(ticks.max(1))
    }

    /// Evenly spaced axis ticks from zero to `axis_max`
    pub fn ticks(&self, ticks: u32) -> Vec<u64> {
        let step = nice_step(self.max_total, ticks);
        (0..=u64::from(ticks.max(1))).map(|i| i * step).collect()
    }
}

/// Smallest step of the form {1, 2, 5} x 10^n such that `ticks` steps cover
/// `max`.
fn nice_step(max: u64, ticks: u32) -> u64 {
    let ticks = u64::from(ticks.max(1));
    let raw = max.div_ceil(ticks).max(1);
    let mut magnitude = 1u64;
    while magnitude.saturating_mul(10) <= raw {
        magnitude *= 10;
    }
    [1, 2, 5, 10]
        .into_iter()
        .map(|m| m * magnitude)
        .find(|step| *step >= raw)
        .unwrap_or(10 * magnitude)
}

/// Count with thousands separators, e.g. `12,345`
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
