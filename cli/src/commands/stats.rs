use super::print_json;
use crate::CliResult;
use gscores::catalog::ScoreLevel;
use gscores::chart::{format_count, StackedBarChart};
use gscores::statistics::{transform_statistics, StatisticsQuery};
use gscores::ScoresApi;

const BAR_WIDTH: u64 = 40;

/// Split a comma-separated flag value, dropping blanks
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_levels(value: Option<&str>) -> Result<Vec<ScoreLevel>, String> {
    match value {
        None => Ok(ScoreLevel::ALL.to_vec()),
        Some(value) => split_list(value).iter().map(|key| key.parse()).collect(),
    }
}

/// Fetch the level distribution for the chosen subjects and levels and
/// print it as a stacked text chart
pub async fn show_statistics<A: ScoresApi>(
    api: &A,
    subjects: Option<&str>,
    levels: Option<&str>,
    json: bool,
) -> CliResult {
    let levels = parse_levels(levels)?;
    let subjects = match subjects {
        Some(value) => split_list(value),
        None => api
            .metadata()
            .await?
            .subject_keys()
            .map(str::to_string)
            .collect(),
    };

    let query = StatisticsQuery::new(subjects, levels)?;
    let data = api.filtered_statistics(&query).await?;
    if json {
        return print_json(&data);
    }

    let rows = transform_statistics(&data, query.levels());
    match StackedBarChart::build(&rows, query.levels()) {
        Some(chart) => print!("{}", render_chart(&chart)),
        None => println!("No data available"),
    }
    Ok(())
}

fn level_glyph(level: ScoreLevel) -> char {
    match level {
        ScoreLevel::Excellent => '█',
        ScoreLevel::Good => '▓',
        ScoreLevel::Average => '▒',
        ScoreLevel::Poor => '░',
    }
}

pub fn render_chart(chart: &StackedBarChart) -> String {
    let mut out = String::new();
    let legend: Vec<String> = chart
        .legend()
        .iter()
        .map(|entry| format!("{} {}", level_glyph(entry.level), entry.label))
        .collect();
    out.push_str(&legend.join("   "));
    out.push_str("\n\n");

    let scale = chart.max_total.max(1);
    for bar in &chart.bars {
        let mut drawn = String::new();
        for segment in &bar.segments {
            let width = segment.count * BAR_WIDTH / scale;
            drawn.extend(std::iter::repeat(level_glyph(segment.level)).take(width as usize));
        }
        out.push_str(&format!(
            "{:<18} {:<width$} {}\n",
            bar.label,
            drawn,
            format_count(bar.total()),
            width = BAR_WIDTH as usize
        ));
        let counts: Vec<String> = bar
            .segments
            .iter()
            .map(|s| format!("{}: {}", s.level.name(), format_count(s.count)))
            .collect();
        out.push_str(&format!("{:<18} {}\n", "", counts.join(", ")));
    }
    out
}
