use super::print_json;
use crate::CliResult;
use gscores::top_students::TopStudentsTable;
use gscores::{Block, ScoresApi};

pub async fn show_top_students<A: ScoresApi>(api: &A, block: Block, json: bool) -> CliResult {
    let students = api.top_students(block).await?;
    if json {
        return print_json(&students);
    }

    println!("Top 10 Students: {}", block.name());
    let table = TopStudentsTable::build(block, &students);
    if table.is_empty() {
        println!("No data available");
    } else {
        print!("{}", render_table(&table));
    }
    Ok(())
}

pub fn render_table(table: &TopStudentsTable) -> String {
    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| {
            let mut cells = vec![row.rank.to_string(), row.sbd.clone()];
            cells.extend(row.scores.iter().cloned());
            cells.push(row.total.clone());
            cells
        })
        .collect();

    let widths: Vec<usize> = table
        .headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .filter_map(|cells| cells.get(i))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let format_line = |cells: &[String]| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        format!("{}\n", padded.join("  ").trim_end())
    };

    let mut out = format_line(&table.headers);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&format_line(&rule));
    for cells in &rows {
        out.push_str(&format_line(cells));
    }
    out
}
