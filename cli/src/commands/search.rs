use super::print_json;
use crate::CliResult;
use gscores::search::ScoreCard;
use gscores::ScoresApi;

/// Look up one registration number and print the score card
pub async fn search_scores<A: ScoresApi>(api: &A, sbd: &str, json: bool) -> CliResult {
    let sbd = sbd.trim();
    if sbd.is_empty() {
        return Err("Registration number must not be empty".into());
    }

    let record = api.search_by_sbd(sbd).await?;
    if json {
        return print_json(&record);
    }

    print!("{}", render_score_card(&ScoreCard::from_record(&record)));
    Ok(())
}

pub fn render_score_card(card: &ScoreCard) -> String {
    let mut out = String::new();
    out.push_str(&format!("Registration Number: {}\n", card.sbd));
    if let Some(code) = &card.language_code {
        out.push_str(&format!("Foreign Language: {code}\n"));
    }

    out.push_str("\nSubject Scores\n");
    for entry in &card.subjects {
        out.push_str(&format!("  {:<18} {}\n", entry.subject.name, entry.score));
    }

    if !card.block_totals.is_empty() {
        out.push_str("\nBlock Totals\n");
        for (block, total) in &card.block_totals {
            out.push_str(&format!("  {:<50} {total:.2}\n", block.name()));
        }
    }

    out.push_str(&format!(
        "\nAverage Score: {} ({})\n",
        card.average_display(),
        card.basis_display()
    ));
    out
}
