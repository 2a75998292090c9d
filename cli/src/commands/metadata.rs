use super::print_json;
use crate::CliResult;
use gscores::ScoresApi;

pub async fn show_metadata<A: ScoresApi>(api: &A, json: bool) -> CliResult {
    let metadata = api.metadata().await?;
    if json {
        return print_json(&metadata);
    }

    println!("Subjects ({})", metadata.subjects.len());
    for subject in &metadata.subjects {
        println!("  {:<12} {}", subject.key, subject.name);
    }
    Ok(())
}
