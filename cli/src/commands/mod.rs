pub mod metadata;
pub mod search;
pub mod stats;
pub mod top;

pub use metadata::*;
pub use search::*;
pub use stats::*;
pub use top::*;

use serde::Serialize;

fn print_json<T: Serialize>(value: &T) -> crate::CliResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
