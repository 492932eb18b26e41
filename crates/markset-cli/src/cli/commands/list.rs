use markset_core::{registry, MarkerKind};
use serde::Serialize;

use crate::cli::args::ListArgs;
use crate::exit_codes::SUCCESS;

#[derive(Serialize)]
struct MarkerRow {
    name: &'static str,
    kind: MarkerKind,
}

pub fn run(args: ListArgs) -> anyhow::Result<i32> {
    let rows: Vec<MarkerRow> = registry::all()
        .iter()
        .map(|m| MarkerRow {
            name: m.name(),
            kind: m.kind(),
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for row in &rows {
            println!("{:<22} {}", row.name, row.kind);
        }
    }
    Ok(SUCCESS)
}
