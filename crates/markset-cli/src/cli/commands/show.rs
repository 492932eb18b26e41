use markset_core::{registry, MarkerKind};
use serde::Serialize;

use crate::cli::args::ShowArgs;
use crate::exit_codes::{SUCCESS, UNKNOWN_MARKER};

#[derive(Serialize)]
struct MarkerDetail {
    name: &'static str,
    kind: MarkerKind,
    parameterized: bool,
}

pub fn run(args: ShowArgs) -> anyhow::Result<i32> {
    let marker = match registry::get(&args.name) {
        Ok(marker) => marker,
        Err(err) => {
            eprintln!("error: {err}");
            if let Some(suggestion) = err.suggestion() {
                eprintln!("hint: did you mean '{suggestion}'?");
            }
            return Ok(UNKNOWN_MARKER);
        }
    };

    let detail = MarkerDetail {
        name: marker.name(),
        kind: marker.kind(),
        parameterized: marker.is_parameterized(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&detail)?);
    } else {
        println!("name: {}", detail.name);
        println!("kind: {}", detail.kind);
        if detail.parameterized {
            println!("note: carries one opaque value per attachment");
        }
    }
    Ok(SUCCESS)
}
