//! CLI tool for colresize - replays pointer gestures against a table
//!
//! Usage:
//!   colresize_cli <table.json>                          # Print the rendered table as JSON
//!   colresize_cli <table.json> --events gesture.json    # Replay events first
//!   colresize_cli <table.json> --events g.json -o out.json
//!
//! Set `RUST_LOG=debug` to see drag transitions on stderr.

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use colresize::{ColumnResizeTable, PointerEvent, ResizeOutcome};

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(target_arch = "wasm32")]
fn init_logging() {}

fn main() {
    init_logging();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: colresize_cli <table.json> [--events events.json] [-o output.json]");
        std::process::exit(1);
    }

    let input_path = &args[1];
    let mut events_path = None;
    let mut output_path = None;
    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--events" if i + 1 < args.len() => {
                events_path = Some(&args[i + 1]);
                i += 2;
            }
            "-o" if i + 1 < args.len() => {
                output_path = Some(&args[i + 1]);
                i += 2;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                std::process::exit(1);
            }
        }
    }

    // Read table definition
    let definition = match fs::read_to_string(input_path) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error reading {}: {}", input_path, e);
            std::process::exit(1);
        }
    };

    let mut table = match ColumnResizeTable::from_json(&definition) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error building table: {}", e);
            std::process::exit(1);
        }
    };

    // Replay gesture
    if let Some(path) = events_path {
        let events: Vec<PointerEvent> = match fs::read_to_string(path)
            .map_err(colresize::TableError::from)
            .and_then(|s| serde_json::from_str(&s).map_err(Into::into))
        {
            Ok(ev) => ev,
            Err(e) => {
                eprintln!("Error reading events from {}: {}", path, e);
                std::process::exit(1);
            }
        };
        let outcomes = table.replay(events);
        let rejected = outcomes
            .iter()
            .filter(|o| matches!(o, ResizeOutcome::Rejected))
            .count();
        if rejected > 0 {
            eprintln!("{} of {} events rejected", rejected, outcomes.len());
        }
        if table.is_dragging() {
            eprintln!("Gesture ended mid-drag; releasing");
            table.end_resize();
        }
    }

    // Serialize to JSON
    let json = match serde_json::to_string_pretty(&table.snapshot()) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &json) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
            eprintln!("Written: {}", path);
        }
        None => {
            io::stdout().write_all(json.as_bytes()).unwrap();
            println!();
        }
    }
}
