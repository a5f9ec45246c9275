//! CLI tool for cellgrid - loads a CSV file into a table and outputs JSON
//!
//! Usage:
//!   cellgrid_cli <input.csv>                  # Output table JSON to stdout
//!   cellgrid_cli <input.csv> -o out.json      # Output table JSON to file
//!   cellgrid_cli <input.csv> --rows           # Round-trip back to rows
//!
//! The first CSV record is the header row.

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::io::{self, Write};

use cellgrid::GridStore;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cellgrid_cli <input.csv> [-o output.json] [--rows]");
        std::process::exit(1);
    }

    let input_path = &args[1];
    let mut output_path = None;
    let mut as_rows = false;
    let mut rest = args[2..].iter();
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "-o" => output_path = rest.next(),
            "--rows" => as_rows = true,
            other => {
                eprintln!("Unknown argument: {}", other);
                std::process::exit(1);
            }
        }
    }

    // Read input file
    let mut reader = match csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(input_path)
    {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error reading {}: {}", input_path, e);
            std::process::exit(1);
        }
    };

    let mut rows: Vec<Vec<String>> = Vec::new();
    for (line, record) in reader.records().enumerate() {
        match record {
            Ok(r) => rows.push(r.iter().map(str::to_string).collect()),
            Err(e) => {
                eprintln!("Error parsing CSV record {}: {}", line + 1, e);
                std::process::exit(1);
            }
        }
    }

    // Build the table
    let store = match GridStore::from_tabular(&rows) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error loading table: {}", e);
            std::process::exit(1);
        }
    };
    eprintln!(
        "Loaded {} columns x {} rows",
        store.column_count(),
        store.row_count()
    );

    // Serialize to JSON
    let json = if as_rows {
        serde_json::to_string_pretty(&store.to_tabular())
    } else {
        serde_json::to_string_pretty(store.table())
    };
    let json = match json {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = std::fs::write(path, &json) {
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
