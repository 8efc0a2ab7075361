//! Print every line and field of a CSV file
//!
//! Usage: cargo run --example print_fields -- [path]   (default: example.csv)
//!
//! Set RUST_LOG=debug to see reader diagnostics.

use linecsv::csv::{LineParser, LineRead};
use log::{error, info};
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::process::ExitCode;

fn run(path: &str) -> Result<(), Box<dyn Error>> {
    let file = File::open(path).map_err(|e| format!("Error opening file {}: {}", path, e))?;
    if file.metadata()?.len() == 0 {
        return Err(format!("File {} is empty", path).into());
    }

    let mut input = BufReader::new(file);
    let mut parser = LineParser::new();

    loop {
        let read = parser
            .read_line(&mut input)
            .map_err(|e| format!("Error reading line: {}", e))?;

        let Some(line) = read.line() else {
            break;
        };

        println!("Line: {}", line);
        for i in 0..parser.field_count() {
            let field = parser.field(i)?;
            println!("Field {}: {}", i, field);
        }

        if read.is_end_of_stream() {
            break;
        }
    }

    info!("Parsed {} line(s) from {}", parser.lines_read(), path);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "example.csv".to_string());

    match run(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
