use std::env;
use std::fs;
use std::process::ExitCode;

use quotepress::{GenerateRequest, generate_pdf};

/// A small CLI that turns a JSON generation request into a PDF file.
fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Generates a quote PDF from a JSON request.");
        eprintln!();
        eprintln!("Usage: {} <request.json> [output.pdf]", args[0]);
        eprintln!();
        eprintln!("When no output path is given, the file is named after the");
        eprintln!("quote number in the request.");
        return ExitCode::FAILURE;
    }

    match run(&args[1], args.get(2).map(String::as_str)) {
        Ok(path) => {
            println!("Wrote {path}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(request_path: &str, output_path: Option<&str>) -> Result<String, Box<dyn std::error::Error>> {
    let raw = fs::read_to_string(request_path)?;
    let request: GenerateRequest = serde_json::from_str(&raw)?;

    let output = output_path
        .map(str::to_string)
        .unwrap_or_else(|| request.suggested_filename());

    let bytes = generate_pdf(&request)?;
    fs::write(&output, bytes)?;
    Ok(output)
}
