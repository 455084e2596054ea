/// Validate every token record and the published token list.
use std::path::PathBuf;
use std::process;

use clap::Parser;

use tokenlist::global::{ TOKENS_DIR, TOKEN_LIST_FILE };
use tokenlist::logger::Logger;
use tokenlist::validator;

#[derive(Parser, Debug)]
#[command(author, version, about = "Validate token records and the published token list", long_about = None)]
struct Args {
    /// Directory containing the per-token JSON records
    #[arg(long, default_value = TOKENS_DIR)]
    tokens_dir: PathBuf,

    /// Path of the published token list to validate
    #[arg(long, default_value = TOKEN_LIST_FILE)]
    list: PathBuf,
}

fn main() {
    let args = Args::parse();

    match validator::validate_all(&args.tokens_dir, &args.list) {
        Ok(report) if report.is_clean() => {
            Logger::success("All validations passed successfully");
        }
        Ok(_) => {
            Logger::error("Validation failed with errors");
            process::exit(1);
        }
        Err(e) => {
            Logger::error(&e.to_string());
            process::exit(1);
        }
    }
}
