/// Build the published token list from the per-token record files.
use std::path::PathBuf;
use std::process;

use clap::Parser;

use tokenlist::builder;
use tokenlist::global::{ TOKENS_DIR, TOKEN_LIST_FILE };
use tokenlist::logger::Logger;

#[derive(Parser, Debug)]
#[command(author, version, about = "Build the published token list from per-token record files", long_about = None)]
struct Args {
    /// Directory containing the per-token JSON records
    #[arg(long, default_value = TOKENS_DIR)]
    tokens_dir: PathBuf,

    /// Output path for the aggregated token list
    #[arg(long, default_value = TOKEN_LIST_FILE)]
    output: PathBuf,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = builder::build_token_list(&args.tokens_dir, &args.output) {
        Logger::error(&e.to_string());
        process::exit(1);
    }
}
