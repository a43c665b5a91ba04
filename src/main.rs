// ABOUTME: Main entry point for the aqilha-deck program.
// ABOUTME: Builds the pitch deck and saves it as a PowerPoint file.

use aqilha_deck::{build_deck, save, Config};
use clap::Parser;
use env_logger::Env;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the output PPTX file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Document title stored in the file's metadata
    #[arg(long)]
    title: Option<String>,

    /// Print the slide outline without writing a file
    #[arg(long)]
    dry_run: bool,

    /// Enable informational logging
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: Cli) -> aqilha_deck::Result<()> {
    let config = Config::from_env()?;
    let output = cli.output.unwrap_or_else(|| config.output_path.clone());
    let pptx_config = config.get_pptx_config(cli.title);

    let deck = build_deck();

    if cli.dry_run {
        return deck.write_outline(io::stdout().lock());
    }

    save(&deck, &output, &pptx_config)?;
    println!("✅ تم إنشاء ملف PowerPoint بنجاح: {}", output.display());
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    // Failures go to stderr; the exit status stays 0
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
    }
}
