/*
cargo run --bin convert_steps

cargo run --bin convert_steps -- \
    --file   src/data/documents.json \
    --output src/data/documents_input_mode.json \
    --report logs/convert_steps_report.json
*/

use std::fs::{create_dir_all, File};
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use log::info;
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};

use doc_steps::store::DEFAULT_DOCUMENTS_PATH;
use doc_steps::{convert_documents, load_documents, save_documents, Keywords};

// Rewrite personal-data steps of the documents file into input-mode steps
#[derive(Parser, Debug)]
#[command(author, version, about = "Convert personal-data steps to input-mode")]
struct Cli {
    // Documents file (JSON array), overwritten in place unless --output is given
    #[arg(short, long, default_value = DEFAULT_DOCUMENTS_PATH)]
    file: PathBuf,

    // Write the converted documents here instead
    #[arg(short, long)]
    output: Option<PathBuf>,

    // JSON file with "titles" and/or "fields" keyword lists
    #[arg(long)]
    keywords: Option<PathBuf>,

    // Also write a JSON report of converted steps per document
    #[arg(long)]
    report: Option<PathBuf>,

    // Convert and report, but leave the documents file alone
    #[arg(long)]
    dry_run: bool,

    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // logging setup
    create_dir_all(&cli.log_dir)?;
    let ts = Local::now().format("%Y%m%d_%H%M%S");
    WriteLogger::init(
        LevelFilter::Info,
        LogConfig::default(),
        File::create(cli.log_dir.join(format!("convert_steps_{ts}.log")))?,
    )?;
    info!("Started - file: {:?}, output: {:?}, dry_run: {}", cli.file, cli.output, cli.dry_run);

    let keywords = match &cli.keywords {
        Some(path) => Keywords::from_file(path)?,
        None => Keywords::default(),
    };
    info!("Title keywords: {:?}", keywords.titles);
    info!("Field keywords: {:?}", keywords.fields);

    println!("Loading documents...");
    let mut docs = load_documents(&cli.file)?;
    println!("Found {} documents", docs.len());

    let report = convert_documents(&mut docs, &keywords)?;
    let count = report.converted_steps;
    println!("Converting {count} steps...");
    io::stdout().flush()?;

    if !cli.dry_run {
        let out = cli.output.as_ref().unwrap_or(&cli.file);
        save_documents(out, &docs)?;
    }

    report.log_summary(10);
    if let Some(path) = &cli.report {
        report.write(path)?;
        info!("Report written to {}", path.display());
    }

    if cli.dry_run {
        println!("Dry run: {count} steps would be converted");
    } else {
        println!("Successfully converted {count} steps!");
    }
    io::stdout().flush()?;

    info!("Finished");
    Ok(())
}
