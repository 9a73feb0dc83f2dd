use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use scanfile::{classify_and_name, extract, KeywordCorpus, RenamePlan};

/// Rename scanned documents (PDFs or images) from their extracted text.
#[derive(Parser)]
struct Args {
    /// Files to process
    #[arg(required = true)]
    files: Vec<PathBuf>,
    /// Custom code prefix for renamed files
    #[arg(short, long, default_value = "DOC")]
    code: String,
    /// Directory to save renamed copies into
    #[arg(short, long, default_value = "processed")]
    output_dir: PathBuf,
    /// Provider keyword list, one keyword per line
    #[arg(long, default_value = "provider_keywords.txt")]
    provider_keywords: PathBuf,
    /// Purpose keyword list, one keyword per line
    #[arg(long, default_value = "purpose_keywords.txt")]
    purpose_keywords: PathBuf,
    /// Print all results as JSON instead of plain lines
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct FileResult {
    original: String,
    renamed: String,
    fields: RenamePlan,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let corpus = KeywordCorpus::load(&args.provider_keywords, &args.purpose_keywords);
    fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("Failed to create {}", args.output_dir.display()))?;

    let mut results = Vec::new();
    for file in &args.files {
        if !file.is_file() {
            eprintln!("File not found: {}", file.display());
            continue;
        }
        let text = extract::extract_text(file);
        let extension = file
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
            .unwrap_or_default();
        let plan = classify_and_name(&text, &args.code, &extension, &corpus);
        let renamed = if plan.filename.is_empty() {
            format!("UnknownFile{extension}")
        } else {
            plan.filename.clone()
        };

        let dest = args.output_dir.join(&renamed);
        if let Err(e) = fs::copy(file, &dest) {
            eprintln!("Failed to copy {} to {}: {}", file.display(), dest.display(), e);
            continue;
        }
        if !args.json {
            println!("{} -> {}", file.display(), renamed);
        }
        results.push(FileResult {
            original: file.display().to_string(),
            renamed,
            fields: plan,
        });
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    }
    Ok(())
}
