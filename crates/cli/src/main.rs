//! CLI tool for generating a course PowerPoint deck from lecture markdown.

use anyhow::{Context, Result};
use clap::Parser;
use deck_core::{LectureExtractor, LectureRecord};
use deck_pptx::DeckBuilder;
use std::fs;
use std::path::{Path, PathBuf};

/// Generate a course PowerPoint deck from Lecture-*.md files.
#[derive(Parser, Debug)]
#[command(name = "deck-gen")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Course directory containing Lecture-*.md files
    #[arg(default_value = "course")]
    course_dir: PathBuf,

    /// Output file path (default: derived from the course directory name)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print extracted lecture records as JSON instead of building a deck
    #[arg(long)]
    dump_records: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let lecture_files = find_lecture_files(&args.course_dir)?;
    if lecture_files.is_empty() {
        anyhow::bail!(
            "No Lecture-*.md files found in {}",
            args.course_dir.display()
        );
    }

    println!(
        "Generating course deck from {} ({} lectures)",
        args.course_dir.display(),
        lecture_files.len()
    );

    let extractor = LectureExtractor::new();
    let mut records: Vec<(String, LectureRecord)> = Vec::new();

    for path in &lecture_files {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();
        println!("Processing {name}...");

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let record = extractor.extract(&content);
        log::debug!(
            "Lecture {} \"{}\": {} slide sections",
            record.number,
            record.title,
            record.slide_count()
        );
        records.push((name, record));
    }

    if args.dump_records {
        let dump: Vec<&LectureRecord> = records.iter().map(|(_, r)| r).collect();
        println!("{}", serde_json::to_string_pretty(&dump)?);
        return Ok(());
    }

    let mut builder = DeckBuilder::new();
    builder
        .add_title_slide()
        .context("Failed to build title slide")?;

    let mut content_slides = 0;
    for (name, record) in &records {
        content_slides += builder
            .add_lecture(record)
            .with_context(|| format!("Failed to build slides for {name}"))?;
    }

    let divider_count = records.len();
    let total = builder.slide_count();

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.course_dir));

    let bytes = builder.finish().context("Failed to assemble deck")?;
    fs::write(&output_path, &bytes)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    println!();
    println!(
        "Total slides: {total} (1 title + {divider_count} section dividers + {content_slides} content slides)"
    );
    println!("Saved to: {}", output_path.display());
    println!("File size: {:.1} KB", bytes.len() as f64 / 1024.0);

    Ok(())
}

/// Collect Lecture-*.md files in lexicographic filename order.
fn find_lecture_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read course directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && is_lecture_file(&path) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

fn is_lecture_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with("Lecture-") && n.ends_with(".md"))
}

/// Derive the output path from the course directory name.
fn default_output_path(course_dir: &Path) -> PathBuf {
    let stem = course_dir
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("course");

    course_dir.join(format!("{stem}-Complete.pptx"))
}
