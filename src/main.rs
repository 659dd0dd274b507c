// PostPulse CLI: score a single post file (or inline text) or batch-score a
// directory of post files into a JSON report.
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use walkdir::WalkDir;

use postpulse::{get_insights, Label, SentimentEngine, SentimentResult};

#[derive(Parser)]
#[command(name = "postpulse", about = "Sentiment scoring for blog posts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score one post from a file or from inline text
    Analyze {
        /// Post file (txt, md, csv, json or pdf)
        file: Option<PathBuf>,
        /// Inline post text instead of a file
        #[arg(short, long)]
        text: Option<String>,
        /// Print the result as JSON instead of colored text
        #[arg(long)]
        json: bool,
    },
    /// Score every post file under a directory and write a JSON report
    Batch {
        #[arg(short, long)]
        dir: PathBuf,
        #[arg(short, long, default_value = "postpulse_report.json")]
        out: PathBuf,
    },
}

#[derive(Serialize, Deserialize, Debug)]
struct PostReport {
    path: String,
    score: f32,
    label: Label,
    confidence: f32,
    insights: Vec<String>,
}

fn read_post_file(path: &Path) -> Result<String> {
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");

    match ext {
        "txt" | "md" | "csv" | "json" => {
            let mut file = File::open(path)?;
            let mut content = String::new();
            file.read_to_string(&mut content)?;
            Ok(content)
        }
        "pdf" => pdf_extract::extract_text(path)
            .map_err(|e| anyhow!("PDF extraction failed: {}", e)),
        _ => Err(anyhow!("Unsupported file format: {}", ext)),
    }
}

fn analyze_one(
    engine: &SentimentEngine,
    file: Option<&Path>,
    text: Option<String>,
    json: bool,
) -> Result<()> {
    let text = match (text, file) {
        (Some(t), _) => t,
        (None, Some(p)) => read_post_file(p)?,
        (None, None) => bail!("provide a file or --text"),
    };

    let result = engine.analyze(&text);
    let insights = get_insights(&result);

    if json {
        let report = PostReport {
            path: file.map(|p| p.display().to_string()).unwrap_or_default(),
            score: result.score,
            label: result.label,
            confidence: result.confidence,
            insights,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_result(&result, &insights)
}

fn print_result(result: &SentimentResult, insights: &[String]) -> Result<()> {
    let color = match result.label {
        Label::Positive => Some(Color::Green),
        Label::Negative => Some(Color::Red),
        Label::Neutral => None,
    };

    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    stdout.set_color(ColorSpec::new().set_fg(color).set_bold(true))?;
    write!(stdout, "{}", result.label.title())?;
    stdout.reset()?;
    writeln!(
        stdout,
        "  score: {:.3}  confidence: {:.3}",
        result.score, result.confidence
    )?;
    for line in insights {
        writeln!(stdout, "  - {}", line)?;
    }
    Ok(())
}

fn batch_dir(engine: &SentimentEngine, dir: &Path, out: &Path) -> Result<()> {
    let allowed_exts = ["txt", "md", "csv", "json", "pdf"];
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .and_then(|s| s.to_str())
                .map(|ext| allowed_exts.contains(&ext))
                .unwrap_or(false)
        })
        .map(|e| e.path().to_path_buf())
        .collect();

    files.sort();

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] {wide_bar} {pos}/{len} {msg}",
        )?
        .progress_chars("=>-"),
    );

    let reports: Vec<PostReport> = files
        .par_iter()
        .map(|p| {
            // Unreadable files score as empty text rather than failing the run.
            let text = read_post_file(p).unwrap_or_else(|_| String::new());
            let result = engine.analyze(&text);
            pb.inc(1);
            PostReport {
                path: p.display().to_string(),
                score: result.score,
                label: result.label,
                confidence: result.confidence,
                insights: get_insights(&result),
            }
        })
        .collect();

    pb.finish_with_message("scoring posts");

    let fout = File::create(out)?;
    serde_json::to_writer_pretty(fout, &reports)?;
    println!("Wrote report to {}", out.display());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let engine = SentimentEngine::new();
    match cli.command {
        Commands::Analyze { file, text, json } => {
            analyze_one(&engine, file.as_deref(), text, json)?
        }
        Commands::Batch { dir, out } => batch_dir(&engine, &dir, &out)?,
    }
    Ok(())
}
