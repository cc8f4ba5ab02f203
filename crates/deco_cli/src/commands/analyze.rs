//! Analyze command - score stories for decodability.
//!
//! Builds the session corpora once, then scores a single document or every
//! `.txt` file under a directory against the lesson's phonics target.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;
use walkdir::WalkDir;

use deco_corpus::{CorporaBuilder, Grade, SessionConfig};
use deco_phonics::{PhonicsTarget, PronunciationDict};
use deco_score::{diversity_ratio, DecodabilityScorer, ScoreReport};

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Story file, or directory of .txt story files
    path: PathBuf,

    /// Lesson the stories target
    #[arg(short, long)]
    lesson: u32,

    /// Grade band: k, 1, or 2
    #[arg(short, long, default_value = "1", value_parser = parse_grade)]
    grade: Grade,

    /// Curriculum table (tab-separated: rule, comma-separated words)
    #[arg(long, default_value = "data/curriculum.tsv")]
    curriculum: PathBuf,

    /// Ranked frequency word list (one word per line)
    #[arg(long, default_value = "data/frequency_words.txt")]
    frequency: PathBuf,

    /// Age-of-acquisition table (tab-separated)
    #[arg(long, default_value = "data/aoa_ratings.tsv")]
    aoa: PathBuf,

    /// Pronunciation dictionary (CMU format)
    #[arg(long, default_value = "data/cmudict.txt")]
    dict: PathBuf,

    /// Optional comma-delimited mastered word list
    #[arg(long)]
    mastered: Option<PathBuf>,

    /// Optional session configuration (YAML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fail (exit 3) when any story's leftover percentage exceeds this
    #[arg(long)]
    max_leftover: Option<f64>,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    format: String,
}

pub async fn execute(args: AnalyzeArgs) -> Result<()> {
    info!("Analyzing {:?} against lesson {}", args.path, args.lesson);

    let config = match &args.config {
        Some(path) => SessionConfig::from_yaml_file(path)
            .with_context(|| format!("Failed to load session config from {:?}", path))?,
        None => SessionConfig::default(),
    };
    let target = PhonicsTarget::phonemes(config.target_phonemes(args.lesson));

    let mut builder = CorporaBuilder::new(&args.curriculum, &args.frequency, &args.aoa)
        .with_config(config);
    if let Some(mastered) = &args.mastered {
        builder = builder.with_mastered_list(mastered);
    }

    let corpora = builder
        .build(args.lesson, args.grade)
        .context("Failed to build session corpora")?;

    let dict = PronunciationDict::read_file(&args.dict)
        .context("Failed to load pronunciation dictionary")?;
    let scorer = DecodabilityScorer::new(&dict, &corpora, target);

    let stories = collect_stories(&args.path)?;
    let mut reports: Vec<(PathBuf, ScoreReport, f64)> = Vec::new();

    for story_path in stories {
        let text = fs::read_to_string(&story_path)
            .with_context(|| format!("Failed to read story {:?}", story_path))?;
        let report = scorer.score(&text);
        let diversity = diversity_ratio(&text);
        reports.push((story_path, report, diversity));
    }

    if args.format == "json" {
        let json_reports: Vec<serde_json::Value> = reports
            .iter()
            .map(|(path, report, diversity)| {
                serde_json::json!({
                    "story": path,
                    "report": report,
                    "diversity_ratio": diversity,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json_reports)?);
    } else {
        for (path, report, diversity) in &reports {
            println!("{}", path.display());
            println!("  {}", report.summary());
            println!("  diversity {:.2}", diversity);
        }
    }

    if let Some(max_leftover) = args.max_leftover {
        let failed: Vec<_> = reports
            .iter()
            .filter(|(_, report, _)| report.leftover_pct > max_leftover)
            .collect();
        if !failed.is_empty() {
            for (path, report, _) in &failed {
                eprintln!(
                    "{}: leftover {:.2}% exceeds {:.2}%",
                    path.display(),
                    report.leftover_pct,
                    max_leftover
                );
            }
            std::process::exit(3);
        }
    }

    Ok(())
}

/// Collect the story files to score: the path itself, or every `.txt` file
/// under it when it is a directory.
fn collect_stories(path: &PathBuf) -> Result<Vec<PathBuf>> {
    if !path.exists() {
        anyhow::bail!("Path not found: {:?}", path);
    }
    if path.is_file() {
        return Ok(vec![path.clone()]);
    }

    let mut stories: Vec<PathBuf> = WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .filter(|e| e.path().extension().map_or(false, |ext| ext == "txt"))
        .map(|e| e.path().to_path_buf())
        .collect();
    stories.sort();

    if stories.is_empty() {
        anyhow::bail!("No .txt stories found under {:?}", path);
    }
    Ok(stories)
}

fn parse_grade(value: &str) -> Result<Grade, String> {
    match value.to_lowercase().as_str() {
        "k" | "kindergarten" => Ok(Grade::Kindergarten),
        "1" | "first" => Ok(Grade::First),
        "2" | "second" => Ok(Grade::Second),
        other => Err(format!("Unknown grade: {} (expected k, 1, or 2)", other)),
    }
}
