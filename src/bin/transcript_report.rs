use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use whisper_align_rs::{
    AlignerConfig, Document, Entity, Sentence, Token, WhisperAlignerBuilder,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Timestamped transcript, one sentence per line.
    Text,
    /// Full timing report: tokens, sentences, entities, transcript.
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "transcript_report")]
#[command(about = "Render timestamped transcripts from Whisper-style engine output")]
struct Args {
    /// Engine output JSON file.
    input: PathBuf,
    #[arg(long, env = "TRANSCRIPT_REPORT_LANG", default_value = AlignerConfig::DEFAULT_LANG)]
    lang: String,
    /// Treat the engine output as one text span per segment (no per-word
    /// entries).
    #[arg(long)]
    segment_level: bool,
    #[arg(long, default_value = AlignerConfig::DEFAULT_SEGMENTS_KEY)]
    segments_key: String,
    #[arg(long, default_value = AlignerConfig::DEFAULT_WORDS_KEY)]
    words_key: String,
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
    /// Write to this file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct TimingReport<'a> {
    generated_at: String,
    input: String,
    lang: &'a str,
    word_level: bool,
    tokens: &'a [Token],
    sentences: &'a [Sentence],
    entities: &'a [Entity],
    transcript: &'a str,
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = AlignerConfig {
        lang: args.lang.clone(),
        pipeline: None,
        word_level: !args.segment_level,
        segments_key: args.segments_key.clone(),
        words_key: args.words_key.clone(),
    };
    let aligner = WhisperAlignerBuilder::new(config).build()?;
    let doc = aligner.create_doc_from_path(&args.input)?;

    let rendered = match args.format {
        OutputFormat::Text => doc.transcript.clone(),
        OutputFormat::Json => format_timing_report(&doc, &args)?,
    };

    match &args.out {
        Some(path) => fs::write(path, rendered)?,
        None => print!("{rendered}"),
    }
    Ok(())
}

fn format_timing_report(doc: &Document, args: &Args) -> Result<String, serde_json::Error> {
    let report = TimingReport {
        generated_at: Utc::now().to_rfc3339(),
        input: args.input.display().to_string(),
        lang: &args.lang,
        word_level: !args.segment_level,
        tokens: &doc.tokens,
        sentences: &doc.sentences,
        entities: &doc.entities,
        transcript: &doc.transcript,
    };
    let mut out = serde_json::to_string_pretty(&report)?;
    out.push('\n');
    Ok(out)
}
