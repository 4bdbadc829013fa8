use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use tracing_subscriber::EnvFilter;

use solepulse_cli::{input_files, merge_annotation, read_rows, SourceRow};
use solepulse_core::config::Config;
use solepulse_core::types::{InputRecord, SentimentLabel};
use solepulse_detect::extract_urls;
use solepulse_hybrid::{HybridAnnotator, LabelCounts};

const CHUNK: usize = 256;

fn usage(prog: &str) -> ! {
    eprintln!("Usage: {prog} annotate <input.jsonl|dir> [output.jsonl] [--no-contextual]");
    eprintln!("       {prog} detect \"<text>\" [--no-contextual]");
    std::process::exit(1)
}

fn parse_args() -> (String, Vec<String>, bool) {
    let mut args: Vec<String> = env::args().collect();
    let prog = args.remove(0);
    let no_contextual = args.iter().any(|a| a == "--no-contextual");
    args.retain(|a| a != "--no-contextual");
    if args.is_empty() {
        usage(&prog);
    }
    let cmd = args.remove(0);
    if !matches!(cmd.as_str(), "annotate" | "detect") || args.is_empty() {
        usage(&prog);
    }
    (cmd, args, no_contextual)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let config = Config::load().map_err(|e| {
        eprintln!("Error loading config: {}", e);
        e
    })?;
    let (cmd, args, no_contextual) = parse_args();
    let annotator = HybridAnnotator::from_config(&config, !no_contextual)?;

    match cmd.as_str() {
        "annotate" => {
            let input = PathBuf::from(&args[0]);
            let output = args.get(1).map(PathBuf::from);
            annotate(&annotator, input, output)?;
        }
        _ => {
            let text = &args[0];
            let record = InputRecord::new("cli", text.as_str()).with_urls(extract_urls(text));
            let annotation = annotator.annotate_one(&record);
            println!("{}", serde_json::to_string_pretty(&annotation)?);
        }
    }
    Ok(())
}

fn annotate(annotator: &HybridAnnotator, input: PathBuf, output: Option<PathBuf>) -> anyhow::Result<()> {
    let mut rows: Vec<SourceRow> = Vec::new();
    for file in input_files(&input)? {
        let file_rows = read_rows(&file)?;
        info!(file = %file.display(), records = file_rows.len(), "read input");
        rows.extend(file_rows);
    }
    if rows.is_empty() {
        info!(input = %input.display(), "no records to annotate");
        return Ok(());
    }

    let mut out: Box<dyn Write> = match &output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let pb = ProgressBar::new(rows.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} records ({percent}%) {msg}",
            )?
            .progress_chars("#>-"),
    );
    let mut counts = LabelCounts::default();
    for chunk in rows.chunks(CHUNK) {
        let records: Vec<InputRecord> = chunk.iter().map(|r| r.record.clone()).collect();
        let annotations = annotator.annotate(&records);
        let tally = LabelCounts::from_annotations(&annotations, annotator.settings());
        counts.positive += tally.positive;
        counts.neutral += tally.neutral;
        counts.negative += tally.negative;
        for (row, annotation) in chunk.iter().zip(&annotations) {
            let label: SentimentLabel = annotator.label(annotation);
            let merged = merge_annotation(row.original.clone(), annotation, label)?;
            writeln!(out, "{}", serde_json::to_string(&merged)?)?;
        }
        pb.inc(chunk.len() as u64);
    }
    out.flush()?;
    pb.finish_with_message("done");

    info!(
        records = counts.total(),
        positive = counts.positive,
        neutral = counts.neutral,
        negative = counts.negative,
        output = %output.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "stdout".to_string()),
        "annotation complete"
    );
    Ok(())
}
