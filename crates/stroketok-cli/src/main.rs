use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use stroketok::config::PreprocessConfig;
use stroketok::dataset::{DatasetArchive, decode_points};
use stroketok::pipeline::Preprocessor;
use stroketok::quantize::quantize_angles;

#[derive(Debug, Parser)]
#[command(name = "stroketok")]
#[command(about = "Gesture-trace preprocessing frontend for HMM classifiers", long_about = None)]
struct Args {
    /// Path to a dataset archive (JSON with points/labels train+test arrays).
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Path to a single trace (JSON array of [x, y] pairs, or base64 packed f32).
    #[arg(long)]
    trace: Option<PathBuf>,

    /// Read a single trace (same JSON forms) from stdin.
    #[arg(long, default_value_t = false)]
    stdin: bool,

    /// Validate the archive and report split sizes without preprocessing.
    #[arg(long, default_value_t = false)]
    inspect_dataset: bool,

    /// Optional preprocessing config file (JSON).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emission alphabet size; overrides the config file.
    #[arg(long)]
    n_emission: Option<usize>,

    /// Shuffle seed for the train split.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// With --dataset: write the processed splits as JSON to stdout.
    #[arg(long, default_value_t = false)]
    emit_json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => PreprocessConfig::from_path(path)?,
        None => PreprocessConfig::default(),
    };
    if let Some(n_emission) = args.n_emission {
        config.n_emission = n_emission;
        config.validate().context("apply --n-emission")?;
    }

    if args.inspect_dataset {
        let dataset = args
            .dataset
            .as_ref()
            .context("--inspect-dataset requires --dataset")?;
        return inspect_dataset(dataset);
    }

    let modes = u32::from(args.dataset.is_some()) + u32::from(args.trace.is_some())
        + u32::from(args.stdin);
    if modes != 1 {
        anyhow::bail!("choose exactly one input mode: --dataset, --trace, or --stdin");
    }

    if let Some(path) = &args.dataset {
        return run_dataset(path, &config, args.seed, args.emit_json);
    }

    if let Some(path) = &args.trace {
        let json = std::fs::read_to_string(path).with_context(|| format!("read file {path:?}"))?;
        return run_trace(&json, &config);
    }

    let mut json = String::new();
    std::io::stdin()
        .read_to_string(&mut json)
        .context("read stdin")?;
    run_trace(&json, &config)
}

fn inspect_dataset(path: &PathBuf) -> Result<()> {
    let archive = DatasetArchive::open(path).context("load dataset archive")?;
    let train_points: usize = archive.train.iter().map(|s| s.points.len()).sum();
    let test_points: usize = archive.test.iter().map(|s| s.points.len()).sum();
    eprintln!(
        "archive ok: train_samples={} test_samples={} train_points={} test_points={}",
        archive.train.len(),
        archive.test.len(),
        train_points,
        test_points
    );
    Ok(())
}

fn run_dataset(path: &PathBuf, config: &PreprocessConfig, seed: u64, emit_json: bool) -> Result<()> {
    let archive = DatasetArchive::open(path).context("load dataset archive")?;
    let pp = Preprocessor::new(config)?;
    let splits = pp
        .prepare_splits(&archive, seed)
        .context("preprocess dataset")?;

    eprintln!(
        "prepared: train_samples={} test_samples={} n_emission={} bucket_width={} seed={seed}",
        splits.train.len(),
        splits.test.len(),
        pp.n_emission(),
        config.bucket_width_degrees()
    );
    if let Some(sample) = splits.test.first() {
        let symbols: Vec<String> = sample.observations.iter().map(|e| e.to_string()).collect();
        eprintln!("test[0]: label={} observations={}", sample.label, symbols.join(" "));
    }

    if emit_json {
        let json = serde_json::to_string_pretty(&splits).context("encode processed splits")?;
        println!("{json}");
    }
    Ok(())
}

fn run_trace(json: &str, config: &PreprocessConfig) -> Result<()> {
    let value: serde_json::Value = serde_json::from_str(json).context("parse trace JSON")?;
    let points = decode_points(&value).context("decode trace points")?;

    let angles = stroketok::angles::turning_angles(&points).context("extract turning angles")?;
    let symbols = quantize_angles(&angles, config.n_emission).context("quantize angles")?;

    let rendered: Vec<String> = symbols.iter().map(|e| e.to_string()).collect();
    eprintln!("points={} n_emission={}", points.len(), config.n_emission);
    println!("{}", rendered.join(" "));
    Ok(())
}
