//! Face engagement analyzer: reads one frame and prints the engagement read as JSON.

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use face_engagement::{
    config::Config,
    decode::encode_payload,
    detector::RecordedDetector,
    FaceAnalyzer,
};
use log::{info, warn};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("input").required(true).args(["image", "payload"])))]
struct Args {
    /// Image file to analyze
    #[arg(long)]
    image: Option<PathBuf>,

    /// File holding a base64 or data URL payload
    #[arg(long)]
    payload: Option<PathBuf>,

    /// Recorded detection (YAML) to replay; overrides the config file
    #[arg(long)]
    detections: Option<PathBuf>,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    /// Print JSON on a single line
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    let config = match &args.config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            let config = Config::from_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            config.validate()?;
            config
        }
        None => Config::default(),
    };

    let detector = match args.detections.as_ref().or(config.detector.recording.as_ref()) {
        Some(path) => RecordedDetector::from_file(path)
            .with_context(|| format!("failed to load detections {}", path.display()))?,
        None => {
            warn!("No detector recording given; every frame will report no face");
            RecordedDetector::default()
        }
    };
    let analyzer = FaceAnalyzer::from_config(detector, &config);

    let payload = if let Some(path) = &args.image {
        let bytes = std::fs::read(path).with_context(|| format!("failed to read image {}", path.display()))?;
        encode_payload(&bytes)
    } else if let Some(path) = &args.payload {
        std::fs::read_to_string(path).with_context(|| format!("failed to read payload {}", path.display()))?
    } else {
        anyhow::bail!("either --image or --payload is required");
    };

    let result = analyzer.analyze(&payload);

    let json = if config.output.pretty && !args.compact {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{json}");

    Ok(())
}
