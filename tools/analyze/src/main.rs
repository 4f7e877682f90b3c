//! Elevation analysis CLI: decodes a TIFF DEM, downsamples it, and prints
//! the analysis report as JSON or the statistics table.
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use relief_core::loader::load_tiff_path;
use relief_core::{analyze, AnalysisConfig, LandformSource};

// ── CLI ──────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "relief-analyze", about = "Slope, erosion and landform analysis of a TIFF DEM")]
struct Args {
    /// TIFF elevation raster (first band is used).
    input: PathBuf,

    /// Cap on the longer axis after resampling (overrides --config).
    #[arg(short, long)]
    max_dimension: Option<usize>,

    /// JSON analysis config, e.g. {"maxDimension": 128, "contourLevels": 15}.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Grid the landform classifiers read (overrides --config).
    #[arg(long, value_enum)]
    landform_source: Option<Source>,

    #[arg(short, long, value_enum, default_value = "json")]
    format: Format,

    /// Write here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print JSON.
    #[arg(long)]
    pretty: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Source {
    Resampled,
    Full,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Table,
}

impl From<Source> for LandformSource {
    fn from(s: Source) -> Self {
        match s {
            Source::Resampled => LandformSource::Resampled,
            Source::Full => LandformSource::Full,
        }
    }
}

/// Config file (if any) with command-line overrides applied.
fn resolve_config(args: &Args) -> Result<AnalysisConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            AnalysisConfig::from_json(&json)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => AnalysisConfig::default(),
    };
    if let Some(max_dimension) = args.max_dimension {
        config.max_dimension = max_dimension;
    }
    if let Some(source) = args.landform_source {
        config.landform_source = source.into();
    }
    config.validate()?;
    Ok(config)
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = resolve_config(&args)?;

    let grid = load_tiff_path(&args.input)
        .with_context(|| format!("loading {}", args.input.display()))?;
    let report = analyze(&grid, &config)?;

    let text = match args.format {
        Format::Table => report.stats.to_string(),
        Format::Json if args.pretty => serde_json::to_string_pretty(&report)?,
        Format::Json => serde_json::to_string(&report)?,
    };

    match &args.output {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_flags() {
        let args = Args::try_parse_from(["relief-analyze", "dem.tif"]).unwrap();
        assert_eq!(args.format, Format::Json);
        assert_eq!(resolve_config(&args).unwrap(), AnalysisConfig::default());
    }

    #[test]
    fn flags_override_config() {
        let args = Args::try_parse_from([
            "relief-analyze",
            "dem.tif",
            "--max-dimension",
            "64",
            "--landform-source",
            "full",
            "--format",
            "table",
        ])
        .unwrap();
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.max_dimension, 64);
        assert_eq!(config.landform_source, LandformSource::Full);
        assert_eq!(args.format, Format::Table);
    }

    #[test]
    fn zero_cap_is_rejected() {
        let args = Args::try_parse_from(["relief-analyze", "dem.tif", "-m", "0"]).unwrap();
        assert!(resolve_config(&args).is_err());
    }

    #[test]
    fn missing_config_file_is_reported() {
        let args =
            Args::try_parse_from(["relief-analyze", "dem.tif", "--config", "/nonexistent/relief.json"])
                .unwrap();
        let err = resolve_config(&args).unwrap_err();
        assert!(err.to_string().contains("reading config"));
    }
}
