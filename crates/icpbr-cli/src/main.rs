//! `icpbr` — print the holder data of ICP-Brasil Pessoa Física certificates.
//!
//! # Usage
//!
//! ```text
//! icpbr holder.pem
//! icpbr --pretty --fingerprint a.cer b.cer
//! icpbr --hex --format der dump.txt
//! ```
//!
//! One JSON object is written to stdout per file. Logs go to stderr.

mod input;
mod settings;

use std::{
  path::{Path, PathBuf},
  process::ExitCode,
};

use anyhow::Context as _;
use clap::Parser;
use icpbr_core::PersonalRecord;
use serde::Serialize;
use settings::{CliConfig, InputFormat};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
  name = "icpbr",
  version,
  about = "Decode holder data from ICP-Brasil Pessoa Física certificates"
)]
struct Args {
  /// Certificate files to decode.
  #[arg(required = true, value_name = "FILE")]
  files: Vec<PathBuf>,

  /// Path to a TOML config file.
  #[arg(short, long, value_name = "FILE", default_value = "icpbr.toml")]
  config: PathBuf,

  /// Input encoding (overrides the config file).
  #[arg(long, value_enum)]
  format: Option<InputFormat>,

  /// Files hold hex-encoded DER.
  #[arg(long)]
  hex: bool,

  /// Pretty-print JSON.
  #[arg(long)]
  pretty: bool,

  /// Include the SHA-256 fingerprint of each certificate.
  #[arg(long)]
  fingerprint: bool,
}

// ─── Output ───────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct Report<'a> {
  file:    &'a Path,
  #[serde(skip_serializing_if = "Option::is_none")]
  sha256:  Option<String>,
  #[serde(flatten)]
  outcome: Outcome,
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum Outcome {
  Record(PersonalRecord),
  Error(String),
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<ExitCode> {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();
  let file_cfg = CliConfig::load(args.config.clone())?;

  // CLI flags override config file, which overrides defaults.
  let cfg = CliConfig {
    pretty:      args.pretty || file_cfg.pretty,
    format:      args.format.unwrap_or(file_cfg.format),
    hex:         args.hex || file_cfg.hex,
    fingerprint: args.fingerprint || file_cfg.fingerprint,
  };

  let mut failures = 0usize;
  for path in &args.files {
    let report = decode_file(path, &cfg);
    if let Outcome::Error(ref e) = report.outcome {
      tracing::warn!(file = %path.display(), "{e}");
      failures += 1;
    } else {
      tracing::info!(file = %path.display(), "decoded");
    }

    let json = if cfg.pretty {
      serde_json::to_string_pretty(&report)
    } else {
      serde_json::to_string(&report)
    }
    .context("serialising report")?;
    println!("{json}");
  }

  Ok(if failures == 0 {
    ExitCode::SUCCESS
  } else {
    ExitCode::FAILURE
  })
}

fn decode_file<'a>(path: &'a Path, cfg: &CliConfig) -> Report<'a> {
  let der = match input::load_der(path, cfg.format, cfg.hex) {
    Ok(der) => der,
    Err(e) => {
      return Report {
        file:    path,
        sha256:  None,
        outcome: Outcome::Error(format!("{e:#}")),
      };
    }
  };

  let outcome = match icpbr_pf::decode_der(&der) {
    Ok(record) => Outcome::Record(record),
    Err(e) => Outcome::Error(e.to_string()),
  };
  Report {
    file: path,
    sha256: cfg.fingerprint.then(|| input::fingerprint(&der)),
    outcome,
  }
}
