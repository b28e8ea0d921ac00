//! Output and input defaults, read from `icpbr.toml` and `ICPBR_*`.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::ValueEnum;
use serde::Deserialize;

/// How certificate files are encoded on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
  /// PEM if the file starts with `-----BEGIN`, DER otherwise.
  #[default]
  Auto,
  Pem,
  Der,
}

/// Shape of the optional config file. Every key may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
  /// Pretty-print JSON output.
  pub pretty:      bool,
  pub format:      InputFormat,
  /// Files hold hex-encoded DER.
  pub hex:         bool,
  /// Include the SHA-256 fingerprint of each certificate.
  pub fingerprint: bool,
}

impl CliConfig {
  /// Merge the config file at `path` (if it exists) with `ICPBR_*`
  /// environment variables.
  pub fn load(path: PathBuf) -> anyhow::Result<Self> {
    config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("ICPBR"))
      .build()
      .context("failed to read config file")?
      .try_deserialize()
      .context("failed to deserialise CliConfig")
  }
}
