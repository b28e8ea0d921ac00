//! Loading certificate files into DER.

use std::{fs, path::Path};

use anyhow::{Context as _, anyhow};
use sha2::{Digest, Sha256};
use x509_parser::pem::parse_x509_pem;

use crate::settings::InputFormat;

/// Read `path` and return the DER of the certificate it holds.
pub fn load_der(
  path: &Path,
  format: InputFormat,
  hex: bool,
) -> anyhow::Result<Vec<u8>> {
  let raw =
    fs::read(path).with_context(|| format!("reading {}", path.display()))?;
  let raw = if hex { decode_hex(&raw)? } else { raw };
  to_der(raw, format)
}

/// Hex-decode, ignoring whitespace and line breaks.
fn decode_hex(raw: &[u8]) -> anyhow::Result<Vec<u8>> {
  let digits: Vec<u8> = raw
    .iter()
    .copied()
    .filter(|b| !b.is_ascii_whitespace())
    .collect();
  hex::decode(digits).context("decoding hex input")
}

fn to_der(raw: Vec<u8>, format: InputFormat) -> anyhow::Result<Vec<u8>> {
  let is_pem = match format {
    InputFormat::Auto => looks_like_pem(&raw),
    InputFormat::Pem => true,
    InputFormat::Der => false,
  };
  if !is_pem {
    return Ok(raw);
  }
  let (_, pem) =
    parse_x509_pem(&raw).map_err(|e| anyhow!("parsing PEM: {e}"))?;
  Ok(pem.contents)
}

fn looks_like_pem(raw: &[u8]) -> bool {
  raw.trim_ascii_start().starts_with(b"-----BEGIN")
}

/// Lower-case hex SHA-256 of `der`.
pub fn fingerprint(der: &[u8]) -> String { hex::encode(Sha256::digest(der)) }
