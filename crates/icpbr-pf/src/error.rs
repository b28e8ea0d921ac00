//! Error types for the Pessoa Física decoder.

use thiserror::Error;

use crate::oid::DataBlock;

#[derive(Debug, Error)]
pub enum Error {
  #[error("malformed SubjectAltName extension: {0}")]
  MalformedExtension(String),

  #[error("invalid birth date: {0:?}")]
  InvalidDate(String),

  #[error(
    "{block} payload too short for {field}: need {needed} bytes, got {actual}"
  )]
  TruncatedPayload {
    block:  DataBlock,
    field:  &'static str,
    needed: usize,
    actual: usize,
  },

  #[error("{block} payload: {field} does not fall on a character boundary")]
  MalformedPayload {
    block: DataBlock,
    field: &'static str,
  },

  #[error("certificate parse error: {0}")]
  Certificate(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
