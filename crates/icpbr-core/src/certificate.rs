//! CertificateView — the slice of a parsed X.509 certificate the decoders
//! read.
//!
//! Chain loading, signature checks and revocation are the caller's job. By
//! the time a certificate reaches this type it is just a subject and a list
//! of raw extension values.

use der_parser::oid::Oid;

/// A single X.509 extension: its identifier and the raw DER carried in
/// `extnValue` (the OCTET STRING wrapper already removed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extension {
  pub oid:   Oid<'static>,
  pub value: Vec<u8>,
}

impl Extension {
  pub fn new(oid: Oid<'static>, value: impl Into<Vec<u8>>) -> Self {
    Self {
      oid,
      value: value.into(),
    }
  }
}

/// The subject fields and extensions of an issued certificate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CertificateView {
  /// Subject `CN`.
  pub common_name:          String,
  /// Subject `OU` values, in certificate order.
  pub organizational_units: Vec<String>,
  /// Extensions, in certificate order.
  pub extensions:           Vec<Extension>,
}

impl CertificateView {
  /// The first extension whose OID equals `oid`.
  pub fn extension(&self, oid: &Oid<'_>) -> Option<&Extension> {
    self.extensions.iter().find(|e| e.oid == *oid)
  }
}
