//! Whole-certificate entry points backed by `x509-parser`.

use icpbr_core::{CertificateView, Extension, PersonalRecord};
use x509_parser::{
  certificate::X509Certificate,
  parse_x509_certificate,
  pem::parse_x509_pem,
};

use crate::{
  decode::decode,
  error::{Error, Result},
};

/// Project a parsed certificate onto the fields the decoder reads.
///
/// A subject without `CN` yields an empty name.
pub fn certificate_view(cert: &X509Certificate<'_>) -> Result<CertificateView> {
  let subject = cert.subject();

  let common_name = subject
    .iter_common_name()
    .next()
    .map(|attr| attr.as_str())
    .transpose()
    .map_err(|e| Error::Certificate(format!("subject CN: {e}")))?
    .unwrap_or_default()
    .to_string();

  let organizational_units = subject
    .iter_organizational_unit()
    .map(|attr| attr.as_str().map(str::to_string))
    .collect::<Result<Vec<_>, _>>()
    .map_err(|e| Error::Certificate(format!("subject OU: {e}")))?;

  let extensions = cert
    .extensions()
    .iter()
    .map(|ext| Extension::new(ext.oid.to_owned(), ext.value))
    .collect();

  Ok(CertificateView {
    common_name,
    organizational_units,
    extensions,
  })
}

/// Decode a DER-encoded certificate.
pub fn decode_der(der: &[u8]) -> Result<PersonalRecord> {
  let (_, cert) = parse_x509_certificate(der)
    .map_err(|e| Error::Certificate(e.to_string()))?;
  decode(&certificate_view(&cert)?)
}

/// Decode the first certificate of a PEM document.
pub fn decode_pem(pem: &[u8]) -> Result<PersonalRecord> {
  let (_, pem) =
    parse_x509_pem(pem).map_err(|e| Error::Certificate(e.to_string()))?;
  decode_der(&pem.contents)
}
