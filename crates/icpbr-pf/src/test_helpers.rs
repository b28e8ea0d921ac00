//! Minimal DER builder for synthesizing SubjectAltName extensions in tests.

use icpbr_core::{CertificateView, Extension};

use crate::oid;

/// Content octets of 2.16.76.1.3.1.
pub(crate) const PERSONAL_DATA_OID: &[u8] = &[0x60, 0x4c, 0x01, 0x03, 0x01];
/// Content octets of 2.16.76.1.3.6.
pub(crate) const CEI_OID: &[u8] = &[0x60, 0x4c, 0x01, 0x03, 0x06];
/// Content octets of 2.16.76.1.3.5.
pub(crate) const VOTER_OID: &[u8] = &[0x60, 0x4c, 0x01, 0x03, 0x05];
/// Content octets of 2.16.76.1.3.2 (PJ responsible person; not a PF block).
pub(crate) const PJ_RESPONSIBLE_OID: &[u8] = &[0x60, 0x4c, 0x01, 0x03, 0x02];

pub(crate) fn tlv(tag: u8, content: &[u8]) -> Vec<u8> {
  let mut out = vec![tag];
  let len = content.len();
  if len < 0x80 {
    out.push(len as u8);
  } else {
    let bytes: Vec<u8> = len
      .to_be_bytes()
      .into_iter()
      .skip_while(|&b| b == 0)
      .collect();
    out.push(0x80 | bytes.len() as u8);
    out.extend(bytes);
  }
  out.extend_from_slice(content);
  out
}

pub(crate) fn octets(content: &[u8]) -> Vec<u8> { tlv(0x04, content) }

pub(crate) fn printable(content: &str) -> Vec<u8> {
  tlv(0x13, content.as_bytes())
}

pub(crate) fn utf8(content: &str) -> Vec<u8> { tlv(0x0c, content.as_bytes()) }

/// `[0] IMPLICIT SEQUENCE { type-id, [0] EXPLICIT value }`
pub(crate) fn other_name(oid_content: &[u8], value_tlv: &[u8]) -> Vec<u8> {
  let mut body = tlv(0x06, oid_content);
  body.extend(tlv(0xa0, value_tlv));
  tlv(0xa0, &body)
}

/// `rfc822Name [1] IMPLICIT IA5String`
pub(crate) fn email(address: &str) -> Vec<u8> {
  tlv(0x81, address.as_bytes())
}

/// `GeneralNames ::= SEQUENCE OF GeneralName`
pub(crate) fn san(names: &[Vec<u8>]) -> Vec<u8> { tlv(0x30, &names.concat()) }

/// Personal-data payload text: `DDMMYYYY` + CPF + NIS + RG + issuer + UF.
pub(crate) fn personal_payload(
  birth: &str,
  cpf: &str,
  nis: &str,
  rg: &str,
  issuer: &str,
  state: &str,
) -> String {
  assert_eq!(birth.len(), 8);
  assert_eq!(cpf.len(), 11);
  assert_eq!(nis.len(), 11);
  assert_eq!(rg.len(), 15);
  format!("{birth}{cpf}{nis}{rg}{issuer}{state}")
}

/// Voter payload text: number + zone + section + municipality + UF.
pub(crate) fn voter_payload(
  number: &str,
  zone: &str,
  section: &str,
  municipality: &str,
  state: &str,
) -> String {
  assert_eq!(number.len(), 12);
  assert_eq!(zone.len(), 3);
  assert_eq!(section.len(), 4);
  format!("{number}{zone}{section}{municipality}{state}")
}

/// A certificate view with the given subject and an optional SAN value.
pub(crate) fn view(
  common_name: &str,
  organizational_units: &[&str],
  san_der: Option<Vec<u8>>,
) -> CertificateView {
  CertificateView {
    common_name:          common_name.to_string(),
    organizational_units: organizational_units
      .iter()
      .map(|s| s.to_string())
      .collect(),
    extensions:           san_der
      .map(|der| vec![Extension::new(oid::SUBJECT_ALT_NAME, der)])
      .unwrap_or_default(),
  }
}
