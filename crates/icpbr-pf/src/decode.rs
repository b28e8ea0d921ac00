//! Assemble a [`PersonalRecord`] from a certificate view.
//!
//! Pipeline:
//!   CertificateView
//!     ├─ split_subject()         → name, CPF from `CN` (if e-CPF)
//!     └─ SAN extension
//!          └─ parse_general_names() → Vec<GeneralName>
//!               └─ dispatch()          → one otherName per block + email
//!                    └─ payload::decode_*() → record fields

use std::borrow::Cow;

use icpbr_core::{CertificateView, PersonalRecord};
use tracing::debug;

use crate::{
  dispatch::dispatch,
  error::Result,
  general_name::{OtherName, parse_general_names},
  oid,
  payload,
  subject::split_subject,
};

/// Decode the holder data of an ICP-Brasil Pessoa Física certificate.
///
/// A missing SAN extension or missing blocks leave the corresponding fields
/// `None`. Any decoding error fails the whole call; no partial record is
/// returned.
pub fn decode(cert: &CertificateView) -> Result<PersonalRecord> {
  let subject = split_subject(&cert.common_name, &cert.organizational_units);
  let mut record = PersonalRecord::new(subject.name);
  record.cpf = subject.cpf;

  let Some(san) = cert.extension(&oid::SUBJECT_ALT_NAME) else {
    debug!("no SubjectAltName extension");
    return Ok(record);
  };

  let names = parse_general_names(&san.value)?;
  let matched = dispatch(&names);

  if let Some(text) = matched.personal_data.and_then(payload_text) {
    let data = payload::decode_personal_data(&text)?;
    debug!(
      cpf = data.cpf.is_some(),
      nis = data.nis.is_some(),
      rg = data.national_id.is_some(),
      "decoded personal-data block"
    );
    record.birth_date = Some(data.birth_date);
    if record.cpf.is_none() {
      record.cpf = data.cpf;
    }
    record.nis = data.nis;
    record.national_id = data.national_id;
  }

  if let Some(text) = matched.cei.and_then(payload_text) {
    record.cei = payload::decode_cei(&text)?;
    debug!(present = record.cei.is_some(), "decoded cei block");
  }

  if let Some(text) = matched.voter_registration.and_then(payload_text) {
    record.voter_registration = payload::decode_voter_registration(&text)?;
    debug!(
      present = record.voter_registration.is_some(),
      "decoded voter-registration block"
    );
  }

  if let Some(email) = matched.email {
    record.email = Some(email.to_string());
  }

  Ok(record)
}

/// Canonical text of an otherName; an empty payload counts as no block.
fn payload_text<'a>(other: &OtherName<'a>) -> Option<Cow<'a, str>> {
  Some(other.value.to_text()).filter(|text| !text.is_empty())
}
