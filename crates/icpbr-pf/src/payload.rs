//! Field decoding for each payload block, driven by [`crate::schema`].

use chrono::NaiveDate;
use icpbr_core::{NationalId, VoterRegistration};

use crate::{
  error::{Error, Result},
  schema::{
    CEI, Extracted, Field, PERSONAL_DATA, VOTER_REGISTRATION, cei, personal,
    voter,
  },
};

/// Birth date format inside the personal-data block.
const BIRTH_DATE_FORMAT: &str = "%d%m%Y";

/// Decoded 2.16.76.1.3.1 block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PersonalData {
  pub birth_date:  NaiveDate,
  pub cpf:         Option<String>,
  pub nis:         Option<String>,
  pub national_id: Option<NationalId>,
}

pub(crate) fn decode_personal_data(payload: &str) -> Result<PersonalData> {
  let fields = PERSONAL_DATA.extract(payload)?;

  let raw_date = fields.get(&personal::BIRTH_DATE).unwrap_or_default();
  let birth_date = parse_birth_date(raw_date)?;

  let national_id = fields.get(&personal::RG_NUMBER).map(|number| NationalId {
    number:            number.trim_start_matches('0').to_string(),
    issuing_authority: owned(&fields, &personal::RG_ISSUER),
    state:             owned(&fields, &personal::RG_STATE),
  });

  Ok(PersonalData {
    birth_date,
    cpf: fields.get(&personal::CPF).map(str::to_string),
    nis: fields.get(&personal::NIS).map(str::to_string),
    national_id,
  })
}

pub(crate) fn decode_cei(payload: &str) -> Result<Option<String>> {
  let fields = CEI.extract(payload)?;
  Ok(fields.get(&cei::CEI).map(str::to_string))
}

pub(crate) fn decode_voter_registration(
  payload: &str,
) -> Result<Option<VoterRegistration>> {
  let fields = VOTER_REGISTRATION.extract(payload)?;
  Ok(
    fields
      .get(&voter::NUMBER)
      .map(|number| VoterRegistration {
        number:       number.to_string(),
        zone:         owned(&fields, &voter::ZONE),
        section:      owned(&fields, &voter::SECTION),
        municipality: owned(&fields, &voter::MUNICIPALITY),
        state:        owned(&fields, &voter::STATE),
      }),
  )
}

/// Strict `DDMMYYYY`: exactly eight ASCII digits forming a valid date.
fn parse_birth_date(raw: &str) -> Result<NaiveDate> {
  if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
    return Err(Error::InvalidDate(raw.to_string()));
  }
  NaiveDate::parse_from_str(raw, BIRTH_DATE_FORMAT)
    .map_err(|_| Error::InvalidDate(raw.to_string()))
}

/// A group member's value; members of a present group are always read.
fn owned(fields: &Extracted<'_>, field: &Field) -> String {
  fields.get(field).unwrap_or_default().to_string()
}
