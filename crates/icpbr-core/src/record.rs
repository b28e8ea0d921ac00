//! PersonalRecord — the identity data of a Pessoa Física certificate holder.
//!
//! Optional fields are `Option`s; a sentinel in the source payload always maps
//! to `None`, never to an empty string. The RG and voter-registration groups
//! are all-or-nothing, which the nested `Option<Struct>` shape enforces.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Civil identity document (RG).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NationalId {
  /// Document number with leading zeros removed.
  pub number:            String,
  /// Issuing authority, e.g. `SSP`.
  pub issuing_authority: String,
  /// Two-letter state code (UF).
  pub state:             String,
}

/// Voter registration (Título de Eleitor).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoterRegistration {
  pub number:       String,
  pub zone:         String,
  pub section:      String,
  pub municipality: String,
  /// Two-letter state code (UF).
  pub state:        String,
}

/// Everything an ICP-Brasil Pessoa Física certificate says about its holder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalRecord {
  pub name:               String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub birth_date:         Option<NaiveDate>,
  /// 11-digit taxpayer number.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub cpf:                Option<String>,
  /// 11-digit social-insurance number (NIS/PIS/PASEP).
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub nis:                Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub national_id:        Option<NationalId>,
  /// 12-digit CEI registration.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub cei:                Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub voter_registration: Option<VoterRegistration>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub email:              Option<String>,
}

impl PersonalRecord {
  /// A record carrying only a name; every optional field absent.
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name:               name.into(),
      birth_date:         None,
      cpf:                None,
      nis:                None,
      national_id:        None,
      cei:                None,
      voter_registration: None,
      email:              None,
    }
  }
}
