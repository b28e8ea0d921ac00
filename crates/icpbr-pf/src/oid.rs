//! Object identifiers the decoder matches on.
//!
//! Matching is exact arc-sequence equality.

use std::fmt;

use der_parser::{oid, oid::Oid};

/// `id-ce-subjectAltName`
pub const SUBJECT_ALT_NAME: Oid<'static> = oid!(2.5.29.17);

/// Holder birth date, CPF, NIS and RG.
pub const PERSONAL_DATA: Oid<'static> = oid!(2.16.76.1.3.1);

/// Voter registration (Título de Eleitor).
pub const VOTER_REGISTRATION: Oid<'static> = oid!(2.16.76.1.3.5);

/// CEI employer registration.
pub const CEI: Oid<'static> = oid!(2.16.76.1.3.6);

/// The ICP-Brasil `otherName` payloads a Pessoa Física certificate carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataBlock {
  PersonalData,
  Cei,
  VoterRegistration,
}

impl DataBlock {
  pub const ALL: [DataBlock; 3] = [
    DataBlock::PersonalData,
    DataBlock::Cei,
    DataBlock::VoterRegistration,
  ];

  /// The block an `otherName` type-id designates, if any.
  pub fn from_oid(oid: &Oid<'_>) -> Option<Self> {
    Self::ALL.into_iter().find(|b| b.oid() == *oid)
  }

  pub fn oid(self) -> Oid<'static> {
    match self {
      DataBlock::PersonalData => PERSONAL_DATA,
      DataBlock::Cei => CEI,
      DataBlock::VoterRegistration => VOTER_REGISTRATION,
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      DataBlock::PersonalData => "personal-data",
      DataBlock::Cei => "cei",
      DataBlock::VoterRegistration => "voter-registration",
    }
  }
}

impl fmt::Display for DataBlock {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
