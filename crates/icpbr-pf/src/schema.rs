//! Fixed-width layouts of the ICP-Brasil `otherName` payloads.
//!
//! Each block is a table of named fields. A field is either a fixed window,
//! the variable-length tail between a fixed start and a fixed-width suffix,
//! or that suffix itself. Offsets are byte offsets into the payload text;
//! the fixed zones are ASCII digits so byte and character offsets agree
//! there.
//!
//! ```text
//! personal-data      0       8          19          30              45      len-2  len
//!                    |DDMMYYYY|   CPF    |   NIS    |   RG number   | issuer | UF |
//! voter-registration 0            12   15    19            len-2  len
//!                    |   number   |zone|sect|  municipality  | UF |
//! cei                0            12
//!                    |    CEI     |
//! ```

use std::ops::Range;

use crate::{
  error::{Error, Result},
  oid::DataBlock,
};

/// Where a field sits inside the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
  /// `[start, start + len)`.
  Fixed { start: usize, len: usize },
  /// `[start, payload_len - trim_end)`.
  Tail { start: usize, trim_end: usize },
  /// The last `len` bytes, which must begin at or after `after`.
  Suffix { len: usize, after: usize },
}

impl Span {
  /// Smallest payload length this span can be read from.
  pub const fn min_len(&self) -> usize {
    match *self {
      Span::Fixed { start, len } => start + len,
      Span::Tail { start, trim_end } => start + trim_end,
      Span::Suffix { len, after } => after + len,
    }
  }

  /// The byte range of the field in a payload of `payload_len` bytes.
  pub fn range(&self, payload_len: usize) -> Option<Range<usize>> {
    if payload_len < self.min_len() {
      return None;
    }
    Some(match *self {
      Span::Fixed { start, len } => start..start + len,
      Span::Tail { start, trim_end } => start..payload_len - trim_end,
      Span::Suffix { len, .. } => payload_len - len..payload_len,
    })
  }
}

/// How a field relates to the fields around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
  /// Stands alone.
  Single,
  /// Opens a group; its sentinel blanks every following member.
  GroupLeader,
  /// Read only when the preceding leader is present.
  GroupMember,
}

/// A named field of a payload block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
  pub name:     &'static str,
  pub span:     Span,
  pub role:     Role,
  /// Value meaning "absent" for this field (and, for group leaders, for the
  /// whole group).
  pub sentinel: Option<&'static str>,
}

impl Field {
  const fn fixed(name: &'static str, start: usize, len: usize) -> Self {
    Self {
      name,
      span: Span::Fixed { start, len },
      role: Role::Single,
      sentinel: None,
    }
  }

  const fn tail(name: &'static str, start: usize, trim_end: usize) -> Self {
    Self {
      name,
      span: Span::Tail { start, trim_end },
      role: Role::Single,
      sentinel: None,
    }
  }

  const fn suffix(name: &'static str, len: usize, after: usize) -> Self {
    Self {
      name,
      span: Span::Suffix { len, after },
      role: Role::Single,
      sentinel: None,
    }
  }

  const fn or_absent_if(mut self, sentinel: &'static str) -> Self {
    self.sentinel = Some(sentinel);
    self
  }

  const fn leads_group(mut self, sentinel: &'static str) -> Self {
    self.role = Role::GroupLeader;
    self.sentinel = Some(sentinel);
    self
  }

  const fn in_group(mut self) -> Self {
    self.role = Role::GroupMember;
    self
  }

  /// Slice this field out of `payload`.
  pub fn slice<'t>(&self, block: DataBlock, payload: &'t str) -> Result<&'t str> {
    let range = self.span.range(payload.len()).ok_or(Error::TruncatedPayload {
      block,
      field: self.name,
      needed: self.span.min_len(),
      actual: payload.len(),
    })?;
    payload.get(range).ok_or(Error::MalformedPayload {
      block,
      field: self.name,
    })
  }

  /// Like [`Field::slice`], but `None` when the field holds its sentinel.
  pub fn value<'t>(
    &self,
    block: DataBlock,
    payload: &'t str,
  ) -> Result<Option<&'t str>> {
    let raw = self.slice(block, payload)?;
    Ok(match self.sentinel {
      Some(sentinel) if raw == sentinel => None,
      _ => Some(raw),
    })
  }
}

/// The field table of one payload block, in payload order.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
  pub block:  DataBlock,
  pub fields: &'static [Field],
}

impl Schema {
  /// Walk the table over `payload`.
  ///
  /// Sentinel fields come back `None`. Members of a group whose leader is
  /// absent are not read at all, so they cannot fail on a short payload.
  pub fn extract<'t>(&self, payload: &'t str) -> Result<Extracted<'t>> {
    let mut values = Vec::with_capacity(self.fields.len());
    let mut group_present = true;
    for field in self.fields {
      let value = match field.role {
        Role::Single => field.value(self.block, payload)?,
        Role::GroupLeader => {
          let value = field.value(self.block, payload)?;
          group_present = value.is_some();
          value
        }
        Role::GroupMember if group_present => {
          Some(field.slice(self.block, payload)?)
        }
        Role::GroupMember => None,
      };
      values.push(value);
    }
    Ok(Extracted {
      fields: self.fields,
      values,
    })
  }
}

/// Field values of one payload, aligned with its schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted<'t> {
  fields: &'static [Field],
  values: Vec<Option<&'t str>>,
}

impl<'t> Extracted<'t> {
  /// The value of `field`; `None` when absent or not part of this schema.
  pub fn get(&self, field: &Field) -> Option<&'t str> {
    self
      .fields
      .iter()
      .position(|f| f == field)
      .and_then(|i| self.values[i])
  }
}

/// Fields of the 2.16.76.1.3.1 block.
pub mod personal {
  use super::Field;

  pub const BIRTH_DATE: Field = Field::fixed("birth_date", 0, 8);
  pub const CPF: Field = Field::fixed("cpf", 8, 11).or_absent_if("00000000000");
  pub const NIS: Field = Field::fixed("nis", 19, 11).or_absent_if("00000000000");
  pub const RG_NUMBER: Field =
    Field::fixed("rg_number", 30, 15).leads_group("000000000000000");
  pub const RG_ISSUER: Field =
    Field::tail("rg_issuing_authority", 45, 2).in_group();
  pub const RG_STATE: Field = Field::suffix("rg_state", 2, 45).in_group();
}

/// Fields of the 2.16.76.1.3.6 block.
pub mod cei {
  use super::Field;

  pub const CEI: Field = Field::tail("cei", 0, 0).or_absent_if("000000000000");
}

/// Fields of the 2.16.76.1.3.5 block.
pub mod voter {
  use super::Field;

  pub const NUMBER: Field =
    Field::fixed("number", 0, 12).leads_group("000000000000");
  pub const ZONE: Field = Field::fixed("zone", 12, 3).in_group();
  pub const SECTION: Field = Field::fixed("section", 15, 4).in_group();
  pub const MUNICIPALITY: Field = Field::tail("municipality", 19, 2).in_group();
  pub const STATE: Field = Field::suffix("state", 2, 19).in_group();
}

pub const PERSONAL_DATA: Schema = Schema {
  block:  DataBlock::PersonalData,
  fields: &[
    personal::BIRTH_DATE,
    personal::CPF,
    personal::NIS,
    personal::RG_NUMBER,
    personal::RG_ISSUER,
    personal::RG_STATE,
  ],
};

pub const CEI: Schema = Schema {
  block:  DataBlock::Cei,
  fields: &[cei::CEI],
};

pub const VOTER_REGISTRATION: Schema = Schema {
  block:  DataBlock::VoterRegistration,
  fields: &[
    voter::NUMBER,
    voter::ZONE,
    voter::SECTION,
    voter::MUNICIPALITY,
    voter::STATE,
  ],
};
