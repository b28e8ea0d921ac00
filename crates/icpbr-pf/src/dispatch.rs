//! Route decoded GeneralNames to the payload block their OID designates.

use tracing::{debug, trace};

use crate::{
  general_name::{GeneralName, OtherName},
  oid::DataBlock,
};

/// The GeneralNames that matter for a Pessoa Física record, at most one
/// per data block.
#[derive(Debug, Default)]
pub(crate) struct Matched<'n, 'a> {
  pub personal_data:      Option<&'n OtherName<'a>>,
  pub cei:                Option<&'n OtherName<'a>>,
  pub voter_registration: Option<&'n OtherName<'a>>,
  /// The last `rfc822Name` seen.
  pub email:              Option<&'a str>,
}

impl<'n, 'a> Matched<'n, 'a> {
  fn slot(&mut self, block: DataBlock) -> &mut Option<&'n OtherName<'a>> {
    match block {
      DataBlock::PersonalData => &mut self.personal_data,
      DataBlock::Cei => &mut self.cei,
      DataBlock::VoterRegistration => &mut self.voter_registration,
    }
  }
}

/// Match `names` against the known data blocks, in any order. The first
/// entry for a block wins; later duplicates and unknown OIDs are ignored.
pub(crate) fn dispatch<'n, 'a>(names: &'n [GeneralName<'a>]) -> Matched<'n, 'a> {
  let mut matched = Matched::default();
  for name in names {
    match name {
      GeneralName::Rfc822(address) => matched.email = Some(*address),
      GeneralName::Other(other) => {
        let Some(block) = DataBlock::from_oid(&other.type_id) else {
          trace!(oid = %other.type_id, "ignoring otherName");
          continue;
        };
        let slot = matched.slot(block);
        if slot.is_some() {
          debug!(%block, "duplicate otherName; keeping the first");
          continue;
        }
        *slot = Some(other);
      }
    }
  }
  matched
}
