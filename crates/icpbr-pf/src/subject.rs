//! Subject `CN` convention for e-CPF certificates.
//!
//! ICP-Brasil individual certificates name their holder as `NAME:CPF`. The
//! part after the colon is only trusted as a CPF when an `OU` carries the
//! `e-CPF` marker.

/// Marker an `OU` must contain for the `CN` CPF to be used.
pub const E_CPF_MARKER: &str = "e-CPF";

/// Name (and possibly CPF) recovered from the certificate subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectName {
  pub name: String,
  pub cpf:  Option<String>,
}

/// Split `common_name` on its first colon.
pub fn split_subject<S: AsRef<str>>(
  common_name: &str,
  organizational_units: &[S],
) -> SubjectName {
  let Some((name, candidate)) = common_name.split_once(':') else {
    return SubjectName {
      name: common_name.to_string(),
      cpf:  None,
    };
  };

  let is_e_cpf = organizational_units
    .iter()
    .any(|ou| ou.as_ref().contains(E_CPF_MARKER));

  SubjectName {
    name: name.to_string(),
    cpf:  (is_e_cpf && !candidate.is_empty()).then(|| candidate.to_string()),
  }
}
