//! SubjectAltName `GeneralNames` decoder.
//!
//! Only the two choices an ICP-Brasil certificate uses for its holder are
//! kept:
//!
//! ```text
//! GeneralName ::= CHOICE {
//!     otherName   [0] IMPLICIT SEQUENCE { type-id OID, value [0] EXPLICIT ANY },
//!     rfc822Name  [1] IMPLICIT IA5String,
//!     ... }
//! ```
//!
//! Every other choice is skipped.

use std::{borrow::Cow, str};

use der_parser::{
  asn1_rs::{Any, Class, FromDer, Tag},
  oid::Oid,
};
use tracing::trace;

use crate::error::{Error, Result};

/// The content of an `otherName`, as the issuer happened to encode it.
///
/// ICP-Brasil issuers disagree on whether the payload is an OCTET STRING or
/// a character string. TeletexString content is kept as raw octets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtherNameValue<'a> {
  Octets(&'a [u8]),
  Text(&'a str),
  /// UTF-16BE code units of a BMPString.
  Bmp(&'a [u8]),
  /// Any other universal type. Carries no text.
  Unsupported(Tag),
}

impl<'a> OtherNameValue<'a> {
  /// The canonical text of the value.
  ///
  /// Octets that are not UTF-8 are read as ISO-8859-1, which is what issuers
  /// use for accented municipality names. `Unsupported` yields `""`.
  pub fn to_text(&self) -> Cow<'a, str> {
    match *self {
      OtherNameValue::Text(s) => Cow::Borrowed(s),
      OtherNameValue::Octets(bytes) => match str::from_utf8(bytes) {
        Ok(s) => Cow::Borrowed(s),
        Err(_) => Cow::Owned(bytes.iter().map(|&b| b as char).collect()),
      },
      OtherNameValue::Bmp(units) => Cow::Owned(
        char::decode_utf16(
          units
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]])),
        )
        .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect(),
      ),
      OtherNameValue::Unsupported(_) => Cow::Borrowed(""),
    }
  }
}

/// An `otherName` GeneralName.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtherName<'a> {
  pub type_id: Oid<'a>,
  pub value:   OtherNameValue<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneralName<'a> {
  Other(OtherName<'a>),
  Rfc822(&'a str),
}

/// Decode the DER of a SubjectAltName extension value.
///
/// Entries come back in certificate order.
pub fn parse_general_names(input: &[u8]) -> Result<Vec<GeneralName<'_>>> {
  let (_, outer) = Any::from_der(input)
    .map_err(|e| malformed(format!("GeneralNames: {e}")))?;
  if outer.header.class() != Class::Universal
    || outer.header.tag() != Tag::Sequence
  {
    return Err(malformed(format!(
      "GeneralNames: expected SEQUENCE, found {:?} {:?}",
      outer.header.class(),
      outer.header.tag()
    )));
  }

  let mut names = Vec::new();
  let mut rest = outer.data;
  while !rest.is_empty() {
    let (next, element) = Any::from_der(rest)
      .map_err(|e| malformed(format!("GeneralName: {e}")))?;
    rest = next;

    if element.header.class() != Class::ContextSpecific {
      trace!(tag = ?element.header.tag(), "skipping non-context GeneralName");
      continue;
    }
    match element.header.tag().0 {
      0 => names.push(GeneralName::Other(parse_other_name(element.data)?)),
      1 => {
        let email = str::from_utf8(element.data)
          .ok()
          .filter(|s| s.is_ascii())
          .ok_or_else(|| malformed("rfc822Name is not IA5".to_string()))?;
        names.push(GeneralName::Rfc822(email));
      }
      n => trace!(tag = n, "skipping GeneralName"),
    }
  }

  Ok(names)
}

/// Decode the body of an `[0] IMPLICIT` otherName: the type-id followed by
/// the `[0] EXPLICIT` value.
fn parse_other_name(body: &[u8]) -> Result<OtherName<'_>> {
  let (rest, type_id) = Oid::from_der(body)
    .map_err(|e| malformed(format!("otherName type-id: {e}")))?;
  let (_, wrapper) = Any::from_der(rest)
    .map_err(|e| malformed(format!("otherName value: {e}")))?;
  if wrapper.header.class() != Class::ContextSpecific
    || wrapper.header.tag() != Tag(0)
  {
    return Err(malformed(format!(
      "otherName value: expected [0], found {:?} {:?}",
      wrapper.header.class(),
      wrapper.header.tag()
    )));
  }
  let (_, inner) = Any::from_der(wrapper.data)
    .map_err(|e| malformed(format!("otherName value: {e}")))?;

  Ok(OtherName {
    type_id,
    value: classify(&inner)?,
  })
}

fn classify<'a>(inner: &Any<'a>) -> Result<OtherNameValue<'a>> {
  let tag = inner.header.tag();
  if inner.header.class() != Class::Universal {
    return Ok(OtherNameValue::Unsupported(tag));
  }
  let value = match tag {
    // T61 has no UTF-8 guarantee; read it like octets.
    Tag::OctetString | Tag::T61String => OtherNameValue::Octets(inner.data),
    Tag::BmpString => {
      if inner.data.len() % 2 != 0 {
        return Err(malformed(
          "otherName value: BMPString has odd length".to_string(),
        ));
      }
      OtherNameValue::Bmp(inner.data)
    }
    Tag::Utf8String
    | Tag::PrintableString
    | Tag::NumericString
    | Tag::Ia5String
    | Tag::VisibleString
    | Tag::GeneralString => {
      let text = str::from_utf8(inner.data).map_err(|_| {
        malformed(format!("otherName value: {tag:?} is not valid text"))
      })?;
      OtherNameValue::Text(text)
    }
    other => OtherNameValue::Unsupported(other),
  };
  Ok(value)
}

fn malformed(msg: String) -> Error { Error::MalformedExtension(msg) }
