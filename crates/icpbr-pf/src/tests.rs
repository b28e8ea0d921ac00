//! End-to-end decoding tests: synthetic SAN extensions and real certificates.

use chrono::NaiveDate;
use icpbr_core::{NationalId, PersonalRecord, VoterRegistration};

use crate::{Error, decode, decode_der, decode_pem, test_helpers::*};

const E_CPF_PEM: &[u8] = include_bytes!("../testdata/e-cpf-a3.pem");
const E_CPF_DER: &[u8] = include_bytes!("../testdata/e-cpf-a3.der");
const NO_SAN_PEM: &[u8] = include_bytes!("../testdata/no-san.pem");

const NO_NIS: &str = "00000000000";
const NO_RG: &str = "000000000000000";

fn personal_block(cpf: &str) -> Vec<u8> {
  let payload = personal_payload("15031990", cpf, NO_NIS, NO_RG, "", "SP");
  other_name(PERSONAL_DATA_OID, &octets(payload.as_bytes()))
}

// ─── Precedence ──────────────────────────────────────────────────────────────

#[test]
fn subject_cpf_wins_over_payload() {
  let cert = view(
    "MARIA SILVA:12345678900",
    &["AC TESTE", "e-CPF A3"],
    Some(san(&[personal_block("98765432100")])),
  );
  let record = decode(&cert).unwrap();
  assert_eq!(record.name, "MARIA SILVA");
  assert_eq!(record.cpf.as_deref(), Some("12345678900"));
}

#[test]
fn payload_cpf_fills_in_without_marker() {
  let cert = view(
    "MARIA SILVA:12345678900",
    &["AC TESTE", "Certificado PF A1"],
    Some(san(&[personal_block("98765432100")])),
  );
  let record = decode(&cert).unwrap();
  assert_eq!(record.name, "MARIA SILVA");
  assert_eq!(record.cpf.as_deref(), Some("98765432100"));
}

#[test]
fn payload_cpf_sentinel_leaves_cpf_absent() {
  let cert = view(
    "MARIA SILVA",
    &[],
    Some(san(&[personal_block("00000000000")])),
  );
  assert_eq!(decode(&cert).unwrap().cpf, None);
}

// ─── Missing pieces ──────────────────────────────────────────────────────────

#[test]
fn missing_san_keeps_subject_fields_only() {
  let cert = view("MARIA SILVA:12345678900", &["e-CPF A1"], None);
  let record = decode(&cert).unwrap();
  assert_eq!(record, PersonalRecord {
    cpf: Some("12345678900".to_string()),
    ..PersonalRecord::new("MARIA SILVA")
  });
}

#[test]
fn san_without_icp_blocks() {
  let cert = view(
    "MARIA SILVA",
    &[],
    Some(san(&[
      tlv(0x82, b"example.com"),
      other_name(PJ_RESPONSIBLE_OID, &octets(b"01011980")),
    ])),
  );
  assert_eq!(decode(&cert).unwrap(), PersonalRecord::new("MARIA SILVA"));
}

#[test]
fn empty_payload_is_an_absent_block() {
  let cert = view(
    "MARIA SILVA",
    &[],
    Some(san(&[
      other_name(PERSONAL_DATA_OID, &octets(b"")),
      other_name(VOTER_OID, &printable("")),
    ])),
  );
  assert_eq!(decode(&cert).unwrap(), PersonalRecord::new("MARIA SILVA"));
}

#[test]
fn unsupported_value_type_is_an_absent_block() {
  let cert = view(
    "MARIA SILVA",
    &[],
    Some(san(&[other_name(CEI_OID, &[0x02, 0x01, 0x07])])),
  );
  assert_eq!(decode(&cert).unwrap().cei, None);
}

#[test]
fn teletex_and_bmp_blocks_are_kept() {
  let voter = voter_payload("012345678901", "123", "0456", "CAMPINAS", "SP");
  let units: Vec<u8> =
    voter.encode_utf16().flat_map(u16::to_be_bytes).collect();
  let cert = view(
    "MARIA SILVA",
    &[],
    Some(san(&[
      other_name(CEI_OID, &tlv(0x14, b"123456789012")),
      other_name(VOTER_OID, &tlv(0x1e, &units)),
    ])),
  );
  let record = decode(&cert).unwrap();
  assert_eq!(record.cei.as_deref(), Some("123456789012"));
  assert_eq!(record.voter_registration.unwrap().municipality, "CAMPINAS");
}

// ─── Ordering and duplicates ─────────────────────────────────────────────────

#[test]
fn blocks_in_any_order() {
  let voter = voter_payload("012345678901", "123", "0456", "CAMPINAS", "SP");
  let cert = view(
    "MARIA SILVA",
    &[],
    Some(san(&[
      email("maria@example.com"),
      other_name(VOTER_OID, &printable(&voter)),
      other_name(CEI_OID, &printable("123456789012")),
      personal_block("98765432100"),
    ])),
  );
  let record = decode(&cert).unwrap();
  assert_eq!(record.cpf.as_deref(), Some("98765432100"));
  assert_eq!(record.cei.as_deref(), Some("123456789012"));
  assert_eq!(record.voter_registration.unwrap().municipality, "CAMPINAS");
  assert_eq!(record.email.as_deref(), Some("maria@example.com"));
}

#[test]
fn duplicate_block_first_wins() {
  let cert = view(
    "MARIA SILVA",
    &[],
    Some(san(&[
      other_name(CEI_OID, &printable("111111111111")),
      other_name(CEI_OID, &printable("222222222222")),
    ])),
  );
  assert_eq!(decode(&cert).unwrap().cei.as_deref(), Some("111111111111"));
}

#[test]
fn malformed_duplicate_is_never_decoded() {
  let cert = view(
    "MARIA SILVA",
    &[],
    Some(san(&[
      personal_block("98765432100"),
      other_name(PERSONAL_DATA_OID, &octets(b"99999999")),
    ])),
  );
  assert_eq!(decode(&cert).unwrap().cpf.as_deref(), Some("98765432100"));
}

// ─── Failures are all-or-nothing ─────────────────────────────────────────────

#[test]
fn truncated_san_der_fails() {
  let mut der = san(&[personal_block("98765432100")]);
  der.truncate(der.len() - 5);
  let cert = view("MARIA SILVA", &[], Some(der));
  assert!(matches!(decode(&cert), Err(Error::MalformedExtension(_))));
}

#[test]
fn garbage_san_fails() {
  let cert = view("MARIA SILVA", &[], Some(vec![0xff, 0x00, 0x13]));
  assert!(matches!(decode(&cert), Err(Error::MalformedExtension(_))));
}

#[test]
fn invalid_birth_date_fails_whole_decode() {
  let payload =
    personal_payload("32011990", "98765432100", NO_NIS, NO_RG, "", "SP");
  let cert = view(
    "MARIA SILVA",
    &[],
    Some(san(&[
      other_name(CEI_OID, &printable("123456789012")),
      other_name(PERSONAL_DATA_OID, &octets(payload.as_bytes())),
    ])),
  );
  assert!(matches!(decode(&cert), Err(Error::InvalidDate(d)) if d == "32011990"));
}

#[test]
fn short_voter_block_fails_whole_decode() {
  let cert = view(
    "MARIA SILVA",
    &[],
    Some(san(&[other_name(VOTER_OID, &printable("0123456789011230"))])),
  );
  assert!(matches!(decode(&cert), Err(Error::TruncatedPayload { .. })));
}

// ─── Determinism and round trip ──────────────────────────────────────────────

#[test]
fn decoding_is_deterministic() {
  let cert = view(
    "MARIA SILVA:12345678900",
    &["e-CPF A3"],
    Some(san(&[personal_block("98765432100"), email("m@example.com")])),
  );
  assert_eq!(decode(&cert).unwrap(), decode(&cert).unwrap());
}

#[test]
fn round_trip_from_record() {
  let expected = PersonalRecord {
    name:               "JOSE DA SILVA".to_string(),
    birth_date:         NaiveDate::from_ymd_opt(1975, 12, 1),
    cpf:                Some("11122233344".to_string()),
    nis:                Some("55566677788".to_string()),
    national_id:        Some(NationalId {
      number:            "98765".to_string(),
      issuing_authority: "SSP".to_string(),
      state:             "MG".to_string(),
    }),
    cei:                Some("123456789012".to_string()),
    voter_registration: Some(VoterRegistration {
      number:       "000123456789".to_string(),
      zone:         "045".to_string(),
      section:      "0123".to_string(),
      municipality: "BELO HORIZONTE".to_string(),
      state:        "MG".to_string(),
    }),
    email:              Some("jose@example.com".to_string()),
  };

  let rg = expected.national_id.as_ref().unwrap();
  let personal = personal_payload(
    &expected.birth_date.unwrap().format("%d%m%Y").to_string(),
    expected.cpf.as_deref().unwrap(),
    expected.nis.as_deref().unwrap(),
    &format!("{:0>15}", rg.number),
    &rg.issuing_authority,
    &rg.state,
  );
  let v = expected.voter_registration.as_ref().unwrap();
  let voter =
    voter_payload(&v.number, &v.zone, &v.section, &v.municipality, &v.state);

  let cert = view(
    &expected.name,
    &[],
    Some(san(&[
      other_name(PERSONAL_DATA_OID, &octets(personal.as_bytes())),
      other_name(CEI_OID, &utf8(expected.cei.as_deref().unwrap())),
      other_name(VOTER_OID, &printable(&voter)),
      email(expected.email.as_deref().unwrap()),
    ])),
  );
  assert_eq!(decode(&cert).unwrap(), expected);
}

#[test]
fn long_form_length_san() {
  let municipality = "X".repeat(200);
  let voter = voter_payload("012345678901", "123", "0456", &municipality, "AM");
  let cert = view(
    "MARIA SILVA",
    &[],
    Some(san(&[other_name(VOTER_OID, &octets(voter.as_bytes()))])),
  );
  let v = decode(&cert).unwrap().voter_registration.unwrap();
  assert_eq!(v.municipality, municipality);
  assert_eq!(v.state, "AM");
}

// ─── Real certificates ───────────────────────────────────────────────────────

fn e_cpf_record() -> PersonalRecord {
  PersonalRecord {
    birth_date: NaiveDate::from_ymd_opt(1990, 3, 15),
    cpf: Some("12345678900".to_string()),
    nis: Some("12345678901".to_string()),
    national_id: Some(NationalId {
      number:            "12345678".to_string(),
      issuing_authority: "SSP".to_string(),
      state:             "SP".to_string(),
    }),
    voter_registration: Some(VoterRegistration {
      number:       "012345678901".to_string(),
      zone:         "123".to_string(),
      section:      "0456".to_string(),
      municipality: "SAO PAULO".to_string(),
      state:        "SP".to_string(),
    }),
    email: Some("maria.silva@example.com".to_string()),
    ..PersonalRecord::new("MARIA SILVA")
  }
}

#[test]
fn e_cpf_certificate_pem() {
  assert_eq!(decode_pem(E_CPF_PEM).unwrap(), e_cpf_record());
}

#[test]
fn e_cpf_certificate_der() {
  assert_eq!(decode_der(E_CPF_DER).unwrap(), e_cpf_record());
}

#[test]
fn certificate_without_san() {
  assert_eq!(
    decode_pem(NO_SAN_PEM).unwrap(),
    PersonalRecord::new("JOAO SOUZA")
  );
}

#[test]
fn not_a_certificate() {
  assert!(matches!(
    decode_der(b"not a certificate"),
    Err(Error::Certificate(_))
  ));
  assert!(matches!(
    decode_pem(b"not a certificate"),
    Err(Error::Certificate(_))
  ));
}
