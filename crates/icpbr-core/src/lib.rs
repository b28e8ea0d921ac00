//! Core types for ICP-Brasil certificate holder data.
//!
//! This crate is deliberately free of decoding logic. It describes the
//! already-parsed certificate the decoders consume and the record they
//! produce; `icpbr-pf` and the CLI both depend on it.

pub mod certificate;
pub mod record;

pub use certificate::{CertificateView, Extension};
pub use der_parser::oid::Oid;
pub use record::{NationalId, PersonalRecord, VoterRegistration};
