//! ICP-Brasil Pessoa Física decoder.
//!
//! Pulls the holder's identity data out of an ICP-Brasil individual
//! certificate: the subject `CN`/`OU` convention plus the fixed-width
//! `otherName` blocks of the Subject Alternative Name extension. Pure
//! synchronous; no global state, safe to call from any thread.
//!
//! # Quick start
//!
//! ```no_run
//! let der = std::fs::read("holder.cer").unwrap();
//! let record = icpbr_pf::decode_der(&der).unwrap();
//! println!("{} cpf={:?}", record.name, record.cpf);
//! ```

mod decode;
mod dispatch;
pub mod error;
pub mod general_name;
pub mod oid;
mod payload;
pub mod schema;
pub mod subject;
mod x509;

pub use decode::decode;
pub use error::{Error, Result};
pub use x509::{certificate_view, decode_der, decode_pem};

#[cfg(test)]
pub(crate) mod test_helpers;

#[cfg(test)]
mod tests;
