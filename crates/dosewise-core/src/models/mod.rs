//! Domain models for the dosewise portal.

mod access;
mod interaction;
mod patient;
mod prescription;
mod session;
mod symptom;

pub use access::*;
pub use interaction::*;
pub use patient::*;
pub use prescription::*;
pub use session::*;
pub use symptom::*;

/// Current timestamp as an RFC 3339 string, the wire and storage format for
/// every timestamp in this crate.
pub(crate) fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}
