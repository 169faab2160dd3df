//! Core validation types
//!
//! The fundamental building blocks every other module sits on:
//!
//! - [`ValidationError`] — a structured failure with a stable code, the
//!   fully interpolated display message, and the ordered parameter list
//!   that was substituted into the message template
//! - [`ValidationResult`] — the `Result` alias every check returns
//! - [`interpolate`] — `%s` template substitution

pub mod error;

pub use error::{ValidationError, interpolate};

/// The result of checking one constraint (or a whole field).
///
/// `Ok(())` means the value passed; the error carries the ready-to-display
/// message. There is never more than one error per field — evaluation stops
/// at the first failing constraint.
pub type ValidationResult = Result<(), ValidationError>;
