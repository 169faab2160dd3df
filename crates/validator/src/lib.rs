//! # formic-validator
//!
//! An attribute-driven form validation engine for interactive user interfaces.
//!
//! Fields declare their rules as markup attributes (`required`, `range`,
//! `minlength`, `pattern`, `type`, ...). The engine extracts those
//! declarations into ordered constraint lists, evaluates them against the
//! field's current value, and reports the first failure as a ready-to-display
//! localized message.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use formic_validator::prelude::*;
//!
//! let mut form = FormValidator::new();
//! form.register(Box::new(
//!     MemoryField::new("age")
//!         .with_attribute("required", "")
//!         .with_attribute("range", "18,99")
//!         .with_value("17"),
//! ));
//!
//! let report = form.validate_all();
//! assert!(!report.passed);
//! ```
//!
//! ## Architecture
//!
//! - [`config`] — the five replaceable configuration tables (attribute
//!   catalog, type catalog, type regexes, messages, presentation styles)
//! - [`constraint`] — constraint kinds and catalog-order extraction
//! - [`engine`] — the per-constraint algorithms and first-error-wins
//!   field evaluation
//! - [`form`] — the orchestrator: field registry, bulk and single-field
//!   validation, presentation hooks
//!
//! Localization is a wholesale [`config::MessageCatalog`] replacement; there
//! is no global mutable state, so independent forms can carry independent
//! configurations.

// ValidationError (code + message + inline params) is the fundamental error
// type for every check — boxing it would add indirection to every validation
// call for no practical benefit.
#![allow(clippy::result_large_err)]

pub mod config;
pub mod constraint;
pub mod engine;
pub mod form;
pub mod foundation;
pub mod prelude;
mod validators;
