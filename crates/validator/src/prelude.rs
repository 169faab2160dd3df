//! Prelude module for convenient imports.
//!
//! Provides a single `use formic_validator::prelude::*;` import that brings
//! in everything a host needs for common validation scenarios.
//!
//! # Examples
//!
//! ```rust,ignore
//! use formic_validator::prelude::*;
//!
//! let mut form = FormValidator::new();
//! form.register(Box::new(
//!     MemoryField::new("email")
//!         .with_attribute("required", "")
//!         .with_attribute("type", "email"),
//! ));
//! let report = form.validate_all();
//! ```

// ============================================================================
// FOUNDATION: result and error types
// ============================================================================

pub use crate::foundation::{ValidationError, ValidationResult, interpolate};

// ============================================================================
// CONFIGURATION: the five tables
// ============================================================================

pub use crate::config::{
    AttributeCatalog, ConfigError, MessageCatalog, StyleCatalog, TABLE_NAMES, TableOverride,
    TypeCatalog, TypeMessages, TypePatterns, ValidationConfig,
};

// ============================================================================
// CONSTRAINTS AND ENGINE
// ============================================================================

pub use crate::constraint::{Constraint, ConstraintKind, TypeName, extract};
pub use crate::engine::{check_constraint, check_field};

// ============================================================================
// ORCHESTRATION
// ============================================================================

pub use crate::form::{
    FieldId, FieldSource, FieldValueHandle, FormReport, FormValidator, MemoryField, Presenter,
};
