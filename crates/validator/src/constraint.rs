//! Constraint kinds and catalog-order extraction
//!
//! A field's markup declares its rules as attributes; extraction turns those
//! declarations into an ordered list of [`Constraint`] records. The order is
//! the attribute catalog's declaration order, never the markup's, so
//! evaluation is deterministic across documents.

use serde::{Deserialize, Serialize};

use crate::config::AttributeCatalog;

// ============================================================================
// CONSTRAINT KIND
// ============================================================================

/// The closed vocabulary of recognized constraints.
///
/// Each kind maps to exactly one validation algorithm in
/// [`engine::check_constraint`](crate::engine::check_constraint).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstraintKind {
    /// Value must be non-empty.
    Required,
    /// Numeric value within an inclusive two-sided bound.
    Range,
    /// Numeric value at least a bound.
    Min,
    /// Numeric value at most a bound.
    Max,
    /// Character count within an inclusive two-sided bound.
    Length,
    /// Character count at least a bound.
    MinLength,
    /// Character count at most a bound.
    MaxLength,
    /// Value must match a `/body/flags` regex literal.
    Pattern,
    /// Value must match the regex bound to a declared type name.
    Type,
}

impl ConstraintKind {
    /// Every kind, in canonical catalog order.
    pub const ALL: [Self; 9] = [
        Self::Required,
        Self::Range,
        Self::Min,
        Self::Max,
        Self::Length,
        Self::MinLength,
        Self::MaxLength,
        Self::Pattern,
        Self::Type,
    ];

    /// The canonical markup attribute name for this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Range => "range",
            Self::Min => "min",
            Self::Max => "max",
            Self::Length => "length",
            Self::MinLength => "minlength",
            Self::MaxLength => "maxlength",
            Self::Pattern => "pattern",
            Self::Type => "type",
        }
    }
}

impl std::fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// TYPE NAME
// ============================================================================

/// The closed vocabulary of recognized `type` attribute values.
///
/// Each name is bound to exactly one regex and one failure message via
/// [`TypePatterns`](crate::config::TypePatterns) and
/// [`TypeMessages`](crate::config::TypeMessages).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeName {
    Email,
    Url,
    Float,
    Integer,
    Digits,
    Alphanum,
}

impl TypeName {
    /// Every type name, in canonical catalog order.
    pub const ALL: [Self; 6] = [
        Self::Email,
        Self::Url,
        Self::Float,
        Self::Integer,
        Self::Digits,
        Self::Alphanum,
    ];

    /// The canonical attribute-value spelling of this type name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Url => "url",
            Self::Float => "float",
            Self::Integer => "integer",
            Self::Digits => "digits",
            Self::Alphanum => "alphanum",
        }
    }
}

impl std::fmt::Display for TypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// CONSTRAINT
// ============================================================================

/// One declared constraint: the kind plus the raw attribute text.
///
/// The value is not parsed at extraction time — `"3,10"` for a range,
/// `/^\d+$/i` for a pattern, `"email"` for a type. Parsing happens inside
/// the per-kind algorithm so that a malformed declaration surfaces as that
/// field's validation failure, not as an extraction error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    /// Which algorithm evaluates this constraint.
    pub kind: ConstraintKind,
    /// The raw attribute text, uninterpreted.
    pub value: String,
}

impl Constraint {
    /// Creates a constraint from a kind and the raw attribute text.
    pub fn new(kind: ConstraintKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

// ============================================================================
// EXTRACTION
// ============================================================================

/// Extracts the ordered constraint list for one field.
///
/// Iterates the attribute catalog's fixed name list (not the field's
/// attributes) so that evaluation order is deterministic and independent of
/// markup attribute order. `lookup` resolves a declared attribute by name;
/// names the catalog does not know are never asked for, and catalog names
/// the field does not declare are skipped.
///
/// Pure function of the catalog plus the lookup — no side effects.
pub fn extract<L>(catalog: &AttributeCatalog, mut lookup: L) -> Vec<Constraint>
where
    L: FnMut(&str) -> Option<String>,
{
    let mut constraints = Vec::new();
    for (kind, name) in catalog.entries() {
        if let Some(value) = lookup(name) {
            constraints.push(Constraint { kind, value });
        }
    }
    constraints
}

// ============================================================================
// TESTS
// ============================================================================
