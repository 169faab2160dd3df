//! The validation rule engine
//!
//! Two entry points: [`check_constraint`] evaluates one constraint against
//! a value, and [`check_field`] sweeps a field's ordered constraint list
//! and stops at the first failure. Both are pure functions of the config
//! plus their inputs — presentation side effects live with the caller.

use crate::config::ValidationConfig;
use crate::constraint::{Constraint, ConstraintKind};
use crate::foundation::ValidationResult;
use crate::validators;

// ============================================================================
// DISPATCH
// ============================================================================

/// Evaluates one constraint against the field's current value.
///
/// Dispatch is an exhaustive match over [`ConstraintKind`] — adding a kind
/// without an algorithm is a compile error, not a silently ignored
/// attribute.
pub fn check_constraint(
    config: &ValidationConfig,
    constraint: &Constraint,
    input: &str,
) -> ValidationResult {
    let messages = &config.messages;
    match constraint.kind {
        ConstraintKind::Required => validators::required::check(messages, input),
        ConstraintKind::Range => {
            validators::numeric::check_range(messages, &constraint.value, input)
        }
        ConstraintKind::Min => validators::numeric::check_min(messages, &constraint.value, input),
        ConstraintKind::Max => validators::numeric::check_max(messages, &constraint.value, input),
        ConstraintKind::Length => {
            validators::length::check_length(messages, &constraint.value, input)
        }
        ConstraintKind::MinLength => {
            validators::length::check_min_length(messages, &constraint.value, input)
        }
        ConstraintKind::MaxLength => {
            validators::length::check_max_length(messages, &constraint.value, input)
        }
        ConstraintKind::Pattern => {
            validators::pattern::check_pattern(messages, &constraint.value, input)
        }
        ConstraintKind::Type => validators::typed::check_type(config, &constraint.value, input),
    }
}

/// Evaluates a field's constraints in extraction order.
///
/// First error wins: evaluation stops at the first failing constraint and
/// returns its result. A field therefore carries at most one error at a
/// time.
pub fn check_field(
    config: &ValidationConfig,
    constraints: &[Constraint],
    input: &str,
) -> ValidationResult {
    for constraint in constraints {
        check_constraint(config, constraint, input)?;
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
