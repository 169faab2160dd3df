//! Character-count validation
//!
//! `length`, `minlength` and `maxlength` bound the number of characters
//! (Unicode scalar values), not the numeric value. A zero-length value
//! always auto-passes regardless of the bounds — `required` is the rule
//! that objects to emptiness, not these.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::MessageCatalog;
use crate::foundation::{ValidationError, ValidationResult};
use crate::validators::malformed_rule;

/// Unsigned integer tokens inside a two-sided `length` attribute,
/// e.g. `"3,10"`.
static INT_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

fn scan_bounds(attr_value: &str) -> Option<(usize, usize)> {
    let mut tokens = INT_TOKEN.find_iter(attr_value);
    let min = tokens.next()?.as_str().parse::<usize>().ok()?;
    let max = tokens.next()?.as_str().parse::<usize>().ok()?;
    Some((min, max))
}

// ============================================================================
// CHECKS
// ============================================================================

/// `length`: character count within the inclusive two-sided bound.
pub(crate) fn check_length(
    messages: &MessageCatalog,
    attr_value: &str,
    input: &str,
) -> ValidationResult {
    let len = input.chars().count();
    if len == 0 {
        return Ok(());
    }
    let Some((min, max)) = scan_bounds(attr_value) else {
        return Err(malformed_rule(messages));
    };
    if min <= len && len <= max {
        Ok(())
    } else {
        Err(ValidationError::templated(
            "length",
            &messages.length,
            &[min.to_string(), max.to_string()],
        ))
    }
}

/// `minlength`: character count at least the bound.
pub(crate) fn check_min_length(
    messages: &MessageCatalog,
    attr_value: &str,
    input: &str,
) -> ValidationResult {
    let len = input.chars().count();
    if len == 0 {
        return Ok(());
    }
    let Ok(min) = attr_value.trim().parse::<usize>() else {
        return Err(malformed_rule(messages));
    };
    if min <= len {
        Ok(())
    } else {
        Err(ValidationError::templated(
            "minlength",
            &messages.minlength,
            &[min.to_string()],
        ))
    }
}

/// `maxlength`: character count at most the bound.
pub(crate) fn check_max_length(
    messages: &MessageCatalog,
    attr_value: &str,
    input: &str,
) -> ValidationResult {
    let len = input.chars().count();
    if len == 0 {
        return Ok(());
    }
    let Ok(max) = attr_value.trim().parse::<usize>() else {
        return Err(malformed_rule(messages));
    };
    if max >= len {
        Ok(())
    } else {
        Err(ValidationError::templated(
            "maxlength",
            &messages.maxlength,
            &[max.to_string()],
        ))
    }
}

// ============================================================================
// TESTS
// ============================================================================
