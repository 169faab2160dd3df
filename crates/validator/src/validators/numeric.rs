//! Numeric bound validation
//!
//! `min`, `max` and `range` compare the field's value as a number. Before
//! comparing, the value must look like a signed float (`+`/`-`, digits,
//! optional fractional part); anything else fails with the `float` type
//! message — a format failure, distinct from a bound failure.
//!
//! An empty value auto-passes: it is treated as equal to the bound, so
//! there is nothing to reject until the user types something. Bounds whose
//! attribute text is missing or non-numeric fail closed.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::MessageCatalog;
use crate::foundation::{ValidationError, ValidationResult};
use crate::validators::malformed_rule;

static FLOAT_SYNTAX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?\d+(\.\d+)?$").unwrap());

/// Unsigned numeric tokens inside a two-sided bound attribute, e.g. `"3,10"`
/// or `"3 to 10"`. The separator is anything non-numeric.
static NUMBER_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+(\.\d+)?").unwrap());

// ============================================================================
// VALUE AND BOUND PARSING
// ============================================================================

/// Parses the field value as a number, or fails with the float type message.
///
/// Returns `None` for the empty string: the caller auto-passes.
fn parse_value(messages: &MessageCatalog, input: &str) -> Result<Option<f64>, ValidationError> {
    if input.is_empty() {
        return Ok(None);
    }
    if !FLOAT_SYNTAX.is_match(input) {
        return Err(ValidationError::new(
            "float",
            messages.types.float.clone(),
        ));
    }
    // FLOAT_SYNTAX guarantees the text is valid f64 syntax.
    Ok(Some(input.parse::<f64>().unwrap_or(f64::NAN)))
}

/// Scans a two-sided bound attribute for its `min` and `max` tokens.
pub(crate) fn scan_bounds(attr_value: &str) -> Option<(f64, f64)> {
    let mut tokens = NUMBER_TOKEN.find_iter(attr_value);
    let min = tokens.next()?.as_str().parse::<f64>().ok()?;
    let max = tokens.next()?.as_str().parse::<f64>().ok()?;
    Some((min, max))
}

// ============================================================================
// CHECKS
// ============================================================================

/// `min`: value must be at least the bound.
pub(crate) fn check_min(
    messages: &MessageCatalog,
    attr_value: &str,
    input: &str,
) -> ValidationResult {
    let Some(value) = parse_value(messages, input)? else {
        return Ok(());
    };
    let Ok(min) = attr_value.trim().parse::<f64>() else {
        return Err(malformed_rule(messages));
    };
    if min <= value {
        Ok(())
    } else {
        Err(ValidationError::templated(
            "min",
            &messages.min,
            &[min.to_string()],
        ))
    }
}

/// `max`: value must be at most the bound.
pub(crate) fn check_max(
    messages: &MessageCatalog,
    attr_value: &str,
    input: &str,
) -> ValidationResult {
    let Some(value) = parse_value(messages, input)? else {
        return Ok(());
    };
    let Ok(max) = attr_value.trim().parse::<f64>() else {
        return Err(malformed_rule(messages));
    };
    if max >= value {
        Ok(())
    } else {
        Err(ValidationError::templated(
            "max",
            &messages.max,
            &[max.to_string()],
        ))
    }
}

/// `range`: value must lie within the inclusive two-sided bound.
pub(crate) fn check_range(
    messages: &MessageCatalog,
    attr_value: &str,
    input: &str,
) -> ValidationResult {
    let Some(value) = parse_value(messages, input)? else {
        return Ok(());
    };
    let Some((min, max)) = scan_bounds(attr_value) else {
        return Err(malformed_rule(messages));
    };
    if min <= value && value <= max {
        Ok(())
    } else {
        Err(ValidationError::templated(
            "range",
            &messages.range,
            &[min.to_string(), max.to_string()],
        ))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn messages() -> MessageCatalog {
        MessageCatalog::default()
    }

    #[test]
    fn range_inside_passes() {
        assert!(check_range(&messages(), "3,10", "5").is_ok());
        assert!(check_range(&messages(), "3,10", "3").is_ok());
        assert!(check_range(&messages(), "3,10", "10").is_ok());
    }

    #[test]
    fn range_outside_fails_with_both_bounds_in_order() {
        let err = check_range(&messages(), "3,10", "2").unwrap_err();
        assert_eq!(err.code, "range");
        assert_eq!(err.message, "This value must be between 3 and 10");
        assert_eq!(err.param(0), Some("3"));
        assert_eq!(err.param(1), Some("10"));
    }

    #[test]
    fn range_empty_value_auto_passes() {
        assert!(check_range(&messages(), "3,10", "").is_ok());
    }

    #[test]
    fn range_accepts_fractional_bounds_and_values() {
        assert!(check_range(&messages(), "0.5,1.5", "1.25").is_ok());
        assert!(check_range(&messages(), "0.5,1.5", "1.75").is_err());
    }

    #[test]
    fn range_separator_text_is_irrelevant() {
        assert!(check_range(&messages(), "between 3 and 10", "7").is_ok());
    }

    #[test]
    fn non_numeric_value_fails_with_float_message() {
        let err = check_range(&messages(), "3,10", "abc").unwrap_err();
        assert_eq!(err.code, "float");
        assert_eq!(err.message, messages().types.float);

        let err = check_min(&messages(), "3", "1.2.3").unwrap_err();
        assert_eq!(err.code, "float");
    }

    #[test]
    fn signed_values_are_numbers() {
        assert!(check_min(&messages(), "-10", "-5").is_ok());
        assert!(check_min(&messages(), "-10", "+5").is_ok());
        assert!(check_max(&messages(), "0", "-0.5").is_ok());
    }

    #[test]
    fn min_bound_is_inclusive() {
        assert!(check_min(&messages(), "3", "3").is_ok());
        let err = check_min(&messages(), "3", "2.9").unwrap_err();
        assert_eq!(err.code, "min");
        assert_eq!(err.message, "This value must be greater than or equal to 3");
    }

    #[test]
    fn max_bound_is_inclusive() {
        assert!(check_max(&messages(), "10", "10").is_ok());
        let err = check_max(&messages(), "10", "10.1").unwrap_err();
        assert_eq!(err.code, "max");
        assert_eq!(err.param(0), Some("10"));
    }

    #[test]
    fn min_max_empty_value_auto_passes() {
        assert!(check_min(&messages(), "3", "").is_ok());
        assert!(check_max(&messages(), "10", "").is_ok());
    }

    #[test]
    fn malformed_bounds_fail_closed() {
        // range missing its second token
        let err = check_range(&messages(), "3", "5").unwrap_err();
        assert_eq!(err.code, "malformed_rule");
        // min that is not a number
        let err = check_min(&messages(), "lots", "5").unwrap_err();
        assert_eq!(err.code, "malformed_rule");
        // no tokens at all
        let err = check_range(&messages(), "whenever", "5").unwrap_err();
        assert_eq!(err.code, "malformed_rule");
    }

    #[test]
    fn empty_value_wins_over_malformed_bound() {
        // The empty short-circuit is uniform: nothing to check until the
        // user types, even under a broken rule.
        assert!(check_range(&messages(), "nonsense", "").is_ok());
        assert!(check_min(&messages(), "nonsense", "").is_ok());
    }

    #[test]
    fn scan_bounds_reads_first_two_tokens() {
        assert_eq!(scan_bounds("3,10"), Some((3.0, 10.0)));
        assert_eq!(scan_bounds("0.5 - 2.5"), Some((0.5, 2.5)));
        assert_eq!(scan_bounds("3"), None);
        assert_eq!(scan_bounds(""), None);
    }

    #[test]
    fn bound_messages_interpolate_cleanly_for_whole_numbers() {
        // f64 display drops the trailing ".0", so "3" not "3.0" reaches the
        // message.
        let err = check_range(&messages(), "3.0,10.0", "2").unwrap_err();
        assert_eq!(err.message, "This value must be between 3 and 10");
    }
}
