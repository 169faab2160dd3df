//! Pattern-literal validation
//!
//! The `pattern` attribute carries an inline regex literal in the familiar
//! `/body/flags` form, e.g. `/^[A-Z]{2}\d{4}$/i`. A small isolated parser
//! recovers `{ body, flags }`; a missing wrapper or an uncompilable body
//! fails closed rather than compiling garbage.
//!
//! There is no empty bypass here: an empty string is subject to whatever
//! the pattern allows.

use regex::RegexBuilder;

use crate::config::MessageCatalog;
use crate::foundation::{ValidationError, ValidationResult};
use crate::validators::malformed_rule;

/// Flag letters the literal syntax recognizes.
const FLAG_SET: [char; 4] = ['g', 'i', 'm', 'y'];

// ============================================================================
// LITERAL PARSER
// ============================================================================

/// A parsed `/body/flags` literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PatternLiteral<'a> {
    pub body: &'a str,
    pub flags: &'a str,
}

/// Parses a `/body/flags` literal.
///
/// The body may itself contain `/` (e.g. `/a\/b/`); the flags are whatever
/// follows the last delimiter, and must all come from `g`, `i`, `m`, `y`.
/// Returns `None` when the wrapper delimiters are absent or the trailing
/// letters are not flags.
pub(crate) fn parse_literal(attr_value: &str) -> Option<PatternLiteral<'_>> {
    let rest = attr_value.strip_prefix('/')?;
    let (body, flags) = rest.rsplit_once('/')?;
    if !flags.chars().all(|c| FLAG_SET.contains(&c)) {
        return None;
    }
    Some(PatternLiteral { body, flags })
}

// ============================================================================
// CHECK
// ============================================================================

/// `pattern`: the value must match the declared literal.
///
/// `i` and `m` map to the corresponding regex options; `g` (global) and `y`
/// (sticky) have no meaning for a whole-value test and are accepted as
/// no-ops.
pub(crate) fn check_pattern(
    messages: &MessageCatalog,
    attr_value: &str,
    input: &str,
) -> ValidationResult {
    let Some(literal) = parse_literal(attr_value) else {
        return Err(malformed_rule(messages));
    };
    let Ok(regex) = RegexBuilder::new(literal.body)
        .case_insensitive(literal.flags.contains('i'))
        .multi_line(literal.flags.contains('m'))
        .build()
    else {
        return Err(malformed_rule(messages));
    };
    if regex.is_match(input) {
        Ok(())
    } else {
        Err(ValidationError::new("pattern", messages.pattern.clone()))
    }
}

// ============================================================================
// TESTS
// ============================================================================
