//! Per-constraint validation algorithms
//!
//! One module per constraint family, dispatched by the exhaustive match in
//! [`engine::check_constraint`](crate::engine::check_constraint):
//!
//! - **required** — presence
//! - **numeric** — `min` / `max` / `range` over signed-float values
//! - **length** — `minlength` / `maxlength` / `length` over character counts
//! - **pattern** — `/body/flags` regex literals
//! - **typed** — catalog-bound type regexes (`email`, `url`, ...)
//!
//! Every algorithm except `required` lets an empty value pass (`pattern`
//! excepted — an empty string is subject to whatever the pattern allows).
//! A rule whose own attribute text is unusable fails closed with the
//! catalog's malformed-rule message.

use crate::config::MessageCatalog;
use crate::foundation::ValidationError;

pub(crate) mod length;
pub(crate) mod numeric;
pub(crate) mod pattern;
pub(crate) mod required;
pub(crate) mod typed;

/// The fail-closed result for a rule whose attribute text is unusable.
pub(crate) fn malformed_rule(messages: &MessageCatalog) -> ValidationError {
    ValidationError::new("malformed_rule", messages.malformed.clone())
}
