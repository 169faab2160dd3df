//! Presence validation
//!
//! `required` is the only rule that fails on an empty value; every other
//! rule treats emptiness as "nothing to check yet".

use crate::config::MessageCatalog;
use crate::foundation::{ValidationError, ValidationResult};

/// Fails iff the value is the empty string.
pub(crate) fn check(messages: &MessageCatalog, input: &str) -> ValidationResult {
    if input.is_empty() {
        Err(ValidationError::new("required", messages.required.clone()))
    } else {
        Ok(())
    }
}
