//! Type-bound validation
//!
//! The `type` attribute names an entry in the type catalog (`email`, `url`,
//! `float`, `integer`, `digits`, `alphanum`); the value is tested against
//! the regex bound to that entry. A spelling the catalog does not recognize
//! is not enforced — hosts routinely declare native types (`text`,
//! `checkbox`) the engine has no opinion on.

use crate::config::ValidationConfig;
use crate::foundation::{ValidationError, ValidationResult};

/// `type`: the value must match the regex bound to the named type.
///
/// Unknown type names auto-pass; so does an empty value.
pub(crate) fn check_type(
    config: &ValidationConfig,
    attr_value: &str,
    input: &str,
) -> ValidationResult {
    let Some(type_name) = config.types.resolve(attr_value) else {
        return Ok(());
    };
    if input.is_empty() {
        return Ok(());
    }
    if config.type_patterns.pattern(type_name).is_match(input) {
        Ok(())
    } else {
        Err(ValidationError::new(
            type_name.as_str(),
            config.messages.type_message(type_name).clone(),
        ))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{TypeCatalog, ValidationConfig};
    use crate::constraint::TypeName;

    fn config() -> ValidationConfig {
        ValidationConfig::default()
    }

    #[test]
    fn email_matches() {
        assert!(check_type(&config(), "email", "a@b.com").is_ok());
    }

    #[test]
    fn email_mismatch_fails_with_email_message() {
        let config = config();
        let err = check_type(&config, "email", "not-an-email").unwrap_err();
        assert_eq!(err.code, "email");
        assert_eq!(err.message, config.messages.types.email);
    }

    #[test]
    fn empty_value_auto_passes() {
        assert!(check_type(&config(), "email", "").is_ok());
        assert!(check_type(&config(), "integer", "").is_ok());
    }

    #[test]
    fn unknown_type_names_are_not_enforced() {
        assert!(check_type(&config(), "checkbox", "anything").is_ok());
        assert!(check_type(&config(), "", "anything").is_ok());
    }

    #[test]
    fn integer_and_digits_distinguish_width() {
        assert!(check_type(&config(), "integer", "-42").is_ok());
        assert!(check_type(&config(), "digits", "4").is_ok());
        // `digits` is a single digit in the default bindings.
        assert!(check_type(&config(), "digits", "42").is_err());
    }

    #[test]
    fn alphanum_is_letters_only_by_default() {
        assert!(check_type(&config(), "alphanum", "Abc").is_ok());
        assert!(check_type(&config(), "alphanum", "ab1").is_err());
    }

    #[test]
    fn url_accepts_schemes_and_rejects_mailto() {
        assert!(check_type(&config(), "url", "https://example.com").is_ok());
        assert!(check_type(&config(), "url", "ftp://files.example.com/a").is_ok());
        assert!(check_type(&config(), "url", "mailto:a@b.com").is_err());
    }

    #[test]
    fn renamed_type_catalog_changes_the_spelling() {
        let config = ValidationConfig::default().with_types(TypeCatalog::new(vec![(
            TypeName::Email,
            "e-mail".to_string(),
        )]));
        assert!(check_type(&config, "e-mail", "bad").is_err());
        // The canonical spelling is no longer recognized.
        assert!(check_type(&config, "email", "bad").is_ok());
    }
}
