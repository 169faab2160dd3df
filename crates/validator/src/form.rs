//! The validation orchestrator
//!
//! [`FormValidator`] owns the registered-field collection and drives the
//! engine: whole-form validation before submission (`validate_all`) and
//! single-field validation on change notifications (`validate_one`). The
//! presentation layer stays outside — it feeds fields in through the
//! [`FieldSource`] boundary and receives results through [`Presenter`].
//!
//! Everything is synchronous and single-pass: each validation refreshes the
//! field's value snapshot from its live source, sweeps the constraint list
//! once, and returns.

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;
use serde::Serialize;
use tracing::debug;

use crate::config::ValidationConfig;
use crate::constraint::{Constraint, extract};
use crate::engine;
use crate::foundation::ValidationResult;

/// Stable identity of a registered field.
pub type FieldId = String;

// ============================================================================
// BOUNDARY TRAITS
// ============================================================================

/// A field descriptor supplied by the host: identity, declared attributes,
/// and a readable current value.
///
/// Implementations wrap whatever the host renders — a DOM element behind
/// FFI, a widget, or an in-memory test double like [`MemoryField`]. The
/// orchestrator keeps the source after registration and re-reads the value
/// immediately before every validation pass, so the value accessor must
/// reflect the live state.
pub trait FieldSource {
    /// The field's stable identity within its form.
    fn id(&self) -> &str;

    /// The raw text of a declared attribute, or `None` if absent.
    fn attribute(&self, name: &str) -> Option<String>;

    /// The field's current value.
    fn value(&self) -> String;
}

/// The presentation hook results are mapped onto.
///
/// The engine never touches the UI; `validate_all_with` / `validate_one_with`
/// call exactly one of these per evaluated field. Class names for the visual
/// treatment come from [`StyleCatalog`](crate::config::StyleCatalog).
pub trait Presenter {
    /// A field failed: surface `message` next to it.
    fn show_error(&mut self, field: &str, message: &str);

    /// A field passed: remove any error indicator it carries.
    fn clear_error(&mut self, field: &str);
}

// ============================================================================
// FIELD RECORD
// ============================================================================

/// One registered field: its extracted constraints, the last value
/// snapshot, and the live source the snapshot is refreshed from.
struct FieldRecord {
    constraints: Vec<Constraint>,
    current_value: String,
    source: Box<dyn FieldSource>,
}

// ============================================================================
// FORM REPORT
// ============================================================================

/// The outcome of a whole-form pass.
///
/// `fields` preserves registration order and contains every registered
/// field — one failing field never short-circuits the others. Callers gate
/// submission on [`passed`](Self::passed).
#[derive(Debug, Clone, Serialize)]
pub struct FormReport {
    /// `true` iff every field passed.
    pub passed: bool,
    /// Per-field results, in registration order.
    pub fields: IndexMap<FieldId, ValidationResult>,
}

impl FormReport {
    /// The result recorded for one field, if it is registered.
    #[must_use]
    pub fn field(&self, id: &str) -> Option<&ValidationResult> {
        self.fields.get(id)
    }

    /// Iterates the failing fields with their display messages.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().filter_map(|(id, result)| {
            result
                .as_ref()
                .err()
                .map(|error| (id.as_str(), error.message.as_ref()))
        })
    }
}

// ============================================================================
// FORM VALIDATOR
// ============================================================================

/// The orchestrator: field registry plus the two validation entry points.
///
/// # Examples
///
/// ```rust,ignore
/// use formic_validator::prelude::*;
///
/// let mut form = FormValidator::new();
/// form.register(Box::new(
///     MemoryField::new("email")
///         .with_attribute("required", "")
///         .with_attribute("type", "email"),
/// ));
///
/// let report = form.validate_all();
/// assert!(!report.passed); // required + empty
/// ```
pub struct FormValidator {
    config: Arc<ValidationConfig>,
    fields: IndexMap<FieldId, FieldRecord>,
}

impl FormValidator {
    /// Creates an orchestrator over the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ValidationConfig::default())
    }

    /// Creates an orchestrator over a custom configuration.
    #[must_use]
    pub fn with_config(config: ValidationConfig) -> Self {
        Self::with_shared_config(Arc::new(config))
    }

    /// Creates an orchestrator sharing one configuration with other forms.
    #[must_use]
    pub fn with_shared_config(config: Arc<ValidationConfig>) -> Self {
        Self {
            config,
            fields: IndexMap::new(),
        }
    }

    /// The configuration this orchestrator evaluates against.
    #[must_use]
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Registers a field, extracting its constraint list from the declared
    /// attributes.
    ///
    /// Idempotent per field id: re-registering replaces the stored record
    /// (constraints are re-extracted) while keeping the field's original
    /// position in the registration order.
    pub fn register(&mut self, source: Box<dyn FieldSource>) {
        let id: FieldId = source.id().to_string();
        let constraints = extract(&self.config.attributes, |name| source.attribute(name));
        debug!(field = %id, constraints = constraints.len(), "registered field");
        self.fields.insert(
            id,
            FieldRecord {
                constraints,
                current_value: String::new(),
                source,
            },
        );
    }

    /// Removes a field from the registry.
    pub fn unregister(&mut self, id: &str) -> bool {
        self.fields.shift_remove(id).is_some()
    }

    /// Number of registered fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// `true` when no fields are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The registered field ids, in registration order.
    pub fn field_ids(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// A registered field's extracted constraints, in evaluation order.
    #[must_use]
    pub fn constraints(&self, id: &str) -> Option<&[Constraint]> {
        self.fields.get(id).map(|record| record.constraints.as_slice())
    }

    /// Validates every registered field.
    ///
    /// Each field's value snapshot is refreshed from its live source first.
    /// Evaluation never short-circuits across fields: a failure in one
    /// field still evaluates the rest, so the report is complete.
    pub fn validate_all(&mut self) -> FormReport {
        let mut fields = IndexMap::with_capacity(self.fields.len());
        let mut passed = true;
        for (id, record) in &mut self.fields {
            record.current_value = record.source.value();
            let result =
                engine::check_field(&self.config, &record.constraints, &record.current_value);
            passed &= result.is_ok();
            fields.insert(id.clone(), result);
        }
        debug!(fields = fields.len(), passed, "whole-form validation pass");
        FormReport { passed, fields }
    }

    /// Validates one field, typically from a change notification.
    ///
    /// Returns `None` for an id that was never registered.
    pub fn validate_one(&mut self, id: &str) -> Option<ValidationResult> {
        let record = self.fields.get_mut(id)?;
        record.current_value = record.source.value();
        Some(engine::check_field(
            &self.config,
            &record.constraints,
            &record.current_value,
        ))
    }

    /// [`validate_all`](Self::validate_all), mapping every result onto the
    /// presenter.
    pub fn validate_all_with(&mut self, presenter: &mut dyn Presenter) -> FormReport {
        let report = self.validate_all();
        for (id, result) in &report.fields {
            Self::present(presenter, id, result);
        }
        report
    }

    /// [`validate_one`](Self::validate_one), mapping the result onto the
    /// presenter.
    pub fn validate_one_with(
        &mut self,
        id: &str,
        presenter: &mut dyn Presenter,
    ) -> Option<ValidationResult> {
        let result = self.validate_one(id)?;
        Self::present(presenter, id, &result);
        Some(result)
    }

    fn present(presenter: &mut dyn Presenter, id: &str, result: &ValidationResult) {
        match result {
            Ok(()) => presenter.clear_error(id),
            Err(error) => presenter.show_error(id, &error.message),
        }
    }
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FormValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormValidator")
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// IN-MEMORY FIELD
// ============================================================================

/// A writable handle onto a [`MemoryField`]'s value.
///
/// The host keeps the handle after registering the field and writes the
/// user's input into it; the orchestrator sees the update on its next pass.
#[derive(Debug, Clone)]
pub struct FieldValueHandle(Arc<RwLock<String>>);

impl FieldValueHandle {
    /// Overwrites the field's current value.
    pub fn set(&self, value: impl Into<String>) {
        *self.0.write() = value.into();
    }

    /// Reads the field's current value.
    #[must_use]
    pub fn get(&self) -> String {
        self.0.read().clone()
    }
}

/// A self-contained [`FieldSource`], for hosts without a retained-mode UI
/// tree and for tests.
///
/// # Examples
///
/// ```rust,ignore
/// use formic_validator::form::MemoryField;
///
/// let field = MemoryField::new("age")
///     .with_attribute("required", "")
///     .with_attribute("range", "18,99");
/// let age = field.value_handle();
///
/// // ...after registration:
/// age.set("42");
/// ```
#[derive(Debug, Clone)]
pub struct MemoryField {
    id: String,
    attributes: Vec<(String, String)>,
    value: Arc<RwLock<String>>,
}

impl MemoryField {
    /// Creates an empty field with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: Vec::new(),
            value: Arc::new(RwLock::new(String::new())),
        }
    }

    /// Declares an attribute, e.g. `("minlength", "5")`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Sets the initial value.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_value(self, value: impl Into<String>) -> Self {
        *self.value.write() = value.into();
        self
    }

    /// A writable handle the host keeps after registering the field.
    #[must_use]
    pub fn value_handle(&self) -> FieldValueHandle {
        FieldValueHandle(Arc::clone(&self.value))
    }
}

impl FieldSource for MemoryField {
    fn id(&self) -> &str {
        &self.id
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes
            .iter()
            .find(|(declared, _)| declared == name)
            .map(|(_, value)| value.clone())
    }

    fn value(&self) -> String {
        self.value.read().clone()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::ConstraintKind;

    fn required_field(id: &str, value: &str) -> Box<MemoryField> {
        Box::new(
            MemoryField::new(id)
                .with_attribute("required", "")
                .with_value(value),
        )
    }

    #[test]
    fn register_extracts_in_catalog_order() {
        let mut form = FormValidator::new();
        // Markup order deliberately scrambled.
        form.register(Box::new(
            MemoryField::new("username")
                .with_attribute("maxlength", "12")
                .with_attribute("required", "")
                .with_attribute("minlength", "3"),
        ));

        let kinds: Vec<ConstraintKind> = form
            .constraints("username")
            .unwrap()
            .iter()
            .map(|c| c.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                ConstraintKind::Required,
                ConstraintKind::MinLength,
                ConstraintKind::MaxLength
            ]
        );
    }

    #[test]
    fn re_registration_replaces_in_place() {
        let mut form = FormValidator::new();
        form.register(required_field("a", ""));
        form.register(required_field("b", ""));
        // Re-register "a" with a different rule set.
        form.register(Box::new(
            MemoryField::new("a").with_attribute("minlength", "3"),
        ));

        let ids: Vec<&str> = form.field_ids().collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(
            form.constraints("a").unwrap()[0].kind,
            ConstraintKind::MinLength
        );
        assert_eq!(form.len(), 2);
    }

    #[test]
    fn validate_all_covers_every_field() {
        let mut form = FormValidator::new();
        form.register(required_field("first", "ok"));
        form.register(required_field("second", ""));
        form.register(required_field("third", "ok"));

        let report = form.validate_all();
        assert!(!report.passed);
        assert!(report.field("first").unwrap().is_ok());
        assert!(report.field("second").unwrap().is_err());
        assert!(report.field("third").unwrap().is_ok());
    }

    #[test]
    fn validate_all_snapshots_live_values() {
        let field = MemoryField::new("name").with_attribute("required", "");
        let handle = field.value_handle();
        let mut form = FormValidator::new();
        form.register(Box::new(field));

        assert!(!form.validate_all().passed);
        handle.set("typed something");
        assert!(form.validate_all().passed);
    }

    #[test]
    fn validate_one_unknown_id_is_none() {
        let mut form = FormValidator::new();
        assert!(form.validate_one("ghost").is_none());
    }

    #[test]
    fn validate_one_is_idempotent_for_unchanged_value() {
        let mut form = FormValidator::new();
        form.register(Box::new(
            MemoryField::new("age")
                .with_attribute("range", "18,99")
                .with_value("12"),
        ));

        let first = form.validate_one("age").unwrap();
        let second = form.validate_one("age").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_form_passes() {
        let mut form = FormValidator::new();
        let report = form.validate_all();
        assert!(report.passed);
        assert!(report.fields.is_empty());
    }

    #[derive(Default)]
    struct RecordingPresenter {
        shown: Vec<(String, String)>,
        cleared: Vec<String>,
    }

    impl Presenter for RecordingPresenter {
        fn show_error(&mut self, field: &str, message: &str) {
            self.shown.push((field.to_string(), message.to_string()));
        }

        fn clear_error(&mut self, field: &str) {
            self.cleared.push(field.to_string());
        }
    }

    #[test]
    fn presenter_sees_one_call_per_field() {
        let mut form = FormValidator::new();
        form.register(required_field("good", "x"));
        form.register(required_field("bad", ""));

        let mut presenter = RecordingPresenter::default();
        let report = form.validate_all_with(&mut presenter);

        assert!(!report.passed);
        assert_eq!(presenter.cleared, vec!["good"]);
        assert_eq!(presenter.shown.len(), 1);
        assert_eq!(presenter.shown[0].0, "bad");
        assert_eq!(presenter.shown[0].1, form.config().messages.required);
    }

    #[test]
    fn presenter_clears_after_fix() {
        let field = MemoryField::new("email")
            .with_attribute("required", "")
            .with_attribute("type", "email");
        let handle = field.value_handle();
        let mut form = FormValidator::new();
        form.register(Box::new(field));

        let mut presenter = RecordingPresenter::default();
        form.validate_one_with("email", &mut presenter).unwrap();
        handle.set("a@b.com");
        form.validate_one_with("email", &mut presenter).unwrap();

        assert_eq!(presenter.shown.len(), 1);
        assert_eq!(presenter.cleared, vec!["email"]);
    }

    #[test]
    fn unregister_removes_the_field() {
        let mut form = FormValidator::new();
        form.register(required_field("a", ""));
        assert!(form.unregister("a"));
        assert!(!form.unregister("a"));
        assert!(form.is_empty());
    }

    #[test]
    fn forms_share_config_without_sharing_fields() {
        let config = Arc::new(ValidationConfig::default());
        let mut login = FormValidator::with_shared_config(Arc::clone(&config));
        let mut signup = FormValidator::with_shared_config(config);

        login.register(required_field("user", ""));
        signup.register(required_field("email", "x"));

        assert!(!login.validate_all().passed);
        assert!(signup.validate_all().passed);
    }
}
