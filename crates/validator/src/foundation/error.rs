//! Error types for validation failures
//!
//! A validation failure is data, not an exception: a stable code for
//! programmatic handling, the fully interpolated human-readable message, and
//! the ordered parameters that were substituted into the message template.
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of static codes and catalog messages.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

// ============================================================================
// TEMPLATE INTERPOLATION
// ============================================================================

/// Substitutes `%s` placeholders in a message template, left to right, from
/// an ordered parameter list.
///
/// The Nth `%s` receives the Nth parameter. Placeholders beyond the parameter
/// list are left untouched rather than replaced with garbage.
///
/// # Examples
///
/// ```rust,ignore
/// use formic_validator::foundation::interpolate;
///
/// let msg = interpolate("between %s and %s", &["3".into(), "10".into()]);
/// assert_eq!(msg, "between 3 and 10");
/// ```
#[must_use]
pub fn interpolate(template: &str, params: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut next = params.iter();
    while let Some(pos) = rest.find("%s") {
        out.push_str(&rest[..pos]);
        match next.next() {
            Some(param) => out.push_str(param),
            None => out.push_str("%s"),
        }
        rest = &rest[pos + 2..];
    }
    out.push_str(rest);
    out
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation failure.
///
/// # Examples
///
/// ```rust,ignore
/// use formic_validator::foundation::ValidationError;
///
/// // Static strings — zero allocation:
/// let error = ValidationError::new("required", "This value is required");
///
/// // Template + parameters, interpolated on construction:
/// let error = ValidationError::templated(
///     "range",
///     "This value must be between %s and %s",
///     &["3".into(), "10".into()],
/// );
/// assert_eq!(error.message, "This value must be between 3 and 10");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Stable code for programmatic handling, e.g. `"range"`, `"minlength"`,
    /// `"email"`.
    pub code: Cow<'static, str>,

    /// The fully interpolated, ready-to-display message.
    pub message: Cow<'static, str>,

    /// The ordered parameters substituted into the message template
    /// (typically 0-2 entries), kept for hosts that re-render messages.
    pub params: SmallVec<[Cow<'static, str>; 2]>,
}

impl ValidationError {
    /// Creates an error from a code and an already-final message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: SmallVec::new(),
        }
    }

    /// Creates an error by interpolating `params` into a `%s` template.
    ///
    /// The parameters are retained on the error in substitution order.
    pub fn templated(
        code: impl Into<Cow<'static, str>>,
        template: &str,
        params: &[String],
    ) -> Self {
        let mut error = Self::new(code, interpolate(template, params));
        for param in params {
            error.params.push(Cow::Owned(param.clone()));
        }
        error
    }

    /// Appends a parameter to the ordered parameter list.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(mut self, value: impl Into<Cow<'static, str>>) -> Self {
        self.params.push(value.into());
        self
    }

    /// Returns the Nth substituted parameter, if any.
    #[must_use]
    pub fn param(&self, index: usize) -> Option<&str> {
        self.params.get(index).map(Cow::as_ref)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;
        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, param) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{param}")?;
            }
            write!(f, "])")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// TESTS
// ============================================================================
