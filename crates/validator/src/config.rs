//! The five replaceable configuration tables
//!
//! Everything configurable about the engine lives in [`ValidationConfig`]:
//! the attribute catalog, the type catalog, the regex bound to each type,
//! the message templates, and the presentation style names. A config is
//! immutable once an orchestrator is constructed around it; customization
//! means building a different config, not mutating shared state.
//!
//! Tables are replaced wholesale, never per entry. The typed `with_*`
//! builders are the primary surface; [`ValidationConfig::set_table`] keeps
//! the string-keyed override flow for hosts that configure by name, and
//! rejects any name outside the fixed set of five.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constraint::{ConstraintKind, TypeName};

// ============================================================================
// DEFAULT TYPE REGEXES
// ============================================================================

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-zA-Z0-9_.-]+@([a-zA-Z0-9-]+\.)+([a-zA-Z0-9]{2,4})+$").unwrap()
});

// Scheme-anchored URL matcher: http/https/ftp, optional userinfo, IPv4 or
// hostname (unicode letters allowed) or localhost, optional port and rest.
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:(?:http|https|ftp)://)(?:\S+(?::\S*)?@)?(?:(?:(?:[1-9]\d?|1\d\d|2[01]\d|22[0-3])(?:\.(?:1?\d{1,2}|2[0-4]\d|25[0-5])){2}(?:\.(?:[0-9]\d?|1\d\d|2[0-4]\d|25[0-4]))|(?:(?:[a-z\x{00a1}-\x{ffff}0-9]+-?)*[a-z\x{00a1}-\x{ffff}0-9]+)(?:\.(?:[a-z\x{00a1}-\x{ffff}0-9]+-?)*[a-z\x{00a1}-\x{ffff}0-9]+)*(?:\.(?:[a-z\x{00a1}-\x{ffff}]{2,})))|localhost)(?::\d{2,5})?(?:(/|\?|#)[^\s]*)?$",
    )
    .unwrap()
});

static FLOAT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?\d+(\.\d+)?$").unwrap());

static INTEGER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[+-]?\d+$").unwrap());

static DIGITS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d$").unwrap());

static ALPHANUM_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^[a-z]+$").unwrap());

// ============================================================================
// ATTRIBUTE CATALOG
// ============================================================================

/// The ordered vocabulary of recognized constraint attributes.
///
/// Maps each [`ConstraintKind`] to the markup attribute name that declares
/// it. Extraction iterates this catalog in order, so the entry order IS the
/// evaluation order. Hosts may rename attributes (e.g. `data-required`) or
/// omit kinds they never want enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeCatalog {
    entries: Vec<(ConstraintKind, String)>,
}

impl AttributeCatalog {
    /// Creates a catalog from explicit `(kind, attribute name)` entries.
    pub fn new(entries: Vec<(ConstraintKind, String)>) -> Self {
        Self { entries }
    }

    /// Iterates the catalog in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (ConstraintKind, &str)> {
        self.entries.iter().map(|(kind, name)| (*kind, name.as_str()))
    }

    /// The attribute name declared for a kind, if the catalog carries it.
    #[must_use]
    pub fn name_of(&self, kind: ConstraintKind) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, name)| name.as_str())
    }
}

impl Default for AttributeCatalog {
    /// The canonical nine attributes under their canonical names.
    fn default() -> Self {
        Self {
            entries: ConstraintKind::ALL
                .iter()
                .map(|kind| (*kind, kind.as_str().to_string()))
                .collect(),
        }
    }
}

// ============================================================================
// TYPE CATALOG
// ============================================================================

/// The recognized spellings of the `type` attribute's value.
///
/// Maps each [`TypeName`] to the attribute value that selects it. A `type`
/// value that resolves to no entry is not enforced (unknown types pass).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCatalog {
    entries: Vec<(TypeName, String)>,
}

impl TypeCatalog {
    /// Creates a catalog from explicit `(type, spelling)` entries.
    pub fn new(entries: Vec<(TypeName, String)>) -> Self {
        Self { entries }
    }

    /// Resolves an attribute value to a type name.
    #[must_use]
    pub fn resolve(&self, attr_value: &str) -> Option<TypeName> {
        self.entries
            .iter()
            .find(|(_, spelling)| spelling == attr_value)
            .map(|(name, _)| *name)
    }
}

impl Default for TypeCatalog {
    fn default() -> Self {
        Self {
            entries: TypeName::ALL
                .iter()
                .map(|name| (*name, name.as_str().to_string()))
                .collect(),
        }
    }
}

// ============================================================================
// TYPE PATTERNS
// ============================================================================

/// The regex bound to each type name.
///
/// The mapping is total by construction — one field per [`TypeName`] — so a
/// resolved type always has a pattern to test against.
#[derive(Debug, Clone)]
pub struct TypePatterns {
    pub email: Regex,
    pub url: Regex,
    pub float: Regex,
    pub integer: Regex,
    pub digits: Regex,
    pub alphanum: Regex,
}

impl TypePatterns {
    /// The regex bound to a type name.
    #[must_use]
    pub fn pattern(&self, name: TypeName) -> &Regex {
        match name {
            TypeName::Email => &self.email,
            TypeName::Url => &self.url,
            TypeName::Float => &self.float,
            TypeName::Integer => &self.integer,
            TypeName::Digits => &self.digits,
            TypeName::Alphanum => &self.alphanum,
        }
    }
}

impl Default for TypePatterns {
    fn default() -> Self {
        Self {
            email: EMAIL_REGEX.clone(),
            url: URL_REGEX.clone(),
            float: FLOAT_REGEX.clone(),
            integer: INTEGER_REGEX.clone(),
            digits: DIGITS_REGEX.clone(),
            alphanum: ALPHANUM_REGEX.clone(),
        }
    }
}

// ============================================================================
// MESSAGE CATALOG
// ============================================================================

/// Per-type failure messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeMessages {
    pub email: Cow<'static, str>,
    pub url: Cow<'static, str>,
    pub float: Cow<'static, str>,
    pub integer: Cow<'static, str>,
    pub digits: Cow<'static, str>,
    pub alphanum: Cow<'static, str>,
}

impl Default for TypeMessages {
    fn default() -> Self {
        Self {
            email: Cow::Borrowed("This value must be a valid email address"),
            url: Cow::Borrowed("This value must be a valid URL"),
            float: Cow::Borrowed("This value must be a valid number"),
            integer: Cow::Borrowed("This value must be a valid integer"),
            digits: Cow::Borrowed("This value must be a digit"),
            alphanum: Cow::Borrowed("This value must contain only letters"),
        }
    }
}

/// Failure-message templates, one per constraint kind (and per type name).
///
/// Templates carry `%s` placeholders filled left-to-right from the ordered
/// parameters the algorithm produces — `range` produces `[min, max]`, so its
/// template has two placeholders in that order. Localization replaces the
/// whole catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageCatalog {
    pub required: Cow<'static, str>,
    pub pattern: Cow<'static, str>,
    pub min: Cow<'static, str>,
    pub max: Cow<'static, str>,
    pub range: Cow<'static, str>,
    pub length: Cow<'static, str>,
    pub minlength: Cow<'static, str>,
    pub maxlength: Cow<'static, str>,
    /// Reported when a declared rule itself is unusable: a bound attribute
    /// with missing or non-numeric tokens, or a pattern attribute that is
    /// not a compilable `/body/flags` literal. Bad rules fail closed.
    pub malformed: Cow<'static, str>,
    pub types: TypeMessages,
}

impl MessageCatalog {
    /// The per-type failure message.
    #[must_use]
    pub fn type_message(&self, name: TypeName) -> &Cow<'static, str> {
        match name {
            TypeName::Email => &self.types.email,
            TypeName::Url => &self.types.url,
            TypeName::Float => &self.types.float,
            TypeName::Integer => &self.types.integer,
            TypeName::Digits => &self.types.digits,
            TypeName::Alphanum => &self.types.alphanum,
        }
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self {
            required: Cow::Borrowed("This value is required"),
            pattern: Cow::Borrowed("This value seems to be invalid"),
            min: Cow::Borrowed("This value must be greater than or equal to %s"),
            max: Cow::Borrowed("This value must be less than or equal to %s"),
            range: Cow::Borrowed("This value must be between %s and %s"),
            length: Cow::Borrowed("This value is invalid, its length must be between %s and %s"),
            minlength: Cow::Borrowed(
                "This value is too short, it must be %s characters or more",
            ),
            maxlength: Cow::Borrowed(
                "This value is too long, it must be %s characters or fewer",
            ),
            malformed: Cow::Borrowed("This value's validation rule is malformed"),
            types: TypeMessages::default(),
        }
    }
}

// ============================================================================
// STYLE CATALOG
// ============================================================================

/// Presentation style names for the layer that renders feedback.
///
/// The engine never touches a class list itself — these names are handed to
/// the host's [`Presenter`](crate::form::Presenter) implementation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleCatalog {
    /// Class applied to a failing input.
    pub input_class: Cow<'static, str>,
    /// Inline style body for the failing-input class.
    pub input_style: Cow<'static, str>,
    /// Class applied to the error container next to the field.
    pub error_class: Cow<'static, str>,
    /// Inline style body for the error-container class.
    pub error_style: Cow<'static, str>,
}

impl Default for StyleCatalog {
    fn default() -> Self {
        Self {
            input_class: Cow::Borrowed("validator-input-error"),
            input_style: Cow::Borrowed("background: #faedec;border: 1px solid #e85445;"),
            error_class: Cow::Borrowed("validator-error-div"),
            error_style: Cow::Borrowed("color: #e74c3c;padding-right: 0;"),
        }
    }
}

// ============================================================================
// VALIDATION CONFIG
// ============================================================================

/// The complete engine configuration: five tables, replaced wholesale.
///
/// # Examples
///
/// ```rust,ignore
/// use formic_validator::config::{MessageCatalog, ValidationConfig};
///
/// let config = ValidationConfig::default().with_messages(MessageCatalog {
///     required: "Dieses Feld ist erforderlich".into(),
///     ..MessageCatalog::default()
/// });
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValidationConfig {
    pub attributes: AttributeCatalog,
    pub types: TypeCatalog,
    pub type_patterns: TypePatterns,
    pub messages: MessageCatalog,
    pub styles: StyleCatalog,
}

/// The fixed set of table names [`ValidationConfig::set_table`] accepts.
pub const TABLE_NAMES: [&str; 5] = ["attributes", "types", "type_patterns", "messages", "styles"];

/// A wholesale replacement payload for one configuration table.
#[derive(Debug, Clone)]
pub enum TableOverride {
    Attributes(AttributeCatalog),
    Types(TypeCatalog),
    TypePatterns(TypePatterns),
    Messages(MessageCatalog),
    Styles(StyleCatalog),
}

impl TableOverride {
    /// The table name this payload belongs to.
    #[must_use]
    pub fn table_name(&self) -> &'static str {
        match self {
            Self::Attributes(_) => "attributes",
            Self::Types(_) => "types",
            Self::TypePatterns(_) => "type_patterns",
            Self::Messages(_) => "messages",
            Self::Styles(_) => "styles",
        }
    }
}

/// Configuration misuse, rejected without mutating anything.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// The named table is not one of the fixed five.
    #[error("unsupported configuration table `{0}`")]
    UnknownTable(String),

    /// The payload does not match the named table.
    #[error("configuration table `{name}` expects a {name} payload, got {got}")]
    TableMismatch {
        name: &'static str,
        got: &'static str,
    },
}

impl ValidationConfig {
    /// The documented default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the attribute catalog.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_attributes(mut self, attributes: AttributeCatalog) -> Self {
        self.attributes = attributes;
        self
    }

    /// Replaces the type catalog.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_types(mut self, types: TypeCatalog) -> Self {
        self.types = types;
        self
    }

    /// Replaces the type regex bindings.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_type_patterns(mut self, type_patterns: TypePatterns) -> Self {
        self.type_patterns = type_patterns;
        self
    }

    /// Replaces the message catalog.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_messages(mut self, messages: MessageCatalog) -> Self {
        self.messages = messages;
        self
    }

    /// Replaces the style catalog.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_styles(mut self, styles: StyleCatalog) -> Self {
        self.styles = styles;
        self
    }

    /// Replaces one table by name.
    ///
    /// Accepts exactly the names in [`TABLE_NAMES`]. Any other name, or a
    /// payload that does not match the named table, is rejected without
    /// mutating the config.
    pub fn set_table(&mut self, name: &str, table: TableOverride) -> Result<(), ConfigError> {
        let Some(canonical) = TABLE_NAMES.iter().copied().find(|n| *n == name) else {
            return Err(ConfigError::UnknownTable(name.to_string()));
        };
        if canonical != table.table_name() {
            return Err(ConfigError::TableMismatch {
                name: canonical,
                got: table.table_name(),
            });
        }
        match table {
            TableOverride::Attributes(t) => self.attributes = t,
            TableOverride::Types(t) => self.types = t,
            TableOverride::TypePatterns(t) => self.type_patterns = t,
            TableOverride::Messages(t) => self.messages = t,
            TableOverride::Styles(t) => self.styles = t,
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
