//! Error types for the provisioning subsystem.

use thiserror::Error;

/// Provisioning errors
///
/// Represents the failures a caller can observe when asking a factory or
/// registry for a product. Every variant is surfaced immediately to the
/// caller of the operation that detected it; nothing is retried internally.
///
/// Skipping builder steps is deliberately *not* an error: a builder hands
/// back whatever it has, with unset parts left at their defaults.
///
/// # Examples
///
/// ```rust
/// use ferrous_provision::{ProvisionError, ShapeFactory};
///
/// match ShapeFactory::new().create_named("hexagon") {
///     Err(ProvisionError::UnsupportedVariant(name)) => assert_eq!(name, "hexagon"),
///     _ => unreachable!(),
/// }
/// ```
///
/// ```rust
/// use ferrous_provision::ProvisionError;
///
/// let unsupported = ProvisionError::UnsupportedVariant("triangle".to_string());
/// let missing = ProvisionError::TemplateNotFound("big-red-circle".to_string());
///
/// assert_eq!(unsupported.to_string(), "Unsupported variant: triangle");
/// assert_eq!(missing.to_string(), "Template not found: big-red-circle");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProvisionError {
    /// Discriminator does not map to any registered constructor
    #[error("Unsupported variant: {0}")]
    UnsupportedVariant(String),
    /// No prototype template registered under the given name
    #[error("Template not found: {0}")]
    TemplateNotFound(String),
}

impl ProvisionError {
    /// Short, stable label for the error kind, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ProvisionError::UnsupportedVariant(_) => "unsupported_variant",
            ProvisionError::TemplateNotFound(_) => "template_not_found",
        }
    }
}

/// Result type for provisioning operations
///
/// A convenience alias for `Result<T, ProvisionError>` used throughout
/// ferrous-provision.
///
/// # Examples
///
/// ```rust
/// use ferrous_provision::{ProvisionError, ProvisionResult};
///
/// fn lookup(name: &str) -> ProvisionResult<u32> {
///     match name {
///         "answer" => Ok(42),
///         other => Err(ProvisionError::TemplateNotFound(other.to_string())),
///     }
/// }
///
/// assert_eq!(lookup("answer"), Ok(42));
/// assert!(lookup("question").is_err());
/// ```
pub type ProvisionResult<T> = Result<T, ProvisionError>;
