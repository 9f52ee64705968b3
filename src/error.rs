//! Error types for schema loading and instance validation.
use crate::type_tag::TypeTag;
use std::fmt;

/// An error that happens while a schema is being loaded into a [`crate::SchemaStore`].
///
/// These are fatal: no validator can be produced once one of these is hit.
#[derive(Debug, PartialEq)]
pub enum CompilationError {
    /// A pointer referenced by the schema (directly, or via `definitions`) does not resolve.
    PointerNotFound(String),
    /// The value at a pointer is neither a boolean nor an object, so it cannot be a schema.
    SchemaLoadError(String),
    /// A `pattern` or `patternProperties` key failed to compile as a regular expression.
    BadPattern(String),
    /// A pointer was reached again while it was still being compiled.
    CyclicSchema(String),
}

impl std::error::Error for CompilationError {}

impl fmt::Display for CompilationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompilationError::PointerNotFound(pointer) => {
                write!(f, "pointer '{}' does not resolve to a value", pointer)
            }
            CompilationError::SchemaLoadError(pointer) => write!(
                f,
                "value at '{}' is neither a boolean nor an object, so it is not a valid schema",
                pointer
            ),
            CompilationError::BadPattern(pattern) => {
                write!(f, "'{}' is not a valid regular expression", pattern)
            }
            CompilationError::CyclicSchema(pointer) => write!(
                f,
                "pointer '{}' is referenced from within its own compilation",
                pointer
            ),
        }
    }
}

impl From<regex::Error> for CompilationError {
    fn from(error: regex::Error) -> Self {
        CompilationError::BadPattern(error.to_string())
    }
}

/// A single validation failure: where it happened, and why.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// JSON pointer into the instance document, e.g. `#/items/0`.
    pub pointer: String,
    /// Structured cause, for callers that want to match on error category.
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    pub(crate) fn new(pointer: &str, kind: ValidationErrorKind) -> ValidationError {
        ValidationError {
            pointer: pointer.to_string(),
            kind,
        }
    }
}

/// The cause of a [`ValidationError`], grouped by the check that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationErrorKind {
    /// `false` schema: nothing validates against it.
    FalseSchema,
    /// The instance's type is not one of the schema's declared types.
    TypeMismatch { expected: Vec<TypeTag> },
    /// A numeric bound, length, item count, or property count was violated.
    RangeViolation(String),
    /// `multipleOf` was not satisfied.
    MultipleOfViolation { multiple_of: f64 },
    /// A property named in `required` is missing.
    MissingRequired { property: String },
    /// `dependencies` named a sibling property or schema that did not hold.
    DependencyUnmet { property: String },
    /// `contains` had no matching element.
    ContainsUnsatisfied,
    /// `const` did not match.
    ConstMismatch,
    /// `enum` had no matching option.
    EnumMismatch,
    /// `allOf` failed for at least one branch (the branch errors are reported separately,
    /// alongside this marker, by the caller that produced them).
    CombinatorFailure(&'static str),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.pointer)?;
        match &self.kind {
            ValidationErrorKind::FalseSchema => write!(f, "schema is false"),
            ValidationErrorKind::TypeMismatch { expected } => {
                let names: Vec<String> = expected.iter().map(|t| t.to_string()).collect();
                write!(f, "value does not match type(s) {}", names.join(", "))
            }
            ValidationErrorKind::RangeViolation(message) => write!(f, "{}", message),
            ValidationErrorKind::MultipleOfViolation { multiple_of } => {
                write!(f, "value is not a multiple of {}", multiple_of)
            }
            ValidationErrorKind::MissingRequired { property } => {
                write!(f, "'{}' is a required property", property)
            }
            ValidationErrorKind::DependencyUnmet { property } => write!(
                f,
                "dependency for '{}' is not satisfied",
                property
            ),
            ValidationErrorKind::ContainsUnsatisfied => {
                write!(f, "no element matched contains")
            }
            ValidationErrorKind::ConstMismatch => write!(f, "value does not match const"),
            ValidationErrorKind::EnumMismatch => write!(f, "value is not one of enum"),
            ValidationErrorKind::CombinatorFailure(which) => write!(f, "{} failed", which),
        }
    }
}

impl std::error::Error for ValidationError {}

/// A sink that accumulates [`ValidationError`]s during a single validation pass.
///
/// Combinators materialize a fresh `Vec` as a scratch sink to observe whether a branch passed
/// without surfacing its errors to the caller.
pub(crate) type Sink = Vec<ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_pointer() {
        let error = ValidationError::new("#/a", ValidationErrorKind::FalseSchema);
        assert_eq!(error.to_string(), "#/a: schema is false");
    }
}
