use thiserror::Error;

/// Errors that can occur while rendering a batch envelope.
///
/// Builders themselves never fail; every check is deferred to render time
/// so that error handling is centralized in one place.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NfseError {
    /// A structurally required node is absent (e.g. no `LoteRps` attached).
    #[error("missing required data: {0}")]
    MissingData(String),

    /// The assembled document violates the schema rules. Carries every
    /// violation found, not just the first.
    #[error("schema validation failed: {}", join_errors(.0))]
    SchemaValidation(Vec<ValidationError>),

    /// XML serialization error.
    #[error("XML error: {0}")]
    Xml(String),

    /// RPS number sequencing error.
    #[error("numbering error: {0}")]
    Numbering(String),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "rps[0].prestador.cnpj").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
