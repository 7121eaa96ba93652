use crate::core::{LoteRps, ValidationError, validate_lote};

/// Pluggable schema-conformance check run before rendering.
///
/// Implementations inspect the assembled document tree and return every
/// violation found; an empty vector means the batch conforms. The check is
/// pure — it never mutates the document. The envelope builder decides
/// whether to invoke it based on its validation flag.
pub trait SchemaValidator {
    fn validate(&self, lote: &LoteRps) -> Vec<ValidationError>;
}

/// Default validator: structural rules distilled from the ABRASF schema
/// (required elements, tax-ID lengths, digit-only formats, UF codes, batch
/// size limits). See [`validate_lote`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AbrasfValidator;

impl SchemaValidator for AbrasfValidator {
    fn validate(&self, lote: &LoteRps) -> Vec<ValidationError> {
        validate_lote(lote)
    }
}

/// Validator that accepts any document. Useful in tests and for callers
/// that run their own XSD toolchain downstream.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopValidator;

impl SchemaValidator for NoopValidator {
    fn validate(&self, _lote: &LoteRps) -> Vec<ValidationError> {
        Vec::new()
    }
}
