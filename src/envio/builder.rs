use super::validate::{AbrasfValidator, SchemaValidator};
use super::xml;
use crate::core::{LoteRps, NfseError};

/// Top-level builder for the `EnviarLoteRpsEnvio` submission envelope.
///
/// Attach one batch, optionally tune validation, and render:
///
/// ```
/// use nfse::core::*;
/// use nfse::envio::EnvioBuilder;
///
/// let lote = LoteRpsBuilder::new().cnpj("123").build();
/// let xml = EnvioBuilder::new()
///     .lote_rps(lote)
///     .disable_validation()
///     .to_xml()
///     .unwrap();
/// assert!(xml.contains("<Cnpj>123</Cnpj>"));
/// ```
///
/// With validation enabled (the default), [`to_xml`](Self::to_xml) either
/// returns a complete schema-conformant document or an error — never
/// partial output. With validation disabled, whatever was set is rendered
/// best-effort, which is the escape hatch for inspecting work in progress.
pub struct EnvioBuilder {
    lote: Option<LoteRps>,
    validation_enabled: bool,
    validator: Box<dyn SchemaValidator>,
}

impl Default for EnvioBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvioBuilder {
    /// New envelope with validation enabled and the [`AbrasfValidator`].
    pub fn new() -> Self {
        Self {
            lote: None,
            validation_enabled: true,
            validator: Box::new(AbrasfValidator),
        }
    }

    /// Attach the batch. A previously attached batch is replaced.
    pub fn lote_rps(mut self, lote: LoteRps) -> Self {
        self.lote = Some(lote);
        self
    }

    /// Skip schema validation on subsequent [`to_xml`](Self::to_xml) calls.
    pub fn disable_validation(mut self) -> Self {
        self.validation_enabled = false;
        self
    }

    /// Swap the validation engine (e.g. for a municipality-specific
    /// variant, or [`NoopValidator`](super::NoopValidator) in tests).
    pub fn validator(mut self, validator: Box<dyn SchemaValidator>) -> Self {
        self.validator = validator;
        self
    }

    /// Render the envelope as a UTF-8 XML string with declaration.
    ///
    /// With validation enabled this fails with
    /// [`NfseError::MissingData`] when no batch is attached, or
    /// [`NfseError::SchemaValidation`] carrying every violation the
    /// validator found. The call is a pure computation: repeated calls on
    /// the same builder state yield the same output.
    pub fn to_xml(&self) -> Result<String, NfseError> {
        if self.validation_enabled {
            let lote = self
                .lote
                .as_ref()
                .ok_or_else(|| NfseError::MissingData("no LoteRps attached to envelope".into()))?;
            let violations = self.validator.validate(lote);
            if !violations.is_empty() {
                return Err(NfseError::SchemaValidation(violations));
            }
        }
        xml::render_envio(self.lote.as_ref())
    }
}
