//! `EnviarLoteRpsEnvio` XML generation.
//!
//! Renders an assembled [`LoteRps`](crate::core::LoteRps) as the ABRASF
//! batch submission envelope, optionally running a pluggable schema check
//! first.
//!
//! # Example
//!
//! ```no_run
//! use nfse::core::*;
//! use nfse::envio::{self, EnvioBuilder};
//!
//! let lote: LoteRps = todo!(); // build via LoteRpsBuilder
//! let xml = EnvioBuilder::new().lote_rps(lote).to_xml().unwrap();
//! ```

mod builder;
mod validate;
mod xml;
pub(crate) mod xml_utils;

pub use builder::EnvioBuilder;
pub use validate::{AbrasfValidator, NoopValidator, SchemaValidator};
pub use xml::to_envio_xml;
pub use xml_utils::format_valor;

/// ABRASF NFS-e schema namespace, declared on `EnviarLoteRpsEnvio`.
pub const ABRASF_NS: &str = "http://www.abrasf.org.br/nfse.xsd";
