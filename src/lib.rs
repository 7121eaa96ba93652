//! # nfse
//!
//! Brazilian NFS-e (Nota Fiscal de Serviços eletrônica) e-invoicing
//! library: assemble RPS batches through fluent builders and render the
//! ABRASF `EnviarLoteRpsEnvio` submission envelope as schema-conformant
//! XML.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating
//! point. Builders defer every check to render time, so partial documents
//! can be assembled freely and inspected with validation disabled.
//!
//! ## Quick Start
//!
//! ```rust
//! use nfse::core::*;
//! use nfse::envio::EnvioBuilder;
//! use rust_decimal_macros::dec;
//!
//! let rps = RpsBuilder::new()
//!     .numero(1)
//!     .inf_id("rps1")
//!     .servico(
//!         ServicoBuilder::new()
//!             .valor_servicos(dec!(214.41))
//!             .item_lista_servico("1")
//!             .exigibilidade_iss(ExigibilidadeIss::Exigivel)
//!             .codigo_municipio(3550308)
//!             .discriminacao("Consultoria")
//!             .build(),
//!     )
//!     .prestador(PrestadorBuilder::new().cnpj("12312312312312").build())
//!     .tomador(
//!         TomadorBuilder::new()
//!             .cpf("00000000000")
//!             .endereco(
//!                 EnderecoBuilder::new()
//!                     .endereco("Rua A")
//!                     .numero("1")
//!                     .bairro("Centro")
//!                     .codigo_municipio(3550308)
//!                     .uf("SP")
//!                     .cep("01001000")
//!                     .build(),
//!             )
//!             .build(),
//!     )
//!     .build();
//!
//! let lote = LoteRpsBuilder::new()
//!     .cnpj("00000000000000")
//!     .numero_lote(1)
//!     .add_rps(rps)
//!     .build();
//!
//! let xml = EnvioBuilder::new().lote_rps(lote).to_xml().unwrap();
//! assert!(xml.starts_with("<?xml"));
//! assert!(xml.contains("<ValorServicos>214.41</ValorServicos>"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Entity model, builders, structural validation, RPS numbering |
//! | `envio` (default) | `EnviarLoteRpsEnvio` XML generation and the validator plug point |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "envio")]
pub mod envio;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
