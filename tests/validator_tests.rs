//! Validation engine behavior: default engine, no-op substitution, and the
//! error taxonomy surfaced by `EnvioBuilder::to_xml`.

#![cfg(feature = "envio")]

use nfse::core::*;
use nfse::envio::{EnvioBuilder, NoopValidator, SchemaValidator};
use rust_decimal_macros::dec;

fn valid_lote() -> LoteRps {
    LoteRpsBuilder::new()
        .cnpj("00000000000000")
        .numero_lote(1)
        .add_rps(
            RpsBuilder::new()
                .numero(1)
                .inf_id("r1")
                .servico(
                    ServicoBuilder::new()
                        .valor_servicos(dec!(100))
                        .item_lista_servico("1")
                        .exigibilidade_iss(ExigibilidadeIss::Exigivel)
                        .codigo_municipio(123)
                        .discriminacao("Test")
                        .build(),
                )
                .prestador(PrestadorBuilder::new().cnpj("12312312312312").build())
                .tomador(
                    TomadorBuilder::new()
                        .cpf("00000000000")
                        .endereco(
                            EnderecoBuilder::new()
                                .endereco("Rua")
                                .numero("1")
                                .bairro("Bairro")
                                .codigo_municipio(321)
                                .uf("ES")
                                .cep("29111111")
                                .build(),
                        )
                        .build(),
                )
                .build(),
        )
        .build()
}

#[test]
fn default_validator_accepts_complete_batch() {
    assert!(EnvioBuilder::new().lote_rps(valid_lote()).to_xml().is_ok());
}

#[test]
fn default_validator_rejects_incomplete_batch() {
    let lote = LoteRpsBuilder::new().cnpj("123").build();
    let err = EnvioBuilder::new().lote_rps(lote).to_xml().unwrap_err();

    match err {
        NfseError::SchemaValidation(violations) => {
            assert!(violations.iter().any(|v| v.field == "cnpj"));
            assert!(violations.iter().any(|v| v.field == "numero_lote"));
            assert!(violations.iter().any(|v| v.field == "lista_rps"));
        }
        other => panic!("expected SchemaValidation, got {other:?}"),
    }
}

#[test]
fn validation_failure_produces_no_output() {
    // An incomplete tree with validation on must fail before rendering;
    // the same tree renders fine once validation is off.
    let lote = LoteRpsBuilder::new().cnpj("123").build();
    assert!(
        EnvioBuilder::new()
            .lote_rps(lote.clone())
            .to_xml()
            .is_err()
    );
    assert!(
        EnvioBuilder::new()
            .lote_rps(lote)
            .disable_validation()
            .to_xml()
            .is_ok()
    );
}

#[test]
fn noop_validator_accepts_incomplete_batch() {
    let lote = LoteRpsBuilder::new().cnpj("123").build();
    let xml = EnvioBuilder::new()
        .lote_rps(lote)
        .validator(Box::new(NoopValidator))
        .to_xml()
        .unwrap();

    assert!(xml.contains("<Cnpj>123</Cnpj>"));
}

#[test]
fn noop_validator_still_requires_a_batch() {
    // Swapping the engine does not bypass the structural requirement for a
    // batch node; only disabling validation does.
    let err = EnvioBuilder::new()
        .validator(Box::new(NoopValidator))
        .to_xml()
        .unwrap_err();
    assert!(matches!(err, NfseError::MissingData(_)));
}

#[test]
fn custom_validator_violations_surface_in_error() {
    struct RejectAll;
    impl SchemaValidator for RejectAll {
        fn validate(&self, _lote: &LoteRps) -> Vec<ValidationError> {
            vec![ValidationError::new("lote", "rejected by policy")]
        }
    }

    let err = EnvioBuilder::new()
        .lote_rps(valid_lote())
        .validator(Box::new(RejectAll))
        .to_xml()
        .unwrap_err();

    assert!(err.to_string().contains("rejected by policy"));
}

#[test]
fn malformed_fields_detected_only_when_enabled() {
    let mut lote = valid_lote();
    lote.lista_rps[0]
        .prestador
        .as_mut()
        .unwrap()
        .cnpj = Some("12.312.312/3123-12".into());

    let with_validation = EnvioBuilder::new().lote_rps(lote.clone()).to_xml();
    assert!(matches!(
        with_validation,
        Err(NfseError::SchemaValidation(_))
    ));

    // The renderer emits the malformed value verbatim when unchecked.
    let xml = EnvioBuilder::new()
        .lote_rps(lote)
        .disable_validation()
        .to_xml()
        .unwrap();
    assert!(xml.contains("<Cnpj>12.312.312/3123-12</Cnpj>"));
}
