use nfse::core::*;
use rust_decimal_macros::dec;

fn endereco() -> Endereco {
    EnderecoBuilder::new()
        .endereco("Rua das Flores")
        .numero("100")
        .bairro("Centro")
        .codigo_municipio(3550308)
        .uf("SP")
        .cep("01001000")
        .build()
}

fn servico() -> Servico {
    ServicoBuilder::new()
        .valor_servicos(dec!(1500))
        .item_lista_servico("1.07")
        .exigibilidade_iss(ExigibilidadeIss::Exigivel)
        .codigo_municipio(3550308)
        .discriminacao("Desenvolvimento de software")
        .build()
}

// --- Entity assembly ---

#[test]
fn full_rps_assembly() {
    let rps = RpsBuilder::new()
        .numero(1)
        .inf_id("rps1")
        .servico(servico())
        .prestador(PrestadorBuilder::new().cnpj("12312312312312").build())
        .tomador(
            TomadorBuilder::new()
                .cnpj("00000000000191")
                .razao_social("Empresa Exemplo Ltda")
                .endereco(endereco())
                .build(),
        )
        .build();

    assert_eq!(rps.numero, Some(1));
    assert_eq!(rps.status, RpsStatus::Normal);
    let servico = rps.servico.unwrap();
    assert_eq!(servico.valores.valor_servicos, Some(dec!(1500)));
    let tomador = rps.tomador.unwrap();
    assert_eq!(
        tomador.cpf_cnpj,
        Some(CpfCnpj::Cnpj("00000000000191".into()))
    );
    assert_eq!(tomador.endereco.unwrap().uf.as_deref(), Some("SP"));
}

#[test]
fn builder_reuse_shares_partial_state() {
    let base = RpsBuilder::new()
        .servico(servico())
        .prestador(PrestadorBuilder::new().cnpj("12312312312312").build());

    let first = base.clone().numero(1).build();
    let second = base.numero(2).build();

    assert_eq!(first.numero, Some(1));
    assert_eq!(second.numero, Some(2));
    assert_eq!(
        first.servico.unwrap().item_lista_servico,
        second.servico.unwrap().item_lista_servico
    );
}

#[test]
fn built_entity_detached_from_builder() {
    let builder = LoteRpsBuilder::new().cnpj("00000000000000");
    let lote = builder.build();
    let bigger = builder.add_rps(RpsBuilder::new().numero(1).build()).build();

    assert_eq!(lote.quantidade_rps(), 0);
    assert_eq!(bigger.quantidade_rps(), 1);
}

#[test]
fn duplicate_rps_count_twice() {
    let rps = RpsBuilder::new().numero(1).build();
    let lote = LoteRpsBuilder::new()
        .cnpj("00000000000000")
        .numero_lote(1)
        .add_all_rps([rps.clone(), rps])
        .build();
    assert_eq!(lote.quantidade_rps(), 2);
}

// --- Structural validation ---

#[test]
fn rps_without_children_collects_every_absence() {
    let lote = LoteRpsBuilder::new()
        .cnpj("00000000000000")
        .numero_lote(1)
        .add_rps(RpsBuilder::new().build())
        .build();
    let errors = validate_lote(&lote);
    let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();

    assert!(fields.contains(&"rps[0].numero"));
    assert!(fields.contains(&"rps[0].servico"));
    assert!(fields.contains(&"rps[0].prestador"));
    assert!(fields.contains(&"rps[0].tomador"));
}

#[test]
fn wrong_length_cpf_reported_with_path() {
    let lote = LoteRpsBuilder::new()
        .cnpj("00000000000000")
        .numero_lote(1)
        .add_rps(
            RpsBuilder::new()
                .numero(1)
                .servico(servico())
                .prestador(PrestadorBuilder::new().cnpj("12312312312312").build())
                .tomador(
                    TomadorBuilder::new()
                        .cpf("123")
                        .endereco(endereco())
                        .build(),
                )
                .build(),
        )
        .build();
    let errors = validate_lote(&lote);

    assert!(
        errors
            .iter()
            .any(|e| e.field == "rps[0].tomador.cpf_cnpj" && e.message.contains("11 digits"))
    );
}

// --- RPS numbering ---

#[test]
fn numbering_feeds_builders() {
    let mut seq = RpsNumberSequence::new("A1");
    let lote = LoteRpsBuilder::new()
        .cnpj("00000000000000")
        .numero_lote(1)
        .add_rps(
            RpsBuilder::new()
                .numero(seq.next_numero())
                .serie(seq.serie())
                .build(),
        )
        .add_rps(
            RpsBuilder::new()
                .numero(seq.next_numero())
                .serie(seq.serie())
                .build(),
        )
        .build();

    assert_eq!(lote.lista_rps[0].numero, Some(1));
    assert_eq!(lote.lista_rps[1].numero, Some(2));
    assert_eq!(seq.peek(), 3);
}
