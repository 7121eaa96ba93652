use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal_macros::dec;

use nfse::core::*;
use nfse::envio::EnvioBuilder;

fn bench_rps(numero: u64) -> Rps {
    RpsBuilder::new()
        .numero(numero)
        .inf_id(format!("rps{numero}"))
        .servico(
            ServicoBuilder::new()
                .valor_servicos(dec!(1500))
                .item_lista_servico("1.07")
                .exigibilidade_iss(ExigibilidadeIss::Exigivel)
                .codigo_municipio(3550308)
                .discriminacao("Desenvolvimento de software sob demanda")
                .build(),
        )
        .prestador(PrestadorBuilder::new().cnpj("12312312312312").build())
        .tomador(
            TomadorBuilder::new()
                .cnpj("00000000000191")
                .razao_social("Empresa Exemplo Ltda")
                .endereco(
                    EnderecoBuilder::new()
                        .endereco("Rua das Flores")
                        .numero("100")
                        .bairro("Centro")
                        .codigo_municipio(3550308)
                        .uf("SP")
                        .cep("01001000")
                        .build(),
                )
                .build(),
        )
        .build()
}

fn build_lote(count: u64) -> LoteRps {
    let mut builder = LoteRpsBuilder::new().cnpj("00000000000000").numero_lote(1);
    for i in 1..=count {
        builder = builder.add_rps(bench_rps(i));
    }
    builder.build()
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_lote_2_rps", |b| b.iter(|| black_box(build_lote(2))));
    c.bench_function("build_lote_50_rps", |b| {
        b.iter(|| black_box(build_lote(50)))
    });
}

fn bench_render(c: &mut Criterion) {
    let small = build_lote(2);
    let large = build_lote(50);

    c.bench_function("render_2_rps", |b| {
        b.iter(|| {
            EnvioBuilder::new()
                .lote_rps(black_box(small.clone()))
                .to_xml()
                .unwrap()
        })
    });
    c.bench_function("render_50_rps", |b| {
        b.iter(|| {
            EnvioBuilder::new()
                .lote_rps(black_box(large.clone()))
                .to_xml()
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_build, bench_render);
criterion_main!(benches);
