use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use super::types::*;

/// Builder for a [`LoteRps`] batch.
///
/// Setters never validate; every check is deferred to render time so that
/// partial documents can be assembled and inspected. `build()` borrows the
/// builder, so one builder can mint several batches sharing the same
/// partial state.
///
/// ```
/// use nfse::core::*;
/// use rust_decimal_macros::dec;
///
/// let rps = RpsBuilder::new()
///     .numero(1)
///     .inf_id("rps1")
///     .servico(
///         ServicoBuilder::new()
///             .valor_servicos(dec!(214.41))
///             .item_lista_servico("1")
///             .exigibilidade_iss(ExigibilidadeIss::Exigivel)
///             .codigo_municipio(3550308)
///             .discriminacao("Consultoria")
///             .build(),
///     )
///     .prestador(PrestadorBuilder::new().cnpj("12312312312312").build())
///     .tomador(
///         TomadorBuilder::new()
///             .cpf("00000000000")
///             .endereco(
///                 EnderecoBuilder::new()
///                     .endereco("Rua A")
///                     .numero("1")
///                     .bairro("Centro")
///                     .codigo_municipio(3550308)
///                     .uf("SP")
///                     .cep("01001000")
///                     .build(),
///             )
///             .build(),
///     )
///     .build();
///
/// let lote = LoteRpsBuilder::new()
///     .cnpj("00000000000000")
///     .numero_lote(1)
///     .add_rps(rps)
///     .build();
/// assert_eq!(lote.quantidade_rps(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LoteRpsBuilder {
    id: Option<String>,
    cnpj: Option<String>,
    inscricao_municipal: Option<String>,
    numero_lote: Option<u64>,
    lista_rps: Vec<Rps>,
}

impl LoteRpsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Explicit `Id` attribute for the `LoteRps` element.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn cnpj(mut self, cnpj: impl Into<String>) -> Self {
        self.cnpj = Some(cnpj.into());
        self
    }

    pub fn inscricao_municipal(mut self, im: impl Into<String>) -> Self {
        self.inscricao_municipal = Some(im.into());
        self
    }

    pub fn numero_lote(mut self, numero: u64) -> Self {
        self.numero_lote = Some(numero);
        self
    }

    /// Append one RPS. Order is preserved and reflected in the output;
    /// appending the same RPS twice yields two entries.
    pub fn add_rps(mut self, rps: Rps) -> Self {
        self.lista_rps.push(rps);
        self
    }

    /// Append several RPS at once.
    pub fn add_all_rps(mut self, rps: impl IntoIterator<Item = Rps>) -> Self {
        self.lista_rps.extend(rps);
        self
    }

    /// Snapshot the current state into an immutable [`LoteRps`].
    pub fn build(&self) -> LoteRps {
        LoteRps {
            id: self.id.clone(),
            cnpj: self.cnpj.clone(),
            inscricao_municipal: self.inscricao_municipal.clone(),
            numero_lote: self.numero_lote,
            lista_rps: self.lista_rps.clone(),
        }
    }
}

/// Builder for an [`Rps`]. Status defaults to [`RpsStatus::Normal`].
#[derive(Debug, Clone, Default)]
pub struct RpsBuilder {
    inf_id: Option<String>,
    numero: Option<u64>,
    serie: Option<String>,
    tipo: Option<RpsTipo>,
    data_emissao: Option<NaiveDateTime>,
    optante_simples_nacional: Option<SimNao>,
    incentivador_cultural: Option<SimNao>,
    status: RpsStatus,
    servico: Option<Servico>,
    prestador: Option<Prestador>,
    tomador: Option<Tomador>,
}

impl RpsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// `Id` attribute of the `InfRps` element.
    pub fn inf_id(mut self, id: impl Into<String>) -> Self {
        self.inf_id = Some(id.into());
        self
    }

    pub fn numero(mut self, numero: u64) -> Self {
        self.numero = Some(numero);
        self
    }

    pub fn serie(mut self, serie: impl Into<String>) -> Self {
        self.serie = Some(serie.into());
        self
    }

    pub fn tipo(mut self, tipo: RpsTipo) -> Self {
        self.tipo = Some(tipo);
        self
    }

    pub fn data_emissao(mut self, data: NaiveDateTime) -> Self {
        self.data_emissao = Some(data);
        self
    }

    pub fn optante_simples_nacional(mut self, v: SimNao) -> Self {
        self.optante_simples_nacional = Some(v);
        self
    }

    pub fn incentivador_cultural(mut self, v: SimNao) -> Self {
        self.incentivador_cultural = Some(v);
        self
    }

    pub fn status(mut self, status: RpsStatus) -> Self {
        self.status = status;
        self
    }

    /// Mark the RPS as cancelled (`Status` code 2).
    pub fn cancelado(mut self) -> Self {
        self.status = RpsStatus::Cancelado;
        self
    }

    pub fn servico(mut self, servico: Servico) -> Self {
        self.servico = Some(servico);
        self
    }

    pub fn prestador(mut self, prestador: Prestador) -> Self {
        self.prestador = Some(prestador);
        self
    }

    pub fn tomador(mut self, tomador: Tomador) -> Self {
        self.tomador = Some(tomador);
        self
    }

    /// Snapshot the current state into an immutable [`Rps`]. The builder
    /// stays usable; calling `build()` twice yields two independent,
    /// identical documents.
    pub fn build(&self) -> Rps {
        Rps {
            inf_id: self.inf_id.clone(),
            numero: self.numero,
            serie: self.serie.clone(),
            tipo: self.tipo,
            data_emissao: self.data_emissao,
            optante_simples_nacional: self.optante_simples_nacional,
            incentivador_cultural: self.incentivador_cultural,
            status: self.status,
            servico: self.servico.clone(),
            prestador: self.prestador.clone(),
            tomador: self.tomador.clone(),
        }
    }
}

/// Builder for a [`Servico`].
#[derive(Debug, Clone, Default)]
pub struct ServicoBuilder {
    valores: Valores,
    iss_retido: Option<SimNao>,
    item_lista_servico: Option<String>,
    codigo_cnae: Option<u32>,
    discriminacao: Option<String>,
    codigo_municipio: Option<u32>,
    exigibilidade_iss: Option<ExigibilidadeIss>,
    numero_processo: Option<String>,
}

impl ServicoBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn valor_servicos(mut self, valor: Decimal) -> Self {
        self.valores.valor_servicos = Some(valor);
        self
    }

    pub fn valor_deducoes(mut self, valor: Decimal) -> Self {
        self.valores.valor_deducoes = Some(valor);
        self
    }

    pub fn valor_pis(mut self, valor: Decimal) -> Self {
        self.valores.valor_pis = Some(valor);
        self
    }

    pub fn valor_cofins(mut self, valor: Decimal) -> Self {
        self.valores.valor_cofins = Some(valor);
        self
    }

    pub fn valor_inss(mut self, valor: Decimal) -> Self {
        self.valores.valor_inss = Some(valor);
        self
    }

    pub fn valor_ir(mut self, valor: Decimal) -> Self {
        self.valores.valor_ir = Some(valor);
        self
    }

    pub fn valor_csll(mut self, valor: Decimal) -> Self {
        self.valores.valor_csll = Some(valor);
        self
    }

    pub fn valor_iss(mut self, valor: Decimal) -> Self {
        self.valores.valor_iss = Some(valor);
        self
    }

    pub fn aliquota(mut self, aliquota: Decimal) -> Self {
        self.valores.aliquota = Some(aliquota);
        self
    }

    pub fn iss_retido(mut self, retido: SimNao) -> Self {
        self.iss_retido = Some(retido);
        self
    }

    pub fn item_lista_servico(mut self, item: impl Into<String>) -> Self {
        self.item_lista_servico = Some(item.into());
        self
    }

    pub fn codigo_cnae(mut self, cnae: u32) -> Self {
        self.codigo_cnae = Some(cnae);
        self
    }

    pub fn discriminacao(mut self, texto: impl Into<String>) -> Self {
        self.discriminacao = Some(texto.into());
        self
    }

    pub fn codigo_municipio(mut self, codigo: u32) -> Self {
        self.codigo_municipio = Some(codigo);
        self
    }

    pub fn exigibilidade_iss(mut self, exigibilidade: ExigibilidadeIss) -> Self {
        self.exigibilidade_iss = Some(exigibilidade);
        self
    }

    pub fn numero_processo(mut self, numero: impl Into<String>) -> Self {
        self.numero_processo = Some(numero.into());
        self
    }

    pub fn build(&self) -> Servico {
        Servico {
            valores: self.valores.clone(),
            iss_retido: self.iss_retido,
            item_lista_servico: self.item_lista_servico.clone(),
            codigo_cnae: self.codigo_cnae,
            discriminacao: self.discriminacao.clone(),
            codigo_municipio: self.codigo_municipio,
            exigibilidade_iss: self.exigibilidade_iss,
            numero_processo: self.numero_processo.clone(),
        }
    }
}

/// Builder for a [`Prestador`].
#[derive(Debug, Clone, Default)]
pub struct PrestadorBuilder {
    cnpj: Option<String>,
    inscricao_municipal: Option<String>,
}

impl PrestadorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cnpj(mut self, cnpj: impl Into<String>) -> Self {
        self.cnpj = Some(cnpj.into());
        self
    }

    pub fn inscricao_municipal(mut self, im: impl Into<String>) -> Self {
        self.inscricao_municipal = Some(im.into());
        self
    }

    pub fn build(&self) -> Prestador {
        Prestador {
            cnpj: self.cnpj.clone(),
            inscricao_municipal: self.inscricao_municipal.clone(),
        }
    }
}

/// Builder for a [`Tomador`]. `cpf` and `cnpj` are mutually exclusive;
/// the last one set wins.
#[derive(Debug, Clone, Default)]
pub struct TomadorBuilder {
    cpf_cnpj: Option<CpfCnpj>,
    inscricao_municipal: Option<String>,
    razao_social: Option<String>,
    endereco: Option<Endereco>,
    contato: Option<Contato>,
}

impl TomadorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cpf(mut self, cpf: impl Into<String>) -> Self {
        self.cpf_cnpj = Some(CpfCnpj::Cpf(cpf.into()));
        self
    }

    pub fn cnpj(mut self, cnpj: impl Into<String>) -> Self {
        self.cpf_cnpj = Some(CpfCnpj::Cnpj(cnpj.into()));
        self
    }

    pub fn inscricao_municipal(mut self, im: impl Into<String>) -> Self {
        self.inscricao_municipal = Some(im.into());
        self
    }

    pub fn razao_social(mut self, nome: impl Into<String>) -> Self {
        self.razao_social = Some(nome.into());
        self
    }

    pub fn endereco(mut self, endereco: Endereco) -> Self {
        self.endereco = Some(endereco);
        self
    }

    pub fn contato(mut self, contato: Contato) -> Self {
        self.contato = Some(contato);
        self
    }

    pub fn build(&self) -> Tomador {
        Tomador {
            cpf_cnpj: self.cpf_cnpj.clone(),
            inscricao_municipal: self.inscricao_municipal.clone(),
            razao_social: self.razao_social.clone(),
            endereco: self.endereco.clone(),
            contato: self.contato.clone(),
        }
    }
}

/// Builder for an [`Endereco`].
#[derive(Debug, Clone, Default)]
pub struct EnderecoBuilder {
    endereco: Option<String>,
    numero: Option<String>,
    complemento: Option<String>,
    bairro: Option<String>,
    codigo_municipio: Option<u32>,
    uf: Option<String>,
    cep: Option<String>,
}

impl EnderecoBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Street name (the `Endereco` child element).
    pub fn endereco(mut self, rua: impl Into<String>) -> Self {
        self.endereco = Some(rua.into());
        self
    }

    pub fn numero(mut self, numero: impl Into<String>) -> Self {
        self.numero = Some(numero.into());
        self
    }

    /// Setting an empty string emits an empty `Complemento` element;
    /// never calling this omits the element entirely.
    pub fn complemento(mut self, complemento: impl Into<String>) -> Self {
        self.complemento = Some(complemento.into());
        self
    }

    pub fn bairro(mut self, bairro: impl Into<String>) -> Self {
        self.bairro = Some(bairro.into());
        self
    }

    pub fn codigo_municipio(mut self, codigo: u32) -> Self {
        self.codigo_municipio = Some(codigo);
        self
    }

    pub fn uf(mut self, uf: impl Into<String>) -> Self {
        self.uf = Some(uf.into());
        self
    }

    pub fn cep(mut self, cep: impl Into<String>) -> Self {
        self.cep = Some(cep.into());
        self
    }

    pub fn build(&self) -> Endereco {
        Endereco {
            endereco: self.endereco.clone(),
            numero: self.numero.clone(),
            complemento: self.complemento.clone(),
            bairro: self.bairro.clone(),
            codigo_municipio: self.codigo_municipio,
            uf: self.uf.clone(),
            cep: self.cep.clone(),
        }
    }
}

/// Builder for a [`Contato`].
#[derive(Debug, Clone, Default)]
pub struct ContatoBuilder {
    telefone: Option<String>,
    email: Option<String>,
}

impl ContatoBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn telefone(mut self, telefone: impl Into<String>) -> Self {
        self.telefone = Some(telefone.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn build(&self) -> Contato {
        Contato {
            telefone: self.telefone.clone(),
            email: self.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn builder_snapshots_are_independent() {
        let builder = RpsBuilder::new().numero(7).cancelado();
        let a = builder.build();
        let b = builder.build();
        assert_eq!(a.numero, Some(7));
        assert_eq!(b.numero, Some(7));
        assert_eq!(a.status, RpsStatus::Cancelado);
        assert_eq!(b.status, RpsStatus::Cancelado);
    }

    #[test]
    fn later_mutation_does_not_alter_built_entity() {
        let builder = ServicoBuilder::new().valor_servicos(dec!(100));
        let first = builder.build();
        let second = builder.valor_servicos(dec!(200)).build();
        assert_eq!(first.valores.valor_servicos, Some(dec!(100)));
        assert_eq!(second.valores.valor_servicos, Some(dec!(200)));
    }

    #[test]
    fn cpf_cnpj_last_write_wins() {
        let tomador = TomadorBuilder::new()
            .cpf("00000000000")
            .cnpj("12312312312312")
            .build();
        assert_eq!(
            tomador.cpf_cnpj,
            Some(CpfCnpj::Cnpj("12312312312312".into()))
        );
    }

    #[test]
    fn add_all_rps_preserves_order() {
        let r1 = RpsBuilder::new().numero(1).build();
        let r2 = RpsBuilder::new().numero(2).build();
        let lote = LoteRpsBuilder::new().add_all_rps([r1, r2]).build();
        assert_eq!(lote.lista_rps[0].numero, Some(1));
        assert_eq!(lote.lista_rps[1].numero, Some(2));
    }
}
