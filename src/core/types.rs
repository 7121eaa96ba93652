use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// tcLoteRps: batch of RPS documents — the payload of `EnviarLoteRpsEnvio`.
///
/// The rendered `QuantidadeRps` is always derived from `lista_rps.len()`,
/// never stored, so it cannot drift from the actual list. The same `Rps`
/// value may appear more than once; each occurrence counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoteRps {
    /// `Id` attribute of the `LoteRps` element. Derived from `numero_lote`
    /// at render time when not set explicitly.
    pub id: Option<String>,
    /// `Cnpj`: issuer tax ID, 14 digits.
    pub cnpj: Option<String>,
    /// `InscricaoMunicipal`: issuer municipal registration.
    pub inscricao_municipal: Option<String>,
    /// `NumeroLote`: batch number, sequential per issuer.
    pub numero_lote: Option<u64>,
    /// `ListaRps`: insertion-ordered RPS list.
    pub lista_rps: Vec<Rps>,
}

impl LoteRps {
    /// Number of RPS in the batch — the value rendered as `QuantidadeRps`.
    pub fn quantidade_rps(&self) -> usize {
        self.lista_rps.len()
    }
}

/// tcRps / tcInfRps: one provisional service receipt (Recibo Provisório de
/// Serviços) awaiting conversion into an NFS-e.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rps {
    /// `Id` attribute of the `InfRps` element.
    pub inf_id: Option<String>,
    /// `IdentificacaoRps/Numero`: sequence number, gapless per series.
    pub numero: Option<u64>,
    /// `IdentificacaoRps/Serie`.
    pub serie: Option<String>,
    /// `IdentificacaoRps/Tipo`.
    pub tipo: Option<RpsTipo>,
    /// `DataEmissao`: issue timestamp.
    pub data_emissao: Option<NaiveDateTime>,
    /// `OptanteSimplesNacional`: issuer enrolled in Simples Nacional.
    pub optante_simples_nacional: Option<SimNao>,
    /// `IncentivadorCultural`.
    pub incentivador_cultural: Option<SimNao>,
    /// `Status`.
    pub status: RpsStatus,
    /// `Servico`.
    pub servico: Option<Servico>,
    /// `Prestador`.
    pub prestador: Option<Prestador>,
    /// `Tomador`.
    pub tomador: Option<Tomador>,
}

/// tcDadosServico: the service being invoiced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Servico {
    /// `Valores`: monetary breakdown.
    pub valores: Valores,
    /// `IssRetido`: ISS withheld at source.
    pub iss_retido: Option<SimNao>,
    /// `ItemListaServico`: item code from the LC 116/2003 service list.
    pub item_lista_servico: Option<String>,
    /// `CodigoCnae`: CNAE activity code.
    pub codigo_cnae: Option<u32>,
    /// `Discriminacao`: free-text service description.
    pub discriminacao: Option<String>,
    /// `CodigoMunicipio`: IBGE code of the municipality where the service
    /// was provided.
    pub codigo_municipio: Option<u32>,
    /// `ExigibilidadeISS`.
    pub exigibilidade_iss: Option<ExigibilidadeIss>,
    /// `NumeroProcesso`: judicial/administrative process number backing a
    /// suspended exigibility.
    pub numero_processo: Option<String>,
}

/// tcValores: monetary amounts of a service. All fields are rendered with
/// exactly two decimal places.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Valores {
    /// `ValorServicos`: gross service value.
    pub valor_servicos: Option<Decimal>,
    /// `ValorDeducoes`.
    pub valor_deducoes: Option<Decimal>,
    /// `ValorPis`.
    pub valor_pis: Option<Decimal>,
    /// `ValorCofins`.
    pub valor_cofins: Option<Decimal>,
    /// `ValorInss`.
    pub valor_inss: Option<Decimal>,
    /// `ValorIr`.
    pub valor_ir: Option<Decimal>,
    /// `ValorCsll`.
    pub valor_csll: Option<Decimal>,
    /// `ValorIss`.
    pub valor_iss: Option<Decimal>,
    /// `Aliquota`: ISS rate.
    pub aliquota: Option<Decimal>,
}

/// tcIdentificacaoPrestador: the service provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Prestador {
    /// `Cnpj`: 14-digit tax ID.
    pub cnpj: Option<String>,
    /// `InscricaoMunicipal`.
    pub inscricao_municipal: Option<String>,
}

/// tcDadosTomador: the service taker.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tomador {
    /// `IdentificacaoTomador/CpfCnpj`.
    pub cpf_cnpj: Option<CpfCnpj>,
    /// `IdentificacaoTomador/InscricaoMunicipal`.
    pub inscricao_municipal: Option<String>,
    /// `RazaoSocial`.
    pub razao_social: Option<String>,
    /// `Endereco`.
    pub endereco: Option<Endereco>,
    /// `Contato`.
    pub contato: Option<Contato>,
}

/// tcCpfCnpj: exactly one of CPF (natural person, 11 digits) or CNPJ
/// (legal entity, 14 digits).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CpfCnpj {
    Cpf(String),
    Cnpj(String),
}

impl CpfCnpj {
    /// The raw digit string, whichever variant it is.
    pub fn digits(&self) -> &str {
        match self {
            Self::Cpf(d) | Self::Cnpj(d) => d,
        }
    }
}

/// tcEndereco: postal address of the service taker.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Endereco {
    /// `Endereco`: street name.
    pub endereco: Option<String>,
    /// `Numero`.
    pub numero: Option<String>,
    /// `Complemento`. `Some("")` renders an empty element; `None` omits it.
    pub complemento: Option<String>,
    /// `Bairro`: district.
    pub bairro: Option<String>,
    /// `CodigoMunicipio`: IBGE municipality code.
    pub codigo_municipio: Option<u32>,
    /// `Uf`: two-letter state code.
    pub uf: Option<String>,
    /// `Cep`: 8-digit postal code.
    pub cep: Option<String>,
}

/// tcContato: contact information of the service taker.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contato {
    /// `Telefone`.
    pub telefone: Option<String>,
    /// `Email`.
    pub email: Option<String>,
}

/// tsStatusRps — RPS status codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RpsStatus {
    /// 1 — Normal.
    #[default]
    Normal,
    /// 2 — Cancelado.
    Cancelado,
}

impl RpsStatus {
    /// Schema integer code.
    pub fn code(&self) -> u8 {
        match self {
            Self::Normal => 1,
            Self::Cancelado => 2,
        }
    }

    /// Parse from the schema integer code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Normal),
            2 => Some(Self::Cancelado),
            _ => None,
        }
    }
}

/// tsTipoRps — RPS document type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RpsTipo {
    /// 1 — RPS.
    Rps,
    /// 2 — Nota fiscal conjugada (mista).
    NotaFiscalConjugada,
    /// 3 — Cupom.
    Cupom,
}

impl RpsTipo {
    /// Schema integer code.
    pub fn code(&self) -> u8 {
        match self {
            Self::Rps => 1,
            Self::NotaFiscalConjugada => 2,
            Self::Cupom => 3,
        }
    }

    /// Parse from the schema integer code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Rps),
            2 => Some(Self::NotaFiscalConjugada),
            3 => Some(Self::Cupom),
            _ => None,
        }
    }
}

/// tsExigibilidadeISS — ISS exigibility situation codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExigibilidadeIss {
    /// 1 — Exigível.
    Exigivel,
    /// 2 — Não incidência.
    NaoIncidencia,
    /// 3 — Isenção.
    Isencao,
    /// 4 — Exportação.
    Exportacao,
    /// 5 — Imunidade.
    Imunidade,
    /// 6 — Exigibilidade suspensa por decisão judicial.
    SuspensaDecisaoJudicial,
    /// 7 — Exigibilidade suspensa por processo administrativo.
    SuspensaProcessoAdministrativo,
}

impl ExigibilidadeIss {
    /// Schema integer code.
    pub fn code(&self) -> u8 {
        match self {
            Self::Exigivel => 1,
            Self::NaoIncidencia => 2,
            Self::Isencao => 3,
            Self::Exportacao => 4,
            Self::Imunidade => 5,
            Self::SuspensaDecisaoJudicial => 6,
            Self::SuspensaProcessoAdministrativo => 7,
        }
    }

    /// Parse from the schema integer code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Exigivel),
            2 => Some(Self::NaoIncidencia),
            3 => Some(Self::Isencao),
            4 => Some(Self::Exportacao),
            5 => Some(Self::Imunidade),
            6 => Some(Self::SuspensaDecisaoJudicial),
            7 => Some(Self::SuspensaProcessoAdministrativo),
            _ => None,
        }
    }
}

/// tsSimNao — boolean fields encoded as 1 (sim) / 2 (não).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SimNao {
    /// 1 — Sim.
    Sim,
    /// 2 — Não.
    Nao,
}

impl SimNao {
    /// Schema integer code.
    pub fn code(&self) -> u8 {
        match self {
            Self::Sim => 1,
            Self::Nao => 2,
        }
    }

    /// Parse from the schema integer code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Sim),
            2 => Some(Self::Nao),
            _ => None,
        }
    }
}
