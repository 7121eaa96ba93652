use super::error::ValidationError;
use super::types::*;
use super::uf::is_known_uf;

/// Maximum number of RPS a single batch may carry (ABRASF `QuantidadeRps`).
pub const MAX_RPS_PER_LOTE: usize = 50;

/// Validate an assembled batch against the structural rules of the ABRASF
/// schema. Returns all violations found (not just the first).
///
/// This mirrors what the official XSD rejects: missing required elements,
/// wrong-length tax IDs, non-digit strings where digits are mandated,
/// unknown UF codes. Formatting of values the renderer emits verbatim
/// (e.g. a CNPJ with punctuation) is caught here, not at build time.
pub fn validate_lote(lote: &LoteRps) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    match &lote.cnpj {
        None => errors.push(ValidationError::new("cnpj", "issuer CNPJ is required")),
        Some(cnpj) => validate_digits(cnpj, 14, "cnpj", &mut errors),
    }

    if lote.numero_lote.is_none() {
        errors.push(ValidationError::new("numero_lote", "batch number is required"));
    }

    if lote.lista_rps.is_empty() {
        errors.push(ValidationError::new(
            "lista_rps",
            "batch must contain at least one RPS",
        ));
    } else if lote.lista_rps.len() > MAX_RPS_PER_LOTE {
        errors.push(ValidationError::new(
            "lista_rps",
            format!("batch must not contain more than {MAX_RPS_PER_LOTE} RPS"),
        ));
    }

    for (i, rps) in lote.lista_rps.iter().enumerate() {
        validate_rps(rps, i, &mut errors);
    }

    errors
}

fn validate_rps(rps: &Rps, index: usize, errors: &mut Vec<ValidationError>) {
    let path = |field: &str| format!("rps[{index}].{field}");

    if rps.numero.is_none() {
        errors.push(ValidationError::new(path("numero"), "RPS number is required"));
    }

    match &rps.servico {
        None => errors.push(ValidationError::new(path("servico"), "service is required")),
        Some(servico) => validate_servico(servico, index, errors),
    }

    match &rps.prestador {
        None => errors.push(ValidationError::new(
            path("prestador"),
            "provider is required",
        )),
        Some(prestador) => match &prestador.cnpj {
            None => errors.push(ValidationError::new(
                path("prestador.cnpj"),
                "provider CNPJ is required",
            )),
            Some(cnpj) => validate_digits(cnpj, 14, &path("prestador.cnpj"), errors),
        },
    }

    match &rps.tomador {
        None => errors.push(ValidationError::new(path("tomador"), "taker is required")),
        Some(tomador) => validate_tomador(tomador, index, errors),
    }
}

fn validate_servico(servico: &Servico, index: usize, errors: &mut Vec<ValidationError>) {
    let path = |field: &str| format!("rps[{index}].servico.{field}");

    if servico.valores.valor_servicos.is_none() {
        errors.push(ValidationError::new(
            path("valores.valor_servicos"),
            "service value is required",
        ));
    }
    if servico
        .item_lista_servico
        .as_ref()
        .is_none_or(|i| i.trim().is_empty())
    {
        errors.push(ValidationError::new(
            path("item_lista_servico"),
            "service list item code is required",
        ));
    }
    if servico
        .discriminacao
        .as_ref()
        .is_none_or(|d| d.trim().is_empty())
    {
        errors.push(ValidationError::new(
            path("discriminacao"),
            "service description is required",
        ));
    }
    if servico.codigo_municipio.is_none() {
        errors.push(ValidationError::new(
            path("codigo_municipio"),
            "municipality code is required",
        ));
    }
    if servico.exigibilidade_iss.is_none() {
        errors.push(ValidationError::new(
            path("exigibilidade_iss"),
            "ISS exigibility is required",
        ));
    }
}

fn validate_tomador(tomador: &Tomador, index: usize, errors: &mut Vec<ValidationError>) {
    let path = |field: &str| format!("rps[{index}].tomador.{field}");

    match &tomador.cpf_cnpj {
        None => errors.push(ValidationError::new(
            path("cpf_cnpj"),
            "taker CPF or CNPJ is required",
        )),
        Some(CpfCnpj::Cpf(cpf)) => validate_digits(cpf, 11, &path("cpf_cnpj"), errors),
        Some(CpfCnpj::Cnpj(cnpj)) => validate_digits(cnpj, 14, &path("cpf_cnpj"), errors),
    }

    match &tomador.endereco {
        None => errors.push(ValidationError::new(
            path("endereco"),
            "taker address is required",
        )),
        Some(endereco) => validate_endereco(endereco, index, errors),
    }
}

fn validate_endereco(endereco: &Endereco, index: usize, errors: &mut Vec<ValidationError>) {
    let path = |field: &str| format!("rps[{index}].tomador.endereco.{field}");

    if endereco.endereco.as_ref().is_none_or(|e| e.trim().is_empty()) {
        errors.push(ValidationError::new(
            path("endereco"),
            "street is required",
        ));
    }
    if endereco.bairro.as_ref().is_none_or(|b| b.trim().is_empty()) {
        errors.push(ValidationError::new(path("bairro"), "district is required"));
    }
    if endereco.codigo_municipio.is_none() {
        errors.push(ValidationError::new(
            path("codigo_municipio"),
            "municipality code is required",
        ));
    }
    match &endereco.uf {
        None => errors.push(ValidationError::new(path("uf"), "UF is required")),
        Some(uf) if !is_known_uf(uf) => errors.push(ValidationError::new(
            path("uf"),
            format!("'{uf}' is not a known UF code"),
        )),
        _ => {}
    }
    match &endereco.cep {
        None => errors.push(ValidationError::new(path("cep"), "CEP is required")),
        Some(cep) => validate_digits(cep, 8, &path("cep"), errors),
    }
}

fn validate_digits(value: &str, len: usize, field: &str, errors: &mut Vec<ValidationError>) {
    if value.len() != len || !value.bytes().all(|b| b.is_ascii_digit()) {
        errors.push(ValidationError::new(
            field,
            format!("must be exactly {len} digits, got '{value}'"),
        ));
    }
}
