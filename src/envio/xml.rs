use super::ABRASF_NS;
use super::xml_utils::{XmlResult, XmlWriter};
use crate::core::*;

/// Render a batch as a complete `EnviarLoteRpsEnvio` document.
///
/// The projection is deterministic and best-effort: optional fields that
/// were never set are omitted entirely, fields set to an empty string are
/// emitted as empty elements, and scalar values are written verbatim except
/// for monetary amounts (fixed two-decimal formatting) and enums (schema
/// integer codes). No validation happens here — run a
/// [`SchemaValidator`](super::SchemaValidator) first, or use
/// [`EnvioBuilder`](super::EnvioBuilder) which wires both together.
pub fn to_envio_xml(lote: &LoteRps) -> XmlResult {
    render_envio(Some(lote))
}

pub(crate) fn render_envio(lote: Option<&LoteRps>) -> XmlResult {
    let mut w = XmlWriter::new()?;

    w.start_element_with_attrs("EnviarLoteRpsEnvio", &[("xmlns", ABRASF_NS)])?;
    if let Some(lote) = lote {
        write_lote(&mut w, lote)?;
    }
    w.end_element("EnviarLoteRpsEnvio")?;

    w.into_string()
}

fn write_lote(w: &mut XmlWriter, lote: &LoteRps) -> Result<(), NfseError> {
    // The Id attribute is structurally required by the schema, so partial
    // output still gets one, derived from the batch number.
    let id = match (&lote.id, lote.numero_lote) {
        (Some(id), _) => id.clone(),
        (None, Some(numero)) => format!("lote{numero}"),
        (None, None) => "lote".to_string(),
    };
    w.start_element_with_attrs("LoteRps", &[("Id", &id)])?;

    if let Some(cnpj) = &lote.cnpj {
        w.text_element("Cnpj", cnpj)?;
    }
    if let Some(im) = &lote.inscricao_municipal {
        w.text_element("InscricaoMunicipal", im)?;
    }
    if let Some(numero) = lote.numero_lote {
        w.text_element("NumeroLote", &numero.to_string())?;
    }
    w.text_element("QuantidadeRps", &lote.quantidade_rps().to_string())?;

    w.start_element("ListaRps")?;
    for rps in &lote.lista_rps {
        write_rps(w, rps)?;
    }
    w.end_element("ListaRps")?;

    w.end_element("LoteRps")?;
    Ok(())
}

fn write_rps(w: &mut XmlWriter, rps: &Rps) -> Result<(), NfseError> {
    w.start_element("Rps")?;
    match &rps.inf_id {
        Some(id) => w.start_element_with_attrs("InfRps", &[("Id", id)])?,
        None => w.start_element("InfRps")?,
    };

    if rps.numero.is_some() || rps.serie.is_some() || rps.tipo.is_some() {
        w.start_element("IdentificacaoRps")?;
        if let Some(numero) = rps.numero {
            w.text_element("Numero", &numero.to_string())?;
        }
        if let Some(serie) = &rps.serie {
            w.text_element("Serie", serie)?;
        }
        if let Some(tipo) = rps.tipo {
            w.text_element("Tipo", &tipo.code().to_string())?;
        }
        w.end_element("IdentificacaoRps")?;
    }

    if let Some(data) = rps.data_emissao {
        w.text_element("DataEmissao", &data.format("%Y-%m-%dT%H:%M:%S").to_string())?;
    }
    if let Some(optante) = rps.optante_simples_nacional {
        w.text_element("OptanteSimplesNacional", &optante.code().to_string())?;
    }
    if let Some(incentivador) = rps.incentivador_cultural {
        w.text_element("IncentivadorCultural", &incentivador.code().to_string())?;
    }
    w.text_element("Status", &rps.status.code().to_string())?;

    if let Some(servico) = &rps.servico {
        write_servico(w, servico)?;
    }
    if let Some(prestador) = &rps.prestador {
        write_prestador(w, prestador)?;
    }
    if let Some(tomador) = &rps.tomador {
        write_tomador(w, tomador)?;
    }

    w.end_element("InfRps")?;
    w.end_element("Rps")?;
    Ok(())
}

fn write_servico(w: &mut XmlWriter, servico: &Servico) -> Result<(), NfseError> {
    w.start_element("Servico")?;

    let v = &servico.valores;
    let has_valores = v.valor_servicos.is_some()
        || v.valor_deducoes.is_some()
        || v.valor_pis.is_some()
        || v.valor_cofins.is_some()
        || v.valor_inss.is_some()
        || v.valor_ir.is_some()
        || v.valor_csll.is_some()
        || v.valor_iss.is_some()
        || v.aliquota.is_some();
    if has_valores {
        w.start_element("Valores")?;
        if let Some(valor) = v.valor_servicos {
            w.valor_element("ValorServicos", valor)?;
        }
        if let Some(valor) = v.valor_deducoes {
            w.valor_element("ValorDeducoes", valor)?;
        }
        if let Some(valor) = v.valor_pis {
            w.valor_element("ValorPis", valor)?;
        }
        if let Some(valor) = v.valor_cofins {
            w.valor_element("ValorCofins", valor)?;
        }
        if let Some(valor) = v.valor_inss {
            w.valor_element("ValorInss", valor)?;
        }
        if let Some(valor) = v.valor_ir {
            w.valor_element("ValorIr", valor)?;
        }
        if let Some(valor) = v.valor_csll {
            w.valor_element("ValorCsll", valor)?;
        }
        if let Some(valor) = v.valor_iss {
            w.valor_element("ValorIss", valor)?;
        }
        if let Some(aliquota) = v.aliquota {
            w.valor_element("Aliquota", aliquota)?;
        }
        w.end_element("Valores")?;
    }

    if let Some(retido) = servico.iss_retido {
        w.text_element("IssRetido", &retido.code().to_string())?;
    }
    if let Some(item) = &servico.item_lista_servico {
        w.text_element("ItemListaServico", item)?;
    }
    if let Some(cnae) = servico.codigo_cnae {
        w.text_element("CodigoCnae", &cnae.to_string())?;
    }
    if let Some(discriminacao) = &servico.discriminacao {
        w.text_element("Discriminacao", discriminacao)?;
    }
    if let Some(codigo) = servico.codigo_municipio {
        w.text_element("CodigoMunicipio", &codigo.to_string())?;
    }
    if let Some(exigibilidade) = servico.exigibilidade_iss {
        w.text_element("ExigibilidadeISS", &exigibilidade.code().to_string())?;
    }
    if let Some(processo) = &servico.numero_processo {
        w.text_element("NumeroProcesso", processo)?;
    }

    w.end_element("Servico")?;
    Ok(())
}

fn write_prestador(w: &mut XmlWriter, prestador: &Prestador) -> Result<(), NfseError> {
    w.start_element("Prestador")?;
    if let Some(cnpj) = &prestador.cnpj {
        w.text_element("Cnpj", cnpj)?;
    }
    if let Some(im) = &prestador.inscricao_municipal {
        w.text_element("InscricaoMunicipal", im)?;
    }
    w.end_element("Prestador")?;
    Ok(())
}

fn write_tomador(w: &mut XmlWriter, tomador: &Tomador) -> Result<(), NfseError> {
    w.start_element("Tomador")?;

    if tomador.cpf_cnpj.is_some() || tomador.inscricao_municipal.is_some() {
        w.start_element("IdentificacaoTomador")?;
        if let Some(cpf_cnpj) = &tomador.cpf_cnpj {
            w.start_element("CpfCnpj")?;
            match cpf_cnpj {
                CpfCnpj::Cpf(cpf) => w.text_element("Cpf", cpf)?,
                CpfCnpj::Cnpj(cnpj) => w.text_element("Cnpj", cnpj)?,
            };
            w.end_element("CpfCnpj")?;
        }
        if let Some(im) = &tomador.inscricao_municipal {
            w.text_element("InscricaoMunicipal", im)?;
        }
        w.end_element("IdentificacaoTomador")?;
    }

    if let Some(razao) = &tomador.razao_social {
        w.text_element("RazaoSocial", razao)?;
    }
    if let Some(endereco) = &tomador.endereco {
        write_endereco(w, endereco)?;
    }
    if let Some(contato) = &tomador.contato {
        w.start_element("Contato")?;
        if let Some(telefone) = &contato.telefone {
            w.text_element("Telefone", telefone)?;
        }
        if let Some(email) = &contato.email {
            w.text_element("Email", email)?;
        }
        w.end_element("Contato")?;
    }

    w.end_element("Tomador")?;
    Ok(())
}

fn write_endereco(w: &mut XmlWriter, endereco: &Endereco) -> Result<(), NfseError> {
    w.start_element("Endereco")?;
    if let Some(rua) = &endereco.endereco {
        w.text_element("Endereco", rua)?;
    }
    if let Some(numero) = &endereco.numero {
        w.text_element("Numero", numero)?;
    }
    if let Some(complemento) = &endereco.complemento {
        w.text_element("Complemento", complemento)?;
    }
    if let Some(bairro) = &endereco.bairro {
        w.text_element("Bairro", bairro)?;
    }
    if let Some(codigo) = endereco.codigo_municipio {
        w.text_element("CodigoMunicipio", &codigo.to_string())?;
    }
    if let Some(uf) = &endereco.uf {
        w.text_element("Uf", uf)?;
    }
    if let Some(cep) = &endereco.cep {
        w.text_element("Cep", cep)?;
    }
    w.end_element("Endereco")?;
    Ok(())
}
