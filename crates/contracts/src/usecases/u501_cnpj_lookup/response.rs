use serde::{Deserialize, Serialize};

use crate::domain::a001_company::Company;
use crate::shared::serde_utils::lenient_string;

/// Ответ реестра `/api/cnpj/v1/{cnpj}`.
///
/// Описаны только используемые поля; отсутствие любого из них ошибкой
/// не считается.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CnpjLookupResponse {
    #[serde(default, deserialize_with = "lenient_string")]
    pub razao_social: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub logradouro: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub numero: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub complemento: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub bairro: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub municipio: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub uf: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub ddd_telefone_1: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,
}

impl CnpjLookupResponse {
    /// "LOGRADOURO, NUMERO COMPLEMENTO - BAIRRO, MUNICIPIO-UF"
    pub fn compose_address(&self) -> String {
        let complemento = self.complemento.trim();
        let number = if complemento.is_empty() {
            self.numero.clone()
        } else {
            format!("{} {}", self.numero, complemento)
        };
        format!(
            "{}, {} - {}, {}-{}",
            self.logradouro, number, self.bairro, self.municipio, self.uf
        )
    }

    /// Перенести данные в карточку новой компании.
    ///
    /// Заполняются razão, endereço, telefone и e-mail financeiro;
    /// solicitante и piloto остаются как были.
    pub fn apply_to(&self, company: &mut Company) {
        company.razao = self.razao_social.clone();
        company.endereco = self.compose_address();
        company.telefone = self.ddd_telefone_1.clone();
        company.email_financeiro = self.email.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "cnpj": "12345678000195",
        "razao_social": "AERO TAXI PLANALTO LTDA",
        "logradouro": "AVENIDA SANTOS DUMONT",
        "numero": "1500",
        "complemento": "HANGAR 4",
        "bairro": "SETOR AEROPORTO",
        "municipio": "GOIANIA",
        "uf": "GO",
        "ddd_telefone_1": "6232221100",
        "email": null,
        "qsa": []
    }"#;

    #[test]
    fn test_compose_address() {
        let r: CnpjLookupResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(
            r.compose_address(),
            "AVENIDA SANTOS DUMONT, 1500 HANGAR 4 - SETOR AEROPORTO, GOIANIA-GO"
        );
    }

    #[test]
    fn test_compose_address_without_complement() {
        let r = CnpjLookupResponse {
            logradouro: "RUA A".into(),
            numero: "10".into(),
            bairro: "CENTRO".into(),
            municipio: "ANAPOLIS".into(),
            uf: "GO".into(),
            ..Default::default()
        };
        assert_eq!(r.compose_address(), "RUA A, 10 - CENTRO, ANAPOLIS-GO");
    }

    #[test]
    fn test_apply_to_keeps_operational_fields() {
        let r: CnpjLookupResponse = serde_json::from_str(SAMPLE).unwrap();
        let mut company = Company {
            cnpj: "12.345.678/0001-95".into(),
            email_financeiro: "old@x.com".into(),
            solicitante: "Marina".into(),
            piloto: "Ribeiro".into(),
            ..Default::default()
        };
        r.apply_to(&mut company);

        assert_eq!(company.razao, "AERO TAXI PLANALTO LTDA");
        assert_eq!(company.telefone, "6232221100");
        // email: null в ответе -> пустая строка
        assert_eq!(company.email_financeiro, "");
        assert_eq!(company.cnpj, "12.345.678/0001-95");
        assert_eq!(company.solicitante, "Marina");
        assert_eq!(company.piloto, "Ribeiro");
    }

    #[test]
    fn test_email_copied_when_present() {
        let r: CnpjLookupResponse =
            serde_json::from_str(r#"{"razao_social": "X", "email": "fin@x.com.br"}"#).unwrap();
        let mut company = Company::default();
        r.apply_to(&mut company);
        assert_eq!(company.email_financeiro, "fin@x.com.br");
    }

    #[test]
    fn test_numeric_fields_tolerated() {
        let r: CnpjLookupResponse =
            serde_json::from_str(r#"{"numero": 42, "ddd_telefone_1": 6232221100}"#).unwrap();
        assert_eq!(r.numero, "42");
        assert_eq!(r.ddd_telefone_1, "6232221100");
    }
}
