use serde::{Deserialize, Serialize};

use crate::shared::error::{UseCaseError, UseCaseResult};
use crate::shared::serde_utils::lenient_opt_string;

// ============================================================================
// Aggregate
// ============================================================================

/// Empresa cliente (заказчик, которому выставляется счёт)
///
/// Идентификатор назначает бэкенд; на клиенте запись идентифицируется только
/// позицией в полученном списке. JSON-ключи совпадают с контрактом
/// `/api/empresas`, при чтении дополнительно принимаются имена колонок
/// таблицы (`razao_social`, `*_padrao`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CompanyRecord")]
pub struct Company {
    /// Razão social — обязательное поле
    pub razao: String,
    pub cnpj: String,
    pub endereco: String,
    pub telefone: String,
    pub email_financeiro: String,
    pub solicitante: String,
    pub email_solicitante: String,
    pub piloto: String,
}

/// Запись в том виде, в каком её может прислать бэкенд.
///
/// Ключ контракта и имя колонки могут прийти одновременно; приоритет у
/// непустого ключа контракта, затем колонка, иначе пустая строка.
#[derive(Deserialize)]
struct CompanyRecord {
    #[serde(default, deserialize_with = "lenient_opt_string")]
    razao: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    razao_social: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    cnpj: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    endereco: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    telefone: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    email_financeiro: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    solicitante: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    solicitante_padrao: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    email_solicitante: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    email_solicitante_padrao: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    piloto: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    piloto_padrao: Option<String>,
}

fn first_filled(primary: Option<String>, column: Option<String>) -> String {
    primary
        .filter(|v| !v.is_empty())
        .or(column)
        .unwrap_or_default()
}

impl From<CompanyRecord> for Company {
    fn from(r: CompanyRecord) -> Self {
        Self {
            razao: first_filled(r.razao, r.razao_social),
            cnpj: r.cnpj.unwrap_or_default(),
            endereco: r.endereco.unwrap_or_default(),
            telefone: r.telefone.unwrap_or_default(),
            email_financeiro: r.email_financeiro.unwrap_or_default(),
            solicitante: first_filled(r.solicitante, r.solicitante_padrao),
            email_solicitante: first_filled(r.email_solicitante, r.email_solicitante_padrao),
            piloto: first_filled(r.piloto, r.piloto_padrao),
        }
    }
}

impl Company {
    pub fn collection_name() -> &'static str {
        "empresas"
    }

    pub fn element_name() -> &'static str {
        "Empresa"
    }

    pub fn list_name() -> &'static str {
        "Empresas cadastradas"
    }

    /// Валидация перед отправкой на сервер
    pub fn validate(&self) -> UseCaseResult<()> {
        if self.razao.trim().is_empty() {
            return Err(UseCaseError::validation("Preencha a Razão Social."));
        }
        Ok(())
    }

    /// Строка для списка компаний: "razão (cnpj)"
    pub fn directory_label(&self) -> String {
        format!("{} ({})", self.razao, self.cnpj)
    }

    /// Значение `<option>` в выпадающем списке: полная запись в JSON
    pub fn to_option_value(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Обратное преобразование значения `<option>`.
    ///
    /// Пустое значение (плейсхолдер "-- Selecione --") и нераспознанный JSON
    /// дают `None`.
    pub fn from_option_value(value: &str) -> Option<Self> {
        if value.trim().is_empty() {
            return None;
        }
        serde_json::from_str(value).ok()
    }
}

// ============================================================================
// Fields
// ============================================================================

/// Поле карточки компании; порядок `ALL` = порядок в формах
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompanyField {
    Razao,
    Cnpj,
    Endereco,
    Telefone,
    EmailFinanceiro,
    Solicitante,
    EmailSolicitante,
    Piloto,
}

impl CompanyField {
    pub const ALL: [CompanyField; 8] = [
        CompanyField::Razao,
        CompanyField::Cnpj,
        CompanyField::Endereco,
        CompanyField::Telefone,
        CompanyField::EmailFinanceiro,
        CompanyField::Solicitante,
        CompanyField::EmailSolicitante,
        CompanyField::Piloto,
    ];

    /// JSON-ключ поля
    pub fn key(&self) -> &'static str {
        match self {
            Self::Razao => "razao",
            Self::Cnpj => "cnpj",
            Self::Endereco => "endereco",
            Self::Telefone => "telefone",
            Self::EmailFinanceiro => "email_financeiro",
            Self::Solicitante => "solicitante",
            Self::EmailSolicitante => "email_solicitante",
            Self::Piloto => "piloto",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Razao => "Razão Social",
            Self::Cnpj => "CNPJ",
            Self::Endereco => "Endereço",
            Self::Telefone => "Telefone",
            Self::EmailFinanceiro => "E-mail Financeiro",
            Self::Solicitante => "Solicitante",
            Self::EmailSolicitante => "E-mail do Solicitante",
            Self::Piloto => "Piloto",
        }
    }

    /// Тип `<input>`
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::EmailFinanceiro | Self::EmailSolicitante => "email",
            Self::Telefone => "tel",
            _ => "text",
        }
    }

    pub fn get<'a>(&self, company: &'a Company) -> &'a str {
        match self {
            Self::Razao => &company.razao,
            Self::Cnpj => &company.cnpj,
            Self::Endereco => &company.endereco,
            Self::Telefone => &company.telefone,
            Self::EmailFinanceiro => &company.email_financeiro,
            Self::Solicitante => &company.solicitante,
            Self::EmailSolicitante => &company.email_solicitante,
            Self::Piloto => &company.piloto,
        }
    }

    pub fn set(&self, company: &mut Company, value: String) {
        match self {
            Self::Razao => company.razao = value,
            Self::Cnpj => company.cnpj = value,
            Self::Endereco => company.endereco = value,
            Self::Telefone => company.telefone = value,
            Self::EmailFinanceiro => company.email_financeiro = value,
            Self::Solicitante => company.solicitante = value,
            Self::EmailSolicitante => company.email_solicitante = value,
            Self::Piloto => company.piloto = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Company {
        Company {
            razao: "Aero Táxi Planalto LTDA".into(),
            cnpj: "12.345.678/0001-95".into(),
            endereco: "Rua das Hélices, 100 - Centro, Goiânia-GO".into(),
            telefone: "6233334444".into(),
            email_financeiro: "financeiro@planalto.com.br".into(),
            solicitante: "Marina Souza".into(),
            email_solicitante: "marina@planalto.com.br".into(),
            piloto: "Cmte. Ribeiro".into(),
        }
    }

    #[test]
    fn test_validate_requires_razao() {
        assert!(sample().validate().is_ok());

        let empty = Company::default();
        let err = empty.validate().unwrap_err();
        assert!(matches!(err, UseCaseError::Validation(_)));
        assert_eq!(err.to_string(), "Preencha a Razão Social.");

        let blank = Company {
            razao: "   ".into(),
            ..sample()
        };
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        let obj = json.as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "cnpj",
                "email_financeiro",
                "email_solicitante",
                "endereco",
                "piloto",
                "razao",
                "solicitante",
                "telefone",
            ]
        );
    }

    #[test]
    fn test_missing_and_null_fields_decode_as_empty() {
        let c: Company =
            serde_json::from_str(r#"{"razao": "Voa Brasil", "cnpj": null, "id": 7}"#).unwrap();
        assert_eq!(c.razao, "Voa Brasil");
        assert_eq!(c.cnpj, "");
        assert_eq!(c.endereco, "");
        assert_eq!(c.piloto, "");
    }

    #[test]
    fn test_backend_column_aliases() {
        let c: Company = serde_json::from_str(
            r#"{
                "razao_social": "Voa Brasil",
                "solicitante_padrao": "Ana",
                "email_solicitante_padrao": "ana@voa.com",
                "piloto_padrao": "Bruno"
            }"#,
        )
        .unwrap();
        assert_eq!(c.razao, "Voa Brasil");
        assert_eq!(c.solicitante, "Ana");
        assert_eq!(c.email_solicitante, "ana@voa.com");
        assert_eq!(c.piloto, "Bruno");
    }

    #[test]
    fn test_contract_key_and_column_both_present() {
        let list: Vec<Company> = serde_json::from_str(
            r#"[
                {"razao": "A", "email_solicitante": null, "email_solicitante_padrao": "a@x.com"},
                {"razao": "B"}
            ]"#,
        )
        .unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].email_solicitante, "a@x.com");
        assert_eq!(list[1].razao, "B");
        assert_eq!(list[1].email_solicitante, "");
    }

    #[test]
    fn test_contract_key_wins_over_column() {
        let c: Company = serde_json::from_str(
            r#"{
                "razao": "Voa Brasil",
                "razao_social": "VOA BRASIL LTDA",
                "piloto": "",
                "piloto_padrao": "Bruno",
                "solicitante": "Ana",
                "solicitante_padrao": "Outro"
            }"#,
        )
        .unwrap();
        assert_eq!(c.razao, "Voa Brasil");
        assert_eq!(c.piloto, "Bruno");
        assert_eq!(c.solicitante, "Ana");
    }

    #[test]
    fn test_directory_label() {
        assert_eq!(
            sample().directory_label(),
            "Aero Táxi Planalto LTDA (12.345.678/0001-95)"
        );
    }

    #[test]
    fn test_field_keys_match_wire_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        let c = sample();
        for field in CompanyField::ALL {
            assert_eq!(json[field.key()].as_str(), Some(field.get(&c)), "{:?}", field);
        }
    }

    #[test]
    fn test_field_set() {
        let mut c = Company::default();
        for field in CompanyField::ALL {
            field.set(&mut c, field.key().to_uppercase());
        }
        assert_eq!(c.razao, "RAZAO");
        assert_eq!(c.email_solicitante, "EMAIL_SOLICITANTE");
        assert_eq!(CompanyField::Telefone.input_type(), "tel");
    }

    #[test]
    fn test_option_value() {
        let c = sample();
        let value = c.to_option_value();
        assert_eq!(Company::from_option_value(&value), Some(c));
        assert_eq!(Company::from_option_value(""), None);
        assert_eq!(Company::from_option_value("not json"), None);
    }
}
