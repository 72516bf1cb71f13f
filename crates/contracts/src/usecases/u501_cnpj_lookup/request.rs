use crate::shared::error::{UseCaseError, UseCaseResult};

/// Публичный реестр (BrasilAPI)
pub const DEFAULT_REGISTRY_BASE: &str = "https://brasilapi.com.br";

const CNPJ_LEN: usize = 14;

/// CNPJ, очищенный от форматирования: ровно 14 цифр
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cnpj(String);

impl Cnpj {
    /// Убирает всё, кроме цифр, и проверяет длину.
    ///
    /// "12.345.678/0001-95" -> "12345678000195"
    pub fn parse(raw: &str) -> UseCaseResult<Self> {
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.len() != CNPJ_LEN {
            return Err(UseCaseError::validation("CNPJ inválido (digite 14 números)"));
        }
        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `GET {base}/api/cnpj/v1/{digits}`
    pub fn lookup_url(&self, registry_base: &str) -> String {
        format!(
            "{}/api/cnpj/v1/{}",
            registry_base.trim_end_matches('/'),
            self.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strips_formatting() {
        let cnpj = Cnpj::parse("12.345.678/0001-95").unwrap();
        assert_eq!(cnpj.as_str(), "12345678000195");

        let cnpj = Cnpj::parse(" 12345678000195 ").unwrap();
        assert_eq!(cnpj.as_str(), "12345678000195");
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        for raw in ["", "1234567800019", "123456780001950", "12.345.678/0001", "abc"] {
            let err = Cnpj::parse(raw).unwrap_err();
            assert!(matches!(err, UseCaseError::Validation(_)), "{raw}");
            assert_eq!(err.to_string(), "CNPJ inválido (digite 14 números)");
        }
    }

    #[test]
    fn test_lookup_url() {
        let cnpj = Cnpj::parse("12.345.678/0001-95").unwrap();
        assert_eq!(
            cnpj.lookup_url(DEFAULT_REGISTRY_BASE),
            "https://brasilapi.com.br/api/cnpj/v1/12345678000195"
        );
        assert_eq!(
            cnpj.lookup_url("http://localhost:8080/"),
            "http://localhost:8080/api/cnpj/v1/12345678000195"
        );
    }
}
