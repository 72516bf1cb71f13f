use thiserror::Error;

/// Результат выполнения UseCase
pub type UseCaseResult<T> = Result<T, UseCaseError>;

/// Ошибка выполнения UseCase
///
/// `Validation` возникает до обращения к сети; остальные варианты описывают
/// сбой уже отправленного запроса.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UseCaseError {
    #[error("{0}")]
    Validation(String),

    #[error("HTTP {status}")]
    Http { status: u16 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

impl UseCaseError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Ответ сервера получен, но статус не 2xx
    pub fn http(status: u16) -> Self {
        Self::Http { status }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            UseCaseError::validation("Preencha a Razão Social.").to_string(),
            "Preencha a Razão Social."
        );
        assert_eq!(UseCaseError::http(502).to_string(), "HTTP 502");
        assert_eq!(
            UseCaseError::network("TypeError: Failed to fetch").to_string(),
            "Network error: TypeError: Failed to fetch"
        );
    }
}
