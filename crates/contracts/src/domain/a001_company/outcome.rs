use super::aggregate::Company;
use crate::shared::error::UseCaseResult;

// ============================================================================
// Save
// ============================================================================

const SAVED: &str = "Salvo!";

/// Что показать после `POST /api/empresas`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// 2xx: сообщить и перечитать справочник
    Saved,
    /// Не-2xx или сетевая ошибка: только сообщение, справочник не трогаем
    Failed(String),
}

impl SaveOutcome {
    pub fn from_result(result: &UseCaseResult<()>) -> Self {
        match result {
            Ok(()) => Self::Saved,
            Err(e) => Self::Failed(format!("Erro ao salvar empresa: {}", e)),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Saved => SAVED,
            Self::Failed(message) => message.as_str(),
        }
    }

    pub fn refresh_directory(&self) -> bool {
        matches!(self, Self::Saved)
    }
}

// ============================================================================
// Directory refresh
// ============================================================================

/// Применить результат `GET /api/empresas` к текущему списку.
///
/// Успех заменяет список целиком. При ошибке список остаётся прежним,
/// возвращается текст для строки статуса.
pub fn apply_refresh(
    companies: &mut Vec<Company>,
    result: UseCaseResult<Vec<Company>>,
) -> Option<String> {
    match result {
        Ok(list) => {
            *companies = list;
            None
        }
        Err(e) => Some(format!("Não foi possível carregar as empresas ({})", e)),
    }
}
