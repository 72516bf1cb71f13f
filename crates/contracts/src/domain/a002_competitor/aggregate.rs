use serde::{Deserialize, Serialize};

/// Concorrente: другой борт, летавший в то же окно времени.
///
/// Бэкенд делит стоимость блоков по 30 минут между всеми бортами, так что
/// строка уходит в счёт только целиком заполненной.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitorRow {
    /// Matrícula (бортовой номер), например "PT-XYZ"
    pub matricula: String,
    /// Начало, `HH:MM`
    pub inicio: String,
    /// Конец, `HH:MM`
    pub fim: String,
}

impl CompetitorRow {
    /// Все три поля заполнены
    pub fn is_complete(&self) -> bool {
        !self.matricula.is_empty() && !self.inicio.is_empty() && !self.fim.is_empty()
    }

    pub fn set(&mut self, field: CompetitorField, value: String) {
        match field {
            CompetitorField::Matricula => self.matricula = value,
            CompetitorField::Inicio => self.inicio = value,
            CompetitorField::Fim => self.fim = value,
        }
    }

    pub fn get(&self, field: CompetitorField) -> &str {
        match field {
            CompetitorField::Matricula => &self.matricula,
            CompetitorField::Inicio => &self.inicio,
            CompetitorField::Fim => &self.fim,
        }
    }
}

/// Редактируемая ячейка строки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompetitorField {
    Matricula,
    Inicio,
    Fim,
}
