/// Взаимоисключающие панели приложения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Panel {
    /// Форма текущей работы и генерация PDF
    #[default]
    Invoice,
    /// Справочник компаний и карточка новой компании
    Companies,
}

impl Panel {
    pub const ALL: [Panel; 2] = [Panel::Invoice, Panel::Companies];

    /// Идентификатор для DOM и параметра `?active=`
    pub fn id(&self) -> &'static str {
        match self {
            Panel::Invoice => "fatura",
            Panel::Companies => "empresas",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.id() == id)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Panel::Invoice => "Gerar Fatura",
            Panel::Companies => "Empresas",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Panel::Invoice => "invoices",
            Panel::Companies => "customers",
        }
    }
}
