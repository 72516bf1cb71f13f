use serde::{Deserialize, Serialize};

use crate::domain::a001_company::Company;
use crate::shared::date_utils::format_flight_date;

/// Multipart-поле со списком concorrentes (JSON-строка)
pub const FIELD_CONCORRENTES: &str = "concorrentes_json";

/// Multipart-поле вложения; отправляется не больше одного файла
pub const FIELD_ANEXO: &str = "anexo";

/// Снимок формы текущей работы (fatura) на момент отправки
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceForm {
    /// Данные заказчика; заполняются выбором из справочника или вручную
    pub company: Company,

    /// Matrícula основного борта
    pub aeronave: String,
    /// Дата полёта как в `<input type="date">`: `YYYY-MM-DD`
    pub data: String,
    pub inicio: String,
    pub fim: String,
    pub observacoes: String,
}

impl InvoiceForm {
    /// Скопировать карточку компании в форму
    pub fn apply_company(&mut self, company: &Company) {
        self.company = company.clone();
    }

    /// Применить выбранный `<option>` справочника.
    ///
    /// Пустое значение ничего не меняет; возвращает `true`, если форма
    /// обновлена.
    pub fn apply_selection(&mut self, option_value: &str) -> bool {
        match Company::from_option_value(option_value) {
            Some(company) => {
                self.apply_company(&company);
                true
            }
            None => false,
        }
    }

    /// Текстовые части multipart-запроса в порядке отправки
    pub fn text_parts(&self, competitors_json: &str) -> Vec<(&'static str, String)> {
        let c = &self.company;
        vec![
            ("empresa_razao", c.razao.clone()),
            ("empresa_cnpj", c.cnpj.clone()),
            ("empresa_endereco", c.endereco.clone()),
            ("empresa_telefone", c.telefone.clone()),
            ("empresa_email", c.email_financeiro.clone()),
            ("solicitante", c.solicitante.clone()),
            ("email_solicitante", c.email_solicitante.clone()),
            ("piloto", c.piloto.clone()),
            ("aeronave", self.aeronave.clone()),
            ("data", format_flight_date(&self.data)),
            ("inicio", self.inicio.clone()),
            ("fim", self.fim.clone()),
            ("observacoes", self.observacoes.clone()),
            (FIELD_CONCORRENTES, competitors_json.to_string()),
        ]
    }

    /// Имя скачиваемого файла: `Fatura_<aeronave>.pdf`
    pub fn download_filename(&self) -> String {
        format!("Fatura_{}.pdf", self.aeronave)
    }
}
