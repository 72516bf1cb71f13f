pub mod request;
pub mod response;

pub use request::{InvoiceForm, FIELD_ANEXO, FIELD_CONCORRENTES};
pub use response::{InvoiceOutcome, PDF_CONTENT_TYPE};

use crate::usecases::common::UseCaseMetadata;

pub struct GenerateInvoice;

impl UseCaseMetadata for GenerateInvoice {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "generate_invoice"
    }

    fn display_name() -> &'static str {
        "Gerar Fatura"
    }

    fn description() -> &'static str {
        "Отправка данных полёта на /api/gerar_pdf и скачивание готового PDF"
    }
}
