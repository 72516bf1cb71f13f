use super::request::InvoiceForm;
use crate::shared::error::UseCaseResult;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

const GENERATE_FAILED: &str = "Erro ao gerar PDF.";

/// Что сделать с результатом `/api/gerar_pdf`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvoiceOutcome<B> {
    /// Скачать тело ответа под указанным именем
    Download { filename: String, body: B },
    /// Показать одно сообщение; ничего не скачивать
    Alert(String),
}

impl<B> InvoiceOutcome<B> {
    pub fn from_result(result: UseCaseResult<B>, form: &InvoiceForm) -> Self {
        match result {
            Ok(body) => Self::Download {
                filename: form.download_filename(),
                body,
            },
            Err(_) => Self::Alert(GENERATE_FAILED.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::UseCaseError;

    fn form() -> InvoiceForm {
        InvoiceForm {
            aeronave: "PT-ABC".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_success_downloads_once() {
        let outcome = InvoiceOutcome::from_result(Ok(b"%PDF-1.4".to_vec()), &form());
        assert_eq!(
            outcome,
            InvoiceOutcome::Download {
                filename: "Fatura_PT-ABC.pdf".into(),
                body: b"%PDF-1.4".to_vec(),
            }
        );
    }

    #[test]
    fn test_failure_alerts_without_download() {
        for err in [
            UseCaseError::http(500),
            UseCaseError::network("offline"),
            UseCaseError::decode("body"),
        ] {
            let outcome = InvoiceOutcome::<Vec<u8>>::from_result(Err(err), &form());
            assert_eq!(outcome, InvoiceOutcome::Alert("Erro ao gerar PDF.".into()));
        }
    }
}
