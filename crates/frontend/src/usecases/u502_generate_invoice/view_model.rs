use super::api;
use crate::shared::busy::BusyGuard;
use crate::shared::download::download_blob;
use crate::shared::notify::alert;
use contracts::usecases::u502_generate_invoice::{InvoiceForm, InvoiceOutcome};
use leptos::prelude::*;

/// ViewModel формы fatura
#[derive(Clone, Copy)]
pub struct InvoiceViewModel {
    pub form: RwSignal<InvoiceForm>,
    pub submitting: RwSignal<bool>,
}

impl InvoiceViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(InvoiceForm::default()),
            submitting: RwSignal::new(false),
        }
    }

    /// Скопировать выбранную в справочнике компанию; плейсхолдер игнорируется
    pub fn apply_selection(&self, option_value: &str) {
        self.form.update(|f| {
            f.apply_selection(option_value);
        });
    }

    /// Отправить снимок формы и скачать PDF
    pub fn submit_command(&self, competitors_json: String, attachment: Option<web_sys::File>) {
        let snapshot = self.form.get_untracked();
        let submitting = self.submitting;

        wasm_bindgen_futures::spawn_local(async move {
            log::debug!(
                "gerar_pdf: aeronave='{}', anexo={}",
                snapshot.aeronave,
                attachment.is_some()
            );
            let result = {
                let _busy = BusyGuard::acquire(submitting);
                api::generate_pdf(&snapshot, &competitors_json, attachment).await
            };
            if let Err(e) = &result {
                log::error!("gerar_pdf failed: {}", e);
            }

            match InvoiceOutcome::from_result(result, &snapshot) {
                InvoiceOutcome::Download { filename, body } => {
                    match download_blob(&body, &filename) {
                        Ok(()) => log::info!("downloaded {}", filename),
                        Err(e) => {
                            log::error!("download failed: {}", e);
                            alert("Erro ao gerar PDF.");
                        }
                    }
                }
                InvoiceOutcome::Alert(message) => alert(&message),
            }
        });
    }
}

impl Default for InvoiceViewModel {
    fn default() -> Self {
        Self::new()
    }
}
