use crate::domain::a001_company::api;
use crate::shared::busy::BusyGuard;
use crate::shared::notify::alert;
use crate::usecases::u501_cnpj_lookup::api as lookup_api;
use contracts::domain::a001_company::{Company, SaveOutcome};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_cnpj_lookup::{Cnpj, CnpjLookup};
use leptos::prelude::*;

/// ViewModel карточки новой компании
#[derive(Clone, Copy)]
pub struct CompanyDetailsViewModel {
    pub form: RwSignal<Company>,
    /// Идёт запрос к реестру CNPJ
    pub lookup_busy: RwSignal<bool>,
    pub saving: RwSignal<bool>,
}

impl CompanyDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(Company::default()),
            lookup_busy: RwSignal::new(false),
            saving: RwSignal::new(false),
        }
    }

    /// Save form data to server, then call `on_saved`
    pub fn save_command(&self, on_saved: impl Fn() + 'static) {
        let current = self.form.get_untracked();

        if let Err(e) = current.validate() {
            alert(&e.to_string());
            return;
        }

        let saving = self.saving;
        wasm_bindgen_futures::spawn_local(async move {
            let result = {
                let _busy = BusyGuard::acquire(saving);
                api::save_company(&current).await
            };
            if let Err(e) = &result {
                log::error!("save company failed: {}", e);
            }

            let outcome = SaveOutcome::from_result(&result);
            alert(outcome.message());
            if outcome.refresh_directory() {
                log::info!("company saved: {}", current.razao);
                on_saved();
            }
        });
    }

    /// Заполнить карточку по CNPJ из публичного реестра
    pub fn lookup_command(&self) {
        let raw = self.form.with_untracked(|f| f.cnpj.clone());
        let cnpj = match Cnpj::parse(&raw) {
            Ok(cnpj) => cnpj,
            Err(e) => {
                alert(&e.to_string());
                return;
            }
        };

        let form = self.form;
        let busy = self.lookup_busy;
        wasm_bindgen_futures::spawn_local(async move {
            log::debug!("{}: {}", CnpjLookup::full_name(), cnpj.as_str());
            let result = {
                let _busy = BusyGuard::acquire(busy);
                lookup_api::lookup(&cnpj).await
            };
            match result {
                Ok(data) => {
                    log::debug!("cnpj lookup result: {:?}", data);
                    form.update(|f| data.apply_to(f));
                }
                Err(e) => {
                    log::error!("Falha na consulta: {}", e);
                    alert("Erro ao consultar CNPJ.");
                }
            }
        });
    }
}

impl Default for CompanyDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
