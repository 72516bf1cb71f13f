use crate::domain::a001_company::api;
use contracts::domain::a001_company::{apply_refresh, Company};
use leptos::prelude::*;

/// ViewModel справочника компаний
#[derive(Clone, Copy)]
pub struct CompanyDirectoryViewModel {
    pub companies: RwSignal<Vec<Company>>,
    /// Ошибка последней загрузки; список при этом не меняется
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
}

impl CompanyDirectoryViewModel {
    pub fn new() -> Self {
        Self {
            companies: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
        }
    }

    /// Перечитать справочник с сервера.
    ///
    /// При ошибке прежний список остаётся на экране, alert не показывается.
    pub fn refresh_command(&self) {
        let companies = self.companies;
        let error = self.error;
        let loading = self.loading;
        loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::fetch_companies().await;
            if let Ok(list) = &result {
                log::debug!("loaded {} companies", list.len());
            }
            let status = companies
                .try_update(|list| apply_refresh(list, result))
                .flatten();
            if let Some(message) = &status {
                log::warn!("Erro api: {}", message);
            }
            let _ = error.try_set(status);
            let _ = loading.try_set(false);
        });
    }
}

impl Default for CompanyDirectoryViewModel {
    fn default() -> Self {
        Self::new()
    }
}
