use super::panel::Panel;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Состояние навигации: какая панель сейчас видима
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Panel>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Panel::default()),
        }
    }

    /// Восстановить панель из `?active=` и синхронизировать URL при переключении
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(active_id) = params.get("active") {
            match Panel::from_id(active_id) {
                Some(panel) => self.activate(panel),
                None => log::warn!("unknown panel in url: '{}'", active_id),
            }
        }

        let this = *self;
        Effect::new(move |_| {
            let panel = this.active.get();
            let query_string = serde_qs::to_string(&HashMap::from([(
                "active".to_string(),
                panel.id().to_string(),
            )]))
            .unwrap_or_default();

            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    /// Сделать панель активной; ровно одна панель активна всегда
    pub fn activate(&self, panel: Panel) {
        log::debug!("activate panel: '{}'", panel.id());
        self.active.set(panel);
    }

    /// Reactive: подписывает вызывающего на смену панели
    pub fn is_active(&self, panel: Panel) -> bool {
        self.active.get() == panel
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
