use leptos::prelude::*;

/// Флаг "идёт запрос" на время жизни guard-а.
///
/// Сбрасывается в `Drop`, поэтому снимается при любом исходе запроса.
pub struct BusyGuard {
    flag: RwSignal<bool>,
}

impl BusyGuard {
    pub fn acquire(flag: RwSignal<bool>) -> Self {
        flag.set(true);
        Self { flag }
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        // компонент мог быть размонтирован, пока шёл запрос
        let _ = self.flag.try_set(false);
    }
}
