//! Типизированные события UI и их маршрутизация
//!
//! View только отправляют `AppEvent`; `AppController` решает, какая
//! ViewModel его обрабатывает.

use super::global_context::AppGlobalContext;
use super::panel::Panel;
use crate::domain::a001_company::ui::details::CompanyDetailsViewModel;
use crate::domain::a001_company::ui::directory::CompanyDirectoryViewModel;
use crate::domain::a002_competitor::ui::CompetitorTableViewModel;
use crate::usecases::u502_generate_invoice::InvoiceViewModel;
use contracts::domain::a002_competitor::{CompetitorField, RowId};
use leptos::prelude::*;

#[derive(Debug, Clone)]
pub enum AppEvent {
    Navigate(Panel),
    AddRow,
    RemoveRow(RowId),
    EditRow {
        id: RowId,
        field: CompetitorField,
        value: String,
    },
    RefreshDirectory,
    /// Значение выбранного `<option>` (JSON записи или пустая строка)
    ApplySelection(String),
    LookupRegistry,
    SaveCompany,
    /// Первый выбранный файл, если есть
    SubmitInvoice {
        attachment: Option<web_sys::File>,
    },
}

impl AppEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AppEvent::Navigate(_) => "navigate",
            AppEvent::AddRow => "add_row",
            AppEvent::RemoveRow(_) => "remove_row",
            AppEvent::EditRow { .. } => "edit_row",
            AppEvent::RefreshDirectory => "refresh_directory",
            AppEvent::ApplySelection(_) => "apply_selection",
            AppEvent::LookupRegistry => "lookup_registry",
            AppEvent::SaveCompany => "save_company",
            AppEvent::SubmitInvoice { .. } => "submit_invoice",
        }
    }
}

/// Владелец всех ViewModel приложения
#[derive(Clone, Copy)]
pub struct AppController {
    pub ctx: AppGlobalContext,
    pub directory: CompanyDirectoryViewModel,
    pub new_company: CompanyDetailsViewModel,
    pub competitors: CompetitorTableViewModel,
    pub invoice: InvoiceViewModel,
}

impl AppController {
    pub fn new(ctx: AppGlobalContext) -> Self {
        Self {
            ctx,
            directory: CompanyDirectoryViewModel::new(),
            new_company: CompanyDetailsViewModel::new(),
            competitors: CompetitorTableViewModel::new(),
            invoice: InvoiceViewModel::new(),
        }
    }

    pub fn dispatch(&self, event: AppEvent) {
        if !matches!(event, AppEvent::EditRow { .. }) {
            log::debug!("event: {}", event.name());
        }
        match event {
            AppEvent::Navigate(panel) => self.ctx.activate(panel),
            AppEvent::AddRow => self.competitors.add_row(),
            AppEvent::RemoveRow(id) => self.competitors.remove_row(id),
            AppEvent::EditRow { id, field, value } => self.competitors.edit(id, field, value),
            AppEvent::RefreshDirectory => self.directory.refresh_command(),
            AppEvent::ApplySelection(value) => self.invoice.apply_selection(&value),
            AppEvent::LookupRegistry => self.new_company.lookup_command(),
            AppEvent::SaveCompany => {
                let this = *self;
                self.new_company
                    .save_command(move || this.dispatch(AppEvent::RefreshDirectory));
            }
            AppEvent::SubmitInvoice { attachment } => self
                .invoice
                .submit_command(self.competitors.serialize_rows(), attachment),
        }
    }
}

pub fn use_app_controller() -> AppController {
    use_context::<AppController>().expect("AppController not found in context")
}
