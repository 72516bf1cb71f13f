use contracts::domain::a002_competitor::{CompetitorField, CompetitorTable, RowId};
use leptos::prelude::*;

/// ViewModel таблицы concorrentes
#[derive(Clone, Copy)]
pub struct CompetitorTableViewModel {
    pub table: RwSignal<CompetitorTable>,
}

impl CompetitorTableViewModel {
    pub fn new() -> Self {
        Self {
            table: RwSignal::new(CompetitorTable::new()),
        }
    }

    pub fn add_row(&self) {
        self.table.update(|t| {
            t.append_row();
        });
    }

    pub fn remove_row(&self, id: RowId) {
        self.table.update(|t| {
            if !t.remove_row(id) {
                log::warn!("remove_row: row {:?} not found", id);
            }
        });
    }

    pub fn edit(&self, id: RowId, field: CompetitorField, value: String) {
        self.table.update(|t| {
            t.update_row(id, field, value);
        });
    }

    /// Reactive: значение ячейки для `prop:value`
    pub fn cell(&self, id: RowId, field: CompetitorField) -> String {
        self.table
            .with(|t| t.get(id).map(|r| r.get(field).to_string()))
            .unwrap_or_default()
    }

    pub fn serialize_rows(&self) -> String {
        self.table.with_untracked(|t| t.serialize_rows())
    }
}

impl Default for CompetitorTableViewModel {
    fn default() -> Self {
        Self::new()
    }
}
