use super::aggregate::{CompetitorField, CompetitorRow};

/// Клиентский идентификатор строки таблицы.
///
/// Живёт только в пределах сессии страницы; не сериализуется.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub u32);

#[derive(Debug, Clone, PartialEq, Eq)]
struct CompetitorEntry {
    id: RowId,
    row: CompetitorRow,
}

/// Таблица concorrentes в порядке добавления
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompetitorTable {
    entries: Vec<CompetitorEntry>,
    next_id: u32,
}

impl CompetitorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавить пустую строку в конец таблицы
    pub fn append_row(&mut self) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.entries.push(CompetitorEntry {
            id,
            row: CompetitorRow::default(),
        });
        id
    }

    /// Удалить ровно указанную строку. `false`, если такой строки нет.
    pub fn remove_row(&mut self, id: RowId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub fn update_row(&mut self, id: RowId, field: CompetitorField, value: String) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.row.set(field, value);
                true
            }
            None => false,
        }
    }

    pub fn ids(&self) -> Vec<RowId> {
        self.entries.iter().map(|e| e.id).collect()
    }

    pub fn get(&self, id: RowId) -> Option<&CompetitorRow> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.row)
    }

    /// Полностью заполненные строки в порядке таблицы
    pub fn complete_rows(&self) -> Vec<CompetitorRow> {
        self.entries
            .iter()
            .filter(|e| e.row.is_complete())
            .map(|e| e.row.clone())
            .collect()
    }

    /// JSON-массив для поля `concorrentes_json`; `"[]"`, если ни одна строка
    /// не заполнена целиком.
    pub fn serialize_rows(&self) -> String {
        serde_json::to_string(&self.complete_rows()).unwrap_or_else(|_| "[]".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(table: &mut CompetitorTable, id: RowId, mat: &str, ini: &str, fim: &str) {
        table.update_row(id, CompetitorField::Matricula, mat.into());
        table.update_row(id, CompetitorField::Inicio, ini.into());
        table.update_row(id, CompetitorField::Fim, fim.into());
    }

    #[test]
    fn test_empty_table_serializes_to_empty_array() {
        let table = CompetitorTable::new();
        assert_eq!(table.serialize_rows(), "[]");
    }

    #[test]
    fn test_incomplete_rows_dropped() {
        let mut table = CompetitorTable::new();
        let a = table.append_row();
        let b = table.append_row();
        table.append_row();
        fill(&mut table, a, "PT-AAA", "08:00", "09:00");
        table.update_row(b, CompetitorField::Matricula, "PT-BBB".into());

        let parsed: Vec<CompetitorRow> = serde_json::from_str(&table.serialize_rows()).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].matricula, "PT-AAA");
        assert_eq!(table.ids().len(), 3);
    }

    #[test]
    fn test_only_incomplete_rows_serialize_to_empty_array() {
        let mut table = CompetitorTable::new();
        let a = table.append_row();
        table.update_row(a, CompetitorField::Inicio, "08:00".into());
        assert_eq!(table.serialize_rows(), "[]");
    }

    #[test]
    fn test_table_order_preserved() {
        let mut table = CompetitorTable::new();
        let ids: Vec<RowId> = (0..4).map(|_| table.append_row()).collect();
        for (i, id) in ids.iter().enumerate() {
            fill(&mut table, *id, &format!("PT-00{}", i), "10:00", "11:00");
        }

        let parsed: Vec<CompetitorRow> = serde_json::from_str(&table.serialize_rows()).unwrap();
        let mats: Vec<&str> = parsed.iter().map(|r| r.matricula.as_str()).collect();
        assert_eq!(mats, vec!["PT-000", "PT-001", "PT-002", "PT-003"]);
    }

    #[test]
    fn test_remove_does_not_touch_siblings() {
        let mut table = CompetitorTable::new();
        let a = table.append_row();
        let b = table.append_row();
        let c = table.append_row();
        fill(&mut table, a, "PT-AAA", "08:00", "09:00");
        fill(&mut table, b, "PT-BBB", "08:30", "09:30");
        fill(&mut table, c, "PT-CCC", "09:00", "10:00");

        assert!(table.remove_row(b));
        assert_eq!(table.ids(), vec![a, c]);
        assert_eq!(
            table.serialize_rows(),
            r#"[{"matricula":"PT-AAA","inicio":"08:00","fim":"09:00"},{"matricula":"PT-CCC","inicio":"09:00","fim":"10:00"}]"#
        );
        assert!(!table.remove_row(b));
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let mut table = CompetitorTable::new();
        let a = table.append_row();
        table.remove_row(a);
        let b = table.append_row();
        assert_ne!(a, b);
        assert!(table.get(a).is_none());
        assert!(table.get(b).is_some());
    }

    #[test]
    fn test_serialize_is_idempotent() {
        let mut table = CompetitorTable::new();
        let a = table.append_row();
        fill(&mut table, a, "PT-AAA", "08:00", "09:00");
        assert_eq!(table.serialize_rows(), table.serialize_rows());
    }

    #[test]
    fn test_update_unknown_row() {
        let mut table = CompetitorTable::new();
        assert!(!table.update_row(RowId(42), CompetitorField::Fim, "10:00".into()));
    }
}
