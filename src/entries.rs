use crate::errors::EntryError;
use crate::models::{Entry, EntryDraft, EntryId};
use crate::storage::{self, ENTRIES_KEY, KeyValueStore};
use serde_json::Value;
use tracing::warn;

#[derive(Debug, Default)]
pub struct EntryStore {
    entries: Vec<Entry>,
}

impl EntryStore {
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let raw: Vec<Value> = storage::load(store, ENTRIES_KEY, Vec::new());
        let mut entries: Vec<Entry> = Vec::with_capacity(raw.len());
        for (index, value) in raw.into_iter().enumerate() {
            match serde_json::from_value::<Entry>(value) {
                Ok(entry) if entries.iter().any(|known| known.id == entry.id) => {
                    warn!("skipping stored entry {index}: duplicate id {}", entry.id);
                }
                Ok(entry) => entries.push(entry),
                Err(err) => warn!("skipping stored entry {index}: {err}"),
            }
        }
        Self { entries }
    }

    pub fn add_entry(
        &mut self,
        store: &mut dyn KeyValueStore,
        draft: EntryDraft,
        location: &str,
    ) -> Result<Entry, EntryError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(EntryError::MissingField("name"));
        }
        let guest = draft.guest.ok_or(EntryError::MissingField("guest"))?;
        let sales = draft.sales.ok_or(EntryError::MissingField("sales"))?;
        let report_sales = draft
            .report_sales
            .ok_or(EntryError::MissingField("reportSales"))?;

        let entry = Entry {
            id: self.next_id(),
            name: name.to_string(),
            guest,
            sales,
            report_sales,
            location: location.to_string(),
        };
        self.entries.push(entry.clone());
        storage::save(store, ENTRIES_KEY, &self.entries);
        Ok(entry)
    }

    pub fn list_entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn clear_entries(&mut self, store: &mut dyn KeyValueStore) {
        self.entries.clear();
        storage::save(store, ENTRIES_KEY, &self.entries);
    }

    /// Distinct names containing `query` (case-insensitive), first seen first.
    pub fn suggest_names(&self, query: &str, limit: usize) -> Vec<String> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        let mut names: Vec<String> = Vec::new();
        for entry in &self.entries {
            if names.len() == limit {
                break;
            }
            if entry.name.to_lowercase().contains(&query) && !names.contains(&entry.name) {
                names.push(entry.name.clone());
            }
        }
        names
    }

    fn next_id(&self) -> EntryId {
        loop {
            let id = EntryId::generate();
            if !self.entries.iter().any(|entry| entry.id == id) {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::collections::HashSet;

    #[test]
    fn add_then_list_contains_entry_once() {
        let mut store = MemoryStore::new();
        let mut entries = EntryStore::load(&store);
        let first = entries
            .add_entry(&mut store, EntryDraft::new("Anbu", 2, 500, 450), "Thanjavur")
            .unwrap();
        let second = entries
            .add_entry(&mut store, EntryDraft::new("Bala", 1, 300, 300), "Thanjavur")
            .unwrap();

        assert_ne!(first.id, second.id);
        let listed = entries.list_entries();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed.iter().filter(|e| e.id == second.id).count(), 1);
        assert_eq!(listed[0], first);
        assert_eq!(second.location, "Thanjavur");
    }

    #[test]
    fn ids_stay_unique_under_rapid_adds() {
        let mut store = MemoryStore::new();
        let mut entries = EntryStore::default();
        for i in 0..500 {
            entries
                .add_entry(&mut store, EntryDraft::new("Rapid", 0, i, i), "Mannargudi")
                .unwrap();
        }
        let ids: HashSet<_> = entries.list_entries().iter().map(|e| e.id.clone()).collect();
        assert_eq!(ids.len(), 500);
    }

    #[test]
    fn missing_fields_are_rejected_without_change() {
        let mut store = MemoryStore::new();
        let mut entries = EntryStore::default();

        let blank_name = EntryDraft::new("   ", 1, 1, 1);
        assert_eq!(
            entries.add_entry(&mut store, blank_name, "Thanjavur"),
            Err(EntryError::MissingField("name"))
        );

        let no_sales = EntryDraft {
            sales: None,
            ..EntryDraft::new("Chitra", 1, 1, 1)
        };
        assert_eq!(
            entries.add_entry(&mut store, no_sales, "Thanjavur"),
            Err(EntryError::MissingField("sales"))
        );

        assert!(entries.list_entries().is_empty());
        assert!(store.get_item(ENTRIES_KEY).is_none());
    }

    #[test]
    fn entries_survive_reload() {
        let mut store = MemoryStore::new();
        let mut entries = EntryStore::default();
        let added = entries
            .add_entry(&mut store, EntryDraft::new("Devi", 4, 900, 850), "Chidambaram")
            .unwrap();

        let reloaded = EntryStore::load(&store);
        assert_eq!(reloaded.list_entries(), &[added]);
    }

    #[test]
    fn clear_empties_and_persists() {
        let mut store = MemoryStore::new();
        let mut entries = EntryStore::default();
        entries.clear_entries(&mut store);
        assert!(entries.list_entries().is_empty());

        entries
            .add_entry(&mut store, EntryDraft::new("Ezhil", 1, 10, 10), "Thanjavur")
            .unwrap();
        entries.clear_entries(&mut store);
        assert!(entries.list_entries().is_empty());
        assert!(EntryStore::load(&store).list_entries().is_empty());
    }

    #[test]
    fn corrupt_entries_load_as_empty() {
        let store = MemoryStore::new().with_item(ENTRIES_KEY, "not json");
        assert!(EntryStore::load(&store).list_entries().is_empty());
    }

    #[test]
    fn malformed_records_are_skipped_on_load() {
        let store = MemoryStore::new().with_item(
            ENTRIES_KEY,
            r#"[
                {"id":"a","name":"Keep","guest":1,"sales":10,"reportSales":9,"location":"Thanjavur"},
                {"id":"b","name":"Negative","guest":-3,"sales":5,"reportSales":5,"location":"Thanjavur"},
                {"id":"c","name":"Short"},
                {"id":"a","name":"Again","guest":2,"sales":1,"reportSales":1,"location":"Thanjavur"},
                {"id":"d","name":"Also","guest":0,"sales":20,"reportSales":18,"location":"Mannargudi"}
            ]"#,
        );
        let entries = EntryStore::load(&store);
        let names: Vec<&str> = entries.list_entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Keep", "Also"]);
    }

    #[test]
    fn suggestions_are_distinct_and_limited() {
        let mut store = MemoryStore::new();
        let mut entries = EntryStore::default();
        for name in ["Karthik", "karuna", "Karthik", "Meena", "Kamal", "Kala", "Kasi", "Kani"] {
            entries
                .add_entry(&mut store, EntryDraft::new(name, 1, 1, 1), "Thanjavur")
                .unwrap();
        }

        assert_eq!(
            entries.suggest_names("KAR", 5),
            vec!["Karthik".to_string(), "karuna".to_string()]
        );
        assert_eq!(entries.suggest_names("ka", 5).len(), 5);
        assert!(entries.suggest_names("", 5).is_empty());
    }
}
