use crate::entries::EntryStore;
use crate::errors::{EntryError, SessionError, SubmitError};
use crate::models::{Entry, EntryDraft, Page, RankedEntry, SessionState};
use crate::ranking;
use crate::session::Session;
use crate::storage::KeyValueStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    EntryAdded(Entry),
    EntriesCleared,
    SessionChanged(SessionState),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn Fn(&Change) + Send>;

pub struct SalesBoard {
    store: Box<dyn KeyValueStore>,
    entries: EntryStore,
    session: Session,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl SalesBoard {
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let entries = EntryStore::load(&*store);
        let session = Session::load(&*store);
        Self {
            store,
            entries,
            session,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn subscribe(&mut self, observer: impl Fn(&Change) + Send + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub fn session(&self) -> &SessionState {
        self.session.state()
    }

    pub fn list_entries(&self) -> &[Entry] {
        self.entries.list_entries()
    }

    pub fn rankings(&self) -> Vec<RankedEntry> {
        ranking::rank(self.entries.list_entries())
    }

    pub fn suggest_names(&self, query: &str) -> Vec<String> {
        self.entries.suggest_names(query, 5)
    }

    pub fn add_entry(&mut self, draft: EntryDraft, location: &str) -> Result<Entry, EntryError> {
        let entry = self.entries.add_entry(&mut *self.store, draft, location)?;
        self.notify(&Change::EntryAdded(entry.clone()));
        Ok(entry)
    }

    /// Adds an entry for the logged-in location and shows the rankings.
    pub fn submit_entry(&mut self, draft: EntryDraft) -> Result<Entry, SubmitError> {
        self.session.require(Page::Input, "save an entry")?;
        let location = self.session.location().to_string();
        let entry = self.add_entry(draft, &location)?;
        self.go_to_output()?;
        Ok(entry)
    }

    pub fn clear_entries(&mut self) {
        self.entries.clear_entries(&mut *self.store);
        self.notify(&Change::EntriesCleared);
    }

    pub fn login(&mut self, location: &str) -> Result<(), SessionError> {
        self.session.login(&mut *self.store, location)?;
        self.session_changed();
        Ok(())
    }

    pub fn go_to_output(&mut self) -> Result<(), SessionError> {
        self.session.go_to_output(&mut *self.store)?;
        self.session_changed();
        Ok(())
    }

    pub fn go_to_input(&mut self) -> Result<(), SessionError> {
        self.session.go_to_input(&mut *self.store)?;
        self.session_changed();
        Ok(())
    }

    pub fn logout(&mut self) {
        self.session.logout(&mut *self.store);
        self.session_changed();
    }

    fn session_changed(&self) {
        self.notify(&Change::SessionChanged(self.session.state().clone()));
    }

    fn notify(&self, change: &Change) {
        for (_, observer) in &self.observers {
            observer(change);
        }
    }
}
