use crate::errors::SessionError;
use crate::models::{Page, SessionState};
use crate::storage::{self, KeyValueStore, LOCATION_KEY, PAGE_KEY};

#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
}

impl Session {
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let state = SessionState {
            current_page: storage::load(store, PAGE_KEY, Page::Login),
            location: storage::load(store, LOCATION_KEY, String::new()),
        };
        // Input and Output are only reachable through a non-empty login.
        if state.current_page != Page::Login && state.location.trim().is_empty() {
            return Self::default();
        }
        Self { state }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn current_page(&self) -> Page {
        self.state.current_page
    }

    pub fn location(&self) -> &str {
        &self.state.location
    }

    pub fn login(&mut self, store: &mut dyn KeyValueStore, location: &str) -> Result<(), SessionError> {
        self.require(Page::Login, "log in")?;
        let location = location.trim();
        if location.is_empty() {
            return Err(SessionError::EmptyLocation);
        }
        self.state.location = location.to_string();
        self.state.current_page = Page::Input;
        self.persist(store);
        Ok(())
    }

    pub fn go_to_output(&mut self, store: &mut dyn KeyValueStore) -> Result<(), SessionError> {
        self.require(Page::Input, "view rankings")?;
        self.state.current_page = Page::Output;
        self.persist(store);
        Ok(())
    }

    pub fn go_to_input(&mut self, store: &mut dyn KeyValueStore) -> Result<(), SessionError> {
        self.require(Page::Output, "add entries")?;
        self.state.current_page = Page::Input;
        self.persist(store);
        Ok(())
    }

    pub fn logout(&mut self, store: &mut dyn KeyValueStore) {
        self.state = SessionState::default();
        self.persist(store);
    }

    pub(crate) fn require(&self, page: Page, action: &'static str) -> Result<(), SessionError> {
        if self.state.current_page == page {
            Ok(())
        } else {
            Err(SessionError::InvalidTransition {
                from: self.state.current_page,
                action,
            })
        }
    }

    fn persist(&self, store: &mut dyn KeyValueStore) {
        storage::save(store, PAGE_KEY, &self.state.current_page);
        storage::save(store, LOCATION_KEY, &self.state.location);
    }
}
