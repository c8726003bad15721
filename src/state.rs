use crate::board::SalesBoard;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub board: Arc<Mutex<SalesBoard>>,
    pub locations: Arc<Vec<String>>,
}

impl AppState {
    pub fn new(board: SalesBoard, locations: Vec<String>) -> Self {
        Self {
            board: Arc::new(Mutex::new(board)),
            locations: Arc::new(locations),
        }
    }

    pub fn is_known_location(&self, location: &str) -> bool {
        let location = location.trim();
        self.locations.iter().any(|known| known == location)
    }
}
