pub mod app;
pub mod board;
pub mod config;
pub mod entries;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod ranking;
pub mod session;
pub mod storage;
pub mod ui;
pub mod state;

pub use app::router;
pub use board::{Change, SalesBoard, SubscriptionId};
pub use config::Config;
pub use state::AppState;
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore, resolve_data_path};
