pub mod config;
pub mod constant;
pub mod error;
pub mod fetcher;
pub mod logger;
pub mod models;
pub mod util;

pub use error::FetchError;
pub use fetcher::{extract_listener_count, get_listener_count, ListenerCount, ListenerCountFetcher};
