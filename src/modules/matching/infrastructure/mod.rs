pub mod adapters;
pub mod cache;
pub mod http_client;

pub use adapters::RmpSearchAdapter;
pub use cache::{CacheStats, ResultCache};
