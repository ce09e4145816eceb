pub mod adapter;
pub mod mapper;
pub mod models;
pub mod queries;

pub use adapter::RmpSearchAdapter;
pub use mapper::RmpMapper;
