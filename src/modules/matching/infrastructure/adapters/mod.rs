pub mod rmp;

pub use rmp::RmpSearchAdapter;
