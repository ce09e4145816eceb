pub mod name_mappings;
pub mod name_partition;
pub mod review_cursor;

pub use name_mappings::NameMappings;
pub use name_partition::NamePartition;
pub use review_cursor::ReviewCursor;
