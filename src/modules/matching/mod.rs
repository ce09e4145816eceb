pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::ProfileResolver;
pub use domain::{
    CandidateRecord, CandidateSearchRepository, NameMappings, NamePartition, ProfessorProfile,
    ResolvedProfile, ReviewCursor,
};
pub use infrastructure::{CacheStats, ResultCache, RmpSearchAdapter};
