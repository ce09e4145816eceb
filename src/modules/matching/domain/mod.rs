pub mod entities;
pub mod repositories;
pub mod services;
pub mod value_objects;

pub use entities::{CandidateRecord, ProfessorProfile, ResolvedProfile};
pub use repositories::CandidateSearchRepository;
pub use value_objects::{NameMappings, NamePartition, ReviewCursor};
