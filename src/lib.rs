//! Resolve noisy, scraped instructor names to rating-directory profiles.
//!
//! ```no_run
//! use std::sync::Arc;
//! use profmatch_lib::{init_logger, DirectoryConfig, ProfileResolver, RmpSearchAdapter};
//!
//! # async fn run() -> profmatch_lib::AppResult<()> {
//! init_logger();
//! let search = Arc::new(RmpSearchAdapter::new(&DirectoryConfig::from_env()?));
//! let resolver = ProfileResolver::new(search)?;
//!
//! let resolved = resolver.resolve_cached("Dr. J. Smith").await?;
//! if let Some(profile) = resolved.profile() {
//!     println!("{} ({:?})", profile.professor_name, profile.rating_band());
//! }
//! # Ok(())
//! # }
//! ```

pub mod modules;
pub mod shared;

pub use modules::matching::{
    CacheStats, CandidateRecord, CandidateSearchRepository, NameMappings, NamePartition,
    ProfessorProfile, ProfileResolver, ResolvedProfile, ResultCache, ReviewCursor,
    RmpSearchAdapter,
};
pub use modules::matching::domain::services::name_processor::{MatchingConfig, NameNormalizer};
pub use shared::utils::logger::init_logger;
pub use shared::{AppError, AppResult, DirectoryConfig};
