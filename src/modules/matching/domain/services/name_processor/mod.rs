//! Name processor module: the string-level building blocks of name matching.
//!
//! # Architecture
//!
//! - **Strategy Pattern**: `SimilarityStrategy` for pluggable string metrics
//! - **Pipeline Pattern**: `NameNormalizer` built from `NameTransformation` steps
//! - **Configuration Pattern**: `MatchingConfig` for externalized weights and thresholds
//!
//! # Usage
//!
//! ```rust
//! use profmatch_lib::modules::matching::domain::services::name_processor::*;
//!
//! let config = MatchingConfig::default();
//! let normalizer = NameNormalizer::new(&config).unwrap();
//!
//! let cleaned = normalizer.clean("J. Smith");
//! let partitions = NameNormalizer::generate_partitions(&cleaned.to_lowercase());
//! assert_eq!(partitions[1].first_name, "j");
//!
//! assert!(combined_similarity("smith", "smyth") > 0.85);
//! ```

pub mod config;
pub mod name_normalizer;
pub mod similarity;

// Re-export main types
pub use config::{MatchingConfig, MatchingConfigBuilder};
pub use name_normalizer::{
    CollapseInitialsTransform, DropTitleOnlyTransform, NameNormalizer, NameTransformation,
    NormalizeWhitespaceTransform, RemovePlaceholdersTransform, RemovePunctuationTransform,
    SplitHyphensTransform,
};
pub use similarity::{
    combined_similarity, edit_similarity, prefix_weighted_similarity, HybridStrategy,
    JaroWinklerStrategy, LevenshteinStrategy, SimilarityStrategy,
};
