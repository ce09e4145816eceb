use std::sync::Arc;

use futures::{stream, StreamExt};
use tracing::{debug, info};

use crate::modules::matching::{
    domain::{
        entities::{CandidateRecord, ResolvedProfile},
        repositories::CandidateSearchRepository,
        services::{
            name_processor::{MatchingConfig, NameNormalizer},
            CandidateRanker, MatchPolicy,
        },
        value_objects::{NameMappings, NamePartition},
    },
    infrastructure::cache::ResultCache,
};
use crate::shared::{
    errors::{AppError, AppResult},
    utils::logger::{LogContext, TimedOperation},
};

/// Resolves scraped instructor names to directory profiles
///
/// Orchestrates the whole pipeline:
/// - Apply injected name mappings and clean the raw name
/// - Generate first/last partitions and query the search port once
/// - Keep candidates accepted by [`MatchPolicy`] under any partition
/// - Rank, select and project the winner with [`CandidateRanker`]
///
/// Search failures propagate as errors. "Nothing to search" and "nothing
/// matched" both come back as [`ResolvedProfile::NotFound`].
pub struct ProfileResolver {
    search: Arc<dyn CandidateSearchRepository>,
    cache: Arc<ResultCache>,
    normalizer: Arc<NameNormalizer>,
    policy: MatchPolicy,
    ranker: CandidateRanker,
    mappings: Arc<NameMappings>,
    config: MatchingConfig,
}

impl ProfileResolver {
    /// Resolver with default matching configuration and no name mappings
    pub fn new(search: Arc<dyn CandidateSearchRepository>) -> AppResult<Self> {
        Self::with_config(search, MatchingConfig::default(), NameMappings::new())
    }

    pub fn with_config(
        search: Arc<dyn CandidateSearchRepository>,
        config: MatchingConfig,
        mappings: NameMappings,
    ) -> AppResult<Self> {
        config.validate().map_err(AppError::ValidationError)?;

        let normalizer = Arc::new(NameNormalizer::new(&config)?);
        let cache = Arc::new(ResultCache::new(config.cache_capacity)?);

        Ok(Self {
            search,
            cache,
            policy: MatchPolicy::new(&config, Arc::clone(&normalizer)),
            ranker: CandidateRanker::new(&config),
            normalizer,
            mappings: Arc::new(mappings),
            config,
        })
    }

    /// Shared result cache, for callers that check or seed it around `resolve`
    pub fn cache(&self) -> &Arc<ResultCache> {
        &self.cache
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Resolve one raw name without touching the cache
    pub async fn resolve(&self, raw_name: &str) -> AppResult<ResolvedProfile> {
        let timer = TimedOperation::new("resolve");

        let mapped = self.mappings.apply(raw_name);
        let cleaned = self.normalizer.clean(mapped);
        if cleaned.is_empty() {
            debug!("'{}' is empty after cleaning, skipping search", raw_name);
            LogContext::resolution_outcome(raw_name, None);
            timer.finish_with_info("empty input");
            return Ok(ResolvedProfile::not_found());
        }

        let partitions = NameNormalizer::generate_partitions(&cleaned.to_lowercase());
        let candidates = self.search_with_timeout(&cleaned).await?;
        if candidates.is_empty() {
            LogContext::resolution_outcome(raw_name, None);
            timer.finish_with_info("no candidates");
            return Ok(ResolvedProfile::not_found());
        }

        let matched = self.filter_matches(&partitions, &candidates);
        debug!(
            "{} of {} candidates accepted for '{}'",
            matched.len(),
            candidates.len(),
            cleaned
        );

        let ranked = self.ranker.rank(matched);
        let Some(selected) = self.ranker.select(&ranked) else {
            LogContext::resolution_outcome(raw_name, None);
            timer.finish_with_info("no match");
            return Ok(ResolvedProfile::not_found());
        };

        let profile = self.ranker.project(selected);
        LogContext::resolution_outcome(raw_name, Some(&profile.professor_name));
        timer.finish_with_info(&format!("{} candidates", candidates.len()));
        Ok(ResolvedProfile::Found(profile))
    }

    /// Cache lookup, then `resolve` on a miss. Found and not-found results are
    /// stored under the exact raw string; errors are returned without caching.
    pub async fn resolve_cached(&self, raw_name: &str) -> AppResult<ResolvedProfile> {
        if let Some(hit) = self.cache.get(raw_name) {
            LogContext::cache_event(raw_name, true);
            return Ok(hit);
        }
        LogContext::cache_event(raw_name, false);

        let resolved = self.resolve(raw_name).await?;
        self.cache.set(raw_name, resolved.clone());
        Ok(resolved)
    }

    /// Resolve many names concurrently through the cache. Results come back
    /// in input order, one per name.
    pub async fn resolve_many(&self, raw_names: &[String]) -> Vec<AppResult<ResolvedProfile>> {
        info!(
            "Resolving {} names (concurrency {})",
            raw_names.len(),
            self.config.max_concurrent_resolutions
        );

        stream::iter(raw_names)
            .map(|name| self.resolve_cached(name))
            .buffered(self.config.max_concurrent_resolutions)
            .collect()
            .await
    }

    async fn search_with_timeout(&self, query: &str) -> AppResult<Vec<CandidateRecord>> {
        let timeout = self.config.search_timeout;
        match tokio::time::timeout(timeout, self.search.search_candidates(query)).await {
            Ok(Ok(candidates)) => Ok(candidates),
            Ok(Err(e)) => {
                LogContext::error_with_context(&e, &format!("Search for '{}' failed", query));
                Err(e)
            }
            Err(_) => Err(AppError::Timeout(format!(
                "Search for '{}' exceeded {}ms",
                query,
                timeout.as_millis()
            ))),
        }
    }

    /// Candidates accepted under at least one partition, in search order.
    /// Each candidate is normalized once and checked against partitions
    /// until the first acceptance.
    fn filter_matches<'a>(
        &self,
        partitions: &[NamePartition],
        candidates: &'a [CandidateRecord],
    ) -> Vec<&'a CandidateRecord> {
        candidates
            .iter()
            .filter(|candidate| {
                let normalized = self.policy.normalize_candidate(candidate);
                match partitions
                    .iter()
                    .find(|p| self.policy.accepts_normalized(p, &normalized))
                {
                    Some(partition) => {
                        debug!("Accepted '{}' via '{}'", candidate.full_name(), partition);
                        true
                    }
                    None => {
                        debug!("Rejected '{}'", candidate.full_name());
                        false
                    }
                }
            })
            .collect()
    }
}
