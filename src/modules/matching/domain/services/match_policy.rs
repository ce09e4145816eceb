use std::collections::HashSet;
use std::sync::Arc;

use crate::modules::matching::domain::{
    entities::CandidateRecord,
    services::name_processor::{HybridStrategy, MatchingConfig, NameNormalizer, SimilarityStrategy},
    value_objects::NamePartition,
};

/// Decides whether a directory record is the person a name partition describes.
///
/// A pure predicate: neither the partition nor the record is modified.
/// Partitions are expected lowercased; candidate names are cleaned per part
/// (hyphens split into words) and lowercased here.
///
/// A candidate is accepted when any of these holds:
/// 1. the partition's first name is a title ("dr") and the surnames are similar
/// 2. both first and last names match (see `first_name_matches`/`last_name_matches`)
/// 3. surnames are equal and the candidate's first name starts with the partition's
pub struct MatchPolicy {
    similarity: HybridStrategy,
    normalizer: Arc<NameNormalizer>,
    titles: HashSet<String>,
    strict_threshold: f64,
    relaxed_threshold: f64,
    short_name_length: usize,
}

impl MatchPolicy {
    pub fn new(config: &MatchingConfig, normalizer: Arc<NameNormalizer>) -> Self {
        Self {
            similarity: HybridStrategy::new(config.jaro_winkler_weight, config.levenshtein_weight),
            normalizer,
            titles: config
                .title_prefixes
                .iter()
                .map(|t| t.to_lowercase())
                .collect(),
            strict_threshold: config.strict_threshold,
            relaxed_threshold: config.relaxed_threshold,
            short_name_length: config.short_name_length,
        }
    }

    /// Candidate's names cleaned and lowercased the same way partitions are
    pub fn normalize_candidate(&self, candidate: &CandidateRecord) -> NamePartition {
        NamePartition::new(
            self.normalizer.clean_part(&candidate.first_name).to_lowercase(),
            self.normalizer.clean_part(&candidate.last_name).to_lowercase(),
        )
    }

    pub fn accepts(&self, partition: &NamePartition, candidate: &CandidateRecord) -> bool {
        self.accepts_normalized(partition, &self.normalize_candidate(candidate))
    }

    /// Same as `accepts`, for a candidate already passed through `normalize_candidate`
    pub fn accepts_normalized(&self, partition: &NamePartition, candidate: &NamePartition) -> bool {
        self.title_match(partition, candidate)
            || (self.last_name_matches(&partition.last_name, &candidate.last_name)
                && self.first_name_matches(&partition.first_name, &candidate.first_name))
            || Self::prefix_match(partition, candidate)
    }

    /// 0.95 for short strings, where one edit moves the score a lot; 0.85 otherwise
    pub fn adaptive_threshold(&self, a: &str, b: &str) -> f64 {
        if a.chars().count().min(b.chars().count()) < self.short_name_length {
            self.strict_threshold
        } else {
            self.relaxed_threshold
        }
    }

    /// Similarity test shared by every rule. Single characters are initials
    /// and match by prefix instead of by score.
    pub fn is_similar(&self, a: &str, b: &str) -> bool {
        if a.is_empty() || b.is_empty() {
            return false;
        }

        let (a_len, b_len) = (a.chars().count(), b.chars().count());
        if a_len == 1 || b_len == 1 {
            return if a_len <= b_len {
                b.starts_with(a)
            } else {
                a.starts_with(b)
            };
        }

        self.similarity.calculate(a, b) >= self.adaptive_threshold(a, b)
    }

    /// An empty partition first name is the surname-only reading and matches anyone
    pub fn first_name_matches(&self, partition_first: &str, candidate_first: &str) -> bool {
        if partition_first.is_empty() {
            return true;
        }
        if partition_first.chars().count() == 1 {
            return candidate_first.starts_with(partition_first);
        }
        if candidate_first.chars().count() == 1 {
            return partition_first.starts_with(candidate_first);
        }
        self.similarity.calculate(partition_first, candidate_first)
            >= self.adaptive_threshold(partition_first, candidate_first)
    }

    pub fn last_name_matches(&self, partition_last: &str, candidate_last: &str) -> bool {
        if partition_last.is_empty() {
            return false;
        }

        if self.is_similar(partition_last, candidate_last) {
            return true;
        }

        if candidate_last
            .split_whitespace()
            .any(|token| self.is_similar(partition_last, token))
        {
            return true;
        }

        if partition_last.contains('-') || candidate_last.contains('-') {
            return partition_last
                .split('-')
                .any(|segment| self.is_similar(segment, candidate_last))
                || candidate_last
                    .split('-')
                    .any(|segment| self.is_similar(segment, partition_last));
        }

        false
    }

    fn title_match(&self, partition: &NamePartition, candidate: &NamePartition) -> bool {
        self.titles.contains(&partition.first_name)
            && self.is_similar(&partition.last_name, &candidate.last_name)
    }

    fn prefix_match(partition: &NamePartition, candidate: &NamePartition) -> bool {
        candidate.last_name == partition.last_name
            && !partition.first_name.is_empty()
            && candidate.first_name.starts_with(&partition.first_name)
    }
}
