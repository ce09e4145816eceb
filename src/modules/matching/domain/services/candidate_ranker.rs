use std::cmp::Reverse;

use tracing::warn;

use crate::modules::matching::domain::{
    entities::{CandidateRecord, ProfessorProfile, ReviewSummary, TagSummary},
    services::name_processor::MatchingConfig,
};

/// Orders matched candidates and projects the winner into a profile.
pub struct CandidateRanker {
    max_reviews: Option<usize>,
    profile_link_base: String,
}

impl CandidateRanker {
    pub fn new(config: &MatchingConfig) -> Self {
        Self {
            max_reviews: config.max_reviews,
            profile_link_base: config.profile_link_base.clone(),
        }
    }

    /// Rated candidates first, then by rating count descending. The sort is
    /// stable so ties keep search-result order.
    pub fn rank<'a>(&self, mut matched: Vec<&'a CandidateRecord>) -> Vec<&'a CandidateRecord> {
        matched.sort_by_key(|c| (Reverse(c.has_ratings()), Reverse(c.num_ratings)));
        matched
    }

    /// Top-ranked candidate, except that an unrated head loses to the first
    /// rated candidate behind it. The directory sometimes lists empty duplicate
    /// records ahead of the real one.
    pub fn select<'a>(&self, ranked: &[&'a CandidateRecord]) -> Option<&'a CandidateRecord> {
        let top = *ranked.first()?;
        let selected = if top.has_ratings() {
            top
        } else {
            ranked
                .iter()
                .copied()
                .find(|c| c.has_ratings())
                .unwrap_or(top)
        };

        self.flag_department_mismatch(selected, ranked);
        Some(selected)
    }

    /// Preferring the rated record assumes same-name duplicates are one person.
    /// When departments disagree that assumption is shaky, so say so.
    fn flag_department_mismatch(&self, selected: &CandidateRecord, ranked: &[&CandidateRecord]) {
        let selected_name = selected.full_name().to_lowercase();
        for other in ranked.iter().filter(|c| !std::ptr::eq(**c, selected)) {
            if other.full_name().to_lowercase() == selected_name
                && !other.department.trim().is_empty()
                && !selected.department.trim().is_empty()
                && !other
                    .department
                    .trim()
                    .eq_ignore_ascii_case(selected.department.trim())
            {
                warn!(
                    "Chose '{}' ({}, id {}) over same-name record in {} (id {}); they may be different people",
                    selected.full_name(),
                    selected.department,
                    selected.id,
                    other.department,
                    other.id
                );
            }
        }
    }

    pub fn project(&self, candidate: &CandidateRecord) -> ProfessorProfile {
        let review_limit = self.max_reviews.unwrap_or(usize::MAX);
        let department = candidate.department.trim();

        ProfessorProfile {
            professor_name: candidate.full_name(),
            department: (!department.is_empty()).then(|| department.to_string()),
            rating: candidate.avg_rating,
            difficulty: candidate.avg_difficulty,
            would_take_again: candidate.would_take_again_percent,
            num_ratings: candidate.num_ratings,
            top_tags: candidate
                .tags
                .iter()
                .map(|tag| TagSummary {
                    name: tag.name.clone(),
                    count: tag.count,
                })
                .collect(),
            comments: candidate
                .reviews
                .iter()
                .take(review_limit)
                .map(|review| ReviewSummary {
                    comment: review.comment.clone(),
                    course: review.course.clone(),
                    likes: review.likes_count,
                    dislikes: review.dislikes_count,
                })
                .collect(),
            profile_link: format!("{}{}", self.profile_link_base, candidate.id),
        }
    }
}
