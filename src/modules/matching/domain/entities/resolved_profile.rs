use serde::{Deserialize, Serialize};

/// Outcome of resolving one scraped name.
///
/// `NotFound` means the directory was searched and nothing acceptable came
/// back. Failing to search at all is an `AppError`, never this variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResolvedProfile {
    Found(ProfessorProfile),
    NotFound,
}

impl ResolvedProfile {
    pub fn not_found() -> Self {
        ResolvedProfile::NotFound
    }

    pub fn is_found(&self) -> bool {
        matches!(self, ResolvedProfile::Found(_))
    }

    pub fn profile(&self) -> Option<&ProfessorProfile> {
        match self {
            ResolvedProfile::Found(profile) => Some(profile),
            ResolvedProfile::NotFound => None,
        }
    }

    pub fn into_profile(self) -> Option<ProfessorProfile> {
        match self {
            ResolvedProfile::Found(profile) => Some(profile),
            ResolvedProfile::NotFound => None,
        }
    }
}

/// Directory data projected for display. `None` marks a statistic the
/// directory does not have.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessorProfile {
    pub professor_name: String,
    pub department: Option<String>,
    pub rating: Option<f64>,
    pub difficulty: Option<f64>,
    pub would_take_again: Option<f64>,
    pub num_ratings: u32,
    pub top_tags: Vec<TagSummary>,
    pub comments: Vec<ReviewSummary>,
    pub profile_link: String,
}

impl ProfessorProfile {
    pub fn rating_band(&self) -> RatingBand {
        RatingBand::from_rating(self.rating)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagSummary {
    pub name: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewSummary {
    pub comment: String,
    pub course: String,
    pub likes: u32,
    pub dislikes: u32,
}

/// Coarse rating classification used for badge colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatingBand {
    Low,
    Medium,
    High,
    Unknown,
}

impl RatingBand {
    pub fn from_rating(rating: Option<f64>) -> Self {
        match rating {
            Some(r) if (0.0..=2.9).contains(&r) => RatingBand::Low,
            Some(r) if (3.0..=3.9).contains(&r) => RatingBand::Medium,
            Some(r) if (4.0..=5.0).contains(&r) => RatingBand::High,
            _ => RatingBand::Unknown,
        }
    }
}
