use serde::{Deserialize, Serialize};

/// A person profile as returned by the directory search.
///
/// Owned by the search collaborator; matching code only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub avg_rating: Option<f64>,
    pub avg_difficulty: Option<f64>,
    pub num_ratings: u32,
    pub would_take_again_percent: Option<f64>,
    #[serde(default)]
    pub tags: Vec<CandidateTag>,
    #[serde(default)]
    pub reviews: Vec<ReviewRecord>,
}

impl CandidateRecord {
    pub fn new(id: impl Into<String>, first_name: &str, last_name: &str) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            department: String::new(),
            avg_rating: None,
            avg_difficulty: None,
            num_ratings: 0,
            would_take_again_percent: None,
            tags: Vec::new(),
            reviews: Vec::new(),
        }
    }

    pub fn with_department(mut self, department: &str) -> Self {
        self.department = department.to_string();
        self
    }

    pub fn with_ratings(mut self, num_ratings: u32, avg_rating: f64, avg_difficulty: f64) -> Self {
        self.num_ratings = num_ratings;
        self.avg_rating = Some(avg_rating);
        self.avg_difficulty = Some(avg_difficulty);
        self
    }

    pub fn has_ratings(&self) -> bool {
        self.num_ratings > 0
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateTag {
    pub name: String,
    pub count: u32,
}

/// One student review attached to a candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    pub comment: String,
    pub course: String,
    pub likes_count: u32,
    pub dislikes_count: u32,
}
