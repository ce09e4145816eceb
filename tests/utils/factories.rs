/// Test data factories using builder pattern
///
/// Provides convenient methods to create directory records with sensible defaults
use profmatch_lib::modules::matching::domain::entities::{
    CandidateRecord, CandidateTag, ReviewRecord,
};

pub struct CandidateFactory {
    id: String,
    first_name: String,
    last_name: String,
    department: String,
    num_ratings: u32,
    avg_rating: Option<f64>,
    avg_difficulty: Option<f64>,
    would_take_again: Option<f64>,
    tags: Vec<CandidateTag>,
    reviews: Vec<ReviewRecord>,
}

impl Default for CandidateFactory {
    fn default() -> Self {
        Self {
            id: format!("{}", rand::random::<u32>() % 1000000 + 1000),
            first_name: "Test".to_string(),
            last_name: "Instructor".to_string(),
            department: String::new(),
            num_ratings: 0,
            avg_rating: None,
            avg_difficulty: None,
            would_take_again: None,
            tags: Vec::new(),
            reviews: Vec::new(),
        }
    }
}

impl CandidateFactory {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self::default().with_name(first_name, last_name)
    }

    /// Rated record with tags and two reviews
    pub fn complete(first_name: &str, last_name: &str) -> Self {
        Self::new(first_name, last_name)
            .with_department("Computer Science")
            .with_ratings(12, 4.2, 2.8)
            .with_would_take_again(88.0)
            .with_tag("Clear grading criteria", 6)
            .with_tag("Caring", 3)
            .with_review("Great lectures", "CS101", 4, 0)
            .with_review("Tough exams", "CS201", 1, 2)
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn with_name(mut self, first_name: &str, last_name: &str) -> Self {
        self.first_name = first_name.to_string();
        self.last_name = last_name.to_string();
        self
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

    pub fn with_would_take_again(mut self, percent: f64) -> Self {
        self.would_take_again = Some(percent);
        self
    }

    pub fn with_tag(mut self, name: &str, count: u32) -> Self {
        self.tags.push(CandidateTag {
            name: name.to_string(),
            count,
        });
        self
    }

    pub fn with_review(mut self, comment: &str, course: &str, likes: u32, dislikes: u32) -> Self {
        self.reviews.push(ReviewRecord {
            comment: comment.to_string(),
            course: course.to_string(),
            likes_count: likes,
            dislikes_count: dislikes,
        });
        self
    }

    pub fn build(self) -> CandidateRecord {
        CandidateRecord {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            department: self.department,
            avg_rating: self.avg_rating,
            avg_difficulty: self.avg_difficulty,
            num_ratings: self.num_ratings,
            would_take_again_percent: self.would_take_again,
            tags: self.tags,
            reviews: self.reviews,
        }
    }
}
