use crate::modules::matching::domain::entities::ReviewSummary;

/// Position within a (possibly course-filtered) list of reviews.
///
/// Transitions consume the cursor and return the next state; nothing is
/// captured or mutated behind the caller's back.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewCursor {
    filtered: Vec<ReviewSummary>,
    index: usize,
}

impl ReviewCursor {
    pub fn new(reviews: &[ReviewSummary]) -> Self {
        Self {
            filtered: reviews.to_vec(),
            index: 0,
        }
    }

    pub fn current(&self) -> Option<&ReviewSummary> {
        self.filtered.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.filtered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    /// Advance one review, wrapping to the first after the last.
    pub fn advance(self) -> Self {
        if self.filtered.is_empty() {
            return self;
        }
        let index = (self.index + 1) % self.filtered.len();
        Self { index, ..self }
    }

    /// Step back one review, wrapping to the last before the first.
    pub fn retreat(self) -> Self {
        if self.filtered.is_empty() {
            return self;
        }
        let index = (self.index + self.filtered.len() - 1) % self.filtered.len();
        Self { index, ..self }
    }

    /// Restrict to reviews for `course` (case-insensitive) from the full list,
    /// resetting to the first one. `None` clears the filter.
    pub fn filter_by_course(self, reviews: &[ReviewSummary], course: Option<&str>) -> Self {
        let filtered = match course {
            Some(course) => reviews
                .iter()
                .filter(|review| review.course.eq_ignore_ascii_case(course.trim()))
                .cloned()
                .collect(),
            None => reviews.to_vec(),
        };
        Self { filtered, index: 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(course: &str, comment: &str) -> ReviewSummary {
        ReviewSummary {
            comment: comment.to_string(),
            course: course.to_string(),
            likes: 0,
            dislikes: 0,
        }
    }

    fn sample() -> Vec<ReviewSummary> {
        vec![
            review("CECS274", "first"),
            review("CECS328", "second"),
            review("CECS274", "third"),
        ]
    }

    #[test]
    fn test_advance_and_retreat_wrap() {
        let cursor = ReviewCursor::new(&sample());
        assert_eq!(cursor.current().unwrap().comment, "first");

        let cursor = cursor.retreat();
        assert_eq!(cursor.current().unwrap().comment, "third");

        let cursor = cursor.advance().advance();
        assert_eq!(cursor.current().unwrap().comment, "second");
    }

    #[test]
    fn test_filter_by_course_resets_index() {
        let reviews = sample();
        let cursor = ReviewCursor::new(&reviews).advance();
        let cursor = cursor.filter_by_course(&reviews, Some("cecs274"));

        assert_eq!(cursor.len(), 2);
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.advance().current().unwrap().comment, "third");
    }

    #[test]
    fn test_clearing_filter_restores_all() {
        let reviews = sample();
        let cursor = ReviewCursor::new(&reviews)
            .filter_by_course(&reviews, Some("CECS328"))
            .filter_by_course(&reviews, None);
        assert_eq!(cursor.len(), 3);
    }

    #[test]
    fn test_empty_cursor_is_stable() {
        let cursor = ReviewCursor::new(&[]).advance().retreat();
        assert!(cursor.is_empty());
        assert!(cursor.current().is_none());
    }
}
