//! GraphQL query templates for the rating directory

/// Free-text teacher search scoped to one school
pub const TEACHER_SEARCH_QUERY: &str = r#"
query TeacherSearch($text: String!, $schoolID: ID) {
  newSearch {
    teachers(query: { text: $text, schoolID: $schoolID }) {
      edges {
        node {
          id
          legacyId
          firstName
          lastName
          department
          avgRating
          avgDifficulty
          numRatings
          wouldTakeAgainPercent
          teacherRatingTags {
            tagName
            tagCount
          }
          ratings {
            edges {
              node {
                comment
                class
                thumbsUpTotal
                thumbsDownTotal
              }
            }
          }
        }
      }
    }
  }
}
"#;
