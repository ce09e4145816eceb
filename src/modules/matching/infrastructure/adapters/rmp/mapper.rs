use super::models::{TeacherNode, TeacherSearchData};
use crate::modules::matching::domain::entities::{CandidateRecord, CandidateTag, ReviewRecord};

/// Maps directory search payloads onto domain candidates
pub struct RmpMapper;

impl RmpMapper {
    pub fn new() -> Self {
        Self
    }

    /// Candidates in the order the directory returned them. A payload without
    /// a `newSearch` or `teachers` section is an empty result.
    pub fn map_search(&self, data: TeacherSearchData) -> Vec<CandidateRecord> {
        data.new_search
            .and_then(|search| search.teachers)
            .map(|teachers| {
                teachers
                    .edges
                    .into_iter()
                    .map(|edge| self.map_teacher(edge.node))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn map_teacher(&self, node: TeacherNode) -> CandidateRecord {
        let num_ratings = node.num_ratings.unwrap_or(0);
        // The directory reports 0 averages (and -1 percentages) for unrated teachers
        let statistic = |value: Option<f64>| value.filter(|v| num_ratings > 0 && *v >= 0.0);

        let id = node
            .legacy_id
            .map(|id| id.to_string())
            .or(node.id)
            .unwrap_or_default();

        CandidateRecord {
            id,
            first_name: node.first_name.trim().to_string(),
            last_name: node.last_name.trim().to_string(),
            department: node.department.unwrap_or_default().trim().to_string(),
            avg_rating: statistic(node.avg_rating),
            avg_difficulty: statistic(node.avg_difficulty),
            num_ratings,
            would_take_again_percent: statistic(node.would_take_again_percent),
            tags: node
                .teacher_rating_tags
                .into_iter()
                .map(|tag| CandidateTag {
                    name: tag.tag_name,
                    count: tag.tag_count,
                })
                .collect(),
            reviews: node
                .ratings
                .map(|ratings| {
                    ratings
                        .edges
                        .into_iter()
                        .map(|edge| ReviewRecord {
                            comment: edge.node.comment,
                            course: edge.node.course,
                            likes_count: edge.node.thumbs_up_total,
                            dislikes_count: edge.node.thumbs_down_total,
                        })
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

impl Default for RmpMapper {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> TeacherSearchData {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_maps_full_teacher() {
        let data = parse(json!({
            "newSearch": { "teachers": { "edges": [ { "node": {
                "id": "VGVhY2hlci0xMjM=",
                "legacyId": 123,
                "firstName": " Ada ",
                "lastName": "Lovelace",
                "department": "Mathematics",
                "avgRating": 4.6,
                "avgDifficulty": 3.1,
                "numRatings": 12,
                "wouldTakeAgainPercent": 91.5,
                "teacherRatingTags": [ { "tagName": "Caring", "tagCount": 5 } ],
                "ratings": { "edges": [ { "node": {
                    "comment": "Loved it", "class": "MATH122",
                    "thumbsUpTotal": 2, "thumbsDownTotal": 0
                } } ] }
            } } ] } }
        }));

        let candidates = RmpMapper::new().map_search(data);
        assert_eq!(candidates.len(), 1);
        let ada = &candidates[0];
        assert_eq!(ada.id, "123");
        assert_eq!(ada.first_name, "Ada");
        assert_eq!(ada.avg_rating, Some(4.6));
        assert_eq!(ada.would_take_again_percent, Some(91.5));
        assert_eq!(ada.tags[0].name, "Caring");
        assert_eq!(ada.reviews[0].course, "MATH122");
        assert_eq!(ada.reviews[0].likes_count, 2);
    }

    #[test]
    fn test_unrated_statistics_become_unknown() {
        let data = parse(json!({
            "newSearch": { "teachers": { "edges": [ { "node": {
                "legacyId": 7,
                "firstName": "New",
                "lastName": "Hire",
                "avgRating": 0,
                "avgDifficulty": 0,
                "numRatings": 0,
                "wouldTakeAgainPercent": -1
            } } ] } }
        }));

        let candidate = &RmpMapper::new().map_search(data)[0];
        assert_eq!(candidate.avg_rating, None);
        assert_eq!(candidate.avg_difficulty, None);
        assert_eq!(candidate.would_take_again_percent, None);
        assert!(candidate.reviews.is_empty());
    }

    #[test]
    fn test_missing_sections_are_empty() {
        let mapper = RmpMapper::new();
        assert!(mapper.map_search(parse(json!({ "newSearch": null }))).is_empty());
        assert!(mapper
            .map_search(parse(json!({ "newSearch": { "teachers": null } })))
            .is_empty());
        assert!(mapper
            .map_search(parse(json!({ "newSearch": { "teachers": { "edges": [] } } })))
            .is_empty());
    }
}
