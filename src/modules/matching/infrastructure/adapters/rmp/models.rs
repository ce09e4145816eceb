//! Wire models for the directory's `newSearch.teachers` GraphQL response

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherSearchData {
    pub new_search: Option<NewSearch>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewSearch {
    pub teachers: Option<Connection<TeacherNode>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Connection<T> {
    #[serde(default = "Vec::new")]
    pub edges: Vec<Edge<T>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherNode {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub department: Option<String>,
    pub avg_rating: Option<f64>,
    pub avg_difficulty: Option<f64>,
    pub num_ratings: Option<u32>,
    pub would_take_again_percent: Option<f64>,
    pub legacy_id: Option<u64>,
    pub id: Option<String>,
    #[serde(default)]
    pub teacher_rating_tags: Vec<RatingTagNode>,
    pub ratings: Option<Connection<RatingNode>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingTagNode {
    pub tag_name: String,
    #[serde(default)]
    pub tag_count: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingNode {
    #[serde(default)]
    pub comment: String,
    #[serde(rename = "class", default)]
    pub course: String,
    #[serde(default)]
    pub thumbs_up_total: u32,
    #[serde(default)]
    pub thumbs_down_total: u32,
}
