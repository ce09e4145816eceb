//! Rating directory search adapter
//!
//! GraphQL-based adapter that answers `CandidateSearchRepository` queries
//! against the directory's `newSearch.teachers` endpoint.

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::{
    modules::matching::{
        domain::{entities::CandidateRecord, repositories::CandidateSearchRepository},
        infrastructure::http_client::RateLimitClient,
    },
    shared::{
        config::DirectoryConfig,
        errors::{AppError, AppResult},
        utils::logger::LogContext,
    },
};

use super::{mapper::RmpMapper, models::TeacherSearchData, queries::TEACHER_SEARCH_QUERY};

/// Directory search adapter with GraphQL API
pub struct RmpSearchAdapter {
    http_client: RateLimitClient,
    endpoint: String,
    school_id: String,
    mapper: RmpMapper,
}

impl RmpSearchAdapter {
    pub fn new(config: &DirectoryConfig) -> Self {
        Self {
            http_client: RateLimitClient::for_directory(
                config.requests_per_second,
                config.auth_token.clone(),
            ),
            endpoint: config.endpoint.clone(),
            school_id: config.school_id.clone(),
            mapper: RmpMapper::new(),
        }
    }

    /// Build from `PROFMATCH_*` environment variables
    pub fn from_env() -> AppResult<Self> {
        Ok(Self::new(&DirectoryConfig::from_env()?))
    }

    /// Check if a request can be made now (for testing)
    pub fn can_make_request_now(&self) -> bool {
        self.http_client.can_make_request_now()
    }

    /// Request body for a teacher search
    pub fn search_body(&self, query: &str) -> Value {
        json!({
            "query": TEACHER_SEARCH_QUERY,
            "variables": {
                "text": query,
                "schoolID": self.school_id,
            }
        })
    }

    /// Pull `data` out of a GraphQL envelope, surfacing `errors` as an API error
    pub fn extract_data(response: Value) -> AppResult<TeacherSearchData> {
        if let Some(errors) = response.get("errors").filter(|e| !e.is_null()) {
            log::error!("Directory: GraphQL errors in response: {:?}", errors);
            return Err(AppError::ApiError(format!(
                "Directory GraphQL errors: {}",
                errors
            )));
        }

        match response.get("data") {
            Some(data) if !data.is_null() => serde_json::from_value(data.clone()).map_err(|e| {
                AppError::SerializationError(format!(
                    "Failed to deserialize directory data: {}",
                    e
                ))
            }),
            _ => {
                log::warn!("Directory: response carried no data, treating as empty");
                Ok(TeacherSearchData { new_search: None })
            }
        }
    }
}

#[async_trait]
impl CandidateSearchRepository for RmpSearchAdapter {
    async fn search_candidates(&self, query: &str) -> AppResult<Vec<CandidateRecord>> {
        LogContext::search_operation(query, None);
        log::debug!("Directory: GraphQL variables: text='{}' school='{}'", query, self.school_id);

        let response: Value = self
            .http_client
            .post_json(&self.endpoint, &self.search_body(query))
            .await?;

        let candidates = self.mapper.map_search(Self::extract_data(response)?);

        LogContext::search_operation(query, Some(candidates.len()));
        Ok(candidates)
    }
}
