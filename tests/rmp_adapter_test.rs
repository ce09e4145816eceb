//! Directory adapter tests
//!
//! Exercises RmpSearchAdapter and its HTTP client without a live directory:
//! construction, request shape and transport failure mapping.

use profmatch_lib::modules::matching::infrastructure::http_client::RateLimitClient;
use profmatch_lib::{
    AppError, CandidateSearchRepository, DirectoryConfig, ProfileResolver, RmpSearchAdapter,
};
use std::sync::Arc;

fn unreachable_config() -> DirectoryConfig {
    DirectoryConfig {
        // Discard port; nothing listens there
        endpoint: "http://127.0.0.1:9/graphql".to_string(),
        ..DirectoryConfig::default()
    }
}

#[tokio::test]
async fn test_rate_limit_client_creation() {
    let client = RateLimitClient::for_directory(2.0, None);
    assert_eq!(client.service_name(), "Directory");
    assert!(client.can_make_request_now());
}

#[tokio::test]
async fn test_adapter_builds_graphql_request() {
    let adapter = RmpSearchAdapter::new(&DirectoryConfig::default());
    let body = adapter.search_body("Ada Lovelace");

    assert_eq!(body["variables"]["text"], "Ada Lovelace");
    let query = body["query"].as_str().unwrap();
    assert!(query.contains("teachers(query:"));
    assert!(query.contains("wouldTakeAgainPercent"));
}

#[tokio::test]
async fn test_unreachable_directory_is_search_unavailable() {
    let adapter = RmpSearchAdapter::new(&unreachable_config());

    let err = adapter.search_candidates("Ada Lovelace").await.unwrap_err();
    assert!(matches!(err, AppError::SearchUnavailable(_)), "got {:?}", err);
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_resolver_surfaces_transport_failure() {
    let adapter = Arc::new(RmpSearchAdapter::new(&unreachable_config()));
    let resolver = ProfileResolver::new(adapter).unwrap();

    let err = resolver.resolve_cached("Ada Lovelace").await.unwrap_err();
    assert!(err.is_search_failure());
    assert!(resolver.cache().is_empty());
}
