/// Test helpers: an in-memory search port and resolver builders
use async_trait::async_trait;
use profmatch_lib::{
    modules::matching::domain::entities::CandidateRecord, AppError, AppResult,
    CandidateSearchRepository, MatchingConfig, NameMappings, ProfileResolver,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Search port that serves canned records and records every query it sees
pub struct StubSearch {
    candidates: Vec<CandidateRecord>,
    failure: Option<AppError>,
    delay: Option<Duration>,
    queries: Mutex<Vec<String>>,
}

impl StubSearch {
    pub fn returning(candidates: Vec<CandidateRecord>) -> Self {
        Self {
            candidates,
            failure: None,
            delay: None,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: AppError) -> Self {
        Self {
            failure: Some(error),
            ..Self::returning(Vec::new())
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.queries.lock().unwrap().len()
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl CandidateSearchRepository for StubSearch {
    async fn search_candidates(&self, query: &str) -> AppResult<Vec<CandidateRecord>> {
        self.queries.lock().unwrap().push(query.to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(self.candidates.clone()),
        }
    }
}

/// Resolver over `stub` with default configuration; the stub stays reachable
/// through the returned `Arc` for call assertions
pub fn build_resolver(stub: StubSearch) -> (ProfileResolver, Arc<StubSearch>) {
    build_resolver_with(stub, MatchingConfig::default(), NameMappings::new())
}

pub fn build_resolver_with(
    stub: StubSearch,
    config: MatchingConfig,
    mappings: NameMappings,
) -> (ProfileResolver, Arc<StubSearch>) {
    let stub = Arc::new(stub);
    let resolver = ProfileResolver::with_config(stub.clone(), config, mappings)
        .expect("valid resolver configuration");
    (resolver, stub)
}
