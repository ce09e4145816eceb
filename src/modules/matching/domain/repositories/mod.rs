mod candidate_search_repo;

pub use candidate_search_repo::*;
