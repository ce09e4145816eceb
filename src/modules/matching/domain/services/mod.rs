pub mod candidate_ranker;
pub mod match_policy;
pub mod name_processor;

pub use candidate_ranker::CandidateRanker;
pub use match_policy::MatchPolicy;
