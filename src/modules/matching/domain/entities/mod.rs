pub mod candidate_record;
pub mod resolved_profile;

pub use candidate_record::{CandidateRecord, CandidateTag, ReviewRecord};
pub use resolved_profile::{
    ProfessorProfile, RatingBand, ResolvedProfile, ReviewSummary, TagSummary,
};
