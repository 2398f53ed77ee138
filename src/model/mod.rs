//! Domain data model: candidates, postings, and scored match results

pub mod match_result;
pub mod posting;
pub mod profile;

pub use match_result::{ConfidenceLevel, MatchResult};
pub use posting::JobPosting;
pub use profile::{CandidateProfile, EducationLevel, Skill};
