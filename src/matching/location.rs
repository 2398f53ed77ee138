//! Location compatibility scoring

use crate::model::{CandidateProfile, JobPosting};

pub const NO_PREFERENCE_SCORE: f32 = 0.6;
pub const MISMATCH_SCORE: f32 = 0.2;
pub const PARTIAL_MATCH_SCORE: f32 = 0.8;

/// Location sub-score in [0,1].
///
/// Remote-allowed postings match a "remote" preference outright; otherwise
/// exact (case-insensitive) matches score 1.0, substring containment either
/// direction 0.8, no stated preference 0.6, and anything else 0.2.
pub fn location_match_score(candidate: &CandidateProfile, posting: &JobPosting) -> f32 {
    if posting.remote_allowed && candidate.prefers_remote() {
        return 1.0;
    }

    if candidate.preferred_locations.is_empty() {
        return NO_PREFERENCE_SCORE;
    }

    let job_location = posting.location.trim().to_lowercase();
    if job_location.is_empty() {
        return NO_PREFERENCE_SCORE;
    }

    let mut best = MISMATCH_SCORE;
    for preferred in &candidate.preferred_locations {
        let preferred = preferred.trim().to_lowercase();
        if preferred.is_empty() {
            continue;
        }
        if preferred == job_location {
            return 1.0;
        }
        if job_location.contains(&preferred) || preferred.contains(&job_location) {
            best = best.max(PARTIAL_MATCH_SCORE);
        }
    }
    best
}
