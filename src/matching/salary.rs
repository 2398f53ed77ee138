//! Salary range compatibility scoring

use crate::model::{CandidateProfile, JobPosting};

pub const JOB_SILENT_SCORE: f32 = 0.5;
pub const CANDIDATE_SILENT_SCORE: f32 = 0.7;

/// Multiplier used to synthesize a missing upper bound from a lower bound.
pub const MISSING_MAX_FACTOR: f32 = 1.3;
/// Divisor used to synthesize a missing lower bound from an upper bound.
pub const MISSING_MIN_FACTOR: f32 = 1.5;

/// Salary sub-score in [0,1].
///
/// Neutral scores when either side is silent; otherwise the overlap width of
/// the two intervals relative to the wider of them. Disjoint intervals score
/// 0.0. A one-sided range is widened to a full interval before comparison.
pub fn salary_match_score(candidate: &CandidateProfile, posting: &JobPosting) -> f32 {
    if !posting.has_salary() {
        return JOB_SILENT_SCORE;
    }
    if !candidate.has_salary_preference() {
        return CANDIDATE_SILENT_SCORE;
    }

    let (job_min, job_max) = widen(posting.salary_min, posting.salary_max);
    let (cand_min, cand_max) = widen(candidate.preferred_salary_min, candidate.preferred_salary_max);

    let overlap_min = job_min.max(cand_min);
    let overlap_max = job_max.min(cand_max);
    if overlap_max < overlap_min {
        return 0.0;
    }

    let overlap_width = overlap_max - overlap_min;
    let widest = (job_max - job_min).max(cand_max - cand_min);
    if widest <= 0.0 {
        // Both ranges collapsed to the same point
        return 1.0;
    }

    (overlap_width / widest).clamp(0.0, 1.0)
}

/// Turn a possibly one-sided range into a closed interval. Callers guarantee
/// at least one bound is present.
fn widen(min: Option<u32>, max: Option<u32>) -> (f32, f32) {
    match (min, max) {
        (Some(min), Some(max)) => (min as f32, max as f32),
        (Some(min), None) => (min as f32, min as f32 * MISSING_MAX_FACTOR),
        (None, Some(max)) => (max as f32 / MISSING_MIN_FACTOR, max as f32),
        (None, None) => (0.0, 0.0),
    }
}
