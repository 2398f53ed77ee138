//! Experience requirement parsing and scoring

use crate::model::{CandidateProfile, JobPosting};
use regex::Regex;
use std::sync::OnceLock;

/// Returned when the requirement text carries no parseable year count.
pub const NEUTRAL_EXPERIENCE_SCORE: f32 = 0.8;

/// Overqualification threshold as a multiple of the required years.
pub const OVERQUALIFIED_FACTOR: f32 = 1.5;

/// Score floor once the overqualification penalty applies.
pub const OVERQUALIFIED_FLOOR: f32 = 0.7;

/// Penalty per year past the overqualification threshold.
pub const OVERQUALIFIED_PENALTY_PER_YEAR: f32 = 0.05;

fn range_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(\d+)\s*-\s*(\d+)\s*\+?\s*(?:years?|yrs?)").unwrap())
}

fn minimum_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(?:minimum(?:\s+of)?|at\s+least)\s+(\d+)\s*(?:years?|yrs?)").unwrap()
    })
}

fn plus_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(\d+)\s*\+\s*(?:years?|yrs?)").unwrap())
}

fn bare_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(\d+)\s*(?:years?|yrs?)").unwrap())
}

/// Extract required years from free text.
///
/// Recognizes "N-M years" (taking N), "minimum N years" / "at least N
/// years", "N+ years", and a bare "N years". Returns `None` when nothing
/// numeric is found.
pub fn parse_required_years(text: &str) -> Option<f32> {
    if let Some(caps) = range_re().captures(text) {
        return caps[1].parse().ok();
    }
    if let Some(caps) = minimum_re().captures(text) {
        return caps[1].parse().ok();
    }
    if let Some(caps) = plus_re().captures(text) {
        return caps[1].parse().ok();
    }
    if let Some(caps) = bare_re().captures(text) {
        return caps[1].parse().ok();
    }
    None
}

/// Experience sub-score in [0,1].
///
/// Meeting the requirement scores 1.0 up to 1.5x the required years, after
/// which an overqualification penalty decays the score toward 0.7. A
/// shortfall scores proportionally, capped at 0.8.
pub fn experience_match_score(candidate: &CandidateProfile, posting: &JobPosting) -> f32 {
    let required = match parse_required_years(&posting.experience_required) {
        Some(years) => years,
        None => return NEUTRAL_EXPERIENCE_SCORE,
    };
    if required <= 0.0 {
        return 1.0;
    }

    let actual = candidate.experience_years as f32;
    if actual >= required {
        let threshold = required * OVERQUALIFIED_FACTOR;
        if actual <= threshold {
            1.0
        } else {
            let excess = actual - threshold;
            (1.0 - excess * OVERQUALIFIED_PENALTY_PER_YEAR).max(OVERQUALIFIED_FLOOR)
        }
    } else {
        ((actual / required) * 0.8).max(0.0)
    }
}
