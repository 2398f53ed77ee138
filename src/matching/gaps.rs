//! Skill gap and recommendation generation

use crate::config::RecommendConfig;
use crate::matching::experience::parse_required_years;
use crate::matching::location;
use crate::model::{CandidateProfile, JobPosting};
use strsim::jaro_winkler;

/// Gaps are capped so recommendations stay readable.
pub const MAX_SKILL_GAPS: usize = 10;
pub const MAX_RECOMMENDATIONS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct GapAnalysis {
    /// Job skills the candidate lacks, required-skill gaps first.
    pub skill_gaps: Vec<String>,
    /// Candidate skills the job asks for, in the candidate's own order.
    pub matching_skills: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Derive gaps, matching skills, and templated recommendations for one pair.
/// `location_score` is the already-computed location sub-score; it decides
/// whether a relocation/remote recommendation applies.
pub fn analyze(
    candidate: &CandidateProfile,
    posting: &JobPosting,
    location_score: f32,
    recommend: &RecommendConfig,
) -> GapAnalysis {
    let candidate_keys = candidate.skill_keys();

    // Required-first gap ordering, de-duplicated across both lists.
    let mut skill_gaps: Vec<String> = Vec::new();
    for key in posting.required_keys().into_iter().chain(posting.preferred_keys()) {
        if !candidate_keys.contains(&key) && !skill_gaps.contains(&key) {
            skill_gaps.push(key);
        }
    }
    skill_gaps.truncate(MAX_SKILL_GAPS);

    let job_keys = posting.all_skill_keys();
    let matching_skills: Vec<String> = candidate_keys
        .iter()
        .filter(|key| job_keys.contains(key))
        .cloned()
        .collect();

    let recommendations = build_recommendations(
        candidate,
        posting,
        &skill_gaps,
        location_score,
        recommend,
    );

    GapAnalysis {
        skill_gaps,
        matching_skills,
        recommendations,
    }
}

fn build_recommendations(
    candidate: &CandidateProfile,
    posting: &JobPosting,
    skill_gaps: &[String],
    location_score: f32,
    recommend: &RecommendConfig,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if !skill_gaps.is_empty() {
        let top: Vec<&str> = skill_gaps.iter().take(3).map(String::as_str).collect();
        recommendations.push(format!(
            "Consider learning {} to improve your fit for this role",
            top.join(", ")
        ));

        if let Some((existing, gap)) = best_adjacent_skill(candidate, skill_gaps, recommend) {
            recommendations.push(format!(
                "Your {} experience should make {} quicker to pick up",
                existing, gap
            ));
        }
    }

    if let Some(required) = parse_required_years(&posting.experience_required) {
        let actual = candidate.experience_years as f32;
        if actual < required {
            let shortfall = (required - actual).ceil() as u32;
            recommendations.push(format!(
                "Gain {} more year{} of experience to meet the stated requirement",
                shortfall,
                if shortfall == 1 { "" } else { "s" }
            ));
        }
    }

    if let Some(required_education) = posting.education_required {
        if candidate.education_level < required_education {
            recommendations.push(format!(
                "Pursue a {} to meet the education requirement",
                required_education.label()
            ));
        }
    }

    if location_score < location::NO_PREFERENCE_SCORE {
        if posting.remote_allowed {
            recommendations
                .push("This role allows remote work; highlight your remote readiness".to_string());
        } else if !posting.location.trim().is_empty() {
            recommendations.push(format!("Consider relocating closer to {}", posting.location));
        }
    }

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}

/// Most similar (candidate skill, gap) pair above the configured
/// Jaro-Winkler threshold, if any. Purely advisory; never affects scores.
fn best_adjacent_skill<'a>(
    candidate: &'a CandidateProfile,
    skill_gaps: &'a [String],
    recommend: &RecommendConfig,
) -> Option<(&'a str, &'a str)> {
    let mut best: Option<(f64, &str, &str)> = None;
    for gap in skill_gaps {
        for skill in &candidate.skills {
            let similarity = jaro_winkler(&skill.key(), gap);
            if similarity >= recommend.adjacent_skill_threshold as f64 {
                if best.map_or(true, |(s, _, _)| similarity > s) {
                    best = Some((similarity, skill.name.as_str(), gap.as_str()));
                }
            }
        }
    }
    best.map(|(_, existing, gap)| (existing, gap))
}
