//! Skill overlap scoring
//!
//! Direct coverage of required/preferred skill sets on lower-cased keys,
//! optionally blended with a semantic skill similarity when an embedding
//! provider is available.

use crate::config::ScoringConfig;
use crate::embedding::{cosine_similarity, EmbeddingProvider};
use crate::model::{CandidateProfile, JobPosting};

/// Direct skill coverage in [0,1].
///
/// `required_score` is the covered fraction of required skills (1.0 when the
/// posting requires none); `preferred_score` the covered fraction of
/// preferred skills (0.0 when none are listed). A posting with no skills at
/// all scores 1.0: there is nothing to miss.
pub fn direct_skill_score(
    candidate: &CandidateProfile,
    posting: &JobPosting,
    scoring: &ScoringConfig,
) -> f32 {
    let candidate_keys = candidate.skill_keys();
    let required = posting.required_keys();
    let preferred = posting.preferred_keys();

    if required.is_empty() && preferred.is_empty() {
        return 1.0;
    }

    let required_score = if required.is_empty() {
        1.0
    } else {
        coverage(&candidate_keys, &required)
    };
    let preferred_score = if preferred.is_empty() {
        0.0
    } else {
        coverage(&candidate_keys, &preferred)
    };

    (scoring.skill_required_weight * required_score
        + scoring.skill_preferred_weight * preferred_score)
        .clamp(0.0, 1.0)
}

/// Semantic skill similarity: embed every candidate and job skill in one
/// batched call, then average the best candidate match per job skill.
///
/// Returns `None` when no provider is available, either skill list is empty,
/// or the provider fails; the caller then uses the direct score alone.
pub fn semantic_skill_score(
    candidate: &CandidateProfile,
    posting: &JobPosting,
    embedder: &dyn EmbeddingProvider,
) -> Option<f32> {
    if !embedder.is_available() {
        return None;
    }

    let candidate_skills: Vec<String> = candidate.skills.iter().map(|s| s.name.clone()).collect();
    let job_skills: Vec<String> = posting
        .required_skills
        .iter()
        .chain(posting.preferred_skills.iter())
        .cloned()
        .collect();

    if candidate_skills.is_empty() || job_skills.is_empty() {
        return None;
    }

    // One encode call for both sides.
    let mut all_texts = candidate_skills.clone();
    all_texts.extend(job_skills.iter().cloned());

    let embeddings = match embedder.embed(&all_texts) {
        Ok(e) if e.len() == all_texts.len() => e,
        Ok(_) => {
            log::warn!("embedding provider returned wrong batch size; skipping semantic skills");
            return None;
        }
        Err(e) => {
            log::warn!("embedding provider failed ({}); skipping semantic skills", e);
            return None;
        }
    };

    let (candidate_vecs, job_vecs) = embeddings.split_at(candidate_skills.len());

    let mut total = 0.0f32;
    for job_vec in job_vecs {
        let best = candidate_vecs
            .iter()
            .filter_map(|cand_vec| cosine_similarity(cand_vec, job_vec).ok())
            .fold(f32::MIN, f32::max);
        if best > f32::MIN {
            total += best.clamp(0.0, 1.0);
        }
    }

    Some((total / job_vecs.len() as f32).clamp(0.0, 1.0))
}

/// Final skill sub-score: direct coverage, blended 0.7/0.3 with the semantic
/// skill similarity when one could be computed.
pub fn skill_match_score(
    candidate: &CandidateProfile,
    posting: &JobPosting,
    embedder: &dyn EmbeddingProvider,
    scoring: &ScoringConfig,
) -> f32 {
    let direct = direct_skill_score(candidate, posting, scoring);
    match semantic_skill_score(candidate, posting, embedder) {
        Some(semantic) => {
            (scoring.skill_direct_weight * direct + scoring.skill_semantic_weight * semantic)
                .clamp(0.0, 1.0)
        }
        None => direct,
    }
}

fn coverage(candidate_keys: &[String], job_keys: &[String]) -> f32 {
    let matched = job_keys
        .iter()
        .filter(|key| candidate_keys.contains(key))
        .count();
    matched as f32 / job_keys.len() as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::embedding::test_support::FixedEmbedder;
    use crate::embedding::NullEmbedder;
    use crate::model::{EducationLevel, Skill};

    fn candidate(skills: &[&str]) -> CandidateProfile {
        CandidateProfile {
            id: "c1".into(),
            name: "Ada".into(),
            skills: skills.iter().map(|s| Skill::new(*s)).collect(),
            experience_years: 5,
            education_level: EducationLevel::Bachelor,
            preferred_locations: vec![],
            preferred_salary_min: None,
            preferred_salary_max: None,
            preferred_industries: vec![],
            bio: String::new(),
            resume_text: String::new(),
        }
    }

    fn posting(required: &[&str], preferred: &[&str]) -> JobPosting {
        JobPosting {
            id: "j1".into(),
            title: "Engineer".into(),
            company: "Acme".into(),
            description: String::new(),
            required_skills: required.iter().map(|s| s.to_string()).collect(),
            preferred_skills: preferred.iter().map(|s| s.to_string()).collect(),
            experience_required: String::new(),
            education_required: None,
            location: String::new(),
            salary_min: None,
            salary_max: None,
            remote_allowed: false,
            posted_at: None,
            application_deadline: None,
        }
    }

    #[test]
    fn required_preferred_blend_example() {
        // candidate {python, react} vs required {python, sql}, preferred {react}
        // = 0.8 * (1/2) + 0.2 * (1/1) = 0.6
        let config = Config::default();
        let score = direct_skill_score(
            &candidate(&["python", "react"]),
            &posting(&["python", "sql"], &["react"]),
            &config.scoring,
        );
        assert!((score - 0.6).abs() < 1e-6);
    }

    #[test]
    fn no_job_skills_scores_one() {
        let config = Config::default();
        let score = direct_skill_score(&candidate(&["python"]), &posting(&[], &[]), &config.scoring);
        assert_eq!(score, 1.0);
    }

    #[test]
    fn empty_candidate_skills_do_not_panic() {
        let config = Config::default();
        let score = direct_skill_score(
            &candidate(&[]),
            &posting(&["python"], &["react"]),
            &config.scoring,
        );
        assert_eq!(score, 0.0);
    }

    #[test]
    fn required_only_full_coverage() {
        let config = Config::default();
        // Required fully covered, no preferred list: 0.8 * 1.0 + 0.2 * 0.0
        let score = direct_skill_score(
            &candidate(&["python", "sql"]),
            &posting(&["Python", "SQL"], &[]),
            &config.scoring,
        );
        assert!((score - 0.8).abs() < 1e-6);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let config = Config::default();
        let score = direct_skill_score(
            &candidate(&["PYTHON"]),
            &posting(&["python"], &[]),
            &config.scoring,
        );
        assert!((score - 0.8).abs() < 1e-6);
    }

    #[test]
    fn null_embedder_yields_direct_only() {
        let config = Config::default();
        let cand = candidate(&["python", "react"]);
        let post = posting(&["python", "sql"], &["react"]);
        let score = skill_match_score(&cand, &post, &NullEmbedder, &config.scoring);
        assert!((score - 0.6).abs() < 1e-6);
    }

    #[test]
    fn semantic_blend_uses_best_match_per_job_skill() {
        let config = Config::default();
        let embedder = FixedEmbedder::new(&[
            ("python", vec![1.0, 0.0, 0.0]),
            ("react", vec![0.0, 1.0, 0.0]),
            ("sql", vec![1.0, 0.0, 0.0]), // identical to python
        ]);
        let cand = candidate(&["python", "react"]);
        let post = posting(&["sql"], &[]);

        // sql's best candidate match is python at cosine 1.0
        let semantic = semantic_skill_score(&cand, &post, &embedder).unwrap();
        assert!((semantic - 1.0).abs() < 1e-6);

        // direct = 0.8 * 0.0 = 0.0; final = 0.7 * 0.0 + 0.3 * 1.0
        let score = skill_match_score(&cand, &post, &embedder, &config.scoring);
        assert!((score - 0.3).abs() < 1e-6);
    }

    #[test]
    fn semantic_skipped_when_candidate_has_no_skills() {
        let embedder = FixedEmbedder::new(&[]);
        assert!(semantic_skill_score(&candidate(&[]), &posting(&["x"], &[]), &embedder).is_none());
    }
}
