//! Whole-profile vs whole-posting semantic similarity

use crate::embedding::{cosine_similarity, EmbeddingProvider};
use crate::model::{CandidateProfile, JobPosting};

/// Returned when no embedding provider is configured or texts are empty.
pub const NEUTRAL_SEMANTIC_SCORE: f32 = 0.5;

/// Semantic sub-score in [0,1]: cosine similarity between the candidate's
/// bio/resume text and the posting's title + description, embedded in one
/// batched call. Falls back to 0.5 without a provider.
pub fn semantic_match_score(
    candidate: &CandidateProfile,
    posting: &JobPosting,
    embedder: &dyn EmbeddingProvider,
) -> f32 {
    if !embedder.is_available() {
        return NEUTRAL_SEMANTIC_SCORE;
    }

    let candidate_text = candidate.semantic_text();
    let job_text = posting.semantic_text();
    if candidate_text.is_empty() || job_text.is_empty() {
        return NEUTRAL_SEMANTIC_SCORE;
    }

    let embeddings = match embedder.embed(&[candidate_text, job_text]) {
        Ok(e) if e.len() == 2 => e,
        Ok(_) => {
            log::warn!("embedding provider returned wrong batch size; using neutral semantic score");
            return NEUTRAL_SEMANTIC_SCORE;
        }
        Err(e) => {
            log::warn!("embedding provider failed ({}); using neutral semantic score", e);
            return NEUTRAL_SEMANTIC_SCORE;
        }
    };

    match cosine_similarity(&embeddings[0], &embeddings[1]) {
        Ok(similarity) => similarity.clamp(0.0, 1.0),
        Err(e) => {
            log::warn!("cosine similarity failed ({}); using neutral semantic score", e);
            NEUTRAL_SEMANTIC_SCORE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::test_support::FixedEmbedder;
    use crate::embedding::NullEmbedder;
    use crate::model::{EducationLevel, Skill};

    fn candidate(bio: &str) -> CandidateProfile {
        CandidateProfile {
            id: "c1".into(),
            name: String::new(),
            skills: vec![Skill::new("rust")],
            experience_years: 3,
            education_level: EducationLevel::default(),
            preferred_locations: vec![],
            preferred_salary_min: None,
            preferred_salary_max: None,
            preferred_industries: vec![],
            bio: bio.into(),
            resume_text: String::new(),
        }
    }

    fn posting(title: &str, description: &str) -> JobPosting {
        JobPosting {
            id: "j1".into(),
            title: title.into(),
            company: String::new(),
            description: description.into(),
            required_skills: vec![],
            preferred_skills: vec![],
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
    fn no_provider_yields_neutral() {
        let score = semantic_match_score(
            &candidate("backend engineer"),
            &posting("Backend Engineer", "APIs"),
            &NullEmbedder,
        );
        assert_eq!(score, NEUTRAL_SEMANTIC_SCORE);
    }

    #[test]
    fn identical_texts_score_high() {
        let embedder = FixedEmbedder::new(&[
            ("backend engineer", vec![1.0, 0.0]),
            ("Backend Engineer APIs", vec![1.0, 0.0]),
        ]);
        let score = semantic_match_score(
            &candidate("backend engineer"),
            &posting("Backend Engineer", "APIs"),
            &embedder,
        );
        assert!((score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn negative_similarity_is_clamped() {
        let embedder = FixedEmbedder::new(&[
            ("a", vec![1.0, 0.0]),
            ("B c", vec![-1.0, 0.0]),
        ]);
        let score = semantic_match_score(&candidate("a"), &posting("B", "c"), &embedder);
        assert_eq!(score, 0.0);
    }
}
