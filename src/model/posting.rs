//! Job posting snapshot used as scoring input

use crate::error::ScoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable snapshot of a job opening. Skills are treated as sets on a
/// lower-cased key; the stored vectors keep the posting's own order for
/// deterministic output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    /// Free text such as "3+ years" or "minimum 5 years"; parsed by the
    /// experience scorer.
    #[serde(default)]
    pub experience_required: String,
    #[serde(default)]
    pub education_required: Option<crate::model::EducationLevel>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub salary_min: Option<u32>,
    #[serde(default)]
    pub salary_max: Option<u32>,
    #[serde(default)]
    pub remote_allowed: bool,
    #[serde(default)]
    pub posted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub application_deadline: Option<DateTime<Utc>>,
}

impl JobPosting {
    /// Lower-cased required skill keys, de-duplicated, posting order.
    pub fn required_keys(&self) -> Vec<String> {
        dedup_keys(&self.required_skills)
    }

    /// Lower-cased preferred skill keys, de-duplicated, posting order.
    pub fn preferred_keys(&self) -> Vec<String> {
        dedup_keys(&self.preferred_skills)
    }

    /// Required then preferred keys, de-duplicated across both lists.
    pub fn all_skill_keys(&self) -> Vec<String> {
        let mut keys = self.required_keys();
        for key in self.preferred_keys() {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        keys
    }

    /// Text used for whole-posting semantic comparison.
    pub fn semantic_text(&self) -> String {
        format!("{} {}", self.title.trim(), self.description.trim())
            .trim()
            .to_string()
    }

    pub fn has_salary(&self) -> bool {
        self.salary_min.is_some() || self.salary_max.is_some()
    }

    /// Structural sanity check run before scoring. A posting that fails here
    /// is skipped in batch matching and reported, never scored.
    pub fn validate(&self) -> Result<(), ScoreError> {
        let fail = |reason: &str| ScoreError::MalformedPosting {
            id: self.id.clone(),
            reason: reason.to_string(),
        };
        if self.id.trim().is_empty() {
            return Err(ScoreError::MalformedPosting {
                id: "<missing>".into(),
                reason: "empty id".into(),
            });
        }
        if self.title.trim().is_empty() {
            return Err(fail("empty title"));
        }
        if let (Some(min), Some(max)) = (self.salary_min, self.salary_max) {
            if min > max {
                return Err(fail("salary_min exceeds salary_max"));
            }
        }
        Ok(())
    }
}

fn dedup_keys(skills: &[String]) -> Vec<String> {
    let mut keys: Vec<String> = Vec::with_capacity(skills.len());
    for skill in skills {
        let key = skill.trim().to_lowercase();
        if !key.is_empty() && !keys.contains(&key) {
            keys.push(key);
        }
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posting() -> JobPosting {
        JobPosting {
            id: "j1".into(),
            title: "Backend Engineer".into(),
            company: "Acme".into(),
            description: "Build services".into(),
            required_skills: vec!["Python".into(), "SQL".into(), "python".into()],
            preferred_skills: vec!["React".into(), "SQL".into()],
            experience_required: "3+ years".into(),
            education_required: None,
            location: "Berlin".into(),
            salary_min: Some(70_000),
            salary_max: Some(90_000),
            remote_allowed: true,
            posted_at: None,
            application_deadline: None,
        }
    }

    #[test]
    fn skill_keys_are_deduplicated_and_lowercased() {
        let p = posting();
        assert_eq!(p.required_keys(), vec!["python", "sql"]);
        assert_eq!(p.preferred_keys(), vec!["react", "sql"]);
        assert_eq!(p.all_skill_keys(), vec!["python", "sql", "react"]);
    }

    #[test]
    fn validation_rejects_inverted_salary_range() {
        let mut p = posting();
        p.salary_min = Some(100_000);
        p.salary_max = Some(50_000);
        assert!(p.validate().is_err());
    }

    #[test]
    fn validation_rejects_empty_title() {
        let mut p = posting();
        p.title = "  ".into();
        assert!(p.validate().is_err());
    }

    #[test]
    fn valid_posting_passes() {
        assert!(posting().validate().is_ok());
    }
}
