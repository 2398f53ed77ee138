//! Market trend aggregation over a set of postings
//!
//! Pure aggregation, no ranking: skill demand counts, average posted salary,
//! top hiring locations, and the remote-friendly share.

use crate::model::JobPosting;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const TOP_SKILLS: usize = 10;
pub const TOP_LOCATIONS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillDemand {
    pub skill: String,
    pub postings: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationDemand {
    pub location: String,
    pub postings: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketTrends {
    pub postings_analyzed: usize,
    pub top_skills_in_demand: Vec<SkillDemand>,
    /// Mean midpoint of posted salary ranges; `None` when no posting
    /// discloses a salary.
    pub average_salary: Option<f32>,
    pub top_locations: Vec<LocationDemand>,
    pub remote_work_percentage: f32,
}

pub fn analyze_market_trends(postings: &[JobPosting]) -> MarketTrends {
    let mut skill_counts: HashMap<String, usize> = HashMap::new();
    let mut location_counts: HashMap<String, usize> = HashMap::new();
    let mut salary_midpoints: Vec<f32> = Vec::new();
    let mut remote_count = 0usize;

    for posting in postings {
        for key in posting.all_skill_keys() {
            *skill_counts.entry(key).or_default() += 1;
        }

        let location = posting.location.trim().to_lowercase();
        if !location.is_empty() {
            *location_counts.entry(location).or_default() += 1;
        }

        match (posting.salary_min, posting.salary_max) {
            (Some(min), Some(max)) => salary_midpoints.push((min + max) as f32 / 2.0),
            (Some(min), None) => salary_midpoints.push(min as f32),
            (None, Some(max)) => salary_midpoints.push(max as f32),
            (None, None) => {}
        }

        if posting.remote_allowed {
            remote_count += 1;
        }
    }

    let average_salary = if salary_midpoints.is_empty() {
        None
    } else {
        Some(salary_midpoints.iter().sum::<f32>() / salary_midpoints.len() as f32)
    };

    let remote_work_percentage = if postings.is_empty() {
        0.0
    } else {
        remote_count as f32 / postings.len() as f32 * 100.0
    };

    MarketTrends {
        postings_analyzed: postings.len(),
        top_skills_in_demand: ranked(skill_counts, TOP_SKILLS)
            .into_iter()
            .map(|(skill, postings)| SkillDemand { skill, postings })
            .collect(),
        average_salary,
        top_locations: ranked(location_counts, TOP_LOCATIONS)
            .into_iter()
            .map(|(location, postings)| LocationDemand { location, postings })
            .collect(),
        remote_work_percentage,
    }
}

/// Count map to deterministic top-N: descending count, name as tie-break.
fn ranked(counts: HashMap<String, usize>, limit: usize) -> Vec<(String, usize)> {
    let mut entries: Vec<(String, usize)> = counts.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(limit);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posting(
        id: &str,
        required: &[&str],
        location: &str,
        salary: Option<(u32, u32)>,
        remote: bool,
    ) -> JobPosting {
        JobPosting {
            id: id.into(),
            title: "Engineer".into(),
            company: "Acme".into(),
            description: String::new(),
            required_skills: required.iter().map(|s| s.to_string()).collect(),
            preferred_skills: vec![],
            experience_required: String::new(),
            education_required: None,
            location: location.into(),
            salary_min: salary.map(|(min, _)| min),
            salary_max: salary.map(|(_, max)| max),
            remote_allowed: remote,
            posted_at: None,
            application_deadline: None,
        }
    }

    #[test]
    fn aggregates_skills_locations_salary_and_remote_share() {
        let postings = vec![
            posting("j1", &["Python", "SQL"], "Berlin", Some((60_000, 80_000)), true),
            posting("j2", &["Python"], "Berlin", Some((70_000, 90_000)), false),
            posting("j3", &["Rust"], "Paris", None, true),
            posting("j4", &["python"], "", None, false),
        ];

        let trends = analyze_market_trends(&postings);

        assert_eq!(trends.postings_analyzed, 4);
        assert_eq!(trends.top_skills_in_demand[0].skill, "python");
        assert_eq!(trends.top_skills_in_demand[0].postings, 3);
        assert_eq!(trends.top_locations[0].location, "berlin");
        assert_eq!(trends.top_locations[0].postings, 2);
        assert!((trends.average_salary.unwrap() - 75_000.0).abs() < 1.0);
        assert!((trends.remote_work_percentage - 50.0).abs() < 1e-6);
    }

    #[test]
    fn empty_postings_are_not_an_error() {
        let trends = analyze_market_trends(&[]);
        assert_eq!(trends.postings_analyzed, 0);
        assert!(trends.top_skills_in_demand.is_empty());
        assert!(trends.average_salary.is_none());
        assert_eq!(trends.remote_work_percentage, 0.0);
    }

    #[test]
    fn skill_ranking_is_deterministic_on_ties() {
        let postings = vec![
            posting("j1", &["go", "rust"], "x", None, false),
            posting("j2", &["rust", "go"], "x", None, false),
        ];
        let trends = analyze_market_trends(&postings);
        // Equal counts: alphabetical order breaks the tie
        assert_eq!(trends.top_skills_in_demand[0].skill, "go");
        assert_eq!(trends.top_skills_in_demand[1].skill, "rust");
    }

    #[test]
    fn top_lists_are_capped() {
        let postings: Vec<JobPosting> = (0..20)
            .map(|i| {
                posting(
                    &format!("j{}", i),
                    &[&format!("skill-{}", i) as &str],
                    &format!("city-{}", i),
                    None,
                    false,
                )
            })
            .collect();
        let trends = analyze_market_trends(&postings);
        assert_eq!(trends.top_skills_in_demand.len(), TOP_SKILLS);
        assert_eq!(trends.top_locations.len(), TOP_LOCATIONS);
    }
}
