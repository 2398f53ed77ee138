//! Integration tests driving the public library API end to end

use skillforge_matcher::config::{Config, OutputFormat};
use skillforge_matcher::embedding::NullEmbedder;
use skillforge_matcher::matching::{JobMatchingService, MatchParams, MatchingStrategy};
use skillforge_matcher::model::{CandidateProfile, JobPosting};
use skillforge_matcher::output::{MatchRunReport, ReportGenerator};
use skillforge_matcher::recommend::{
    analyze_market_trends, RecommendationEngine, RecommendationType,
};
use std::path::Path;

fn load_candidate() -> CandidateProfile {
    let content = std::fs::read_to_string(Path::new("tests/fixtures/candidate.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

fn load_postings() -> Vec<JobPosting> {
    let content = std::fs::read_to_string(Path::new("tests/fixtures/postings.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

fn service() -> JobMatchingService {
    JobMatchingService::new(Config::default(), Box::new(NullEmbedder))
}

#[test]
fn end_to_end_match_run() {
    let service = service();
    let candidate = load_candidate();
    let postings = load_postings();

    let mut params = MatchParams::from_config(service.config());
    params.min_score_threshold = 0.0;

    let report = service
        .match_jobs_for_user(&candidate, &postings, &params)
        .unwrap();

    // The titleless posting is skipped, the other three are scored
    assert_eq!(report.results.len(), 3);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].job_id, "job-103");
    assert!(!report.timed_out);

    // Ranked descending, every score in [0,1]
    for pair in report.results.windows(2) {
        assert!(pair[0].overall_score >= pair[1].overall_score);
    }
    for result in &report.results {
        assert!((0.0..=1.0).contains(&result.overall_score));
        for score in result.sub_scores() {
            assert!((0.0..=1.0).contains(&score));
        }
    }

    // The Python/PostgreSQL backend role beats the Kubernetes platform role
    let backend_pos = report
        .results
        .iter()
        .position(|r| r.job_id == "job-100")
        .unwrap();
    let platform_pos = report
        .results
        .iter()
        .position(|r| r.job_id == "job-101")
        .unwrap();
    assert!(backend_pos < platform_pos);
}

#[test]
fn strategies_produce_different_rankings_or_scores() {
    let service = service();
    let candidate = load_candidate();
    let postings = load_postings();

    let mut params = MatchParams::from_config(service.config());
    params.min_score_threshold = 0.0;

    params.strategy = MatchingStrategy::SkillBased;
    let skill_based = service
        .match_jobs_for_user(&candidate, &postings, &params)
        .unwrap();

    params.strategy = MatchingStrategy::Hybrid;
    let hybrid = service
        .match_jobs_for_user(&candidate, &postings, &params)
        .unwrap();

    let a = skill_based
        .results
        .iter()
        .find(|r| r.job_id == "job-100")
        .unwrap();
    let b = hybrid.results.iter().find(|r| r.job_id == "job-100").unwrap();
    assert_eq!(a.skill_match_score, b.skill_match_score);
    assert!((a.overall_score - b.overall_score).abs() > 1e-6);
}

#[test]
fn gap_analysis_names_missing_required_skills() {
    let service = service();
    let candidate = load_candidate();
    let postings = load_postings();
    let platform = postings.iter().find(|p| p.id == "job-101").unwrap();

    let result = service
        .score_pair(&candidate, platform, MatchingStrategy::Hybrid)
        .unwrap();

    assert!(result.skill_gaps.contains(&"kubernetes".to_string()));
    assert!(result.skill_gaps.contains(&"go".to_string()));
    assert!(result
        .recommendations
        .iter()
        .any(|r| r.to_lowercase().contains("kubernetes")));
    assert!(!result.explanation.is_empty());
}

#[test]
fn recommendation_goals_reorder_without_changing_scores() {
    let engine = RecommendationEngine::new(service());
    let candidate = load_candidate();
    let postings = load_postings();

    let best = engine
        .get_job_recommendations(&candidate, &postings, RecommendationType::BestMatches)
        .unwrap();
    let progression = engine
        .get_job_recommendations(&candidate, &postings, RecommendationType::CareerProgression)
        .unwrap();

    // Same jobs, same per-job scores, possibly different order
    for result in &progression.results {
        let base = best
            .results
            .iter()
            .find(|r| r.job_id == result.job_id)
            .unwrap();
        assert_eq!(base.overall_score, result.overall_score);
        assert_eq!(base.skill_gaps, result.skill_gaps);
    }
}

#[test]
fn market_trends_over_fixture_postings() {
    let postings = load_postings();
    let trends = analyze_market_trends(&postings);

    assert_eq!(trends.postings_analyzed, 4);
    assert_eq!(trends.top_skills_in_demand[0].skill, "python");
    assert_eq!(trends.top_skills_in_demand[0].postings, 4);
    assert!(trends.average_salary.is_some());
    assert!((trends.remote_work_percentage - 50.0).abs() < 1e-6);
}

#[test]
fn reports_render_in_every_format() {
    let service = service();
    let candidate = load_candidate();
    let postings = load_postings();
    let params = MatchParams::from_config(service.config());

    let batch = service
        .match_jobs_for_user(&candidate, &postings, &params)
        .unwrap();
    let report = MatchRunReport::new(&candidate, "hybrid", batch);
    let generator = ReportGenerator::new(false, true);

    let console = generator.format(&report, OutputFormat::Console).unwrap();
    assert!(console.contains("Maya Okafor"));
    assert!(console.contains("Backend Engineer"));

    let json = generator.format(&report, OutputFormat::Json).unwrap();
    let parsed: MatchRunReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.candidate.id, "cand-001");

    let markdown = generator.format(&report, OutputFormat::Markdown).unwrap();
    assert!(markdown.contains("# Job Match Report"));
}

#[test]
fn saved_report_infers_format_from_extension() {
    let service = service();
    let candidate = load_candidate();
    let postings = load_postings();
    let params = MatchParams::from_config(service.config());

    let batch = service
        .match_jobs_for_user(&candidate, &postings, &params)
        .unwrap();
    let report = MatchRunReport::new(&candidate, "hybrid", batch);
    let generator = ReportGenerator::new(true, false);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.json");
    generator.save(&report, &path, OutputFormat::Console).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let parsed: MatchRunReport = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed.strategy, "hybrid");
}

#[test]
fn config_round_trips_through_disk_format() {
    let config = Config::default();
    let serialized = toml::to_string_pretty(&config).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, &serialized).unwrap();

    let reloaded: Config = toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert!(reloaded.validate().is_ok());
    assert_eq!(reloaded.scoring.hybrid, config.scoring.hybrid);
}
