//! Integration tests for the resume scorer

use resume_scorer::config::Config;
use resume_scorer::input::{load_document, DocumentKind, ProfileStore, StoredDocument};
use resume_scorer::processing::education_matcher::match_education;
use resume_scorer::processing::experience_matcher::years_score;
use resume_scorer::processing::profile::EducationRequirements;
use resume_scorer::processing::skill_matcher::SkillMatcher;
use resume_scorer::{CandidateProfile, JobRequirements, ScorerError, ScoringEngine};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

async fn fixtures() -> (StoredDocument, StoredDocument) {
    let resume = load_document(Path::new("tests/fixtures/sample_resume.json"))
        .await
        .unwrap();
    let job = load_document(Path::new("tests/fixtures/sample_job.json"))
        .await
        .unwrap();
    (resume, job)
}

#[tokio::test]
async fn test_score_fixture_documents() {
    let (resume, job) = fixtures().await;
    assert_eq!(resume.kind, Some(DocumentKind::Resume));
    assert_eq!(job.kind, Some(DocumentKind::Job));

    let result = ScoringEngine::default().score(&resume.candidate_profile(), &job.job_requirements());

    assert_eq!(result.matched_skills.exact_matches, strings(&["python", "Docker"]));
    assert_eq!(
        result.matched_skills.missing_skills,
        strings(&["Kubernetes", "Communication"])
    );
    assert_eq!(result.education_match, 100.0);
    assert!(result.experience_match > 70.0);
    assert_eq!(
        result.feedback,
        vec!["Consider developing these skills: Kubernetes, Communication".to_string()]
    );
    assert!((0.0..=100.0).contains(&result.overall_score));
}

#[tokio::test]
async fn test_json_output_field_names() {
    let (resume, job) = fixtures().await;
    let result = ScoringEngine::default().score(&resume.candidate_profile(), &job.job_requirements());
    let value = serde_json::to_value(&result).unwrap();

    let top: HashSet<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
    let expected: HashSet<&str> = [
        "overall_score",
        "skills_match",
        "experience_match",
        "education_match",
        "detailed_scores",
        "feedback",
        "matched_skills",
        "soft_skills_analysis",
    ]
    .into_iter()
    .collect();
    assert_eq!(top, expected);

    let detailed = &value["detailed_scores"];
    for key in ["technical_skills", "soft_skills", "qualifications"] {
        assert!(detailed[key].is_number(), "missing {}", key);
    }
    let matched = &value["matched_skills"];
    for key in ["exact_matches", "partial_matches", "missing_skills"] {
        assert!(matched[key].is_array(), "missing {}", key);
    }
    let soft = &value["soft_skills_analysis"];
    for key in ["score", "extracted_skills", "experience_based_skills"] {
        assert!(!soft[key].is_null(), "missing {}", key);
    }
}

#[tokio::test]
async fn test_store_round_trip_and_latest() {
    let dir = TempDir::new().unwrap();
    let store = ProfileStore::new(dir.path());
    let (resume, _) = fixtures().await;

    let mut older = resume.clone();
    older.id = "older".to_string();
    store.save(DocumentKind::Resume, &older).await.unwrap();

    // Modification times on some filesystems only have one-second resolution
    tokio::time::sleep(Duration::from_millis(1100)).await;

    let mut newer = resume.clone();
    newer.id = "newer".to_string();
    let path = store.save(DocumentKind::Resume, &newer).await.unwrap();
    assert!(path.ends_with("resume/resume_newer.json"));

    assert_eq!(store.latest_id(DocumentKind::Resume).await.unwrap(), "newer");

    let (latest_id, latest) = store.load(DocumentKind::Resume, None).await.unwrap();
    assert_eq!(latest_id, "newer");
    assert_eq!(latest, newer);

    let (_, explicit) = store.load(DocumentKind::Resume, Some("older")).await.unwrap();
    assert_eq!(explicit.entities.skills, resume.entities.skills);
}

#[tokio::test]
async fn test_store_ignores_other_kinds() {
    let dir = TempDir::new().unwrap();
    let store = ProfileStore::new(dir.path());
    let (_, job) = fixtures().await;

    store.save(DocumentKind::Job, &job).await.unwrap();
    std::fs::write(store.kind_dir(DocumentKind::Job).join("notes.txt"), "ignored").unwrap();

    assert_eq!(store.latest_id(DocumentKind::Job).await.unwrap(), "1");
    let err = store.latest_id(DocumentKind::Resume).await.unwrap_err();
    assert!(matches!(err, ScorerError::ProfileNotFound(_)));
}

#[tokio::test]
async fn test_sparse_document_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("job_sparse.json");
    std::fs::write(&path, r#"{"requirements": {"experience": {"level": null}}}"#).unwrap();

    let doc = load_document(&path).await.unwrap();
    let result = ScoringEngine::default().score(&CandidateProfile::default(), &doc.job_requirements());

    assert_eq!(result.skills_match, 100.0);
    assert_eq!(result.education_match, 0.0);
    assert!(result.overall_score.is_finite());
}

#[tokio::test]
async fn test_concurrent_scoring_is_deterministic() {
    let (resume, job) = fixtures().await;
    let engine = Arc::new(ScoringEngine::default());
    let candidate = Arc::new(resume.candidate_profile());
    let requirements = Arc::new(job.job_requirements());

    let expected = engine.score(&candidate, &requirements);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let candidate = Arc::clone(&candidate);
            let requirements = Arc::clone(&requirements);
            tokio::task::spawn_blocking(move || engine.score(&candidate, &requirements))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap(), expected);
    }
}

#[test]
fn test_scenario_a_exact_match() {
    let outcome = SkillMatcher::default().match_skills(&strings(&["Python", "Leadership"]), &strings(&["python"]));

    assert_eq!(outcome.matches.exact_matches, strings(&["python"]));
    assert!(outcome.matches.missing_skills.is_empty());
    assert!(outcome.score > 0.85);
}

#[test]
fn test_scenario_b_no_resume_skills() {
    let outcome = SkillMatcher::default().match_skills(&[], &strings(&["Go", "Docker"]));

    assert_eq!(outcome.score, 0.0);
    assert_eq!(outcome.matches.missing_skills, strings(&["Go", "Docker"]));
}

#[test]
fn test_scenario_c_no_job_skills() {
    let outcome = SkillMatcher::default().match_skills(&strings(&["Rust", "SQL"]), &[]);

    assert_eq!(outcome.score, 1.0);
    assert!(outcome.matches.exact_matches.is_empty());
    assert!(outcome.matches.partial_matches.is_empty());
    assert!(outcome.matches.missing_skills.is_empty());
}

#[test]
fn test_scenario_d_partial_years() {
    let score = years_score(&strings(&["3 year tenure"]), 5);
    assert!((score - 0.6).abs() < 1e-12);
}

#[test]
fn test_scenario_e_no_education() {
    let required = EducationRequirements {
        degree: "Master".to_string(),
        fields: strings(&["Physics"]),
        qualifications: strings(&["PhD"]),
    };
    assert_eq!(match_education(&[], &required), 0.0);

    let result = ScoringEngine::default().score(
        &CandidateProfile::default(),
        &JobRequirements {
            education: required,
            ..Default::default()
        },
    );
    assert_eq!(result.education_match, 0.0);
    assert!(result
        .feedback
        .contains(&"No education information found in resume".to_string()));
}

#[test]
fn test_match_sets_partition_job_skills() {
    let resume = strings(&["Pythn", "Docker", "Excel", "docker"]);
    let job = strings(&["Python", "docker", "Kubernetes", "Go"]);
    let matches = SkillMatcher::default().match_skills(&resume, &job).matches;

    let mut seen: Vec<String> = matches.exact_matches.clone();
    seen.extend(matches.partial_matches.iter().map(|p| p.job_skill.clone()));
    seen.extend(matches.missing_skills.clone());
    seen.sort();

    let mut expected = job.clone();
    expected.sort();
    assert_eq!(seen, expected);

    assert_eq!(matches.exact_matches, strings(&["docker"]));
    assert_eq!(matches.partial_matches[0].job_skill, "Python");
    assert_eq!(matches.partial_matches[0].resume_skill, "Pythn");
}

#[test]
fn test_config_file_drives_engine() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[scoring.overall_weights]\nskills = 0.0\nexperience = 0.0\ntechnical = 0.0\neducation = 1.0\n",
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.scoring.word_similarity_threshold, 0.7);

    let candidate = CandidateProfile::default();
    let result = ScoringEngine::new(&config.scoring).score(&candidate, &JobRequirements::default());
    assert_eq!(result.overall_score, 0.0);
}
