//! Soft-skill analysis from listed skills and action verbs

use crate::processing::dictionaries::{has_experience_indicator, EXPERIENCE_INDICATORS};
use crate::processing::similarity::{clamp_unit, semantic_similarity};
use crate::processing::skill_matcher::{filter_soft_skills, SkillMatcher};
use log::debug;
use serde::{Deserialize, Serialize};

/// Soft-skill findings as reported to callers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SoftSkillsAnalysis {
    /// Score in `[0, 100]`
    pub score: f64,
    pub extracted_skills: Vec<String>,
    pub experience_based_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SoftSkillsOutcome {
    /// Score in `[0, 1]`
    pub score: f64,
    pub extracted: Vec<String>,
    pub experience_derived: Vec<String>,
}

/// Candidate skills carrying an action verb, and their share of the indicator dictionary.
pub fn experience_soft_skills(candidate_skills: &[String]) -> (Vec<String>, f64) {
    let derived: Vec<String> = candidate_skills
        .iter()
        .filter(|skill| has_experience_indicator(skill))
        .cloned()
        .collect();

    let signal = clamp_unit(derived.len() as f64 / EXPERIENCE_INDICATORS.len() as f64);
    (derived, signal)
}

/// Compare the candidate's soft skills with those the job asks for.
///
/// A job without soft-skill requirements scores 1.0.
pub fn analyze_soft_skills(
    matcher: &SkillMatcher,
    candidate_skills: &[String],
    job_skills: &[String],
) -> SoftSkillsOutcome {
    let extracted = filter_soft_skills(candidate_skills);
    let required = filter_soft_skills(job_skills);
    let (experience_derived, experience_signal) = experience_soft_skills(candidate_skills);

    debug!(
        "Soft skills - extracted: {:?}, required: {:?}, experience-based: {:?}",
        extracted, required, experience_derived
    );

    let score = if required.is_empty() {
        1.0
    } else {
        let semantic = semantic_similarity(&extracted, &required);
        let keyword = matcher.keyword_match(&extracted, &required);
        clamp_unit(semantic * 0.4 + keyword * 0.4 + experience_signal * 0.2)
    };

    SoftSkillsOutcome {
        score,
        extracted,
        experience_derived,
    }
}
