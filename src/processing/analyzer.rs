//! Scoring engine combining skill, experience, education and soft-skill matching

use crate::config::{OverallWeights, ScoringConfig};
use crate::processing::education_matcher::{has_required_degree, match_education};
use crate::processing::experience_matcher::{extract_years, match_experience, missing_areas};
use crate::processing::profile::{CandidateProfile, JobRequirements};
use crate::processing::similarity::{clamp_unit, finite_or_zero, to_percent};
use crate::processing::skill_matcher::{filter_technical_skills, SkillMatcher, SkillMatches};
use crate::processing::soft_skills::{analyze_soft_skills, SoftSkillsAnalysis};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Stateless scoring engine. Safe to share across threads and call concurrently.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    skill_matcher: SkillMatcher,
    overall_weights: OverallWeights,
    feedback_threshold: f64,
}

/// Compatibility report. All scores are percentages in `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub overall_score: f64,
    pub skills_match: f64,
    pub experience_match: f64,
    pub education_match: f64,
    pub detailed_scores: DetailedScores,
    pub feedback: Vec<String>,
    pub matched_skills: SkillMatches,
    pub soft_skills_analysis: SoftSkillsAnalysis,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetailedScores {
    pub technical_skills: f64,
    pub soft_skills: f64,
    pub qualifications: f64,
}

/// Category ratios in `[0, 1]` before scaling for the report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryRatios {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub technical: f64,
    pub soft: f64,
}

impl CategoryRatios {
    pub fn overall(&self, weights: &OverallWeights) -> f64 {
        clamp_unit(
            self.skills * weights.skills
                + self.experience * weights.experience
                + self.technical * weights.technical
                + self.education * weights.education,
        )
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(&ScoringConfig::default())
    }
}

impl ScoringEngine {
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            skill_matcher: SkillMatcher::new(config.word_similarity_threshold, config.skill_weights),
            overall_weights: config.overall_weights,
            feedback_threshold: config.feedback_threshold,
        }
    }

    /// Score a candidate against a job's requirements.
    pub fn score(&self, candidate: &CandidateProfile, requirements: &JobRequirements) -> ScoreResult {
        let skills = self
            .skill_matcher
            .match_skills(&candidate.skills, &requirements.skills);
        let experience = match_experience(candidate, &requirements.experience);
        let education = match_education(&candidate.education, &requirements.education);
        let technical = self.skill_matcher.score(
            &filter_technical_skills(&candidate.skills),
            &filter_technical_skills(&requirements.skills),
        );
        let soft = analyze_soft_skills(&self.skill_matcher, &candidate.skills, &requirements.skills);

        let ratios = CategoryRatios {
            skills: guard("skills", skills.score),
            experience: guard("experience", experience),
            education: guard("education", education),
            technical: guard("technical", technical),
            soft: guard("soft skills", soft.score),
        };

        debug!(
            "Category ratios - skills: {:.3}, experience: {:.3}, education: {:.3}, technical: {:.3}, soft: {:.3}",
            ratios.skills, ratios.experience, ratios.education, ratios.technical, ratios.soft
        );

        let skills_match = to_percent(ratios.skills);
        let experience_match = to_percent(ratios.experience);
        let education_match = to_percent(ratios.education);
        let soft_percent = to_percent(ratios.soft);

        let mut result = ScoreResult {
            overall_score: to_percent(ratios.overall(&self.overall_weights)),
            skills_match,
            experience_match,
            education_match,
            detailed_scores: DetailedScores {
                technical_skills: to_percent(ratios.technical),
                soft_skills: soft_percent,
                qualifications: education_match,
            },
            feedback: Vec::new(),
            matched_skills: skills.matches,
            soft_skills_analysis: SoftSkillsAnalysis {
                score: soft_percent,
                extracted_skills: soft.extracted,
                experience_based_skills: soft.experience_derived,
            },
        };

        result.feedback = self.generate_feedback(&result, candidate, requirements);
        result
    }

    /// Suggestions for the categories that fall below the feedback threshold.
    pub fn generate_feedback(
        &self,
        result: &ScoreResult,
        candidate: &CandidateProfile,
        requirements: &JobRequirements,
    ) -> Vec<String> {
        let mut feedback = Vec::new();

        let missing = &result.matched_skills.missing_skills;
        if !missing.is_empty() {
            feedback.push(format!(
                "Consider developing these skills: {}",
                missing.join(", ")
            ));
        }

        if result.experience_match < self.feedback_threshold {
            let required = &requirements.experience;
            let years = extract_years(&candidate.experience_signals);
            if years < required.min_years as f64 {
                let deficit = required.min_years - years.floor() as i64;
                feedback.push(format!("Need {} more years of experience", deficit));
            }

            let missing_areas = missing_areas(&candidate.experience_signals, &required.areas);
            if !missing_areas.is_empty() {
                feedback.push(format!("Need experience in: {}", missing_areas.join(", ")));
            }
        }

        if result.education_match < self.feedback_threshold {
            let required = &requirements.education;
            if candidate.education.is_empty() {
                feedback.push("No education information found in resume".to_string());
            } else if !has_required_degree(&candidate.education, required) {
                feedback.push(format!("Consider pursuing {} degree", required.degree));
            }
        }

        feedback
    }
}

fn guard(category: &str, ratio: f64) -> f64 {
    if !ratio.is_finite() {
        warn!("Non-finite {} score coerced to 0", category);
    }
    clamp_unit(finite_or_zero(ratio))
}
