//! Skill matching: composite skill score and exact/partial/missing classification

use crate::config::SkillWeights;
use crate::processing::dictionaries::{is_soft_skill, is_stop_word, is_technical};
use crate::processing::similarity::{
    clamp_unit, finite_or_zero, semantic_similarity, word_similarity, WORD_SIM_THRESHOLD,
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Matches a candidate's skills against a job's required skills
#[derive(Debug, Clone)]
pub struct SkillMatcher {
    threshold: f64,
    weights: SkillWeights,
}

/// Classification of every required skill. Each job skill lands in exactly one list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillMatches {
    pub exact_matches: Vec<String>,
    pub partial_matches: Vec<PartialMatch>,
    pub missing_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartialMatch {
    pub job_skill: String,
    pub resume_skill: String,
    /// Word similarity in `[0, 1]`
    pub similarity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatchOutcome {
    /// Composite score in `[0, 1]`
    pub score: f64,
    pub matches: SkillMatches,
}

impl Default for SkillMatcher {
    fn default() -> Self {
        Self::new(WORD_SIM_THRESHOLD, SkillWeights::default())
    }
}

impl SkillMatcher {
    pub fn new(threshold: f64, weights: SkillWeights) -> Self {
        Self {
            threshold: clamp_unit(threshold),
            weights,
        }
    }

    /// Score and classify `resume_skills` against `job_skills`.
    ///
    /// No required skills means nothing is missing: score 1.0 and empty match sets.
    pub fn match_skills(&self, resume_skills: &[String], job_skills: &[String]) -> SkillMatchOutcome {
        if job_skills.is_empty() {
            return SkillMatchOutcome {
                score: 1.0,
                matches: SkillMatches::default(),
            };
        }

        SkillMatchOutcome {
            score: self.score(resume_skills, job_skills),
            matches: self.classify(resume_skills, job_skills),
        }
    }

    /// Composite skill score: weighted cosine, keyword and entity components.
    pub fn score(&self, resume_skills: &[String], job_skills: &[String]) -> f64 {
        if job_skills.is_empty() {
            return 1.0;
        }

        let semantic = semantic_similarity(resume_skills, job_skills);
        let keyword = self.keyword_match(resume_skills, job_skills);
        let entity = self.entity_match(resume_skills, job_skills);

        debug!(
            "Skills match components - semantic: {:.3}, keyword: {:.3}, entity: {:.3}",
            semantic, keyword, entity
        );

        clamp_unit(
            semantic * self.weights.semantic
                + keyword * self.weights.keyword
                + entity * self.weights.entity,
        )
    }

    /// Fraction of job skills for which some resume skill is at least `threshold` similar.
    pub fn keyword_match(&self, resume_skills: &[String], job_skills: &[String]) -> f64 {
        if job_skills.is_empty() {
            return 1.0;
        }

        let matched = job_skills
            .iter()
            .filter(|job_skill| {
                resume_skills
                    .iter()
                    .any(|resume_skill| word_similarity(job_skill, resume_skill) >= self.threshold)
            })
            .count();

        matched as f64 / job_skills.len() as f64
    }

    /// Token-level overlap between the meaningful terms of both skill lists.
    ///
    /// `0.7 * direct overlap + 0.3 * fuzzy overlap`, both measured against the job terms.
    pub fn entity_match(&self, resume_skills: &[String], job_skills: &[String]) -> f64 {
        if job_skills.is_empty() {
            return 1.0;
        }

        let resume_terms = extract_meaningful_terms(resume_skills);
        let job_terms = extract_meaningful_terms(job_skills);

        let direct = direct_term_overlap(&resume_terms, &job_terms);
        let fuzzy = self.fuzzy_term_overlap(&resume_terms, &job_terms);

        finite_or_zero(direct * 0.7 + fuzzy * 0.3)
    }

    fn fuzzy_term_overlap(&self, resume_terms: &[String], job_terms: &[String]) -> f64 {
        if job_terms.is_empty() {
            return 1.0;
        }

        let total: f64 = job_terms
            .iter()
            .map(|job_term| {
                resume_terms
                    .iter()
                    .map(|resume_term| word_similarity(resume_term, job_term))
                    .fold(0.0, f64::max)
            })
            .filter(|best| *best > self.threshold)
            .sum();

        total / job_terms.len() as f64
    }

    /// Classify each job skill as an exact, partial or missing match (case-insensitive).
    pub fn classify(&self, resume_skills: &[String], job_skills: &[String]) -> SkillMatches {
        // first spelling wins for case-insensitive duplicates
        let mut seen = HashSet::new();
        let resume_lower: Vec<(String, &String)> = resume_skills
            .iter()
            .map(|skill| (skill.to_lowercase(), skill))
            .filter(|(lower, _)| seen.insert(lower.clone()))
            .collect();

        let mut matches = SkillMatches::default();

        for job_skill in job_skills {
            let job_lower = job_skill.to_lowercase();

            if resume_lower.iter().any(|(lower, _)| *lower == job_lower) {
                matches.exact_matches.push(job_skill.clone());
                continue;
            }

            let mut best: Option<(&String, f64)> = None;
            for (lower, original) in &resume_lower {
                let similarity = word_similarity(&job_lower, lower);
                if similarity > self.threshold && best.map_or(true, |(_, s)| similarity > s) {
                    best = Some((original, similarity));
                }
            }

            match best {
                Some((resume_skill, similarity)) => matches.partial_matches.push(PartialMatch {
                    job_skill: job_skill.clone(),
                    resume_skill: resume_skill.clone(),
                    similarity,
                }),
                None => matches.missing_skills.push(job_skill.clone()),
            }
        }

        matches
    }
}

/// Lower-cased tokens longer than two characters that are not stop words.
pub fn extract_meaningful_terms(skills: &[String]) -> Vec<String> {
    skills
        .iter()
        .flat_map(|skill| skill.split_whitespace())
        .map(|word| word.to_lowercase())
        .filter(|word| word.chars().count() > 2 && !is_stop_word(word))
        .collect()
}

fn direct_term_overlap(resume_terms: &[String], job_terms: &[String]) -> f64 {
    if job_terms.is_empty() {
        return 1.0;
    }

    let resume_set: HashSet<&String> = resume_terms.iter().collect();
    let matched = job_terms.iter().filter(|term| resume_set.contains(term)).count();
    matched as f64 / job_terms.len() as f64
}

/// Skills containing a technical keyword, lower-cased.
pub fn filter_technical_skills(skills: &[String]) -> Vec<String> {
    skills
        .iter()
        .filter(|skill| is_technical(skill))
        .map(|skill| skill.to_lowercase())
        .collect()
}

/// Skills containing a soft-skill keyword, lower-cased.
pub fn filter_soft_skills(skills: &[String]) -> Vec<String> {
    skills
        .iter()
        .filter(|skill| is_soft_skill(skill))
        .map(|skill| skill.to_lowercase())
        .collect()
}
