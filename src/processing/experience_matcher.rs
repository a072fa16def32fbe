//! Experience matching: years, areas, seniority and area vocabulary overlap

use crate::processing::profile::{CandidateProfile, ExperienceLevel, ExperienceRequirements};
use crate::processing::similarity::{clamp_unit, containment_similarity, semantic_similarity};
use log::debug;

const YEARS_WEIGHT: f64 = 0.3;
const AREA_WEIGHT: f64 = 0.3;
const LEVEL_WEIGHT: f64 = 0.2;
const SEMANTIC_WEIGHT: f64 = 0.2;

/// Per-component experience scores, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExperienceBreakdown {
    pub years: f64,
    pub areas: f64,
    pub level: f64,
    pub semantic: f64,
}

impl ExperienceBreakdown {
    pub fn combined(&self) -> f64 {
        clamp_unit(
            self.years * YEARS_WEIGHT
                + self.areas * AREA_WEIGHT
                + self.level * LEVEL_WEIGHT
                + self.semantic * SEMANTIC_WEIGHT,
        )
    }
}

/// Experience score in `[0, 1]`.
pub fn match_experience(candidate: &CandidateProfile, required: &ExperienceRequirements) -> f64 {
    let breakdown = experience_breakdown(candidate, required);
    debug!(
        "Experience match components - years: {:.3}, areas: {:.3}, level: {:.3}, semantic: {:.3}",
        breakdown.years, breakdown.areas, breakdown.level, breakdown.semantic
    );
    breakdown.combined()
}

pub fn experience_breakdown(
    candidate: &CandidateProfile,
    required: &ExperienceRequirements,
) -> ExperienceBreakdown {
    let signals = &candidate.experience_signals;

    ExperienceBreakdown {
        years: years_score(signals, required.min_years),
        areas: area_score(signals, &required.areas),
        level: level_score(determine_level(signals), required.level),
        semantic: area_semantic_score(signals, &required.areas),
    }
}

/// Sum of every number written immediately before a word containing "year".
/// Saturates at `f64::MAX` instead of overflowing.
///
/// "3 year tenure" and "5+ years of Go" contribute 3 and 5.
pub fn extract_years(signals: &[String]) -> f64 {
    signals
        .iter()
        .map(|signal| {
            let lower = signal.to_lowercase();
            let tokens: Vec<&str> = lower.split_whitespace().collect();
            tokens
                .windows(2)
                .filter(|pair| pair[1].contains("year"))
                .filter_map(|pair| pair[0].trim_end_matches('+').parse::<f64>().ok())
                .filter(|years| years.is_finite() && *years >= 0.0)
                .fold(0.0, saturating_add)
        })
        .fold(0.0, saturating_add)
}

fn saturating_add(total: f64, years: f64) -> f64 {
    (total + years).min(f64::MAX)
}

/// `min(years / min_years, 1)`; a non-positive minimum is always satisfied.
pub fn years_score(signals: &[String], min_years: i64) -> f64 {
    if min_years <= 0 {
        return 1.0;
    }
    clamp_unit(extract_years(signals) / min_years as f64)
}

/// Fraction of required areas mentioned (case-insensitive) by some signal.
pub fn area_score(signals: &[String], areas: &[String]) -> f64 {
    if areas.is_empty() {
        return 1.0;
    }

    let lower_signals: Vec<String> = signals.iter().map(|s| s.to_lowercase()).collect();
    let matched = areas
        .iter()
        .filter(|area| {
            let area = area.to_lowercase();
            lower_signals.iter().any(|signal| signal.contains(&area))
        })
        .count();

    matched as f64 / areas.len() as f64
}

/// Candidates are either senior (mention "senior" or "lead") or entry level.
pub fn determine_level(signals: &[String]) -> ExperienceLevel {
    let senior = signals.iter().any(|signal| {
        let lower = signal.to_lowercase();
        lower.contains("senior") || lower.contains("lead")
    });

    if senior {
        ExperienceLevel::Senior
    } else {
        ExperienceLevel::Entry
    }
}

/// 1.0 when the candidate meets the required level, otherwise the ratio of level weights.
pub fn level_score(candidate: ExperienceLevel, required: ExperienceLevel) -> f64 {
    let Some(required_weight) = required.weight() else {
        return 1.0;
    };
    let candidate_weight = candidate.weight().unwrap_or(0.0);

    if candidate_weight >= required_weight {
        1.0
    } else {
        clamp_unit(candidate_weight / required_weight)
    }
}

/// Cosine similarity between the signals and the required areas.
pub fn area_semantic_score(signals: &[String], areas: &[String]) -> f64 {
    if areas.is_empty() {
        return 1.0;
    }
    semantic_similarity(signals, areas)
}

/// Required areas that no signal mentions, in either containment direction.
pub fn missing_areas(signals: &[String], areas: &[String]) -> Vec<String> {
    areas
        .iter()
        .filter(|area| {
            !signals
                .iter()
                .any(|signal| containment_similarity(signal, area) > 0.8)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn candidate(signals: &[&str]) -> CandidateProfile {
        CandidateProfile {
            experience_signals: strings(signals),
            ..Default::default()
        }
    }

    #[test]
    fn test_years_ratio() {
        let signals = strings(&["3 year tenure"]);
        assert!((years_score(&signals, 5) - 0.6).abs() < 1e-12);
        assert_eq!(years_score(&signals, 2), 1.0);
        assert_eq!(years_score(&[], 0), 1.0);
    }

    #[test]
    fn test_extract_years_sums_all_mentions() {
        let signals = strings(&["2 years Rust", "5+ Years backend", "year one", "many years"]);
        assert_eq!(extract_years(&signals), 7.0);
    }

    #[test]
    fn test_huge_year_counts_saturate() {
        let signals = strings(&["1e308 years", "1e308 years"]);
        assert_eq!(extract_years(&signals), f64::MAX);
        assert_eq!(years_score(&signals, 7), 1.0);
    }

    #[test]
    fn test_area_score() {
        let signals = strings(&["Backend development in Go", "Cloud infrastructure"]);
        let areas = strings(&["backend", "cloud", "mobile"]);
        assert!((area_score(&signals, &areas) - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(area_score(&signals, &[]), 1.0);
    }

    #[test]
    fn test_level_detection_and_score() {
        assert_eq!(determine_level(&strings(&["Senior Engineer"])), ExperienceLevel::Senior);
        assert_eq!(determine_level(&strings(&["Tech Lead"])), ExperienceLevel::Senior);
        assert_eq!(determine_level(&strings(&["Rust"])), ExperienceLevel::Entry);

        assert_eq!(level_score(ExperienceLevel::Senior, ExperienceLevel::Mid), 1.0);
        assert!((level_score(ExperienceLevel::Entry, ExperienceLevel::Senior) - 0.33).abs() < 1e-12);
        assert!((level_score(ExperienceLevel::Entry, ExperienceLevel::Mid) - 0.5).abs() < 1e-12);
        assert_eq!(level_score(ExperienceLevel::Entry, ExperienceLevel::Unspecified), 1.0);
    }

    #[test]
    fn test_match_experience_combines_components() {
        let required = ExperienceRequirements {
            min_years: 4,
            level: ExperienceLevel::Senior,
            areas: strings(&["backend"]),
        };

        let strong = candidate(&["Senior backend engineer", "4 years backend"]);
        let weak = candidate(&["Python"]);

        assert!(match_experience(&strong, &required) > 0.9);
        let weak_score = match_experience(&weak, &required);
        // only the level component contributes: 0.2 * 0.33
        assert!((weak_score - 0.066).abs() < 1e-9);
    }

    #[test]
    fn test_missing_areas() {
        let signals = strings(&["Distributed systems", "API design"]);
        let areas = strings(&["distributed systems", "Machine Learning"]);
        assert_eq!(missing_areas(&signals, &areas), strings(&["Machine Learning"]));
    }
}
