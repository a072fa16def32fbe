//! Education matching: best-fit entry over degree, field and qualifications

use crate::processing::profile::{EducationEntry, EducationRequirements};
use crate::processing::similarity::{clamp_unit, containment_similarity};

const DEGREE_WEIGHT: f64 = 0.4;
const FIELD_WEIGHT: f64 = 0.4;
const QUALIFICATION_WEIGHT: f64 = 0.2;

/// Score of the strongest education entry, 0.0 when there are none.
pub fn match_education(entries: &[EducationEntry], required: &EducationRequirements) -> f64 {
    entries
        .iter()
        .map(|entry| score_entry(entry, required))
        .fold(0.0, f64::max)
}

pub fn score_entry(entry: &EducationEntry, required: &EducationRequirements) -> f64 {
    let degree = containment_similarity(&entry.degree, &required.degree);
    let field = field_score(&entry.specialization, &required.fields);
    let qualifications = qualification_score(&entry.degree, &required.qualifications);

    clamp_unit(degree * DEGREE_WEIGHT + field * FIELD_WEIGHT + qualifications * QUALIFICATION_WEIGHT)
}

/// Best containment match between the specialization and any required field.
pub fn field_score(specialization: &str, fields: &[String]) -> f64 {
    if fields.is_empty() {
        return 1.0;
    }

    fields
        .iter()
        .map(|field| containment_similarity(specialization, field))
        .fold(0.0, f64::max)
}

/// Fraction of required qualifications named in the degree string.
pub fn qualification_score(degree: &str, qualifications: &[String]) -> f64 {
    if qualifications.is_empty() {
        return 1.0;
    }

    let degree = degree.to_lowercase();
    let matched = qualifications
        .iter()
        .filter(|qual| degree.contains(&qual.to_lowercase()))
        .count();

    matched as f64 / qualifications.len() as f64
}

/// True when some entry's degree matches the required degree.
pub fn has_required_degree(entries: &[EducationEntry], required: &EducationRequirements) -> bool {
    entries
        .iter()
        .any(|entry| containment_similarity(&entry.degree, &required.degree) > 0.8)
}
