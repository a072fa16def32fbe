//! Candidate and job requirement profiles consumed by the scoring engine

use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Structured view of a resume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateProfile {
    /// Free-form skills, technical and soft mixed together
    pub skills: Vec<String>,
    pub education: Vec<EducationEntry>,
    /// Statements that may carry years or seniority, e.g. "5 years backend" or "Senior Engineer"
    pub experience_signals: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub specialization: String,
    pub year: String,
}

/// Structured view of a job description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobRequirements {
    pub skills: Vec<String>,
    pub experience: ExperienceRequirements,
    pub education: EducationRequirements,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceRequirements {
    pub min_years: i64,
    pub level: ExperienceLevel,
    pub areas: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationRequirements {
    pub degree: String,
    pub fields: Vec<String>,
    pub qualifications: Vec<String>,
}

/// Seniority level. Parsed leniently from free text; anything unrecognised is `Unspecified`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum ExperienceLevel {
    #[default]
    Unspecified,
    Entry,
    Mid,
    Senior,
}

impl ExperienceLevel {
    /// Ordinal weight of the level, `None` when unspecified.
    pub fn weight(self) -> Option<f64> {
        match self {
            ExperienceLevel::Entry => Some(0.33),
            ExperienceLevel::Mid => Some(0.66),
            ExperienceLevel::Senior => Some(1.0),
            ExperienceLevel::Unspecified => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "entry",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
            ExperienceLevel::Unspecified => "",
        }
    }
}

impl From<&str> for ExperienceLevel {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "entry" | "junior" => ExperienceLevel::Entry,
            "mid" | "intermediate" => ExperienceLevel::Mid,
            "senior" | "lead" => ExperienceLevel::Senior,
            "" => ExperienceLevel::Unspecified,
            other => {
                warn!("Unknown experience level '{}', treating as unspecified", other);
                ExperienceLevel::Unspecified
            }
        }
    }
}

impl From<Option<String>> for ExperienceLevel {
    fn from(value: Option<String>) -> Self {
        value.as_deref().map_or(ExperienceLevel::Unspecified, ExperienceLevel::from)
    }
}

impl From<ExperienceLevel> for String {
    fn from(level: ExperienceLevel) -> Self {
        level.as_str().to_string()
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
