//! Stored profile documents as written by the extraction service

use crate::processing::profile::{CandidateProfile, EducationEntry, JobRequirements};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the match a stored document describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Resume,
    Job,
}

impl DocumentKind {
    /// Directory name and filename prefix used by the store
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentKind::Resume => "resume",
            DocumentKind::Job => "job",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Envelope persisted for both resumes and job descriptions. Absent fields default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredDocument {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: Option<DocumentKind>,
    pub processed_text: String,
    pub timestamp: Option<DateTime<Utc>>,
    pub entities: ExtractedEntities,
    pub requirements: JobRequirements,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractedEntities {
    pub name: String,
    pub skills: Vec<String>,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<WorkExperience>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkExperience {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub level: String,
    pub description: String,
}

impl StoredDocument {
    /// Candidate view of a resume document.
    ///
    /// Experience signals are the skills followed by each work entry's title, duration and level.
    pub fn candidate_profile(&self) -> CandidateProfile {
        let entities = &self.entities;

        let mut experience_signals = entities.skills.clone();
        experience_signals.extend(
            entities
                .experience
                .iter()
                .flat_map(|exp| [&exp.title, &exp.duration, &exp.level])
                .filter(|value| !value.trim().is_empty())
                .cloned(),
        );

        CandidateProfile {
            skills: entities.skills.clone(),
            education: entities.education.clone(),
            experience_signals,
        }
    }

    pub fn job_requirements(&self) -> JobRequirements {
        self.requirements.clone()
    }
}
