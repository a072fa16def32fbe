//! Report wrapper adding run metadata to a score result

use crate::processing::analyzer::ScoreResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A score result together with where it came from and when it was produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredReport {
    pub result: ScoreResult,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Resume identifier or path
    pub resume: String,
    /// Job identifier or path
    pub job: String,
    pub generated_at: DateTime<Utc>,
    pub processing_time_ms: u64,
}

/// Coarse verdict band for an overall percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn from_percent(score: f64) -> Self {
        match score {
            s if s >= 85.0 => ScoreBand::Excellent,
            s if s >= 70.0 => ScoreBand::Good,
            s if s >= 50.0 => ScoreBand::Fair,
            _ => ScoreBand::Poor,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "EXCELLENT",
            ScoreBand::Good => "GOOD",
            ScoreBand::Fair => "FAIR",
            ScoreBand::Poor => "POOR",
        }
    }

    pub fn verdict(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Strong match for this role",
            ScoreBand::Good => "Good match with minor gaps",
            ScoreBand::Fair => "Partial match; several gaps to address",
            ScoreBand::Poor => "Weak match for this role",
        }
    }
}

impl ScoredReport {
    pub fn new(result: ScoreResult, resume: impl Into<String>, job: impl Into<String>, processing_time_ms: u64) -> Self {
        Self {
            result,
            metadata: ReportMetadata {
                resume: resume.into(),
                job: job.into(),
                generated_at: Utc::now(),
                processing_time_ms,
            },
        }
    }

    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_percent(self.result.overall_score)
    }
}

/// One job's result within a ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedJob {
    pub job: String,
    pub result: ScoreResult,
}

/// Order jobs by descending overall score. Equal scores keep their input order.
pub fn rank_jobs(mut jobs: Vec<RankedJob>) -> Vec<RankedJob> {
    jobs.sort_by(|a, b| b.result.overall_score.total_cmp(&a.result.overall_score));
    jobs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::analyzer::ScoringEngine;
    use crate::processing::profile::{CandidateProfile, JobRequirements};

    #[test]
    fn test_rank_jobs_descending() {
        let engine = ScoringEngine::default();
        let candidate = CandidateProfile {
            skills: vec!["Rust".to_string()],
            ..Default::default()
        };
        let matching = JobRequirements {
            skills: vec!["Rust".to_string()],
            ..Default::default()
        };
        let unrelated = JobRequirements {
            skills: vec!["Accounting".to_string()],
            ..Default::default()
        };

        let ranked = rank_jobs(vec![
            RankedJob {
                job: "unrelated".to_string(),
                result: engine.score(&candidate, &unrelated),
            },
            RankedJob {
                job: "matching".to_string(),
                result: engine.score(&candidate, &matching),
            },
        ]);

        assert_eq!(ranked[0].job, "matching");
        assert!(ranked[0].result.overall_score > ranked[1].result.overall_score);
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::from_percent(92.0), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_percent(70.0), ScoreBand::Good);
        assert_eq!(ScoreBand::from_percent(55.5), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_percent(0.0), ScoreBand::Poor);
    }
}
