//! Configuration management for the resume scorer

use crate::error::{Result, ScorerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub store: StoreConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Word similarity at or above which two skills are considered the same
    pub word_similarity_threshold: f64,
    /// Category percentage below which feedback is generated
    pub feedback_threshold: f64,
    pub skill_weights: SkillWeights,
    pub overall_weights: OverallWeights,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillWeights {
    pub semantic: f64,
    pub keyword: f64,
    pub entity: f64,
}

/// Weights of the overall score. Education is reported but weighted 0 by default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverallWeights {
    pub skills: f64,
    pub experience: f64,
    pub technical: f64,
    pub education: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
    pub pretty_json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            word_similarity_threshold: 0.7,
            feedback_threshold: 70.0,
            skill_weights: SkillWeights::default(),
            overall_weights: OverallWeights::default(),
        }
    }
}

impl Default for SkillWeights {
    fn default() -> Self {
        Self {
            semantic: 0.4,
            keyword: 0.3,
            entity: 0.3,
        }
    }
}

impl Default for OverallWeights {
    fn default() -> Self {
        Self {
            skills: 0.4,
            experience: 0.3,
            technical: 0.3,
            education: 0.0,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("processed_texts"),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
            pretty_json: true,
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults there on first use.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    /// Load and validate a configuration file at an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| ScorerError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ScorerError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-scorer")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        let scoring = &self.scoring;

        if !(0.0..=1.0).contains(&scoring.word_similarity_threshold) {
            return Err(ScorerError::Configuration(format!(
                "word_similarity_threshold must be within [0, 1], got {}",
                scoring.word_similarity_threshold
            )));
        }

        if !(0.0..=100.0).contains(&scoring.feedback_threshold) {
            return Err(ScorerError::Configuration(format!(
                "feedback_threshold must be within [0, 100], got {}",
                scoring.feedback_threshold
            )));
        }

        let weights = [
            ("skill_weights.semantic", scoring.skill_weights.semantic),
            ("skill_weights.keyword", scoring.skill_weights.keyword),
            ("skill_weights.entity", scoring.skill_weights.entity),
            ("overall_weights.skills", scoring.overall_weights.skills),
            ("overall_weights.experience", scoring.overall_weights.experience),
            ("overall_weights.technical", scoring.overall_weights.technical),
            ("overall_weights.education", scoring.overall_weights.education),
        ];

        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(ScorerError::Configuration(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}
