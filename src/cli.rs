//! CLI interface for the resume scorer

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-scorer")]
#[command(about = "Deterministic resume and job compatibility scoring")]
#[command(long_about = "Score extracted resume profiles against job requirements using lexical similarity, TF-IDF cosine and keyword matching")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a resume against a job description
    Score {
        /// Path to a stored resume document (JSON)
        #[arg(short, long, conflicts_with = "resume_id")]
        resume: Option<PathBuf>,

        /// Id of a resume in the data directory (defaults to the latest)
        #[arg(long)]
        resume_id: Option<String>,

        /// Path to a stored job document (JSON)
        #[arg(short, long, conflicts_with = "job_id")]
        job: Option<PathBuf>,

        /// Id of a job in the data directory (defaults to the latest)
        #[arg(long)]
        job_id: Option<String>,

        /// Data directory holding resume/ and job/ documents
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file (a directory gets a generated file name)
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Output detailed analysis
        #[arg(short, long)]
        detailed: bool,
    },

    /// Rank several jobs for one resume
    Rank {
        /// Path to a stored resume document (JSON)
        #[arg(short, long)]
        resume: PathBuf,

        /// Paths to stored job documents (JSON)
        #[arg(short, long, num_args = 1.., required = true)]
        jobs: Vec<PathBuf>,

        /// Output format: console, json
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("md"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("resume_1.JSON"), &["json"]).is_ok());
        assert!(validate_file_extension(Path::new("resume.pdf"), &["json"]).is_err());
        assert!(validate_file_extension(Path::new("resume"), &["json"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_rank_requires_jobs() {
        let parsed = Cli::try_parse_from(["resume-scorer", "rank", "--resume", "r.json"]);
        assert!(parsed.is_err());

        let parsed = Cli::try_parse_from([
            "resume-scorer", "rank", "--resume", "r.json", "--jobs", "a.json", "b.json",
        ])
        .unwrap();
        match parsed.command {
            Commands::Rank { jobs, .. } => assert_eq!(jobs.len(), 2),
            _ => panic!("expected rank command"),
        }
    }
}
