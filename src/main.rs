//! Resume scorer: deterministic resume and job compatibility scoring

use anyhow::anyhow;
use clap::Parser;
use log::{debug, error, info};
use resume_scorer::cli::{self, Cli, Commands, ConfigAction};
use resume_scorer::config::{Config, OutputFormat};
use resume_scorer::input::{load_document, DocumentKind, ProfileStore, StoredDocument};
use resume_scorer::output::{rank_jobs, save_report_to_file, suggest_filename, RankedJob, ReportGenerator, ScoredReport};
use resume_scorer::{Result, ScorerError, ScoringEngine};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use std::time::Instant;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, mut config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Score {
            resume,
            resume_id,
            job,
            job_id,
            data_dir,
            output,
            save,
            detailed,
        } => {
            let output_format = resolve_format(output.as_deref(), config.output.format)?;
            if let Some(dir) = data_dir {
                config.store.data_dir = dir;
            }
            config.output.detailed |= detailed;

            let store = ProfileStore::new(&config.store.data_dir);
            let (resume_doc, resume_label) =
                resolve_document(&store, DocumentKind::Resume, resume.as_deref(), resume_id.as_deref()).await?;
            let (job_doc, job_label) =
                resolve_document(&store, DocumentKind::Job, job.as_deref(), job_id.as_deref()).await?;

            info!("Scoring resume {} against job {}", resume_label, job_label);

            let engine = ScoringEngine::new(&config.scoring);
            let started = Instant::now();
            let result = engine.score(&resume_doc.candidate_profile(), &job_doc.job_requirements());
            let elapsed = started.elapsed().as_millis() as u64;
            debug!("Scoring completed in {}ms", elapsed);

            let report = ScoredReport::new(result, resume_label, job_label, elapsed);
            let generator = ReportGenerator::from_config(&config.output);
            let rendered = generator.generate_report(&report, &output_format)?;

            match save {
                Some(path) => {
                    let path = if path.is_dir() {
                        path.join(suggest_filename(&output_format, &report.metadata.resume, true))
                    } else {
                        path
                    };
                    save_report_to_file(&rendered, &path)?;
                    println!("💾 Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Rank { resume, jobs, output } => {
            let output_format = resolve_format(output.as_deref(), config.output.format)?;

            let resume_doc = load_profile_file(&resume).await?;
            let candidate = Arc::new(resume_doc.candidate_profile());
            let engine = Arc::new(ScoringEngine::new(&config.scoring));

            info!("Ranking {} jobs for {}", jobs.len(), resume.display());

            let mut handles = Vec::with_capacity(jobs.len());
            for job_path in jobs {
                let job_doc = load_profile_file(&job_path).await?;
                let engine = Arc::clone(&engine);
                let candidate = Arc::clone(&candidate);
                handles.push(tokio::task::spawn_blocking(move || RankedJob {
                    job: job_path.display().to_string(),
                    result: engine.score(&candidate, &job_doc.job_requirements()),
                }));
            }

            let mut ranked = Vec::with_capacity(handles.len());
            for handle in handles {
                let entry = handle
                    .await
                    .map_err(|e| anyhow!("Scoring task failed: {}", e))?;
                ranked.push(entry);
            }
            let ranked = rank_jobs(ranked);

            match output_format {
                OutputFormat::Json => {
                    let json = if config.output.pretty_json {
                        serde_json::to_string_pretty(&ranked)?
                    } else {
                        serde_json::to_string(&ranked)?
                    };
                    println!("{}", json);
                }
                _ => {
                    println!("🏆 Job ranking for {}\n", resume.display());
                    for (i, entry) in ranked.iter().enumerate() {
                        println!(
                            "{:>2}. {:>5.1}%  {}  (missing: {})",
                            i + 1,
                            entry.result.overall_score,
                            entry.job,
                            entry.result.matched_skills.missing_skills.len()
                        );
                    }
                }
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Data Directory: {}", config.store.data_dir.display());
                println!("Output Format: {:?}", config.output.format);
                println!("\nScoring:");
                println!("  Word similarity threshold: {:.2}", config.scoring.word_similarity_threshold);
                println!("  Feedback threshold: {:.1}%", config.scoring.feedback_threshold);
                let skill = config.scoring.skill_weights;
                println!(
                    "  Skill weights: semantic {:.0}%, keyword {:.0}%, entity {:.0}%",
                    skill.semantic * 100.0,
                    skill.keyword * 100.0,
                    skill.entity * 100.0
                );
                let overall = config.scoring.overall_weights;
                println!(
                    "  Overall weights: skills {:.0}%, experience {:.0}%, technical {:.0}%, education {:.0}%",
                    overall.skills * 100.0,
                    overall.experience * 100.0,
                    overall.technical * 100.0,
                    overall.education * 100.0
                );
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                let default_config = Config::default();
                match &config_path {
                    Some(path) => default_config.save_to(path)?,
                    None => default_config.save()?,
                }
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Path) => {
                let path = config_path.unwrap_or_else(Config::config_path);
                println!("{}", path.display());
            }
        },
    }

    Ok(())
}

fn resolve_format(flag: Option<&str>, fallback: OutputFormat) -> Result<OutputFormat> {
    match flag {
        Some(format) => cli::parse_output_format(format).map_err(ScorerError::UnsupportedFormat),
        None => Ok(fallback),
    }
}

async fn load_profile_file(path: &Path) -> Result<StoredDocument> {
    cli::validate_file_extension(path, &["json"])
        .map_err(|e| ScorerError::InvalidInput(format!("{}: {}", path.display(), e)))?;
    load_document(path).await
}

/// Load from an explicit path, or from the store by id (latest when no id is given).
async fn resolve_document(
    store: &ProfileStore,
    kind: DocumentKind,
    path: Option<&Path>,
    id: Option<&str>,
) -> Result<(StoredDocument, String)> {
    if let Some(path) = path {
        let doc = load_profile_file(path).await?;
        return Ok((doc, path.display().to_string()));
    }

    let (id, doc) = store.load(kind, id).await?;
    Ok((doc, format!("{}_{}", kind, id)))
}
