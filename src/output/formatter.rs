//! Output formatters for score reports

use crate::config::{OutputConfig, OutputFormat};
use crate::error::{Result, ScorerError};
use crate::output::report::{ScoreBand, ScoredReport};
use colored::{Color, Colorize};
use std::fmt::Write as _;
use std::path::Path;

/// Trait for rendering a scored report
pub trait OutputFormatter {
    fn format_report(&self, report: &ScoredReport) -> Result<String>;
}

/// Console formatter with colors and score badges
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter emitting the bare score result
pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

fn fmt_err(e: std::fmt::Error) -> ScorerError {
    ScorerError::OutputFormatting(e.to_string())
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let (prefix, color) = match level {
            1 => ("█", Color::Blue),
            2 => ("▓", Color::Green),
            _ => ("▒", Color::Yellow),
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, band: ScoreBand) -> String {
        let color = match band {
            ScoreBand::Excellent => Color::Green,
            ScoreBand::Good => Color::BrightGreen,
            ScoreBand::Fair => Color::Yellow,
            ScoreBand::Poor => Color::Red,
        };

        if self.use_colors {
            format!("[{}]", band.label().color(color).bold())
        } else {
            format!("[{}]", band.label())
        }
    }

    fn score_line(&self, label: &str, score: f64) -> String {
        let color = match ScoreBand::from_percent(score) {
            ScoreBand::Excellent | ScoreBand::Good => Color::Green,
            ScoreBand::Fair => Color::Yellow,
            ScoreBand::Poor => Color::Red,
        };
        format!("  {:<20} {}\n", label, self.colorize(&format!("{:>5.1}%", score), color))
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ScoredReport) -> Result<String> {
        let result = &report.result;
        let mut output = String::new();

        output.push_str(&self.format_header("RESUME COMPATIBILITY SCORE", 1));
        writeln!(
            output,
            "Resume: {} | Job: {}",
            report.metadata.resume, report.metadata.job
        )
        .map_err(fmt_err)?;

        output.push_str(&self.format_header("Summary", 2));
        writeln!(
            output,
            "Overall Score: {:.1}% {}",
            result.overall_score,
            self.format_score_badge(report.band())
        )
        .map_err(fmt_err)?;
        writeln!(output, "Verdict: {}", self.colorize(report.band().verdict(), Color::Cyan)).map_err(fmt_err)?;

        output.push_str(&self.format_header("Score Breakdown", 3));
        output.push_str(&self.score_line("Skills", result.skills_match));
        output.push_str(&self.score_line("Experience", result.experience_match));
        output.push_str(&self.score_line("Education", result.education_match));
        output.push_str(&self.score_line("Technical skills", result.detailed_scores.technical_skills));
        output.push_str(&self.score_line("Soft skills", result.detailed_scores.soft_skills));

        let matches = &result.matched_skills;
        output.push_str(&self.format_header("Skills", 3));
        if !matches.exact_matches.is_empty() {
            writeln!(
                output,
                "  ✅ Matched: {}",
                self.colorize(&matches.exact_matches.join(", "), Color::Green)
            )
            .map_err(fmt_err)?;
        }
        for partial in &matches.partial_matches {
            writeln!(
                output,
                "  〰 {} ≈ {} ({:.0}%)",
                partial.job_skill,
                self.colorize(&partial.resume_skill, Color::Yellow),
                partial.similarity * 100.0
            )
            .map_err(fmt_err)?;
        }
        if !matches.missing_skills.is_empty() {
            writeln!(
                output,
                "  ❌ Missing: {}",
                self.colorize(&matches.missing_skills.join(", "), Color::Red)
            )
            .map_err(fmt_err)?;
        }

        if self.detailed {
            let soft = &result.soft_skills_analysis;
            output.push_str(&self.format_header("Soft Skills", 3));
            writeln!(output, "  Extracted: {}", display_list(&soft.extracted_skills)).map_err(fmt_err)?;
            writeln!(
                output,
                "  From experience: {}",
                display_list(&soft.experience_based_skills)
            )
            .map_err(fmt_err)?;
            writeln!(output, "  Processing time: {}ms", report.metadata.processing_time_ms).map_err(fmt_err)?;
        }

        if !result.feedback.is_empty() {
            output.push_str(&self.format_header("Feedback", 2));
            for (i, item) in result.feedback.iter().enumerate() {
                writeln!(output, "{}. {}", i + 1, item).map_err(fmt_err)?;
            }
        }

        Ok(output)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ScoredReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(&report.result)?)
        } else {
            Ok(serde_json::to_string(&report.result)?)
        }
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ScoredReport) -> Result<String> {
        let result = &report.result;
        let mut md = String::new();

        writeln!(md, "# Resume Compatibility Report\n").map_err(fmt_err)?;
        writeln!(
            md,
            "**Overall Score:** {:.1}% ({})\n",
            result.overall_score,
            report.band().label()
        )
        .map_err(fmt_err)?;
        writeln!(md, "> {}\n", report.band().verdict()).map_err(fmt_err)?;

        writeln!(md, "## Score Breakdown\n").map_err(fmt_err)?;
        writeln!(md, "| Category | Score |").map_err(fmt_err)?;
        writeln!(md, "|----------|-------|").map_err(fmt_err)?;
        for (label, score) in [
            ("Skills", result.skills_match),
            ("Experience", result.experience_match),
            ("Education", result.education_match),
            ("Technical skills", result.detailed_scores.technical_skills),
            ("Soft skills", result.detailed_scores.soft_skills),
        ] {
            writeln!(md, "| {} | {:.1}% |", label, score).map_err(fmt_err)?;
        }

        let matches = &result.matched_skills;
        writeln!(md, "\n## Skills\n").map_err(fmt_err)?;
        writeln!(md, "- **Matched:** {}", display_list(&matches.exact_matches)).map_err(fmt_err)?;
        for partial in &matches.partial_matches {
            writeln!(
                md,
                "- **Partial:** {} ≈ {} ({:.0}%)",
                partial.job_skill,
                partial.resume_skill,
                partial.similarity * 100.0
            )
            .map_err(fmt_err)?;
        }
        writeln!(md, "- **Missing:** {}", display_list(&matches.missing_skills)).map_err(fmt_err)?;

        if !result.feedback.is_empty() {
            writeln!(md, "\n## Feedback\n").map_err(fmt_err)?;
            for item in &result.feedback {
                writeln!(md, "- {}", item).map_err(fmt_err)?;
            }
        }

        if self.include_metadata {
            writeln!(md, "\n---\n").map_err(fmt_err)?;
            writeln!(
                md,
                "*Resume: {} | Job: {} | Generated: {} | {}ms*",
                report.metadata.resume,
                report.metadata.job,
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.processing_time_ms
            )
            .map_err(fmt_err)?;
        }

        Ok(md)
    }
}

fn display_list(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::from_config(&OutputConfig::default())
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(config.color_output, config.detailed),
            json_formatter: JsonFormatter::new(config.pretty_json),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn generate_report(&self, report: &ScoredReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
    };

    format!("{}_score{}.{}", base_name, timestamp_suffix, extension)
}
