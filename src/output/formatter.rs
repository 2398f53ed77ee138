//! Formatters rendering a match run to console, JSON, or Markdown

use crate::config::OutputFormat;
use crate::error::{MatcherError, Result};
use crate::model::MatchResult;
use crate::output::report::MatchRunReport;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering a full run report to a string.
pub trait OutputFormatter {
    fn format_report(&self, report: &MatchRunReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and a compact/detailed switch.
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for piping into other tools.
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for saved reports.
pub struct MarkdownFormatter;

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

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n█ {}\n", title.blue().bold())
        } else {
            format!("\n█ {}\n", title)
        }
    }

    fn score_color(score: f32) -> Color {
        if score >= 0.8 {
            Color::Green
        } else if score >= 0.6 {
            Color::Yellow
        } else {
            Color::Red
        }
    }

    fn format_percent(&self, score: f32) -> String {
        self.colorize(
            &format!("{:>5.1}%", score * 100.0),
            Self::score_color(score),
        )
    }

    fn format_result(&self, rank: usize, result: &MatchResult) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "{:>2}. {} @ {}  {}  ({} confidence)\n",
            rank,
            self.colorize(&result.job_title, Color::White),
            result.company,
            self.format_percent(result.overall_score),
            result.confidence_level.label(),
        ));
        out.push_str(&format!("    {}\n", result.explanation));

        if self.detailed {
            out.push_str(&format!(
                "    skills {} | experience {} | location {} | salary {} | semantic {}\n",
                self.format_percent(result.skill_match_score),
                self.format_percent(result.experience_match_score),
                self.format_percent(result.location_match_score),
                self.format_percent(result.salary_match_score),
                self.format_percent(result.semantic_match_score),
            ));
            if !result.matching_skills.is_empty() {
                out.push_str(&format!(
                    "    {} {}\n",
                    self.colorize("matching:", Color::Green),
                    result.matching_skills.join(", ")
                ));
            }
            if !result.skill_gaps.is_empty() {
                out.push_str(&format!(
                    "    {} {}\n",
                    self.colorize("gaps:", Color::Yellow),
                    result.skill_gaps.join(", ")
                ));
            }
            for recommendation in &result.recommendations {
                out.push_str(&format!("    • {}\n", recommendation));
            }
        }

        out
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &MatchRunReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("JOB MATCH REPORT"));
        output.push_str(&format!(
            "Candidate: {} ({} skills, {} years, {})\n",
            report.candidate.name,
            report.candidate.skill_count,
            report.candidate.experience_years,
            report.candidate.education_level,
        ));
        output.push_str(&format!(
            "Strategy: {} | Postings considered: {} | {}ms\n",
            report.strategy,
            report.metadata.postings_considered,
            report.metadata.processing_time_ms,
        ));

        if report.metadata.timed_out {
            output.push_str(&format!(
                "{}\n",
                self.colorize(
                    "Time budget exhausted: results below are partial.",
                    Color::Yellow
                )
            ));
        }

        if report.results.is_empty() {
            output.push_str(&format!(
                "\n{}\n",
                self.colorize("No postings cleared the score threshold.", Color::Yellow)
            ));
        } else {
            output.push('\n');
            for (idx, result) in report.results.iter().enumerate() {
                output.push_str(&self.format_result(idx + 1, result));
            }
        }

        if !report.skipped.is_empty() {
            output.push_str(&self.format_header("SKIPPED POSTINGS"));
            for skipped in &report.skipped {
                output.push_str(&format!(
                    "  {} — {}\n",
                    self.colorize(&skipped.job_id, Color::Red),
                    skipped.error
                ));
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &MatchRunReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &MatchRunReport) -> Result<String> {
        let mut md = String::new();

        md.push_str("# Job Match Report\n\n");
        md.push_str(&format!(
            "**Candidate:** {} | **Strategy:** {} | **Generated:** {}\n\n",
            report.candidate.name,
            report.strategy,
            report.metadata.generated_at.format("%Y-%m-%d %H:%M UTC"),
        ));
        md.push_str(&format!(
            "Considered {} postings in {}ms with model `{}`.\n\n",
            report.metadata.postings_considered,
            report.metadata.processing_time_ms,
            report.metadata.embedding_model,
        ));

        if report.metadata.timed_out {
            md.push_str("> Time budget exhausted: results below are partial.\n\n");
        }

        md.push_str("## Ranked Matches\n\n");
        if report.results.is_empty() {
            md.push_str("_No postings cleared the score threshold._\n");
        } else {
            md.push_str("| # | Title | Company | Score | Confidence |\n");
            md.push_str("|---|-------|---------|-------|------------|\n");
            for (idx, result) in report.results.iter().enumerate() {
                md.push_str(&format!(
                    "| {} | {} | {} | {:.1}% | {} |\n",
                    idx + 1,
                    result.job_title,
                    result.company,
                    result.overall_score * 100.0,
                    result.confidence_level.label(),
                ));
            }
            md.push('\n');

            for result in &report.results {
                md.push_str(&format!("### {} @ {}\n\n", result.job_title, result.company));
                md.push_str(&format!("{}\n\n", result.explanation));
                if !result.skill_gaps.is_empty() {
                    md.push_str(&format!("- Gaps: {}\n", result.skill_gaps.join(", ")));
                }
                if !result.matching_skills.is_empty() {
                    md.push_str(&format!(
                        "- Matching skills: {}\n",
                        result.matching_skills.join(", ")
                    ));
                }
                for recommendation in &result.recommendations {
                    md.push_str(&format!("- {}\n", recommendation));
                }
                md.push('\n');
            }
        }

        if !report.skipped.is_empty() {
            md.push_str("## Skipped Postings\n\n");
            for skipped in &report.skipped {
                md.push_str(&format!("- `{}`: {}\n", skipped.job_id, skipped.error));
            }
        }

        Ok(md)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

/// Dispatches to the right formatter and handles saving to disk.
pub struct ReportGenerator {
    console: ConsoleFormatter,
    json: JsonFormatter,
    markdown: MarkdownFormatter,
}

impl ReportGenerator {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            console: ConsoleFormatter::new(use_colors, detailed),
            json: JsonFormatter::new(true),
            markdown: MarkdownFormatter::new(),
        }
    }

    pub fn format(&self, report: &MatchRunReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console.format_report(report),
            OutputFormat::Json => self.json.format_report(report),
            OutputFormat::Markdown => self.markdown.format_report(report),
        }
    }

    /// Save a report, inferring the format from the file extension and
    /// falling back to `default_format` for unknown extensions.
    pub fn save(
        &self,
        report: &MatchRunReport,
        path: &Path,
        default_format: OutputFormat,
    ) -> Result<()> {
        let format = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => OutputFormat::Json,
            Some("md") | Some("markdown") => OutputFormat::Markdown,
            Some("txt") => OutputFormat::Console,
            None => default_format,
            Some(other) => {
                return Err(MatcherError::OutputFormatting(format!(
                    "unsupported report extension: .{}",
                    other
                )))
            }
        };

        // Never write ANSI escapes to a file
        let content = match format {
            OutputFormat::Console => {
                ConsoleFormatter::new(false, self.console.detailed).format_report(report)?
            }
            _ => self.format(report, format)?,
        };

        std::fs::write(path, content)?;
        Ok(())
    }
}
