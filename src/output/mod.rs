//! Report assembly and output formatting

pub mod formatter;
pub mod report;

pub use formatter::{
    ConsoleFormatter, JsonFormatter, MarkdownFormatter, OutputFormatter, ReportGenerator,
};
pub use report::{CandidateSummary, MatchRunReport, RunMetadata};
