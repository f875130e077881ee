//! Rendering of match results: human-readable text, JSON, JSONL, and CSV.

mod csv_export;
mod human;
mod json;
mod jsonl;

pub use csv_export::{CsvRenderer, SCORE_COLUMN, export_csv};
pub use human::HumanRenderer;
pub use json::JsonRenderer;
pub use jsonl::JsonlWriter;

use skillmatch_core::{Catalog, DisplayMode};
use skillmatch_score::Ranking;
use std::io::Write;

/// Everything a renderer needs to present one query's results.
pub struct MatchReport<'a> {
    /// Name of the person the resume belongs to, if given.
    pub name: Option<&'a str>,
    /// The user's skills as a canonical token string.
    pub user_skills: &'a str,
    pub catalog: &'a Catalog,
    pub ranking: &'a Ranking,
    pub mode: DisplayMode,
}

/// Writes a `MatchReport` in one output format.
pub trait Renderer {
    fn write_to(&self, writer: &mut dyn Write, report: &MatchReport<'_>) -> anyhow::Result<()>;

    /// Render to a string.
    fn render(&self, report: &MatchReport<'_>) -> anyhow::Result<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf, report)?;
        Ok(String::from_utf8(buf)?)
    }
}

/// Output formats selectable at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
    Jsonl,
    Csv,
}

impl OutputFormat {
    pub fn renderer(self) -> Box<dyn Renderer> {
        match self {
            Self::Human => Box::new(HumanRenderer::new()),
            Self::Json => Box::new(JsonRenderer),
            Self::Jsonl => Box::new(JsonlWriter),
            Self::Csv => Box::new(CsvRenderer),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Human => "human",
            Self::Json => "json",
            Self::Jsonl => "jsonl",
            Self::Csv => "csv",
        }
    }
}
