use crate::{MatchReport, Renderer};
use serde::Serialize;
use skillmatch_core::{DisplayMode, ScoredJob};
use std::io::Write;

/// Pretty-printed JSON document with the selected matches.
pub struct JsonRenderer;

#[derive(Serialize)]
struct Document<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    skills: &'a str,
    mode: Mode,
    catalog: CatalogInfo<'a>,
    matching_jobs: usize,
    best_match: Option<&'a ScoredJob>,
    selected: &'a [ScoredJob],
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Mode {
    Top { n: usize },
    MinPercent { percent: f64 },
}

#[derive(Serialize)]
struct CatalogInfo<'a> {
    source: String,
    fingerprint: &'a str,
    jobs: usize,
}

impl Renderer for JsonRenderer {
    fn write_to(&self, writer: &mut dyn Write, report: &MatchReport<'_>) -> anyhow::Result<()> {
        let mode = match report.mode {
            DisplayMode::TopN(n) => Mode::Top { n },
            DisplayMode::MinPercent(percent) => Mode::MinPercent { percent },
        };
        let doc = Document {
            name: report.name,
            skills: report.user_skills,
            mode,
            catalog: CatalogInfo {
                source: report.catalog.source.display().to_string(),
                fingerprint: &report.catalog.fingerprint,
                jobs: report.catalog.job_count(),
            },
            matching_jobs: report.ranking.match_count,
            best_match: report.ranking.best(),
            selected: &report.ranking.selected,
        };
        serde_json::to_writer_pretty(&mut *writer, &doc)?;
        writeln!(writer)?;
        Ok(())
    }
}
