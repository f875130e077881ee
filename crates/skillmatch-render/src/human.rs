use crate::{MatchReport, Renderer};
use std::io::Write;

/// Default width of the score bars, in characters.
const DEFAULT_BAR_WIDTH: usize = 30;
/// Longest job title shown before truncation.
const MAX_TITLE_WIDTH: usize = 32;

/// Human-readable report: a bar chart of the selected matches, their
/// shared and missing skills, and the best match.
pub struct HumanRenderer {
    bar_width: usize,
    show_skills: bool,
}

impl HumanRenderer {
    pub fn new() -> Self {
        Self {
            bar_width: DEFAULT_BAR_WIDTH,
            show_skills: true,
        }
    }

    pub fn bar_width(mut self, width: usize) -> Self {
        self.bar_width = width;
        self
    }

    /// Whether to list shared and missing skills under each match.
    pub fn show_skills(mut self, show: bool) -> Self {
        self.show_skills = show;
        self
    }

    fn bar(&self, percent: f64) -> String {
        let filled = ((percent / 100.0) * self.bar_width as f64).round() as usize;
        let filled = filled.min(self.bar_width);
        format!(
            "{}{}",
            "#".repeat(filled),
            ".".repeat(self.bar_width - filled)
        )
    }
}

impl Default for HumanRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for HumanRenderer {
    fn write_to(&self, writer: &mut dyn Write, report: &MatchReport<'_>) -> anyhow::Result<()> {
        let ranking = report.ranking;

        match report.name {
            Some(name) if !name.trim().is_empty() => {
                writeln!(writer, "Match results for {}", name.trim())?
            }
            _ => writeln!(writer, "Match results")?,
        }
        writeln!(
            writer,
            "Catalog: {} ({} jobs)",
            report.catalog.source.display(),
            report.catalog.job_count()
        )?;
        writeln!(writer)?;

        if !ranking.has_matches() {
            writeln!(
                writer,
                "No suitable job match found (all matches are 0%). Try adding more relevant skills."
            )?;
            return Ok(());
        }

        writeln!(
            writer,
            "Showing {} of {} matching jobs ({}, 0% matches hidden)",
            ranking.selected.len(),
            ranking.match_count,
            report.mode
        )?;
        writeln!(writer)?;

        if ranking.selected.is_empty() {
            writeln!(writer, "No matches meet the selected criteria.")?;
            return Ok(());
        }

        let title_width = ranking
            .selected
            .iter()
            .map(|j| j.title.chars().count().min(MAX_TITLE_WIDTH))
            .max()
            .unwrap_or(0);

        for job in &ranking.selected {
            writeln!(
                writer,
                "  {:<title_width$}  {}  {:>6.2}%",
                truncate(&job.title, MAX_TITLE_WIDTH),
                self.bar(job.percent),
                job.percent,
            )?;
            if self.show_skills {
                if !job.shared_skills.is_empty() {
                    writeln!(writer, "      Shared skills: {}", job.shared_skills.join(", "))?;
                }
                if !job.missing_skills.is_empty() {
                    writeln!(writer, "      Missing skills: {}", job.missing_skills.join(", "))?;
                }
            }
        }

        if let Some(best) = ranking.best() {
            writeln!(writer)?;
            writeln!(writer, "Best match: {} ({:.2}%)", best.title, best.percent)?;
        }
        writeln!(writer, "Tip: add more relevant skills to improve accuracy.")?;

        Ok(())
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
        out.push_str("...");
        out
    }
}
