use crate::{MatchReport, Renderer};
use skillmatch_core::Catalog;
use skillmatch_score::Ranking;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Header of the score column in CSV exports.
pub const SCORE_COLUMN: &str = "Match Score (%)";

/// CSV export of every ranked job, zero scores included. Every catalog
/// column is written back, followed by the score.
pub struct CsvRenderer;

impl Renderer for CsvRenderer {
    fn write_to(&self, writer: &mut dyn Write, report: &MatchReport<'_>) -> anyhow::Result<()> {
        write_ranking(writer, report.catalog, report.ranking)
    }
}

/// Write the full ranking as CSV to a file, creating parent directories.
pub fn export_csv(path: &Path, catalog: &Catalog, ranking: &Ranking) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    write_ranking(&mut file, catalog, ranking)?;
    file.flush()?;
    Ok(())
}

fn write_ranking(
    writer: &mut dyn Write,
    catalog: &Catalog,
    ranking: &Ranking,
) -> anyhow::Result<()> {
    // A stale score column in the source is replaced, not duplicated
    let columns: Vec<&str> = catalog
        .export_columns()
        .into_iter()
        .filter(|c| *c != SCORE_COLUMN)
        .collect();

    let mut csv = csv::WriterBuilder::new()
        .has_headers(true)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(writer);
    csv.write_record(columns.iter().copied().chain([SCORE_COLUMN]))?;
    for job in &ranking.all {
        let percent = format!("{:.2}", job.percent);
        csv.write_record(
            columns
                .iter()
                .map(|c| job.field(c))
                .chain([percent.as_str()]),
        )?;
    }
    csv.flush()?;
    Ok(())
}
