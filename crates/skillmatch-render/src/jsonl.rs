use crate::{MatchReport, Renderer};
use serde::Serialize;
use std::io::Write;

/// JSONL format version written in the header line.
const FORMAT_VERSION: &str = "1.0";

/// Writes match results as JSONL: a header line, one line per selected
/// job, and a footer line.
pub struct JsonlWriter;

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Header<'a> {
    version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    skills: &'a str,
    mode: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_n: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_percent: Option<f64>,
    catalog: String,
    fingerprint: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct JobEntry<'a> {
    row: usize,
    title: &'a str,
    score: f64,
    percent: f64,
    shared_skills: &'a [String],
    missing_skills: &'a [String],
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Footer<'a> {
    selected_jobs: usize,
    matching_jobs: usize,
    total_jobs: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    best_match: Option<&'a str>,
}

impl Renderer for JsonlWriter {
    fn write_to(&self, writer: &mut dyn Write, report: &MatchReport<'_>) -> anyhow::Result<()> {
        let (top_n, min_percent) = match report.mode {
            skillmatch_core::DisplayMode::TopN(n) => (Some(n), None),
            skillmatch_core::DisplayMode::MinPercent(p) => (None, Some(p)),
        };

        let header = Header {
            version: FORMAT_VERSION,
            name: report.name,
            skills: report.user_skills,
            mode: report.mode.as_str(),
            top_n,
            min_percent,
            catalog: report.catalog.source.display().to_string(),
            fingerprint: &report.catalog.fingerprint,
        };
        serde_json::to_writer(&mut *writer, &header)?;
        writeln!(writer)?;

        for job in &report.ranking.selected {
            let entry = JobEntry {
                row: job.row,
                title: &job.title,
                score: job.score,
                percent: job.percent,
                shared_skills: &job.shared_skills,
                missing_skills: &job.missing_skills,
            };
            serde_json::to_writer(&mut *writer, &entry)?;
            writeln!(writer)?;
        }

        let footer = Footer {
            selected_jobs: report.ranking.selected.len(),
            matching_jobs: report.ranking.match_count,
            total_jobs: report.ranking.all.len(),
            best_match: report.ranking.best().map(|j| j.title.as_str()),
        };
        serde_json::to_writer(&mut *writer, &footer)?;
        writeln!(writer)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;

    #[test]
    fn jsonl_has_header_entries_footer() {
        let catalog = sample_catalog();
        let ranking = sample_ranking(&catalog, &[0.8, 0.3, 0.0]);
        let out = JsonlWriter.render(&report(&catalog, &ranking)).unwrap();

        let lines: Vec<&str> = out.trim().lines().collect();
        assert_eq!(lines.len(), ranking.selected.len() + 2);

        for line in &lines {
            let parsed: Result<serde_json::Value, _> = serde_json::from_str(line);
            assert!(parsed.is_ok(), "Invalid JSON: {line}");
        }

        let header: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(header["Version"], "1.0");
        assert_eq!(header["Name"], "Ada");
        assert_eq!(header["Skills"], "python sql");
        assert_eq!(header["Mode"], "top");
        assert_eq!(header["TopN"], 3);
        assert!(header.get("MinPercent").is_none());
        assert_eq!(header["Fingerprint"], "abc123");

        let first: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(first["Title"], "Data Scientist");
        assert_eq!(first["Percent"], 80.0);
        assert_eq!(first["SharedSkills"], serde_json::json!(["python", "sql"]));
        assert_eq!(first["MissingSkills"], serde_json::json!(["statistics"]));

        let footer: serde_json::Value = serde_json::from_str(lines[lines.len() - 1]).unwrap();
        assert_eq!(footer["SelectedJobs"], 2);
        assert_eq!(footer["MatchingJobs"], 2);
        assert_eq!(footer["TotalJobs"], 3);
        assert_eq!(footer["BestMatch"], "Data Scientist");
    }

    #[test]
    fn jsonl_no_matches_has_no_best() {
        let catalog = sample_catalog();
        let ranking = sample_ranking(&catalog, &[0.0, 0.0, 0.0]);
        let out = JsonlWriter.render(&report(&catalog, &ranking)).unwrap();

        let lines: Vec<&str> = out.trim().lines().collect();
        assert_eq!(lines.len(), 2);
        let footer: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(footer["MatchingJobs"], 0);
        assert!(footer.get("BestMatch").is_none());
    }
}
