mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use skillmatch_render::OutputFormat;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Skillmatch: rank job postings by how well they fit your skills.
#[derive(Parser, Debug)]
#[command(name = "skillmatch", version, about)]
struct Cli {
    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress everything but errors in the log
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score your skills against every job in a catalog
    Match(MatchArgs),
    /// Show statistics about a job catalog
    Inspect(InspectArgs),
}

#[derive(Args, Debug)]
pub struct MatchArgs {
    /// Job catalog CSV with `job_title` and `required_skills` columns
    #[arg(long)]
    pub catalog: PathBuf,

    /// Your name, shown in the report header
    #[arg(long)]
    pub name: Option<String>,

    /// Skills as free text, e.g. "Python, SQL, Docker"
    #[arg(long)]
    pub skills: Option<String>,

    /// Resume file (plain text or PDF) whose text is added to the skills
    #[arg(long)]
    pub resume: Option<PathBuf>,

    /// Show the N best matches
    #[arg(long, conflicts_with = "min_percent")]
    pub top: Option<usize>,

    /// Show every match at or above this percentage (20 when no value is given)
    #[arg(long, num_args = 0..=1, value_name = "PERCENT")]
    pub min_percent: Option<Option<f64>>,

    /// Drop common English words before scoring
    #[arg(long)]
    pub remove_stop_words: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Human)]
    pub format: Format,

    /// Also write every ranked job to this CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Job catalog CSV
    #[arg(long)]
    pub catalog: PathBuf,

    /// Number of most frequent skill terms to list
    #[arg(long, default_value_t = 15)]
    pub terms: usize,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Human,
    Json,
    Jsonl,
    Csv,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Human => OutputFormat::Human,
            Format::Json => OutputFormat::Json,
            Format::Jsonl => OutputFormat::Jsonl,
            Format::Csv => OutputFormat::Csv,
        }
    }
}

impl Cli {
    fn log_filter(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_filter());

    match &cli.command {
        Command::Match(args) => commands::matching::run(args),
        Command::Inspect(args) => commands::inspect::run(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["skillmatch"]).is_err());
    }

    #[test]
    fn cli_parses_match() {
        let cli = Cli::try_parse_from([
            "skillmatch",
            "match",
            "--catalog",
            "jobs.csv",
            "--skills",
            "Python, SQL",
            "--top",
            "5",
        ])
        .unwrap();
        match cli.command {
            Command::Match(args) => {
                assert_eq!(args.catalog, PathBuf::from("jobs.csv"));
                assert_eq!(args.skills.as_deref(), Some("Python, SQL"));
                assert_eq!(args.top, Some(5));
                assert_eq!(args.format, Format::Human);
                assert!(!args.remove_stop_words);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_top_conflicts_with_min_percent() {
        let cli = Cli::try_parse_from([
            "skillmatch",
            "match",
            "--catalog",
            "jobs.csv",
            "--top",
            "5",
            "--min-percent",
            "20",
        ]);
        assert!(cli.is_err());
    }

    #[test]
    fn cli_min_percent_value_is_optional() {
        let cli = Cli::try_parse_from([
            "skillmatch",
            "match",
            "--catalog",
            "jobs.csv",
            "--min-percent",
            "--skills",
            "rust",
        ])
        .unwrap();
        match cli.command {
            Command::Match(args) => {
                assert_eq!(args.min_percent, Some(None));
                assert_eq!(args.skills.as_deref(), Some("rust"));
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let cli = Cli::try_parse_from([
            "skillmatch",
            "match",
            "--catalog",
            "jobs.csv",
            "--min-percent",
            "35.5",
        ])
        .unwrap();
        match cli.command {
            Command::Match(args) => assert_eq!(args.min_percent, Some(Some(35.5))),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_parses_format() {
        let cli = Cli::try_parse_from([
            "skillmatch",
            "match",
            "--catalog",
            "jobs.csv",
            "--format",
            "jsonl",
        ])
        .unwrap();
        match cli.command {
            Command::Match(args) => {
                assert_eq!(OutputFormat::from(args.format), OutputFormat::Jsonl)
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_parses_inspect() {
        let cli = Cli::try_parse_from(["skillmatch", "inspect", "--catalog", "jobs.csv"]).unwrap();
        match cli.command {
            Command::Inspect(args) => assert_eq!(args.terms, 15),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_parses_verbose() {
        let cli =
            Cli::try_parse_from(["skillmatch", "-vv", "inspect", "--catalog", "jobs.csv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.log_filter(), "debug");
    }

    #[test]
    fn cli_quiet_wins_over_verbose() {
        let cli = Cli::try_parse_from([
            "skillmatch",
            "-v",
            "--quiet",
            "inspect",
            "--catalog",
            "jobs.csv",
        ])
        .unwrap();
        assert_eq!(cli.log_filter(), "error");
    }
}
