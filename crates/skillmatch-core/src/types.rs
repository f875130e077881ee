use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Lower bound of the top-N range when the catalog has at least this many jobs.
const TOP_N_FLOOR: usize = 3;
/// Largest number of matches shown in top-N mode.
const TOP_N_CEILING: usize = 32;
/// Default threshold for minimum-percentage mode.
pub const DEFAULT_MIN_PERCENT: f64 = 20.0;

/// Header of the catalog column holding the job's display name.
pub const TITLE_COLUMN: &str = "job_title";
/// Header of the catalog column holding the job's free-text skill requirements.
pub const SKILLS_COLUMN: &str = "required_skills";

/// A single job posting from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobRecord {
    /// 0-based position in the catalog. Used for stable tie-breaking.
    pub row: usize,
    pub title: String,
    /// Required skills as a canonical token string.
    pub required_skills: String,
    /// Remaining catalog cells as `(column, value)` pairs, in header order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<(String, String)>,
}

/// An ordered, fingerprinted collection of job postings.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub source: PathBuf,
    /// Hex-encoded SHA-256 of the raw catalog bytes.
    pub fingerprint: String,
    /// Every header of the source file, in order. Empty for catalogs built
    /// in memory.
    pub columns: Vec<String>,
    pub jobs: Vec<JobRecord>,
}

impl Catalog {
    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// The scoring corpus: one canonical skill string per job, in catalog order.
    pub fn corpus(&self) -> Vec<&str> {
        self.jobs
            .iter()
            .map(|j| j.required_skills.as_str())
            .collect()
    }

    /// Column order for exports: the source headers, or just title and
    /// skills when the catalog was not read from a file.
    pub fn export_columns(&self) -> Vec<&str> {
        if self.columns.is_empty() {
            vec![TITLE_COLUMN, SKILLS_COLUMN]
        } else {
            self.columns.iter().map(String::as_str).collect()
        }
    }

    /// Number of jobs whose skill text normalized to nothing.
    pub fn empty_skill_rows(&self) -> usize {
        self.jobs
            .iter()
            .filter(|j| j.required_skills.is_empty())
            .count()
    }
}

/// A job paired with its similarity to the user's skills.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredJob {
    pub row: usize,
    pub title: String,
    pub required_skills: String,
    /// Raw cosine similarity in [0.0, 1.0].
    pub score: f64,
    /// `score` as a percentage rounded to two decimals.
    pub percent: f64,
    pub shared_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<(String, String)>,
}

impl ScoredJob {
    pub fn is_match(&self) -> bool {
        self.percent > 0.0
    }

    /// Value of a catalog column for this job, empty if the job has none.
    pub fn field(&self, column: &str) -> &str {
        match column {
            TITLE_COLUMN => &self.title,
            SKILLS_COLUMN => &self.required_skills,
            _ => self
                .extra
                .iter()
                .find(|(name, _)| name == column)
                .map(|(_, value)| value.as_str())
                .unwrap_or(""),
        }
    }
}

/// Convert a similarity score to a percentage rounded to two decimals.
pub fn to_percent(score: f64) -> f64 {
    (score * 10_000.0).round() / 100.0
}

/// How the ranked matches are cut down for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DisplayMode {
    /// Show the N best matches, keeping every job tied with the N-th.
    TopN(usize),
    /// Show every match at or above this percentage.
    MinPercent(f64),
}

impl DisplayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TopN(_) => "top",
            Self::MinPercent(_) => "min-percent",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TopN(n) => write!(f, "top {n}"),
            Self::MinPercent(p) => write!(f, "min {p}%"),
        }
    }
}

/// Bounds for the top-N setting, derived from the catalog size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopNRange {
    pub min: usize,
    pub max: usize,
    pub default: usize,
}

impl TopNRange {
    pub fn for_catalog(total_jobs: usize) -> Self {
        if total_jobs == 0 {
            return Self {
                min: 1,
                max: 1,
                default: 1,
            };
        }
        let min = if total_jobs >= TOP_N_FLOOR {
            TOP_N_FLOOR
        } else {
            1
        };
        let max = total_jobs.min(TOP_N_CEILING);
        Self {
            min,
            max,
            default: max,
        }
    }

    pub fn clamp(&self, n: usize) -> usize {
        n.clamp(self.min, self.max)
    }
}

/// Per-request ranking settings. The normalizer and scorer never read this.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingConfig {
    pub mode: DisplayMode,
    pub remove_stop_words: bool,
}

impl RankingConfig {
    /// Default settings for a catalog of `total_jobs` postings.
    pub fn for_catalog(total_jobs: usize) -> Self {
        Self {
            mode: DisplayMode::TopN(TopNRange::for_catalog(total_jobs).default),
            remove_stop_words: false,
        }
    }

    /// Top-N mode with `n` clamped to the range the catalog allows.
    pub fn top_n(mut self, n: usize, total_jobs: usize) -> Self {
        self.mode = DisplayMode::TopN(TopNRange::for_catalog(total_jobs).clamp(n));
        self
    }

    /// Minimum-percentage mode. Values outside 0..=100 are clamped.
    pub fn min_percent(mut self, pct: f64) -> Self {
        let pct = if pct.is_nan() { 0.0 } else { pct };
        self.mode = DisplayMode::MinPercent(pct.clamp(0.0, 100.0));
        self
    }

    pub fn remove_stop_words(mut self, remove: bool) -> Self {
        self.remove_stop_words = remove;
        self
    }
}
