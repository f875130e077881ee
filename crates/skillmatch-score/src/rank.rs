use skillmatch_core::{DisplayMode, JobRecord, RankingConfig, ScoredJob, to_percent};
use std::collections::BTreeSet;

/// Ranked results of one query against the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    /// Every job, best first. Ties keep catalog order.
    pub all: Vec<ScoredJob>,
    /// The subset chosen by the display mode, best first.
    pub selected: Vec<ScoredJob>,
    /// Number of jobs scoring above 0%.
    pub match_count: usize,
}

impl Ranking {
    /// Jobs scoring above 0%, best first.
    pub fn matches(&self) -> impl Iterator<Item = &ScoredJob> {
        self.all.iter().take(self.match_count)
    }

    pub fn best(&self) -> Option<&ScoredJob> {
        self.matches().next()
    }

    pub fn has_matches(&self) -> bool {
        self.match_count > 0
    }
}

/// Pair jobs with their scores, sort, and select what to display.
///
/// `scores` is positional: `scores[i]` belongs to `jobs[i]`. A missing score
/// counts as 0.
pub fn rank(
    jobs: &[JobRecord],
    scores: &[f64],
    user_skills: &str,
    config: &RankingConfig,
) -> Ranking {
    let user_set: BTreeSet<&str> = user_skills.split_whitespace().collect();

    let mut all: Vec<ScoredJob> = jobs
        .iter()
        .enumerate()
        .map(|(i, job)| {
            let score = scores.get(i).copied().unwrap_or(0.0);
            let (shared_skills, missing_skills) = compare_skills(&job.required_skills, &user_set);
            ScoredJob {
                row: job.row,
                title: job.title.clone(),
                required_skills: job.required_skills.clone(),
                score,
                percent: to_percent(score),
                shared_skills,
                missing_skills,
                extra: job.extra.clone(),
            }
        })
        .collect();

    // Stable: equal percentages keep catalog order
    all.sort_by(|a, b| {
        b.percent
            .partial_cmp(&a.percent)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let match_count = all.iter().take_while(|j| j.is_match()).count();
    let matches = &all[..match_count];

    let selected: Vec<ScoredJob> = match config.mode {
        DisplayMode::TopN(n) => {
            let n = n.min(matches.len());
            if n == 0 {
                Vec::new()
            } else {
                // Keep everything tied with the n-th best
                let cutoff = matches[n - 1].percent;
                matches
                    .iter()
                    .filter(|j| j.percent >= cutoff)
                    .cloned()
                    .collect()
            }
        }
        DisplayMode::MinPercent(min) => matches
            .iter()
            .filter(|j| j.percent >= min)
            .cloned()
            .collect(),
    };

    Ranking {
        all,
        selected,
        match_count,
    }
}

/// Split a job's skill tokens into those the user has and those they lack.
/// Both lists are sorted and deduplicated.
fn compare_skills(job_skills: &str, user_set: &BTreeSet<&str>) -> (Vec<String>, Vec<String>) {
    let job_set: BTreeSet<&str> = job_skills.split_whitespace().collect();
    let (shared, missing): (Vec<&str>, Vec<&str>) =
        job_set.into_iter().partition(|s| user_set.contains(s));
    (
        shared.into_iter().map(str::to_owned).collect(),
        missing.into_iter().map(str::to_owned).collect(),
    )
}
