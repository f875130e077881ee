use crate::normalize::normalize;
use crate::rank::{Ranking, rank};
use crate::tfidf::SimilarityScorer;
use skillmatch_core::{Catalog, JobRecord, RankingConfig};
use tracing::{debug, info};

/// Runs one normalize -> score -> rank pass over a catalog.
pub struct SkillMatcher {
    config: RankingConfig,
    scorer: SimilarityScorer,
}

impl SkillMatcher {
    pub fn new(config: RankingConfig) -> Self {
        Self {
            config,
            scorer: SimilarityScorer::new(),
        }
    }

    /// Normalize the user's raw skill text the same way catalog skills are.
    pub fn user_skills(&self, raw: &str) -> String {
        normalize(Some(raw), self.config.remove_stop_words)
    }

    /// Score the user's raw skill text against every job in the catalog.
    pub fn run(&self, catalog: &Catalog, raw_skills: &str) -> Ranking {
        let user_skills = self.user_skills(raw_skills);
        let jobs = self.effective_jobs(&catalog.jobs);
        let corpus: Vec<&str> = jobs.iter().map(|j| j.required_skills.as_str()).collect();

        debug!(
            jobs = corpus.len(),
            query_terms = user_skills.split_whitespace().count(),
            "scoring catalog"
        );
        let scores = self.scorer.score(&user_skills, &corpus);
        let ranking = rank(&jobs, &scores, &user_skills, &self.config);

        info!(
            jobs = ranking.all.len(),
            matches = ranking.match_count,
            selected = ranking.selected.len(),
            mode = %self.config.mode,
            "ranked catalog"
        );
        ranking
    }

    /// Catalog skills are stored without stop-word removal; re-normalize
    /// them when the policy asks for it so both sides match.
    fn effective_jobs(&self, jobs: &[JobRecord]) -> Vec<JobRecord> {
        if !self.config.remove_stop_words {
            return jobs.to_vec();
        }
        jobs.iter()
            .map(|j| JobRecord {
                required_skills: normalize(Some(&j.required_skills), true),
                ..j.clone()
            })
            .collect()
    }
}
