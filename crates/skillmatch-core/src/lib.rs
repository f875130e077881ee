//! Skillmatch core domain types, ranking configuration, and errors.

mod error;
mod types;

pub use error::SkillmatchError;
pub use types::{
    Catalog, DEFAULT_MIN_PERCENT, DisplayMode, JobRecord, RankingConfig, SKILLS_COLUMN,
    ScoredJob, TITLE_COLUMN, TopNRange, to_percent,
};
