//! Text normalization, TF-IDF cosine similarity, and ranking.

pub mod normalize;
pub mod pipeline;
pub mod rank;
pub mod stopwords;
pub mod tfidf;

pub use normalize::{clean_text, normalize, normalize_bytes};
pub use pipeline::SkillMatcher;
pub use rank::{Ranking, rank};
pub use tfidf::{
    DEFAULT_MIN_TERM_LEN, SimilarityScorer, TermVector, TfIdfModel, VectorizeError, score,
};
