use crate::normalize;
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::{debug, warn};

/// Default minimum term length. Every token counts, single letters included.
pub const DEFAULT_MIN_TERM_LEN: usize = 1;

/// Why a set of documents could not be vectorized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VectorizeError {
    #[error("empty vocabulary: no document contains a usable term")]
    EmptyVocabulary,
}

/// Sparse TF-IDF vector, L2-normalized unless it has no terms.
///
/// Entries are `(term index, weight)` sorted by term index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    entries: Vec<(usize, f64)>,
}

impl TermVector {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dot product. For two unit vectors this is their cosine similarity.
    pub fn dot(&self, other: &Self) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_idx, a_w) = self.entries[i];
            let (b_idx, b_w) = other.entries[j];
            match a_idx.cmp(&b_idx) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a_w * b_w;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}

/// Vocabulary and smoothed IDF weights fitted on a set of documents.
///
/// `idf(t) = ln((1 + n) / (1 + df(t))) + 1`, where `n` is the number of
/// documents and `df(t)` the number of documents containing `t`. Terms are
/// indexed in alphabetical order so vectors are reproducible.
#[derive(Debug, Clone)]
pub struct TfIdfModel {
    vocabulary: HashMap<String, usize>,
    terms: Vec<String>,
    doc_frequencies: Vec<usize>,
    idf: Vec<f64>,
    total_docs: usize,
    min_term_len: usize,
}

impl TfIdfModel {
    /// Fit a model on raw or canonical documents.
    pub fn fit<S: AsRef<str>>(
        documents: &[S],
        min_term_len: usize,
    ) -> Result<Self, VectorizeError> {
        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|d| document_terms(d.as_ref(), min_term_len))
            .collect();
        Self::fit_terms(&tokenized, min_term_len)
    }

    fn fit_terms(tokenized: &[Vec<String>], min_term_len: usize) -> Result<Self, VectorizeError> {
        let mut df: BTreeMap<&str, usize> = BTreeMap::new();
        for terms in tokenized {
            let unique: HashSet<&str> = terms.iter().map(String::as_str).collect();
            for term in unique {
                *df.entry(term).or_default() += 1;
            }
        }

        if df.is_empty() {
            return Err(VectorizeError::EmptyVocabulary);
        }

        let n = tokenized.len() as f64;
        let mut vocabulary = HashMap::with_capacity(df.len());
        let mut terms = Vec::with_capacity(df.len());
        let mut doc_frequencies = Vec::with_capacity(df.len());
        let mut idf = Vec::with_capacity(df.len());

        for (idx, (term, count)) in df.into_iter().enumerate() {
            vocabulary.insert(term.to_string(), idx);
            terms.push(term.to_string());
            doc_frequencies.push(count);
            idf.push(((1.0 + n) / (1.0 + count as f64)).ln() + 1.0);
        }

        Ok(Self {
            vocabulary,
            terms,
            doc_frequencies,
            idf,
            total_docs: tokenized.len(),
            min_term_len,
        })
    }

    pub fn vocabulary_len(&self) -> usize {
        self.terms.len()
    }

    pub fn total_docs(&self) -> usize {
        self.total_docs
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|&idx| self.idf[idx])
    }

    pub fn document_frequency(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).map(|&idx| self.doc_frequencies[idx])
    }

    /// Terms sorted by document frequency (descending), then alphabetically.
    pub fn terms_by_document_frequency(&self) -> Vec<(&str, usize)> {
        let mut out: Vec<(&str, usize)> = self
            .terms
            .iter()
            .map(String::as_str)
            .zip(self.doc_frequencies.iter().copied())
            .collect();
        out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        out
    }

    /// Vectorize a document against the fitted vocabulary. Unknown terms
    /// are ignored.
    pub fn transform(&self, document: &str) -> TermVector {
        self.vectorize(&document_terms(document, self.min_term_len))
    }

    fn vectorize(&self, terms: &[String]) -> TermVector {
        let mut counts: HashMap<usize, u32> = HashMap::new();
        for term in terms {
            if let Some(&idx) = self.vocabulary.get(term) {
                *counts.entry(idx).or_default() += 1;
            }
        }

        let mut entries: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(idx, tf)| (idx, tf as f64 * self.idf[idx]))
            .collect();
        entries.sort_by_key(|&(idx, _)| idx);

        let norm = entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, w) in &mut entries {
                *w /= norm;
            }
        } else {
            entries.clear();
        }

        TermVector { entries }
    }
}

/// Scores a query against a corpus with TF-IDF cosine similarity.
///
/// The query and corpus are vectorized together on every call; nothing is
/// cached between calls.
#[derive(Debug, Clone, Copy)]
pub struct SimilarityScorer {
    min_term_len: usize,
}

impl SimilarityScorer {
    pub fn new() -> Self {
        Self {
            min_term_len: DEFAULT_MIN_TERM_LEN,
        }
    }

    /// Ignore terms shorter than `len` characters.
    pub fn min_term_len(mut self, len: usize) -> Self {
        self.min_term_len = len.max(1);
        self
    }

    /// Score every corpus entry against the query, surfacing vectorization
    /// failures.
    pub fn try_score<S: AsRef<str>>(
        &self,
        query: &str,
        corpus: &[S],
    ) -> Result<Vec<f64>, VectorizeError> {
        if corpus.is_empty() {
            return Ok(Vec::new());
        }

        let mut tokenized: Vec<Vec<String>> = Vec::with_capacity(corpus.len() + 1);
        tokenized.push(document_terms(query, self.min_term_len));
        tokenized.extend(
            corpus
                .iter()
                .map(|d| document_terms(d.as_ref(), self.min_term_len)),
        );

        let model = TfIdfModel::fit_terms(&tokenized, self.min_term_len)?;
        debug!(
            docs = model.total_docs(),
            vocabulary = model.vocabulary_len(),
            "fitted tf-idf model"
        );

        let query_vec = model.vectorize(&tokenized[0]);
        Ok(tokenized[1..]
            .iter()
            .map(|terms| query_vec.dot(&model.vectorize(terms)).clamp(0.0, 1.0))
            .collect())
    }

    /// Score every corpus entry against the query.
    ///
    /// Total: an empty corpus yields an empty vector, and a corpus that
    /// cannot be vectorized yields one zero per entry.
    pub fn score<S: AsRef<str>>(&self, query: &str, corpus: &[S]) -> Vec<f64> {
        match self.try_score(query, corpus) {
            Ok(scores) => scores,
            Err(err) => {
                warn!(%err, entries = corpus.len(), "vectorization failed, scoring all zero");
                vec![0.0; corpus.len()]
            }
        }
    }
}

impl Default for SimilarityScorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Score `query` against `corpus` with default settings.
pub fn score<S: AsRef<str>>(query: &str, corpus: &[S]) -> Vec<f64> {
    SimilarityScorer::new().score(query, corpus)
}

fn document_terms(document: &str, min_term_len: usize) -> Vec<String> {
    let lower = document.to_lowercase();
    normalize::tokens(&lower)
        .filter(|t| t.len() >= min_term_len)
        .map(str::to_owned)
        .collect()
}
