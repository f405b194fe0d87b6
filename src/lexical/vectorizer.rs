//! TF-IDF term-weight space over unigrams and bigrams.

use std::collections::HashMap;

use crate::similarity::cosine_from_parts;

/// Sparse weight vector, entries sorted by feature index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    fn from_unsorted(mut entries: Vec<(usize, f64)>) -> Self {
        entries.sort_unstable_by_key(|(idx, _)| *idx);
        Self { entries }
    }

    /// Returns the `(feature index, weight)` pairs.
    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    /// Returns the weight of `idx` (zero if absent).
    pub fn weight(&self, idx: usize) -> f64 {
        self.entries
            .binary_search_by_key(&idx, |(i, _)| *i)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0.0)
    }

    /// Returns `true` if no feature carries a non-zero weight.
    pub fn is_zero(&self) -> bool {
        self.entries.iter().all(|(_, w)| *w == 0.0)
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    pub fn dot(&self, other: &SparseVector) -> f64 {
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

    /// Cosine similarity; `0.0` when either vector is all zeros.
    pub fn cosine(&self, other: &SparseVector) -> f64 {
        cosine_from_parts(self.dot(other), self.norm(), other.norm())
    }

    /// The `n` highest strictly positive weights, descending.
    ///
    /// Equal weights keep feature-index order, which is alphabetical.
    pub fn top_terms(&self, n: usize) -> Vec<(usize, f64)> {
        let mut positive: Vec<(usize, f64)> = self
            .entries
            .iter()
            .copied()
            .filter(|(_, w)| *w > 0.0)
            .collect();
        positive.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        positive.truncate(n);
        positive
    }

    fn l2_normalized(mut self) -> Self {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, w) in &mut self.entries {
                *w /= norm;
            }
        }
        self
    }
}

/// Fits a [`TermWeightSpace`] over a corpus of normalized documents.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    max_features: usize,
}

impl TfidfVectorizer {
    pub fn new(max_features: usize) -> Self {
        Self { max_features }
    }

    pub fn max_features(&self) -> usize {
        self.max_features
    }

    /// Fits vocabulary and IDF over `docs` and returns one weight row per document.
    ///
    /// When the vocabulary exceeds `max_features`, the most frequent terms across
    /// the corpus are kept (ties alphabetical). Feature indices follow
    /// alphabetical term order.
    pub fn fit_transform<S: AsRef<str>>(&self, docs: &[S]) -> (TermWeightSpace, Vec<SparseVector>) {
        let counts: Vec<HashMap<String, usize>> =
            docs.iter().map(|doc| count_terms(doc.as_ref())).collect();

        let mut document_frequency: HashMap<&str, usize> = HashMap::new();
        let mut corpus_frequency: HashMap<&str, usize> = HashMap::new();
        for doc_counts in &counts {
            for (term, &n) in doc_counts {
                *document_frequency.entry(term.as_str()).or_default() += 1;
                *corpus_frequency.entry(term.as_str()).or_default() += n;
            }
        }

        let mut terms: Vec<&str> = corpus_frequency.keys().copied().collect();
        if terms.len() > self.max_features {
            terms.sort_unstable_by(|a, b| {
                corpus_frequency[b]
                    .cmp(&corpus_frequency[a])
                    .then_with(|| a.cmp(b))
            });
            terms.truncate(self.max_features);
        }
        terms.sort_unstable();

        let n_docs = docs.len() as f64;
        let idf: Vec<f64> = terms
            .iter()
            .map(|term| ((1.0 + n_docs) / (1.0 + document_frequency[term] as f64)).ln() + 1.0)
            .collect();

        let terms: Vec<String> = terms.into_iter().map(str::to_string).collect();
        let vocabulary = terms
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.clone(), idx))
            .collect();

        let space = TermWeightSpace {
            vocabulary,
            terms,
            idf,
        };
        let rows = counts.iter().map(|c| space.weigh(c)).collect();

        (space, rows)
    }
}

/// Vocabulary and IDF weights shared by every document of one fit.
#[derive(Debug, Clone)]
pub struct TermWeightSpace {
    vocabulary: HashMap<String, usize>,
    terms: Vec<String>,
    idf: Vec<f64>,
}

impl TermWeightSpace {
    /// Vectorizes a single normalized document with the fitted vocabulary and IDF.
    pub fn transform(&self, doc: &str) -> SparseVector {
        self.weigh(&count_terms(doc))
    }

    /// Term at feature index `idx`.
    pub fn term(&self, idx: usize) -> Option<&str> {
        self.terms.get(idx).map(String::as_str)
    }

    /// Feature index of `term`, if it is in the vocabulary.
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// IDF weight of `term`, if it is in the vocabulary.
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|&idx| self.idf[idx])
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    fn weigh(&self, counts: &HashMap<String, usize>) -> SparseVector {
        let entries = counts
            .iter()
            .filter_map(|(term, &n)| {
                self.vocabulary
                    .get(term)
                    .map(|&idx| (idx, n as f64 * self.idf[idx]))
            })
            .collect();
        SparseVector::from_unsorted(entries).l2_normalized()
    }
}

/// Counts unigrams and adjacent-token bigrams of a whitespace-tokenized document.
fn count_terms(doc: &str) -> HashMap<String, usize> {
    let tokens: Vec<&str> = doc.split_whitespace().collect();
    let mut counts = HashMap::new();

    for token in &tokens {
        *counts.entry((*token).to_string()).or_default() += 1;
    }
    for pair in tokens.windows(2) {
        *counts.entry(format!("{} {}", pair[0], pair[1])).or_default() += 1;
    }

    counts
}
