//! Tag-text vectorization: tokenization with English stop-word removal and
//! smoothed TF-IDF weighting.

use std::collections::HashMap;

/// Common English function words stripped before vectorization. Matching a
/// stop-word is exact (post-lowercasing), so tags like "its-brand" still
/// contribute their non-stop-word halves.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "did", "do", "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers", "him", "his", "how",
    "i", "if", "in", "into", "is", "it", "its", "just", "me", "more", "most", "my", "no", "nor",
    "not", "now", "of", "off", "on", "once", "only", "or", "other", "our", "ours", "out", "over",
    "own", "same", "she", "should", "so", "some", "such", "than", "that", "the", "their",
    "theirs", "them", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "you", "your", "yours",
];

fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.binary_search(&token).is_ok()
}

/// Lowercases, splits on non-alphanumeric boundaries, and drops stop-words.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty() && !is_stop_word(token))
        .map(str::to_owned)
        .collect()
}

/// TF-IDF vectorizer fitted over one document set.
///
/// Weighting: raw term count scaled by `ln((1 + n) / (1 + df)) + 1`, then
/// L2-normalized per document. The smoothing keeps idf strictly positive so
/// terms present in every document still separate documents that repeat
/// them. Documents that tokenize to nothing stay all-zero.
#[derive(Clone, Debug)]
pub struct TfIdfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfIdfVectorizer {
    pub fn fit(documents: &[&str]) -> Self {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|doc| tokenize(doc)).collect();

        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: Vec<usize> = Vec::new();
        for tokens in &tokenized {
            let mut seen_here: Vec<usize> = Vec::new();
            for token in tokens {
                let index = *vocabulary.entry(token.clone()).or_insert_with(|| {
                    doc_freq.push(0);
                    doc_freq.len() - 1
                });
                if !seen_here.contains(&index) {
                    doc_freq[index] += 1;
                    seen_here.push(index);
                }
            }
        }

        let n_docs = documents.len() as f64;
        let idf = doc_freq
            .iter()
            .map(|&df| ((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        Self { vocabulary, idf }
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Dense TF-IDF vector for one document over the fitted vocabulary.
    /// Terms unseen during fit are ignored.
    pub fn transform(&self, document: &str) -> Vec<f64> {
        let mut vector = vec![0.0; self.vocabulary.len()];
        for token in tokenize(document) {
            if let Some(&index) = self.vocabulary.get(&token) {
                vector[index] += self.idf[index];
            }
        }

        let norm: f64 = vector.iter().map(|w| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for weight in &mut vector {
                *weight /= norm;
            }
        }

        vector
    }

    /// Fit over a document set and return one vector per document.
    pub fn fit_transform(documents: &[&str]) -> (Self, Vec<Vec<f64>>) {
        let vectorizer = Self::fit(documents);
        let vectors = documents.iter().map(|doc| vectorizer.transform(doc)).collect();
        (vectorizer, vectors)
    }
}
