pub mod clean;
pub mod filter;
pub mod lemmatize;
pub mod stem;
pub mod tokenize;

use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::resources::{self, LinguisticResources};

pub use clean::clean;
pub use filter::filter_tokens;
pub use lemmatize::lemmatize;
pub use stem::stem;
pub use tokenize::tokenize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Cleaned,
    Tokenized,
    Filtered,
    Stemmed,
    Lemmatized,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Cleaned,
        Stage::Tokenized,
        Stage::Filtered,
        Stage::Stemmed,
        Stage::Lemmatized,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Stage::Cleaned => "cleaned",
            Stage::Tokenized => "tokenized",
            Stage::Filtered => "filtered",
            Stage::Stemmed => "stemmed",
            Stage::Lemmatized => "lemmatized",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Stage::Cleaned => "Cleaned Text",
            Stage::Tokenized => "Tokenized Text",
            Stage::Filtered => "Filtered Text (stop words removed)",
            Stage::Stemmed => "Stemmed Text",
            Stage::Lemmatized => "Lemmatized Text",
        }
    }
}

/// Five index-aligned views of the input corpus. `stemmed` and `lemmatized`
/// are both derived from `filtered`, not from each other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PipelineResult {
    pub cleaned: Vec<String>,
    pub tokenized: Vec<Vec<String>>,
    pub filtered: Vec<Vec<String>>,
    pub stemmed: Vec<Vec<String>>,
    pub lemmatized: Vec<Vec<String>>,
}

/// All stage outputs for a single document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentResult {
    pub cleaned: String,
    pub tokenized: Vec<String>,
    pub filtered: Vec<String>,
    pub stemmed: Vec<String>,
    pub lemmatized: Vec<String>,
}

impl PipelineResult {
    pub fn len(&self) -> usize {
        self.cleaned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cleaned.is_empty()
    }

    /// Token view of a stage for document `index`. The cleaned stage is
    /// returned as its whitespace-separated words.
    pub fn tokens(&self, stage: Stage, index: usize) -> Option<Vec<&str>> {
        let seq = match stage {
            Stage::Cleaned => {
                return self.cleaned.get(index).map(|s| s.split_whitespace().collect())
            }
            Stage::Tokenized => self.tokenized.get(index)?,
            Stage::Filtered => self.filtered.get(index)?,
            Stage::Stemmed => self.stemmed.get(index)?,
            Stage::Lemmatized => self.lemmatized.get(index)?,
        };
        Some(seq.iter().map(String::as_str).collect())
    }

    fn push(&mut self, doc: DocumentResult) {
        self.cleaned.push(doc.cleaned);
        self.tokenized.push(doc.tokenized);
        self.filtered.push(doc.filtered);
        self.stemmed.push(doc.stemmed);
        self.lemmatized.push(doc.lemmatized);
    }
}

impl FromIterator<DocumentResult> for PipelineResult {
    fn from_iter<I: IntoIterator<Item = DocumentResult>>(iter: I) -> Self {
        let mut result = PipelineResult::default();
        for doc in iter {
            result.push(doc);
        }
        result
    }
}

/// Run the five stages over one document.
pub fn process_document(text: &str, resources: &LinguisticResources) -> DocumentResult {
    let cleaned = clean(text);
    let tokenized = tokenize(&cleaned);
    let filtered = filter_tokens(&tokenized, resources);
    let stemmed = filtered.iter().map(|t| stem(t)).collect();
    let lemmatized = filtered.iter().map(|t| lemmatize(t, resources)).collect();
    DocumentResult {
        cleaned,
        tokenized,
        filtered,
        stemmed,
        lemmatized,
    }
}

/// Process a corpus with the process-wide resources.
pub fn process_corpus<S: AsRef<str> + Sync>(documents: &[S]) -> PipelineResult {
    process_corpus_with(documents, resources::global())
}

#[cfg(feature = "rayon")]
pub fn process_corpus_with<S: AsRef<str> + Sync>(
    documents: &[S],
    resources: &LinguisticResources,
) -> PipelineResult {
    use rayon::prelude::*;

    let t0 = Instant::now();
    let docs: Vec<DocumentResult> = documents
        .par_iter()
        .map(|d| process_document(d.as_ref(), resources))
        .collect();
    let result: PipelineResult = docs.into_iter().collect();
    debug!(documents = result.len(), elapsed_ms = t0.elapsed().as_millis() as u64, "pipeline done");
    result
}

#[cfg(not(feature = "rayon"))]
pub fn process_corpus_with<S: AsRef<str> + Sync>(
    documents: &[S],
    resources: &LinguisticResources,
) -> PipelineResult {
    let t0 = Instant::now();
    let result: PipelineResult = documents
        .iter()
        .map(|d| process_document(d.as_ref(), resources))
        .collect();
    debug!(documents = result.len(), elapsed_ms = t0.elapsed().as_millis() as u64, "pipeline done");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(v: &[String]) -> Vec<&str> {
        v.iter().map(String::as_str).collect()
    }

    #[test]
    fn scenario_sentence() {
        let r = process_corpus(&["The quick brown foxes are running and jumping over lazy dogs 123!"]);
        assert_eq!(r.cleaned[0], "the quick brown foxes are running and jumping over lazy dogs");
        assert_eq!(r.tokenized[0].len(), 11);
        assert_eq!(
            words(&r.filtered[0]),
            ["quick", "brown", "foxes", "running", "jumping", "lazy", "dogs"]
        );
        assert_eq!(
            words(&r.stemmed[0]),
            ["quick", "brown", "fox", "run", "jump", "lazi", "dog"]
        );
        assert_eq!(
            words(&r.lemmatized[0]),
            ["quick", "brown", "fox", "running", "jumping", "lazy", "dog"]
        );
    }

    #[test]
    fn words_without_noun_lemma_pass_through() {
        let r = process_corpus(&["Always perhaps bias atlas chaos whereas towards"]);
        assert_eq!(
            words(&r.lemmatized[0]),
            ["always", "perhaps", "bias", "atlas", "chaos", "whereas", "towards"]
        );
    }

    #[test]
    fn corpora_stay_index_aligned() {
        let docs = ["First document here.", "", "Second one, with 2 numbers!", "<b>bold</b>"];
        let r = process_corpus(&docs);
        assert_eq!(r.len(), docs.len());
        assert_eq!(r.tokenized.len(), docs.len());
        assert_eq!(r.filtered.len(), docs.len());
        assert_eq!(r.stemmed.len(), docs.len());
        assert_eq!(r.lemmatized.len(), docs.len());
        for i in 0..docs.len() {
            assert_eq!(r.stemmed[i].len(), r.filtered[i].len());
            assert_eq!(r.lemmatized[i].len(), r.filtered[i].len());
        }
    }

    #[test]
    fn filtered_is_subset_of_tokenized() {
        let res = resources::global();
        let r = process_corpus(&["It was the best of times, it was the worst of times; all going on."]);
        for t in &r.filtered[0] {
            assert!(r.tokenized[0].contains(t));
            assert!(!res.is_stopword(t));
            assert!(t.chars().count() > 2);
        }
    }

    #[test]
    fn empty_document_yields_empty_outputs() {
        let r = process_corpus(&[""]);
        assert_eq!(r.len(), 1);
        assert_eq!(r.cleaned[0], "");
        assert!(r.tokenized[0].is_empty());
        assert!(r.lemmatized[0].is_empty());
    }

    #[test]
    fn empty_corpus() {
        let docs: [&str; 0] = [];
        assert!(process_corpus(&docs).is_empty());
    }

    #[test]
    fn stage_views() {
        let r = process_corpus(&["Cats chasing mice"]);
        assert_eq!(r.tokens(Stage::Cleaned, 0), Some(vec!["cats", "chasing", "mice"]));
        assert_eq!(r.tokens(Stage::Lemmatized, 0), Some(vec!["cat", "chasing", "mouse"]));
        assert_eq!(r.tokens(Stage::Stemmed, 0), Some(vec!["cat", "chase", "mice"]));
        assert_eq!(r.tokens(Stage::Filtered, 1), None);
        assert_eq!(Stage::ALL.len(), 5);
    }
}
