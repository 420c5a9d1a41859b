//! Text preprocessing toolkit: webpage content extraction plus a five-stage
//! normalization pipeline (clean, tokenize, filter, stem, lemmatize).

pub mod config;
pub mod error;
pub mod export;
pub mod extractor;
pub mod pipeline;
pub mod resources;

pub use error::{ExtractError, FetchError, ParseError, ResourceLoadError};
pub use extractor::{extract_page, ContentBlock, ExtractedPage, Extractor};
pub use pipeline::{process_corpus, PipelineResult, Stage};
