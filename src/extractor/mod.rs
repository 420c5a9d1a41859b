//! Webpage main-content extraction.
//!
//! Fetch → strip non-content elements → pick a content root → keep headings
//! and paragraphs that pass the length, boilerplate and word-count rules.

pub mod content;
pub mod fetch;
pub mod page;
pub mod root;

use reqwest::Client;
use tracing::info;

use crate::config::FetchSettings;
use crate::error::{ExtractError, FetchError};

pub use content::extract_from_html;
pub use fetch::normalize_url;
pub use page::{ContentBlock, ExtractedPage, NO_CONTENT_MESSAGE};
pub use root::{BodyRootSelector, PriorityRootSelector, RootSelector};

pub struct Extractor {
    client: Client,
    root_selector: Box<dyn RootSelector>,
}

impl Extractor {
    pub fn new(settings: &FetchSettings) -> Result<Self, FetchError> {
        Ok(Extractor {
            client: fetch::build_client(settings)?,
            root_selector: Box::new(PriorityRootSelector),
        })
    }

    /// Swap the content-root heuristic.
    pub fn with_root_selector(mut self, selector: impl RootSelector + 'static) -> Self {
        self.root_selector = Box::new(selector);
        self
    }

    pub async fn extract(&self, raw_url: &str) -> Result<ExtractedPage, ExtractError> {
        let url = fetch::parse_target(raw_url)?;
        let html = fetch::fetch_html(&self.client, &url).await?;
        let page = extract_from_html(&html, url.as_str(), self.root_selector.as_ref());
        info!(
            url = %url,
            blocks = page.blocks.len(),
            empty = page.is_empty(),
            "extracted page"
        );
        Ok(page)
    }
}

/// Extract a page with default fetch settings.
pub async fn extract_page(url: &str) -> Result<ExtractedPage, ExtractError> {
    Extractor::new(&FetchSettings::default())?.extract(url).await
}
