//! Block-level filtering of parsed markup.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;
use url::Url;

use super::page::{ContentBlock, ExtractedPage};
use super::root::RootSelector;

/// Elements that never carry content and are dropped before extraction.
const STRIPPED_TAGS: &str = "script, style, nav, footer, header";
const BOILERPLATE_MARKERS: &[&str] = &["cookie", "advertisement", "subscribe", "newsletter"];
const HEADING_BLACKLIST: &[&str] = &["menu", "navigation", "footer"];
const MIN_TEXT_CHARS: usize = 10;
/// Paragraphs need strictly more words than this.
const MIN_PARAGRAPH_WORDS: usize = 5;

static STRIP_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse(STRIPPED_TAGS).unwrap());
static TITLE_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").unwrap());
static BLOCK_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1, h2, h3, h4, p, div").unwrap());

/// Run extraction on markup that has already been fetched.
pub fn extract_from_html(html: &str, url: &str, root_selector: &dyn RootSelector) -> ExtractedPage {
    let mut doc = Html::parse_document(html);
    strip_non_content(&mut doc);

    let title = page_title(&doc);
    let heading = title
        .clone()
        .unwrap_or_else(|| format!("Scraped Content from {}", host_of(url)));

    let content = match root_selector.select_root(&doc) {
        Some(root) => collect_blocks(root),
        None => Vec::new(),
    };
    debug!(url, root = root_selector.name(), blocks = content.len(), "extracted blocks");

    let blocks = if content.is_empty() {
        vec![ContentBlock::Empty]
    } else {
        let mut blocks = Vec::with_capacity(content.len() + 1);
        blocks.push(ContentBlock::Title { text: heading });
        blocks.extend(content);
        blocks
    };

    ExtractedPage {
        url: url.to_string(),
        title,
        blocks,
    }
}

fn strip_non_content(doc: &mut Html) {
    let ids: Vec<_> = doc.select(&STRIP_SEL).map(|el| el.id()).collect();
    for id in ids {
        if let Some(mut node) = doc.tree.get_mut(id) {
            node.detach();
        }
    }
}

fn page_title(doc: &Html) -> Option<String> {
    doc.select(&TITLE_SEL)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty())
}

fn host_of(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_default()
}

fn collect_blocks(root: ElementRef<'_>) -> Vec<ContentBlock> {
    root.select(&BLOCK_SEL)
        .filter(|el| el.id() != root.id())
        .filter_map(classify)
        .collect()
}

fn classify(el: ElementRef<'_>) -> Option<ContentBlock> {
    let raw: String = el.text().collect();
    let text = raw.trim();
    if text.chars().count() < MIN_TEXT_CHARS {
        return None;
    }
    let lower = text.to_lowercase();
    if BOILERPLATE_MARKERS.iter().any(|m| lower.contains(m)) {
        return None;
    }

    match heading_level(el.value().name()) {
        Some(level) => {
            if HEADING_BLACKLIST.iter().any(|p| lower.starts_with(p)) {
                return None;
            }
            Some(ContentBlock::Heading {
                level,
                text: text.to_string(),
            })
        }
        None => (text.split_whitespace().count() > MIN_PARAGRAPH_WORDS).then(|| {
            ContentBlock::Paragraph {
                text: text.to_string(),
            }
        }),
    }
}

fn heading_level(tag: &str) -> Option<u8> {
    match tag {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        _ => None,
    }
}
