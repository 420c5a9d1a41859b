//! Content-root selection strategies.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

static CONTENT_CLASS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)content|main|article").unwrap());
static MAIN_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("main").unwrap());
static ARTICLE_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("article").unwrap());
static CLASSED_CONTAINER_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div[class], section[class]").unwrap());
static BODY_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("body").unwrap());

/// Picks the element whose descendants are scanned for content blocks.
pub trait RootSelector: Send + Sync {
    fn select_root<'a>(&self, doc: &'a Html) -> Option<ElementRef<'a>>;

    fn name(&self) -> &'static str;
}

/// `<main>`, then `<article>`, then a container whose class mentions
/// content/main/article, then `<body>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PriorityRootSelector;

impl RootSelector for PriorityRootSelector {
    fn select_root<'a>(&self, doc: &'a Html) -> Option<ElementRef<'a>> {
        doc.select(&MAIN_SEL)
            .next()
            .or_else(|| doc.select(&ARTICLE_SEL).next())
            .or_else(|| {
                doc.select(&CLASSED_CONTAINER_SEL).find(|el| {
                    el.value()
                        .attr("class")
                        .is_some_and(|c| CONTENT_CLASS_RE.is_match(c))
                })
            })
            .or_else(|| doc.select(&BODY_SEL).next())
    }

    fn name(&self) -> &'static str {
        "priority"
    }
}

/// Always the whole `<body>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BodyRootSelector;

impl RootSelector for BodyRootSelector {
    fn select_root<'a>(&self, doc: &'a Html) -> Option<ElementRef<'a>> {
        doc.select(&BODY_SEL).next()
    }

    fn name(&self) -> &'static str {
        "body"
    }
}
