use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;

static DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());
static NON_WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W+").unwrap());
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
/// A complete start, end, comment or doctype tag.
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"</?[A-Za-z!][^<>]*>").unwrap());

/// Normalize one document: markup removed, lowercased, digits and
/// punctuation deleted, separators collapsed to single spaces, trimmed.
pub fn clean(text: &str) -> String {
    let text = strip_markup(text);
    let text = text.to_lowercase();
    let text = DIGITS_RE.replace_all(&text, "");
    let text: String = text.chars().filter(|c| !c.is_ascii_punctuation()).collect();
    let text = NON_WORD_RE.replace_all(&text, " ");
    let text = WHITESPACE_RE.replace_all(&text, " ");
    text.trim().to_string()
}

/// Text content of `text` parsed as an HTML fragment. Plain text without
/// complete tags or entity markers is returned as is. A `<` that does not
/// open a complete tag stays literal text.
pub fn strip_markup(text: &str) -> String {
    if !TAG_RE.is_match(text) && !text.contains('&') {
        return text.to_string();
    }
    let fragment = Html::parse_fragment(&escape_bare_brackets(text));
    fragment.root_element().text().collect()
}

fn escape_bare_brackets(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for tag in TAG_RE.find_iter(text) {
        out.push_str(&text[last..tag.start()].replace('<', "&lt;"));
        out.push_str(tag.as_str());
        last = tag.end();
    }
    out.push_str(&text[last..].replace('<', "&lt;"));
    out
}
