use nlp_processor::extractor::{extract_from_html, PriorityRootSelector};
use nlp_processor::pipeline::{clean, process_corpus};
use nlp_processor::resources;

const DOCS: &[&str] = &[
    "The quick brown foxes are running and jumping over lazy dogs 123!",
    "I can't believe it's already 2024... Isn't it amazing?",
    "<p>Researchers published <b>three</b> studies on children's libraries.</p>",
    "",
    "   \t\n ",
    "Naïve café owners' résumés — really?!",
];

#[test]
fn clean_properties_hold() {
    for d in DOCS {
        let c = clean(d);
        assert!(c.chars().count() <= d.chars().count(), "length grew for {d:?}");
        assert!(!c.chars().any(|ch| ch.is_ascii_digit()), "digit left in {c:?}");
        assert!(!c.chars().any(|ch| ch.is_ascii_punctuation()), "punctuation left in {c:?}");
        assert!(!c.contains("  "), "double space in {c:?}");
        assert_eq!(c, c.trim());
        assert_eq!(clean(&c), c);
    }
}

#[test]
fn stage_invariants_hold() {
    let stopwords = resources::global();
    let r = process_corpus(DOCS);
    assert_eq!(r.cleaned.len(), DOCS.len());
    assert_eq!(r.tokenized.len(), DOCS.len());
    assert_eq!(r.filtered.len(), DOCS.len());
    assert_eq!(r.stemmed.len(), DOCS.len());
    assert_eq!(r.lemmatized.len(), DOCS.len());

    for i in 0..DOCS.len() {
        for t in &r.filtered[i] {
            assert!(r.tokenized[i].contains(t));
            assert!(!stopwords.is_stopword(t));
            assert!(t.chars().count() > 2);
        }
        assert_eq!(r.stemmed[i].len(), r.filtered[i].len());
        assert_eq!(r.lemmatized[i].len(), r.filtered[i].len());
    }
}

#[test]
fn deterministic() {
    assert_eq!(process_corpus(DOCS), process_corpus(DOCS));
}

#[test]
fn markup_document() {
    let r = process_corpus(&[DOCS[2]]);
    assert_eq!(r.cleaned[0], "researchers published three studies on childrens libraries");
    assert_eq!(
        r.lemmatized[0],
        ["researcher", "published", "three", "study", "childrens", "library"]
    );
    assert_eq!(
        r.stemmed[0],
        ["research", "publish", "three", "studi", "children", "librari"]
    );
}

#[test]
fn scraped_page_feeds_pipeline() {
    let html = std::fs::read_to_string("tests/fixtures/article.html").unwrap();
    let page = extract_from_html(&html, "https://news.example.com/rust", &PriorityRootSelector);
    let r = process_corpus(&[page.render()]);
    assert!(r.lemmatized[0].contains(&"vulnerability".to_string()));
    assert!(r.stemmed[0].contains(&"memori".to_string()));
    assert!(!r.filtered[0].contains(&"the".to_string()));
}
