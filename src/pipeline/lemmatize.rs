//! Noun lemmatizer: exception table first, then plural detachment rules whose
//! output must be a known noun lemma.

use crate::resources::LinguisticResources;

/// Lemmas shorter than this are rejected and the word is kept as is.
const MIN_LEMMA_CHARS: usize = 3;

/// (suffix, replacement), most specific first.
const DETACHMENT_RULES: &[(&str, &str)] = &[
    ("ies", "y"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("sses", "ss"),
    ("xes", "x"),
    ("zes", "z"),
    ("men", "man"),
    ("s", ""),
];

/// Endings that look plural but are singular already.
const SINGULAR_ENDINGS: &[&str] = &["ss", "us", "is", "ous"];

pub fn lemmatize(word: &str, resources: &LinguisticResources) -> String {
    if let Some(lemma) = resources.lemma_exceptions().get(word) {
        return lemma.clone();
    }
    if SINGULAR_ENDINGS.iter().any(|e| word.ends_with(e)) {
        return word.to_string();
    }
    DETACHMENT_RULES
        .iter()
        .find_map(|(suffix, replacement)| {
            let stem = word.strip_suffix(suffix)?;
            let lemma = format!("{stem}{replacement}");
            (lemma.chars().count() >= MIN_LEMMA_CHARS && resources.is_noun_lemma(&lemma))
                .then_some(lemma)
        })
        .unwrap_or_else(|| word.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::ResourceSource;
    use std::path::PathBuf;

    fn check(pairs: &[(&str, &str)]) {
        let res = LinguisticResources::default();
        for (word, expected) in pairs {
            assert_eq!(lemmatize(word, &res), *expected, "lemmatize({word})");
        }
    }

    #[test]
    fn scenario_words() {
        check(&[
            ("foxes", "fox"),
            ("dogs", "dog"),
            ("running", "running"),
            ("jumping", "jumping"),
            ("quick", "quick"),
            ("lazy", "lazy"),
        ]);
    }

    #[test]
    fn regular_plurals() {
        check(&[
            ("stories", "story"),
            ("churches", "church"),
            ("dishes", "dish"),
            ("boxes", "box"),
            ("firemen", "fireman"),
            ("cats", "cat"),
        ]);
    }

    #[test]
    fn singular_lookalikes() {
        check(&[
            ("glass", "glass"),
            ("bonus", "bonus"),
            ("analysis", "analysis"),
            ("famous", "famous"),
            ("news", "news"),
            ("series", "series"),
        ]);
    }

    #[test]
    fn irregular_forms_from_table() {
        check(&[
            ("children", "child"),
            ("mice", "mouse"),
            ("women", "woman"),
            ("buses", "bus"),
            ("houses", "house"),
            ("leaves", "leaf"),
        ]);
    }

    #[test]
    fn too_short_to_strip() {
        check(&[("gas", "gas"), ("its", "its")]);
    }

    #[test]
    fn unknown_lemmas_keep_the_word() {
        check(&[
            ("always", "always"),
            ("perhaps", "perhaps"),
            ("bias", "bias"),
            ("atlas", "atlas"),
            ("chaos", "chaos"),
            ("whereas", "whereas"),
            ("towards", "towards"),
            ("childrens", "childrens"),
        ]);
    }

    #[test]
    fn without_resources_words_are_kept() {
        let res = LinguisticResources::new(ResourceSource::Directory(PathBuf::from("/nonexistent")));
        assert_eq!(lemmatize("children", &res), "children");
        assert_eq!(lemmatize("dogs", &res), "dogs");
    }

    #[test]
    fn custom_noun_list_gates_rules() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("nouns.txt"), "widget\n").unwrap();
        let res = LinguisticResources::new(ResourceSource::Directory(dir.path().to_path_buf()));
        assert_eq!(lemmatize("widgets", &res), "widget");
        assert_eq!(lemmatize("dogs", &res), "dogs");
    }
}
