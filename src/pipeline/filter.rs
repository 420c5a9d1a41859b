use crate::resources::LinguisticResources;

/// Tokens at or below this many characters are dropped.
pub const MIN_TOKEN_CHARS: usize = 2;

/// Keep tokens that are neither stopwords nor too short.
pub fn filter_tokens(tokens: &[String], resources: &LinguisticResources) -> Vec<String> {
    tokens
        .iter()
        .filter(|t| keep(t, resources))
        .cloned()
        .collect()
}

fn keep(token: &str, resources: &LinguisticResources) -> bool {
    token.chars().count() > MIN_TOKEN_CHARS && !resources.is_stopword(token)
}
