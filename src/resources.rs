//! Process-wide linguistic resources.
//!
//! Each resource is parsed on first use and never changes afterwards. A resource
//! that fails to load is logged and treated as empty, so the pipeline still runs
//! with that stage reduced to a no-op.

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::error::ResourceLoadError;

const EMBEDDED_STOPWORDS: &str = include_str!("../resources/stopwords_en.txt");
const EMBEDDED_LEMMA_EXCEPTIONS: &str = include_str!("../resources/lemma_exceptions.tsv");
const EMBEDDED_NOUN_LEMMAS: &str = include_str!("../resources/nouns_en.txt");

static RESOURCES: OnceLock<LinguisticResources> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceName {
    Stopwords,
    LemmaExceptions,
    NounLemmas,
}

impl ResourceName {
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceName::Stopwords => "stopwords",
            ResourceName::LemmaExceptions => "lemma_exceptions",
            ResourceName::NounLemmas => "noun_lemmas",
        }
    }

    fn file_name(self) -> &'static str {
        match self {
            ResourceName::Stopwords => "stopwords.txt",
            ResourceName::LemmaExceptions => "lemma_exceptions.tsv",
            ResourceName::NounLemmas => "nouns.txt",
        }
    }

    fn embedded(self) -> &'static str {
        match self {
            ResourceName::Stopwords => EMBEDDED_STOPWORDS,
            ResourceName::LemmaExceptions => EMBEDDED_LEMMA_EXCEPTIONS,
            ResourceName::NounLemmas => EMBEDDED_NOUN_LEMMAS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResourceSource {
    /// Data compiled into the binary.
    #[default]
    Embedded,
    /// Files read from a directory at first use.
    Directory(PathBuf),
}

#[derive(Debug, Default)]
pub struct LinguisticResources {
    source: ResourceSource,
    stopwords: OnceLock<HashSet<String>>,
    lemma_exceptions: OnceLock<HashMap<String, String>>,
    noun_lemmas: OnceLock<HashSet<String>>,
}

/// Choose where the process-wide resources come from. Must run before the
/// first call to [`global`]; returns `false` if the cache was already set up.
pub fn configure(source: ResourceSource) -> bool {
    let accepted = RESOURCES.set(LinguisticResources::new(source)).is_ok();
    if !accepted {
        warn!("linguistic resources already initialized; ignoring new source");
    }
    accepted
}

/// Shared resources, initialized with the embedded data unless [`configure`]
/// ran first.
pub fn global() -> &'static LinguisticResources {
    RESOURCES.get_or_init(LinguisticResources::default)
}

impl LinguisticResources {
    pub fn new(source: ResourceSource) -> Self {
        LinguisticResources {
            source,
            ..Default::default()
        }
    }

    pub fn source(&self) -> &ResourceSource {
        &self.source
    }

    pub fn stopwords(&self) -> &HashSet<String> {
        self.stopwords
            .get_or_init(|| self.load_word_list(ResourceName::Stopwords))
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords().contains(token)
    }

    /// Base noun forms the lemmatizer may produce.
    pub fn noun_lemmas(&self) -> &HashSet<String> {
        self.noun_lemmas
            .get_or_init(|| self.load_word_list(ResourceName::NounLemmas))
    }

    pub fn is_noun_lemma(&self, word: &str) -> bool {
        self.noun_lemmas().contains(word)
    }

    fn load_word_list(&self, name: ResourceName) -> HashSet<String> {
        let set = match self.read(name) {
            Ok((text, _)) => parse_word_list(&text),
            Err(e) => {
                warn!(resource = name.as_str(), "{e}; using empty set");
                HashSet::new()
            }
        };
        debug!(resource = name.as_str(), entries = set.len(), "loaded");
        set
    }

    pub fn lemma_exceptions(&self) -> &HashMap<String, String> {
        self.lemma_exceptions.get_or_init(|| {
            let table = self
                .read(ResourceName::LemmaExceptions)
                .and_then(|(text, path)| parse_lemma_table(&text, &path));
            match table {
                Ok(table) => {
                    debug!(
                        resource = ResourceName::LemmaExceptions.as_str(),
                        entries = table.len(),
                        "loaded"
                    );
                    table
                }
                Err(e) => {
                    warn!(
                        resource = ResourceName::LemmaExceptions.as_str(),
                        "{e}; using empty table"
                    );
                    HashMap::new()
                }
            }
        })
    }

    fn read(&self, name: ResourceName) -> Result<(Cow<'static, str>, PathBuf), ResourceLoadError> {
        match &self.source {
            ResourceSource::Embedded => Ok((
                Cow::Borrowed(name.embedded()),
                PathBuf::from(format!("<embedded>/{}", name.file_name())),
            )),
            ResourceSource::Directory(dir) => {
                let path = dir.join(name.file_name());
                let text = std::fs::read_to_string(&path).map_err(|source| ResourceLoadError::Io {
                    path: path.clone(),
                    source,
                })?;
                Ok((Cow::Owned(text), path))
            }
        }
    }
}

fn content_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'))
}

/// One word per line; blank lines and `#` comments are skipped.
pub fn parse_word_list(text: &str) -> HashSet<String> {
    content_lines(text).map(|(_, l)| l.to_lowercase()).collect()
}

/// `form<TAB>lemma` per line.
pub fn parse_lemma_table(text: &str, path: &Path) -> Result<HashMap<String, String>, ResourceLoadError> {
    let mut table = HashMap::new();
    for (line, entry) in content_lines(text) {
        let mut parts = entry.split('\t').map(str::trim);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(form), Some(lemma), None) if !form.is_empty() && !lemma.is_empty() => {
                table.insert(form.to_lowercase(), lemma.to_lowercase());
            }
            _ => {
                return Err(ResourceLoadError::Malformed {
                    path: path.to_path_buf(),
                    line,
                    entry: entry.to_string(),
                })
            }
        }
    }
    Ok(table)
}
