use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::pipeline::PipelineResult;

pub const PROCESSED_TEXT_FILE: &str = "processed_text.txt";
pub const TOKENS_FILE: &str = "tokens.txt";

fn first_lemmas(result: &PipelineResult) -> &[String] {
    result.lemmatized.first().map(Vec::as_slice).unwrap_or(&[])
}

/// Lemmatized tokens of the first document, space-joined.
pub fn processed_text(result: &PipelineResult) -> String {
    first_lemmas(result).join(" ")
}

/// Lemmatized tokens of the first document, one per line.
pub fn token_lines(result: &PipelineResult) -> String {
    first_lemmas(result).join("\n")
}

#[derive(Debug)]
pub struct ExportPaths {
    pub processed_text: PathBuf,
    pub tokens: PathBuf,
}

pub fn write_exports(result: &PipelineResult, dir: &Path) -> Result<ExportPaths> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    let paths = ExportPaths {
        processed_text: dir.join(PROCESSED_TEXT_FILE),
        tokens: dir.join(TOKENS_FILE),
    };
    fs::write(&paths.processed_text, processed_text(result))
        .with_context(|| format!("Failed to write {}", paths.processed_text.display()))?;
    fs::write(&paths.tokens, token_lines(result))
        .with_context(|| format!("Failed to write {}", paths.tokens.display()))?;
    Ok(paths)
}

/// Summary counts shown before processing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub characters: usize,
    pub words: usize,
    pub lines: usize,
    pub unique_words: usize,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        let unique: HashSet<String> = text.split_whitespace().map(str::to_lowercase).collect();
        TextStats {
            characters: text.chars().count(),
            words: text.split_whitespace().count(),
            lines: text.lines().count(),
            unique_words: unique.len(),
        }
    }
}
