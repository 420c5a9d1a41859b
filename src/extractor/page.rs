use serde::Serialize;

pub const NO_CONTENT_MESSAGE: &str = "No content could be extracted from this webpage.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Page title, rendered as a top-level heading.
    Title { text: String },
    Heading { level: u8, text: String },
    Paragraph { text: String },
    /// Nothing survived filtering.
    Empty,
}

impl ContentBlock {
    /// 1-4 for headings, 0 for everything else.
    pub fn level(&self) -> u8 {
        match self {
            ContentBlock::Heading { level, .. } => *level,
            _ => 0,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            ContentBlock::Title { text }
            | ContentBlock::Heading { text, .. }
            | ContentBlock::Paragraph { text } => text,
            ContentBlock::Empty => NO_CONTENT_MESSAGE,
        }
    }

    pub fn render(&self) -> String {
        match self {
            ContentBlock::Title { text } => format!("# {text}"),
            ContentBlock::Heading { level, text } => {
                format!("{} {text}", "#".repeat(*level as usize))
            }
            ContentBlock::Paragraph { text } => text.clone(),
            ContentBlock::Empty => NO_CONTENT_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedPage {
    pub url: String,
    /// Text of the page's `<title>`, when present and non-empty.
    pub title: Option<String>,
    pub blocks: Vec<ContentBlock>,
}

impl ExtractedPage {
    /// True when the page holds only the no-content sentinel.
    pub fn is_empty(&self) -> bool {
        matches!(self.blocks.as_slice(), [ContentBlock::Empty])
    }

    /// Markdown-like rendering: blocks separated by a blank line.
    pub fn render(&self) -> String {
        self.blocks
            .iter()
            .map(ContentBlock::render)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_levels_and_separators() {
        let page = ExtractedPage {
            url: "https://example.com".into(),
            title: Some("Story".into()),
            blocks: vec![
                ContentBlock::Title { text: "Story".into() },
                ContentBlock::Heading { level: 3, text: "Details below".into() },
                ContentBlock::Paragraph { text: "Body text.".into() },
            ],
        };
        assert_eq!(page.render(), "# Story\n\n### Details below\n\nBody text.");
        assert!(!page.is_empty());
        assert_eq!(page.blocks[1].level(), 3);
        assert_eq!(page.blocks[2].level(), 0);
    }

    #[test]
    fn sentinel() {
        let page = ExtractedPage {
            url: "https://example.com".into(),
            title: None,
            blocks: vec![ContentBlock::Empty],
        };
        assert!(page.is_empty());
        assert_eq!(page.render(), NO_CONTENT_MESSAGE);
    }
}
