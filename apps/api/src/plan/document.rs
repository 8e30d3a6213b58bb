//! Renderer-agnostic rich text for blocking points and strengths.
//!
//! A `Document` is an ordered list of blocks. Inline emphasis is written with
//! `**bold**` markers in the static prose and split into spans at build time.

use serde::Serialize;

/// Which solution pitch a blocking point carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PitchKind {
    Resume,
    Linkedin,
    Interview,
    /// Fallback for bodies outside the three categories.
    Default,
}

impl PitchKind {
    pub fn message(self) -> &'static str {
        match self {
            PitchKind::Resume => "In our Job Success System Workshop, you’ll get ATS-friendly resume templates, keyword tools, and expert feedback to fix these exact resume blind spots in under a week.",
            PitchKind::Linkedin => "Inside the Workshop, you’ll learn how to turn your LinkedIn into a magnet for recruiters — from profile optimization to referral messaging scripts.",
            PitchKind::Interview => "We guide you through mock interviews, STAR storytelling, and confidence training so you convert interviews into offers consistently.",
            PitchKind::Default => "In our Job Success System Workshop, we give you personalized templates, coaching, and proven systems to fix these career roadblocks fast.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub text: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub strong: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Paragraph { spans: Vec<Span> },
    Heading { spans: Vec<Span> },
    List { items: Vec<Vec<Span>> },
    Pitch { kind: PitchKind, text: &'static str },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

/// Splits `**bold**` markup into spans. Empty segments are dropped.
pub fn spans(markup: &str) -> Vec<Span> {
    markup
        .split("**")
        .enumerate()
        .filter(|(_, text)| !text.is_empty())
        .map(|(i, text)| Span {
            text: text.to_string(),
            strong: i % 2 == 1,
        })
        .collect()
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paragraph(mut self, markup: &str) -> Self {
        self.blocks.push(Block::Paragraph {
            spans: spans(markup),
        });
        self
    }

    pub fn heading(mut self, markup: &str) -> Self {
        self.blocks.push(Block::Heading {
            spans: spans(markup),
        });
        self
    }

    pub fn list(mut self, items: &[&str]) -> Self {
        self.blocks.push(Block::List {
            items: items.iter().map(|item| spans(item)).collect(),
        });
        self
    }

    pub fn pitch(mut self, kind: PitchKind) -> Self {
        self.blocks.push(Block::Pitch {
            kind,
            text: kind.message(),
        });
        self
    }
}

#[cfg(test)]
impl Document {
    /// The pitch embedded in this document, if any.
    pub fn pitch_kind(&self) -> Option<PitchKind> {
        self.blocks.iter().find_map(|b| match b {
            Block::Pitch { kind, .. } => Some(*kind),
            _ => None,
        })
    }

    /// Flattened text, without markup.
    pub fn plain_text(&self) -> String {
        let join = |spans: &[Span]| spans.iter().map(|s| s.text.as_str()).collect::<String>();

        self.blocks
            .iter()
            .map(|block| match block {
                Block::Paragraph { spans } | Block::Heading { spans } => join(spans),
                Block::List { items } => items
                    .iter()
                    .map(|item| join(item))
                    .collect::<Vec<_>>()
                    .join("\n"),
                Block::Pitch { text, .. } => text.to_string(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
