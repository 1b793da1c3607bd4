//! Renderer-neutral document content.
//!
//! [`crate::docx::BrandedDocument`] records what it is asked to add as a list
//! of [`Block`]s; the DOCX and Markdown renderers both walk that list.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::brand::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// A run of uniformly formatted text. Unset size and color fall back to the
/// body defaults (10pt, Dark Navy) at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub size_pt: Option<f32>,
    pub color: Option<Rgb>,
}

impl TextRun {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: false,
            size_pt: None,
            color: None,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn size(mut self, pt: f32) -> Self {
        self.size_pt = Some(pt);
        self
    }

    pub fn color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }
}

/// An inline image with its pixel dimensions and display size.
#[derive(Debug, Clone, PartialEq)]
pub struct Picture {
    pub bytes: Vec<u8>,
    pub width_px: u32,
    pub height_px: u32,
    pub width_emu: u32,
    pub height_emu: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    Text(TextRun),
    Picture(Picture),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Bottom,
    Left,
}

/// A single paragraph border line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub edge: Edge,
    /// Eighths of a point.
    pub size: usize,
    /// Points between text and line.
    pub space: usize,
    pub color: Rgb,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParagraphFormat {
    pub align: Option<Align>,
    pub space_before_pt: Option<f32>,
    pub space_after_pt: Option<f32>,
    pub left_indent_cm: Option<f32>,
    /// Paragraph is an item of the document's bullet list.
    pub list_bullet: bool,
    pub rule: Option<Rule>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Para {
    pub inlines: Vec<Inline>,
    pub format: ParagraphFormat,
}

impl Para {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run(mut self, run: TextRun) -> Self {
        self.inlines.push(Inline::Text(run));
        self
    }

    pub fn picture(mut self, picture: Picture) -> Self {
        self.inlines.push(Inline::Picture(picture));
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.format.align = Some(align);
        self
    }

    pub fn spacing(mut self, before_pt: f32, after_pt: f32) -> Self {
        self.format.space_before_pt = Some(before_pt);
        self.format.space_after_pt = Some(after_pt);
        self
    }

    pub fn indent(mut self, left_cm: f32) -> Self {
        self.format.left_indent_cm = Some(left_cm);
        self
    }

    pub fn list_bullet(mut self) -> Self {
        self.format.list_bullet = true;
        self
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.format.rule = Some(rule);
        self
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.inlines
            .iter()
            .filter_map(|inline| match inline {
                Inline::Text(run) => Some(run.text.as_str()),
                Inline::Picture(_) => None,
            })
            .collect()
    }
}

/// A table whose rows are already normalized to the header width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBlock {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph(Para),
    Table(TableBlock),
    /// An empty paragraph.
    Spacer,
}

// ---------------------------------------------------------------------------
// Outline
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingEntry {
    pub level: u8,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableShape {
    /// Text of the nearest heading above the table.
    pub section: Option<String>,
    pub headers: Vec<String>,
    pub columns: usize,
    /// Data rows, excluding the header row.
    pub rows: usize,
}

/// Structural summary of a document: headings and table dimensions.
///
/// Two runs over the same content produce equal outlines even though the
/// serialized packages differ in their embedded metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentOutline {
    pub title: String,
    pub headings: Vec<HeadingEntry>,
    pub tables: Vec<TableShape>,
}

impl DocumentOutline {
    pub fn from_blocks(title: &str, blocks: &[Block]) -> Self {
        let mut headings = Vec::new();
        let mut tables = Vec::new();
        let mut section: Option<String> = None;

        for block in blocks {
            match block {
                Block::Heading { level, text } => {
                    headings.push(HeadingEntry {
                        level: *level,
                        text: text.clone(),
                    });
                    section = Some(text.clone());
                }
                Block::Table(table) => tables.push(TableShape {
                    section: section.clone(),
                    headers: table.headers.clone(),
                    columns: table.headers.len(),
                    rows: table.rows.len(),
                }),
                Block::Paragraph(_) | Block::Spacer => {}
            }
        }

        Self {
            title: title.to_string(),
            headings,
            tables,
        }
    }

    /// First table placed under the heading with exactly this text.
    pub fn table_under(&self, heading: &str) -> Option<&TableShape> {
        self.tables
            .iter()
            .find(|t| t.section.as_deref() == Some(heading))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(cols: usize, rows: usize) -> Block {
        Block::Table(TableBlock {
            headers: (0..cols).map(|c| format!("H{c}")).collect(),
            rows: vec![vec![String::new(); cols]; rows],
        })
    }

    #[test]
    fn test_para_text_skips_pictures() {
        let para = Para::new()
            .run(TextRun::new("Key: "))
            .picture(Picture {
                bytes: vec![],
                width_px: 1,
                height_px: 1,
                width_emu: 1,
                height_emu: 1,
            })
            .run(TextRun::new("value"));
        assert_eq!(para.text(), "Key: value");
    }

    #[test]
    fn test_outline_assigns_sections() {
        let blocks = vec![
            table(2, 1),
            Block::Heading {
                level: 1,
                text: "Costs".into(),
            },
            Block::Spacer,
            table(3, 4),
        ];
        let outline = DocumentOutline::from_blocks("Doc", &blocks);
        assert_eq!(outline.headings.len(), 1);
        assert_eq!(outline.tables[0].section, None);
        let costs = outline.table_under("Costs").unwrap();
        assert_eq!(costs.columns, 3);
        assert_eq!(costs.rows, 4);
    }

    #[test]
    fn test_outline_json_roundtrip() {
        let outline = DocumentOutline::from_blocks(
            "Doc",
            &[
                Block::Heading {
                    level: 2,
                    text: "A".into(),
                },
                table(1, 2),
            ],
        );
        let json = outline.to_json().unwrap();
        let back: DocumentOutline = serde_json::from_str(&json).unwrap();
        assert_eq!(back, outline);
    }
}
