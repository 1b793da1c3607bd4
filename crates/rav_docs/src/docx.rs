use anyhow::Result;
use docx_rs::*;
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, warn};

use rav_core::RavError;

use crate::brand::{self, Rgb};
use crate::model::{
    Align, Block, DocumentOutline, Edge, Inline, Para, Picture, Rule, TableBlock, TextRun,
};

/// Body text size in points.
pub const BODY_PT: f32 = 10.0;
/// Table cell text size in points.
pub const TABLE_PT: f32 = 9.0;

const HEADING_SIZES: [(u8, f32); 3] = [(1, 20.0), (2, 15.0), (3, 12.0)];

/// Usable width of a Letter page with 2.5cm side margins, in twips.
const TEXT_WIDTH_TWIPS: usize = 12_240 - 2 * 1417;

const LOGO_WIDTH_IN: f64 = 0.4;

/// Numbering id of the bullet list. Id 1 is the library's built-in default.
const BULLET_NUMBERING_ID: usize = 2;

// ---------------------------------------------------------------------------
// Logo
// ---------------------------------------------------------------------------

/// The optional chat-assistant logo shown in the masthead.
#[derive(Debug, Clone, PartialEq)]
pub struct Logo {
    pub bytes: Vec<u8>,
    pub width_px: u32,
    pub height_px: u32,
}

impl Logo {
    /// Read a PNG logo. A missing file yields `None`. A file that cannot be
    /// read or is not a PNG is a `RavError::Asset`.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            debug!("Logo not found at {}, masthead will omit it", path.display());
            return Ok(None);
        }
        let bytes = std::fs::read(path)
            .map_err(|e| RavError::Asset(format!("failed to read logo {}: {e}", path.display())))?;
        Ok(Some(Self::from_png(bytes)?))
    }

    /// Wrap PNG bytes, taking the dimensions from the IHDR chunk.
    pub fn from_png(bytes: Vec<u8>) -> Result<Self, RavError> {
        const SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";
        if bytes.len() < 24 || &bytes[..8] != SIGNATURE || &bytes[12..16] != b"IHDR" {
            return Err(RavError::Asset("logo is not a PNG image".into()));
        }
        let width_px = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
        let height_px = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
        if width_px == 0 || height_px == 0 {
            return Err(RavError::Asset("logo has zero dimensions".into()));
        }
        Ok(Self {
            bytes,
            width_px,
            height_px,
        })
    }

    /// Picture scaled to `width_in` inches, keeping the aspect ratio.
    pub fn picture(&self, width_in: f64) -> Picture {
        let width_emu = brand::inches_emu(width_in);
        let height_emu = width_emu * i64::from(self.height_px) / i64::from(self.width_px);
        Picture {
            bytes: self.bytes.clone(),
            width_px: self.width_px,
            height_px: self.height_px,
            width_emu: width_emu as u32,
            height_emu: height_emu as u32,
        }
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Overrides for [`BrandedDocument::body_styled`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyStyle {
    pub bold: bool,
    pub italic: bool,
    pub size_pt: f32,
    pub color: Rgb,
}

impl Default for BodyStyle {
    fn default() -> Self {
        Self {
            bold: false,
            italic: false,
            size_pt: BODY_PT,
            color: brand::DARK_NAVY,
        }
    }
}

impl BodyStyle {
    pub fn bold() -> Self {
        Self {
            bold: true,
            ..Self::default()
        }
    }

    /// Small italic note (9pt).
    pub fn note() -> Self {
        Self {
            italic: true,
            size_pt: 9.0,
            ..Self::default()
        }
    }
}

/// A Word document under construction, carrying the brand theme.
///
/// Every mutator returns `&mut Self` so calls chain. Content is recorded as
/// [`Block`]s and only turned into OOXML by [`BrandedDocument::to_docx_bytes`].
#[derive(Debug, Clone)]
pub struct BrandedDocument {
    title: String,
    blocks: Vec<Block>,
    page_numbers: bool,
}

impl BrandedDocument {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
            page_numbers: false,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn has_page_numbers(&self) -> bool {
        self.page_numbers
    }

    pub fn push(&mut self, block: Block) -> &mut Self {
        self.blocks.push(block);
        self
    }

    pub fn paragraph(&mut self, para: Para) -> &mut Self {
        self.push(Block::Paragraph(para))
    }

    pub fn heading(&mut self, level: u8, text: impl Into<String>) -> &mut Self {
        self.push(Block::Heading {
            level: level.clamp(1, 3),
            text: text.into(),
        })
    }

    pub fn spacer(&mut self) -> &mut Self {
        self.push(Block::Spacer)
    }

    /// Brand masthead: name, optional document title, tagline, optional
    /// assistant logo row, then a rule.
    pub fn logo_header(&mut self, doc_title: Option<&str>, logo: Option<&Logo>) -> &mut Self {
        self.paragraph(
            Para::new().align(Align::Left).run(
                TextRun::new(brand::BRAND_NAME)
                    .size(28.0)
                    .color(brand::DEEP_TEAL)
                    .bold(),
            ),
        );

        if let Some(title) = doc_title {
            self.paragraph(
                Para::new().align(Align::Left).spacing(2.0, 2.0).run(
                    TextRun::new(title)
                        .size(16.0)
                        .color(brand::DARK_NAVY)
                        .bold(),
                ),
            );
        }

        self.paragraph(
            Para::new().align(Align::Left).spacing(0.0, 4.0).run(
                TextRun::new(brand::TAGLINE)
                    .size(11.0)
                    .color(brand::WARM_CORAL)
                    .italic(),
            ),
        );

        if let Some(logo) = logo {
            self.paragraph(
                Para::new()
                    .align(Align::Left)
                    .spacing(4.0, 8.0)
                    .picture(logo.picture(LOGO_WIDTH_IN))
                    .run(
                        TextRun::new(format!("  {}", brand::ASSISTANT_NAME))
                            .size(11.0)
                            .color(brand::DEEP_TEAL)
                            .bold(),
                    )
                    .run(
                        TextRun::new(format!("  \u{2014}  {}", brand::ASSISTANT_TAGLINE))
                            .size(9.0)
                            .color(brand::CAPTION_GREY)
                            .italic(),
                    ),
            );
        }

        self.horizontal_rule()
    }

    /// Put "Page X of Y" in the page footer.
    pub fn page_numbers(&mut self) -> &mut Self {
        self.page_numbers = true;
        self
    }

    pub fn horizontal_rule(&mut self) -> &mut Self {
        self.paragraph(Para::new().spacing(2.0, 6.0).rule(Rule {
            edge: Edge::Bottom,
            size: 8,
            space: 1,
            color: brand::DEEP_TEAL,
        }))
    }

    /// One `Key: value` line per pair.
    pub fn metadata<K: AsRef<str>, V: AsRef<str>>(&mut self, pairs: &[(K, V)]) -> &mut Self {
        for (key, value) in pairs {
            self.paragraph(
                Para::new()
                    .spacing(1.0, 1.0)
                    .run(
                        TextRun::new(format!("{}: ", key.as_ref()))
                            .size(BODY_PT)
                            .bold()
                            .color(brand::DARK_NAVY),
                    )
                    .run(
                        TextRun::new(value.as_ref())
                            .size(BODY_PT)
                            .color(brand::DARK_NAVY),
                    ),
            );
        }
        self
    }

    pub fn body(&mut self, text: impl Into<String>) -> &mut Self {
        self.body_styled(text, BodyStyle::default())
    }

    pub fn body_styled(&mut self, text: impl Into<String>, style: BodyStyle) -> &mut Self {
        let mut run = TextRun::new(text).size(style.size_pt).color(style.color);
        run.bold = style.bold;
        run.italic = style.italic;
        self.paragraph(Para::new().run(run))
    }

    pub fn blockquote(&mut self, text: impl Into<String>) -> &mut Self {
        self.paragraph(
            Para::new()
                .indent(1.0)
                .spacing(4.0, 4.0)
                .rule(Rule {
                    edge: Edge::Left,
                    size: 12,
                    space: 4,
                    color: brand::DEEP_TEAL,
                })
                .run(
                    TextRun::new(text)
                        .size(9.0)
                        .italic()
                        .color(brand::QUOTE_GREY),
                ),
        )
    }

    /// Branded table: one header row plus one row per entry of `rows`.
    ///
    /// Rows shorter than the header are padded with empty cells; longer rows
    /// are cut to the header width.
    pub fn table<R, S>(&mut self, headers: &[&str], rows: &[R]) -> &mut Self
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let width = headers.len();
        let rows = rows
            .iter()
            .map(|row| {
                let row = row.as_ref();
                if row.len() > width {
                    warn!(
                        "Table row has {} cells but only {width} columns; extra cells dropped",
                        row.len()
                    );
                }
                (0..width)
                    .map(|col| row.get(col).map(|c| c.as_ref().to_string()).unwrap_or_default())
                    .collect()
            })
            .collect();
        self.push(Block::Table(TableBlock {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows,
        }))
    }

    /// Closing rule plus a small centred note; newlines become line breaks.
    pub fn footer(&mut self, text: impl Into<String>) -> &mut Self {
        self.horizontal_rule();
        self.paragraph(
            Para::new().align(Align::Center).run(
                TextRun::new(text)
                    .size(8.0)
                    .italic()
                    .color(brand::FOOTER_GREY),
            ),
        )
    }

    /// Word list bullets with a bold lead-in followed by plain text.
    pub fn label_bullets(&mut self, items: &[(&str, &str)]) -> &mut Self {
        for (label, desc) in items {
            self.paragraph(
                Para::new()
                    .list_bullet()
                    .run(TextRun::new(*label).bold().size(BODY_PT))
                    .run(TextRun::new(*desc).size(BODY_PT)),
            );
        }
        self
    }

    /// Plain Word list bullets.
    pub fn bullets(&mut self, items: &[&str]) -> &mut Self {
        for item in items {
            self.paragraph(Para::new().list_bullet().run(TextRun::new(*item).size(BODY_PT)));
        }
        self
    }

    /// Bold lead-in paragraphs without a bullet glyph.
    pub fn label_lines(&mut self, items: &[(&str, &str)]) -> &mut Self {
        for (label, desc) in items {
            self.paragraph(
                Para::new()
                    .run(TextRun::new(*label).bold().size(BODY_PT))
                    .run(TextRun::new(*desc).size(BODY_PT)),
            );
        }
        self
    }

    /// `1. ` teal-numbered items. Text before a `→` is set in bold.
    pub fn numbered_list(&mut self, items: &[&str]) -> &mut Self {
        for (i, item) in items.iter().enumerate() {
            let mut para = Para::new().indent(1.0).spacing(1.0, 1.0).run(
                TextRun::new(format!("{}. ", i + 1))
                    .size(BODY_PT)
                    .bold()
                    .color(brand::DEEP_TEAL),
            );
            para = match item.split_once('\u{2192}') {
                Some((lead, rest)) => para
                    .run(
                        TextRun::new(lead.trim())
                            .size(BODY_PT)
                            .bold()
                            .color(brand::DARK_NAVY),
                    )
                    .run(
                        TextRun::new(format!(" \u{2192} {}", rest.trim()))
                            .size(BODY_PT)
                            .color(brand::DARK_NAVY),
                    ),
                None => para.run(TextRun::new(*item).size(BODY_PT).color(brand::DARK_NAVY)),
            };
            self.paragraph(para);
        }
        self
    }

    /// `• ` teal-bulleted items. A `Label: description` item gets a bold label.
    pub fn bullet_list(&mut self, items: &[&str]) -> &mut Self {
        for item in items {
            let para = Para::new().indent(1.0).spacing(1.0, 1.0);
            let para = match item.split_once(": ") {
                Some((label, desc)) => para
                    .run(
                        TextRun::new("\u{2022} ")
                            .size(BODY_PT)
                            .color(brand::DEEP_TEAL),
                    )
                    .run(
                        TextRun::new(format!("{label}: "))
                            .size(BODY_PT)
                            .bold()
                            .color(brand::DARK_NAVY),
                    )
                    .run(TextRun::new(desc).size(BODY_PT).color(brand::DARK_NAVY)),
                None => para.run(
                    TextRun::new(format!("\u{2022} {item}"))
                        .size(BODY_PT)
                        .color(brand::DARK_NAVY),
                ),
            };
            self.paragraph(para);
        }
        self
    }

    /// Small grey italic line, e.g. a completion date.
    pub fn date_line(&mut self, text: impl Into<String>) -> &mut Self {
        self.paragraph(
            Para::new().run(
                TextRun::new(text)
                    .size(9.0)
                    .italic()
                    .color(brand::CAPTION_GREY),
            ),
        )
    }

    /// Coral bold label followed by navy text.
    pub fn impact(&mut self, label: &str, text: impl Into<String>) -> &mut Self {
        self.paragraph(
            Para::new()
                .run(TextRun::new(label).bold().size(9.0).color(brand::WARM_CORAL))
                .run(TextRun::new(text).size(9.0).color(brand::DARK_NAVY)),
        )
    }

    pub fn outline(&self) -> DocumentOutline {
        DocumentOutline::from_blocks(&self.title, &self.blocks)
    }

    /// Serialize to `.docx` bytes.
    pub fn to_docx_bytes(&self) -> Result<Vec<u8>> {
        let mut docx = Docx::new()
            .default_fonts(brand_fonts())
            .default_size(brand::half_points(BODY_PT))
            .page_margin(
                PageMargin::new()
                    .top(brand::cm_twips(2.0))
                    .bottom(brand::cm_twips(2.0))
                    .left(brand::cm_twips(2.5))
                    .right(brand::cm_twips(2.5)),
            );

        for (level, size) in HEADING_SIZES {
            docx = docx.add_style(heading_style(level, size));
        }

        if self.blocks.iter().any(is_list_bullet) {
            let (abstract_numbering, numbering) = bullet_numbering();
            docx = docx
                .add_abstract_numbering(abstract_numbering)
                .add_numbering(numbering);
        }

        for block in &self.blocks {
            docx = match block {
                Block::Heading { level, text } => docx.add_paragraph(
                    Paragraph::new()
                        .style(&format!("Heading{level}"))
                        .add_run(Run::new().add_text(text.as_str())),
                ),
                Block::Paragraph(para) => docx.add_paragraph(render_paragraph(para)),
                Block::Table(table) => docx.add_table(render_table(table)),
                Block::Spacer => docx.add_paragraph(Paragraph::new()),
            };
        }

        if self.page_numbers {
            docx = docx.footer(Footer::new().add_paragraph(page_number_paragraph()));
        }

        let mut buf = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut buf)
            .map_err(|e| RavError::Render(format!("Failed to pack DOCX: {e}")))?;

        Ok(buf.into_inner())
    }
}

// ---------------------------------------------------------------------------
// Rendering helpers
// ---------------------------------------------------------------------------

/// Single-level bullet list definition shared by every list paragraph.
fn bullet_numbering() -> (AbstractNumbering, Numbering) {
    let level = Level::new(
        0,
        Start::new(1),
        NumberFormat::new("bullet"),
        LevelText::new("\u{2022}"),
        LevelJc::new("left"),
    )
    .indent(
        Some(brand::cm_twips(0.63)),
        Some(SpecialIndentType::Hanging(brand::cm_twips(0.63))),
        None,
        None,
    );
    (
        AbstractNumbering::new(BULLET_NUMBERING_ID).add_level(level),
        Numbering::new(BULLET_NUMBERING_ID, BULLET_NUMBERING_ID),
    )
}

fn is_list_bullet(block: &Block) -> bool {
    matches!(block, Block::Paragraph(para) if para.format.list_bullet)
}

fn brand_fonts() -> RunFonts {
    RunFonts::new()
        .ascii(brand::BRAND_FONT)
        .hi_ansi(brand::BRAND_FONT)
        .east_asia(brand::BRAND_FONT)
        .cs(brand::BRAND_FONT)
}

fn heading_style(level: u8, size_pt: f32) -> Style {
    Style::new(format!("Heading{level}"), StyleType::Paragraph)
        .name(format!("Heading {level}"))
        .fonts(brand_fonts())
        .size(brand::half_points(size_pt))
        .bold()
        .color(brand::DEEP_TEAL.hex())
}

fn render_text_run(run: &TextRun) -> Run {
    let mut out = Run::new()
        .fonts(brand_fonts())
        .size(brand::half_points(run.size_pt.unwrap_or(BODY_PT)))
        .color(run.color.unwrap_or(brand::DARK_NAVY).hex());
    for (i, line) in run.text.split('\n').enumerate() {
        if i > 0 {
            out = out.add_break(BreakType::TextWrapping);
        }
        out = out.add_text(line);
    }
    if run.bold {
        out = out.bold();
    }
    if run.italic {
        out = out.italic();
    }
    out
}

fn render_picture(picture: &Picture) -> Run {
    let pic = Pic::new_with_dimensions(picture.bytes.clone(), picture.width_px, picture.height_px)
        .size(picture.width_emu, picture.height_emu);
    Run::new().add_image(pic)
}

fn render_paragraph(para: &Para) -> Paragraph {
    let mut p = Paragraph::new();
    for inline in &para.inlines {
        p = p.add_run(match inline {
            Inline::Text(run) => render_text_run(run),
            Inline::Picture(picture) => render_picture(picture),
        });
    }

    let format = &para.format;
    if let Some(align) = format.align {
        p = p.align(match align {
            Align::Left => AlignmentType::Left,
            Align::Center => AlignmentType::Center,
            Align::Right => AlignmentType::Right,
        });
    }
    if format.space_before_pt.is_some() || format.space_after_pt.is_some() {
        let mut spacing = LineSpacing::new();
        if let Some(before) = format.space_before_pt {
            spacing = spacing.before(brand::pt_twips(before));
        }
        if let Some(after) = format.space_after_pt {
            spacing = spacing.after(brand::pt_twips(after));
        }
        p = p.line_spacing(spacing);
    }
    if let Some(left) = format.left_indent_cm {
        p = p.indent(Some(brand::cm_twips(left)), None, None, None);
    }
    if format.list_bullet {
        p = p.numbering(NumberingId::new(BULLET_NUMBERING_ID), IndentLevel::new(0));
    }
    if let Some(rule) = format.rule {
        let position = match rule.edge {
            Edge::Bottom => ParagraphBorderPosition::Bottom,
            Edge::Left => ParagraphBorderPosition::Left,
        };
        // Start from no borders; the library default is a full box.
        p.property = p.property.set_borders(
            ParagraphBorders::with_empty().set(
                ParagraphBorder::new(position)
                    .val(BorderType::Single)
                    .size(rule.size)
                    .space(rule.space)
                    .color(rule.color.hex()),
            ),
        );
    }
    p
}

/// Fill for the row at absolute index `row` (0 = header), if any.
pub fn row_fill(row: usize) -> Option<Rgb> {
    if row == 0 {
        Some(brand::TABLE_HEADER_BG)
    } else if row % 2 == 0 {
        Some(brand::TABLE_ALT_ROW)
    } else {
        None
    }
}

fn styled_cell(text: &str, row: usize) -> TableCell {
    let mut run = Run::new()
        .add_text(text)
        .fonts(brand_fonts())
        .size(brand::half_points(TABLE_PT));
    run = if row == 0 {
        run.bold().color(brand::WHITE.hex())
    } else {
        run.color(brand::DARK_NAVY.hex())
    };

    let para = Paragraph::new().add_run(run).line_spacing(
        LineSpacing::new()
            .before(brand::pt_twips(2.0))
            .after(brand::pt_twips(2.0)),
    );

    let mut cell = TableCell::new().add_paragraph(para);
    for position in [
        TableCellBorderPosition::Top,
        TableCellBorderPosition::Left,
        TableCellBorderPosition::Bottom,
        TableCellBorderPosition::Right,
    ] {
        cell = cell.set_border(
            TableCellBorder::new(position)
                .border_type(BorderType::Single)
                .size(4)
                .color(brand::TABLE_BORDER.hex()),
        );
    }
    if let Some(fill) = row_fill(row) {
        cell = cell.shading(
            Shading::new()
                .shd_type(ShdType::Clear)
                .color("auto")
                .fill(fill.hex()),
        );
    }
    cell
}

fn render_table(table: &TableBlock) -> Table {
    let columns = table.headers.len().max(1);
    let mut rows = Vec::with_capacity(table.rows.len() + 1);

    rows.push(TableRow::new(
        table.headers.iter().map(|h| styled_cell(h, 0)).collect(),
    ));
    for (i, row) in table.rows.iter().enumerate() {
        rows.push(TableRow::new(
            row.iter().map(|text| styled_cell(text, i + 1)).collect(),
        ));
    }

    Table::new(rows)
        .align(TableAlignmentType::Left)
        .set_grid(vec![TEXT_WIDTH_TWIPS / columns; columns])
}

fn footer_run(text: &str) -> Run {
    Run::new()
        .add_text(text)
        .fonts(brand_fonts())
        .size(brand::half_points(8.0))
        .color(brand::FOOTER_GREY.hex())
}

fn page_number_paragraph() -> Paragraph {
    Paragraph::new()
        .align(AlignmentType::Center)
        .line_spacing(LineSpacing::new().before(0).after(0))
        .add_run(footer_run("Page "))
        .add_run(Run::new().add_field_char(FieldCharType::Begin, false))
        .add_run(Run::new().add_instr_text(InstrText::PAGE(InstrPAGE::new())))
        .add_run(Run::new().add_field_char(FieldCharType::End, false))
        .add_run(footer_run(" of "))
        .add_run(Run::new().add_field_char(FieldCharType::Begin, false))
        .add_run(Run::new().add_instr_text(InstrText::NUMPAGES(InstrNUMPAGES::new())))
        .add_run(Run::new().add_field_char(FieldCharType::End, false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn part(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut xml = String::new();
        file.read_to_string(&mut xml).unwrap();
        xml
    }

    fn tiny_png(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = b"\x89PNG\r\n\x1a\n".to_vec();
        bytes.extend_from_slice(&13u32.to_be_bytes());
        bytes.extend_from_slice(b"IHDR");
        bytes.extend_from_slice(&width.to_be_bytes());
        bytes.extend_from_slice(&height.to_be_bytes());
        bytes.extend_from_slice(&[8, 6, 0, 0, 0]);
        bytes
    }

    /// Complete 4x2 RGBA PNG (IHDR, IDAT, IEND).
    const TEAL_PNG: [u8; 74] = [
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x02, 0x08, 0x06, 0x00, 0x00, 0x00, 0x7F,
        0xA8, 0x7D, 0x63, 0x00, 0x00, 0x00, 0x11, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x90,
        0x29, 0xCA, 0xF8, 0x8F, 0x8C, 0x19, 0xD0, 0x05, 0x00, 0xFF, 0xCE, 0x0F, 0xA9, 0x87, 0x21,
        0xF7, 0xD4, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ];

    /// Contents of every `<w:pBdr>` element in `xml`.
    fn paragraph_borders(xml: &str) -> Vec<&str> {
        xml.split("<w:pBdr>")
            .skip(1)
            .filter_map(|rest| rest.split("</w:pBdr>").next())
            .collect()
    }

    #[test]
    fn test_table_rows_equal_header_plus_data() {
        let mut doc = BrandedDocument::new("T");
        doc.table(
            &["Capability", "Description", "Status"],
            &[
                ["User Authentication", "Email", "BUILT"],
                ["Booking Flow", "Checkout", "BUILT"],
            ],
        );
        let outline = doc.outline();
        assert_eq!(outline.tables[0].columns, 3);
        assert_eq!(outline.tables[0].rows, 2);

        let xml = part(&doc.to_docx_bytes().unwrap(), "word/document.xml");
        assert_eq!(xml.matches("</w:tr>").count(), 3);
        assert!(xml.contains("User Authentication"));
        assert!(xml.contains("Booking Flow"));
    }

    #[test]
    fn test_table_pads_short_rows() {
        let mut doc = BrandedDocument::new("T");
        doc.table(&["A", "B", "C"], &[vec!["only".to_string()]]);
        match &doc.blocks()[0] {
            Block::Table(table) => assert_eq!(table.rows[0], vec!["only", "", ""]),
            other => panic!("expected table, got {other:?}"),
        }
    }

    #[test]
    fn test_table_truncates_long_rows() {
        let mut doc = BrandedDocument::new("T");
        doc.table(&["A"], &[["x", "y"]]);
        match &doc.blocks()[0] {
            Block::Table(table) => assert_eq!(table.rows[0], vec!["x"]),
            other => panic!("expected table, got {other:?}"),
        }
    }

    #[test]
    fn test_row_fill_pattern() {
        assert_eq!(row_fill(0), Some(brand::TABLE_HEADER_BG));
        assert_eq!(row_fill(1), None);
        assert_eq!(row_fill(2), Some(brand::TABLE_ALT_ROW));
        assert_eq!(row_fill(3), None);
        assert_eq!(row_fill(4), Some(brand::TABLE_ALT_ROW));
    }

    #[test]
    fn test_table_brand_colors_in_xml() {
        let mut doc = BrandedDocument::new("T");
        doc.table(&["H"], &[["1"], ["2"]]);
        let xml = part(&doc.to_docx_bytes().unwrap(), "word/document.xml");
        assert!(xml.contains("1C7268"));
        assert!(xml.contains("F0F7F6"));
        assert!(xml.contains("CCCCCC"));
    }

    #[test]
    fn test_heading_styles_registered() {
        let mut doc = BrandedDocument::new("T");
        doc.heading(1, "1. Executive Summary");
        let bytes = doc.to_docx_bytes().unwrap();
        let styles = part(&bytes, "word/styles.xml");
        assert!(styles.contains("Heading1"));
        assert!(styles.contains("Heading3"));
        let xml = part(&bytes, "word/document.xml");
        assert!(xml.contains("1. Executive Summary"));
    }

    #[test]
    fn test_heading_level_clamped() {
        let mut doc = BrandedDocument::new("T");
        doc.heading(7, "Deep");
        assert_eq!(doc.outline().headings[0].level, 3);
    }

    #[test]
    fn test_logo_header_without_logo() {
        let mut doc = BrandedDocument::new("T");
        doc.logo_header(Some("Roadmap"), None);
        let texts: Vec<String> = doc
            .blocks()
            .iter()
            .filter_map(|b| match b {
                Block::Paragraph(p) => Some(p.text()),
                _ => None,
            })
            .collect();
        assert_eq!(
            texts,
            vec![brand::BRAND_NAME, "Roadmap", brand::TAGLINE, ""]
        );
        assert!(doc.to_docx_bytes().is_ok());
    }

    #[test]
    fn test_logo_header_with_logo_adds_row() {
        let logo = Logo::from_png(tiny_png(128, 64)).unwrap();
        let mut doc = BrandedDocument::new("T");
        doc.logo_header(None, Some(&logo));
        let row = doc
            .blocks()
            .iter()
            .find_map(|b| match b {
                Block::Paragraph(p) if p.text().contains("Ask RAVIO") => Some(p.clone()),
                _ => None,
            })
            .expect("assistant row");
        match &row.inlines[0] {
            Inline::Picture(pic) => {
                assert_eq!(pic.width_emu, 365_760);
                assert_eq!(pic.height_emu, 182_880);
            }
            other => panic!("expected picture first, got {other:?}"),
        }
    }

    #[test]
    fn test_logo_rejects_non_png() {
        let err = Logo::from_png(b"GIF89a not a png at all!".to_vec()).unwrap_err();
        assert!(matches!(err, RavError::Asset(_)));
    }

    #[test]
    fn test_logo_missing_file_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        let logo = Logo::load(&tmp.path().join("nope.png")).unwrap();
        assert!(logo.is_none());
    }

    #[test]
    fn test_page_numbers_in_footer() {
        let mut doc = BrandedDocument::new("T");
        doc.page_numbers().body("Hello");
        let bytes = doc.to_docx_bytes().unwrap();
        let archive = zip::ZipArchive::new(Cursor::new(&bytes)).unwrap();
        let footer_name = archive
            .file_names()
            .find(|n| n.starts_with("word/footer"))
            .map(str::to_string)
            .expect("footer part");
        let footer = part(&bytes, &footer_name);
        assert!(footer.contains("PAGE"));
        assert!(footer.contains("NUMPAGES"));
    }

    #[test]
    fn test_metadata_lines() {
        let mut doc = BrandedDocument::new("T");
        doc.metadata(&[("Date", "February 22, 2026"), ("Version", "v0.9.0")]);
        let texts: Vec<String> = doc
            .blocks()
            .iter()
            .filter_map(|b| match b {
                Block::Paragraph(p) => Some(p.text()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["Date: February 22, 2026", "Version: v0.9.0"]);
    }

    #[test]
    fn test_numbered_list_splits_on_arrow() {
        let mut doc = BrandedDocument::new("T");
        doc.numbered_list(&["Sign up \u{2192} pending approval", "Browse listings"]);
        let Block::Paragraph(first) = &doc.blocks()[0] else {
            panic!("expected paragraph");
        };
        assert_eq!(first.text(), "1. Sign up \u{2192} pending approval");
        match &first.inlines[1] {
            Inline::Text(run) => {
                assert!(run.bold);
                assert_eq!(run.text, "Sign up");
            }
            other => panic!("unexpected {other:?}"),
        }
        let Block::Paragraph(second) = &doc.blocks()[1] else {
            panic!("expected paragraph");
        };
        assert_eq!(second.text(), "2. Browse listings");
    }

    #[test]
    fn test_bullet_list_bolds_label() {
        let mut doc = BrandedDocument::new("T");
        doc.bullet_list(&["Frontend: React", "No label here"]);
        let Block::Paragraph(first) = &doc.blocks()[0] else {
            panic!("expected paragraph");
        };
        assert_eq!(first.text(), "\u{2022} Frontend: React");
        match &first.inlines[1] {
            Inline::Text(run) => assert!(run.bold),
            other => panic!("unexpected {other:?}"),
        }
        let Block::Paragraph(second) = &doc.blocks()[1] else {
            panic!("expected paragraph");
        };
        assert_eq!(second.inlines.len(), 1);
    }

    #[test]
    fn test_footer_multiline_renders() {
        let mut doc = BrandedDocument::new("T");
        doc.footer("Line one\nLine two");
        let xml = part(&doc.to_docx_bytes().unwrap(), "word/document.xml");
        assert!(xml.contains("Line one"));
        assert!(xml.contains("Line two"));
        assert!(xml.contains("w:br"));
    }

    #[test]
    fn test_rule_is_bottom_border_only() {
        let mut doc = BrandedDocument::new("T");
        doc.horizontal_rule();
        let xml = part(&doc.to_docx_bytes().unwrap(), "word/document.xml");
        let borders = paragraph_borders(&xml);
        assert_eq!(borders.len(), 1);
        let border = borders[0];
        assert!(border.contains(r#"<w:bottom w:val="single" w:space="1" w:sz="8""#));
        assert!(border.contains("1C7268"));
        assert!(!border.contains("<w:top"));
        assert!(!border.contains("<w:left"));
        assert!(!border.contains("<w:right"));
    }

    #[test]
    fn test_blockquote_is_left_bar_only() {
        let mut doc = BrandedDocument::new("T");
        doc.blockquote("Source: Migration 011");
        let xml = part(&doc.to_docx_bytes().unwrap(), "word/document.xml");
        let borders = paragraph_borders(&xml);
        assert_eq!(borders.len(), 1);
        let border = borders[0];
        assert!(border.contains("<w:left "));
        assert!(border.contains(r#"w:space="4""#));
        assert!(border.contains(r#"w:sz="12""#));
        assert!(!border.contains("<w:top"));
        assert!(!border.contains("<w:bottom"));
        assert!(!border.contains("<w:right"));
    }

    #[test]
    fn test_logo_is_embedded_in_package() {
        let logo = Logo::from_png(TEAL_PNG.to_vec()).unwrap();
        assert_eq!((logo.width_px, logo.height_px), (4, 2));
        let mut doc = BrandedDocument::new("T");
        doc.logo_header(Some("Roadmap"), Some(&logo));
        let bytes = doc.to_docx_bytes().unwrap();

        let archive = zip::ZipArchive::new(Cursor::new(&bytes)).unwrap();
        assert!(
            archive
                .file_names()
                .any(|n| n.starts_with("word/media/") && n.ends_with(".png"))
        );
        let xml = part(&bytes, "word/document.xml");
        assert!(xml.contains("<w:drawing>"));
    }

    #[test]
    fn test_logo_load_reads_png_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("logo.png");
        std::fs::write(&path, TEAL_PNG).unwrap();
        let logo = Logo::load(&path).unwrap().unwrap();
        assert_eq!(logo.bytes, TEAL_PNG.to_vec());
    }

    #[test]
    fn test_logo_load_corrupt_file_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("logo.png");
        std::fs::write(&path, b"not a png").unwrap();
        let err = Logo::load(&path).unwrap_err();
        assert!(matches!(err.downcast_ref::<RavError>(), Some(RavError::Asset(_))));
    }

    #[test]
    fn test_label_bullets_are_word_list_items() {
        let mut doc = BrandedDocument::new("T");
        doc.label_bullets(&[("Auth: ", "done")]).bullets(&["Plain item"]);
        for block in doc.blocks() {
            let Block::Paragraph(para) = block else {
                panic!("expected paragraph");
            };
            assert!(para.format.list_bullet);
            assert!(!para.text().starts_with('\u{2022}'));
        }

        let bytes = doc.to_docx_bytes().unwrap();
        let xml = part(&bytes, "word/document.xml");
        assert_eq!(xml.matches("<w:numPr>").count(), 2);
        assert!(xml.contains(r#"<w:numId w:val="2""#));
        let numbering = part(&bytes, "word/numbering.xml");
        assert!(numbering.contains(r#"w:abstractNumId="2""#));
        assert!(numbering.contains(r#"<w:numFmt w:val="bullet""#));
    }

    #[test]
    fn test_bullet_list_keeps_glyph_outside_word_list() {
        let mut doc = BrandedDocument::new("T");
        doc.bullet_list(&["Frontend: React"]);
        let xml = part(&doc.to_docx_bytes().unwrap(), "word/document.xml");
        assert!(!xml.contains("<w:numPr>"));
        assert!(xml.contains("\u{2022} "));
    }

    #[test]
    fn test_docx_is_zip() {
        let mut doc = BrandedDocument::new("Empty");
        doc.body("Price: $100 & 10% <off>");
        let bytes = doc.to_docx_bytes().unwrap();
        assert_eq!(&bytes[0..2], b"PK");
        assert!(bytes.len() > 100);
    }
}
