use anyhow::{Context, Result};
use std::io::{Cursor, Write};
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::brand::{self, Rgb};

/// 16:9 widescreen slide width in inches.
pub const SLIDE_WIDTH_IN: f64 = 13.333;
pub const SLIDE_HEIGHT_IN: f64 = 7.5;

// ---------------------------------------------------------------------------
// Slide model
// ---------------------------------------------------------------------------

/// Position and size of a shape, in EMU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub x: i64,
    pub y: i64,
    pub cx: i64,
    pub cy: i64,
}

impl Frame {
    pub fn inches(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: brand::inches_emu(x),
            y: brand::inches_emu(y),
            cx: brand::inches_emu(width),
            cy: brand::inches_emu(height),
        }
    }

    /// The whole slide.
    pub fn full() -> Self {
        Self::inches(0.0, 0.0, SLIDE_WIDTH_IN, SLIDE_HEIGHT_IN)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    Rect,
    RoundRect,
    Ellipse,
}

impl Geometry {
    fn preset(self) -> &'static str {
        match self {
            Geometry::Rect => "rect",
            Geometry::RoundRect => "roundRect",
            Geometry::Ellipse => "ellipse",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    fn attr(self) -> &'static str {
        match self {
            TextAlign::Left => "l",
            TextAlign::Center => "ctr",
            TextAlign::Right => "r",
        }
    }
}

/// Character and paragraph formatting applied to a whole text frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size_pt: f32,
    pub color: Rgb,
    pub bold: bool,
    pub align: TextAlign,
    pub font: &'static str,
}

impl TextStyle {
    pub fn new(size_pt: f32, color: Rgb) -> Self {
        Self {
            size_pt,
            color,
            bold: false,
            align: TextAlign::Left,
            font: brand::DECK_FONT,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextBody {
    pub text: String,
    pub style: TextStyle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    pub color: Rgb,
    pub width_pt: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Preset geometry with a fill, an optional outline and optional
    /// centred text.
    Auto {
        geometry: Geometry,
        frame: Frame,
        fill: Rgb,
        outline: Option<Outline>,
        text: Option<TextBody>,
    },
    /// Unfilled, word-wrapped text frame.
    TextBox { frame: Frame, body: TextBody },
}

impl Shape {
    /// All text carried by the shape.
    pub fn text(&self) -> Option<&str> {
        match self {
            Shape::Auto { text, .. } => text.as_ref().map(|t| t.text.as_str()),
            Shape::TextBox { body, .. } => Some(body.text.as_str()),
        }
    }
}

/// One slide: a name used in logs plus its shapes in z-order.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub name: String,
    pub shapes: Vec<Shape>,
}

impl Slide {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shapes: Vec::new(),
        }
    }

    pub fn fill(&mut self, geometry: Geometry, frame: Frame, fill: Rgb) -> &mut Self {
        self.shapes.push(Shape::Auto {
            geometry,
            frame,
            fill,
            outline: None,
            text: None,
        });
        self
    }

    /// Filled rectangle with no outline.
    pub fn rect(&mut self, frame: Frame, fill: Rgb) -> &mut Self {
        self.fill(Geometry::Rect, frame, fill)
    }

    pub fn outlined(
        &mut self,
        geometry: Geometry,
        frame: Frame,
        fill: Rgb,
        outline: Outline,
    ) -> &mut Self {
        self.shapes.push(Shape::Auto {
            geometry,
            frame,
            fill,
            outline: Some(outline),
            text: None,
        });
        self
    }

    /// Filled shape with text centred inside it.
    pub fn labelled(
        &mut self,
        geometry: Geometry,
        frame: Frame,
        fill: Rgb,
        text: impl Into<String>,
        style: TextStyle,
    ) -> &mut Self {
        self.shapes.push(Shape::Auto {
            geometry,
            frame,
            fill,
            outline: None,
            text: Some(TextBody {
                text: text.into(),
                style,
            }),
        });
        self
    }

    pub fn text_box(&mut self, frame: Frame, text: impl Into<String>, style: TextStyle) -> &mut Self {
        self.shapes.push(Shape::TextBox {
            frame,
            body: TextBody {
                text: text.into(),
                style,
            },
        });
        self
    }

    /// Text of every shape, in z-order.
    pub fn texts(&self) -> Vec<&str> {
        self.shapes.iter().filter_map(Shape::text).collect()
    }
}

/// A presentation built from blank-layout slides.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    pub width_emu: i64,
    pub height_emu: i64,
    slides: Vec<Slide>,
}

impl Default for Deck {
    fn default() -> Self {
        Self {
            width_emu: brand::inches_emu(SLIDE_WIDTH_IN),
            height_emu: brand::inches_emu(SLIDE_HEIGHT_IN),
            slides: Vec::new(),
        }
    }
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_slide(&mut self, slide: Slide) -> &mut Self {
        self.slides.push(slide);
        self
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// `  N. name` for each slide.
    pub fn overview(&self) -> Vec<String> {
        self.slides
            .iter()
            .enumerate()
            .map(|(i, slide)| format!("  {}. {}", i + 1, slide.name))
            .collect()
    }

    /// Serialize to `.pptx` bytes.
    pub fn to_pptx_bytes(&self) -> Result<Vec<u8>> {
        let buf = Cursor::new(Vec::new());
        let mut zip = ZipWriter::new(buf);
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        let count = self.slides.len();
        let mut parts: Vec<(String, String)> = vec![
            ("[Content_Types].xml".into(), content_types_xml(count)),
            ("_rels/.rels".into(), root_rels_xml().into()),
            (
                "ppt/presentation.xml".into(),
                presentation_xml(count, self.width_emu, self.height_emu),
            ),
            (
                "ppt/_rels/presentation.xml.rels".into(),
                presentation_rels_xml(count),
            ),
            (
                "ppt/slideMasters/slideMaster1.xml".into(),
                slide_master_xml().into(),
            ),
            (
                "ppt/slideMasters/_rels/slideMaster1.xml.rels".into(),
                slide_master_rels_xml().into(),
            ),
            (
                "ppt/slideLayouts/slideLayout1.xml".into(),
                slide_layout_xml().into(),
            ),
            (
                "ppt/slideLayouts/_rels/slideLayout1.xml.rels".into(),
                slide_layout_rels_xml().into(),
            ),
            ("ppt/theme/theme1.xml".into(), theme_xml()),
        ];
        for (i, slide) in self.slides.iter().enumerate() {
            let n = i + 1;
            parts.push((format!("ppt/slides/slide{n}.xml"), slide_xml(slide)));
            parts.push((
                format!("ppt/slides/_rels/slide{n}.xml.rels"),
                slide_rels_xml().into(),
            ));
        }

        for (path, xml) in &parts {
            zip.start_file(path.as_str(), options)
                .with_context(|| format!("Failed to create {path}"))?;
            zip.write_all(xml.as_bytes())
                .with_context(|| format!("Failed to write {path}"))?;
        }

        let cursor = zip.finish().context("Failed to finalize PPTX zip")?;
        Ok(cursor.into_inner())
    }
}

// ---------------------------------------------------------------------------
// XML template functions
// ---------------------------------------------------------------------------

const NS: &str = r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#;

const EMPTY_TREE: &str = r#"<p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/></p:spTree>"#;

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn content_types_xml(slide_count: usize) -> String {
    let overrides: String = (1..=slide_count)
        .map(|i| {
            format!(
                "  <Override PartName=\"/ppt/slides/slide{i}.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.presentationml.slide+xml\"/>\n"
            )
        })
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>
  <Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/>
  <Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>
  <Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>
{overrides}</Types>"#
    )
}

fn root_rels_xml() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="ppt/presentation.xml"/>
</Relationships>"#
}

fn presentation_xml(slide_count: usize, width_emu: i64, height_emu: i64) -> String {
    // rId1 is the master, rId2 the theme; slides start at rId3.
    let slide_list: String = (1..=slide_count)
        .map(|i| format!("    <p:sldId id=\"{}\" r:id=\"rId{}\"/>\n", 255 + i, i + 2))
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentation {NS}>
  <p:sldMasterIdLst>
    <p:sldMasterId id="2147483648" r:id="rId1"/>
  </p:sldMasterIdLst>
  <p:sldIdLst>
{slide_list}  </p:sldIdLst>
  <p:sldSz cx="{width_emu}" cy="{height_emu}"/>
  <p:notesSz cx="6858000" cy="9144000"/>
</p:presentation>"#
    )
}

fn presentation_rels_xml(slide_count: usize) -> String {
    let mut rels = String::from(
        "  <Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster\" Target=\"slideMasters/slideMaster1.xml\"/>\n  <Relationship Id=\"rId2\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme\" Target=\"theme/theme1.xml\"/>\n",
    );
    for i in 1..=slide_count {
        rels.push_str(&format!(
            "  <Relationship Id=\"rId{}\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide\" Target=\"slides/slide{i}.xml\"/>\n",
            i + 2
        ));
    }
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
{rels}</Relationships>"#
    )
}

fn slide_master_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldMaster {NS}>
  <p:cSld>{EMPTY_TREE}</p:cSld>
  <p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>
  <p:sldLayoutIdLst>
    <p:sldLayoutId id="2147483649" r:id="rId1"/>
  </p:sldLayoutIdLst>
</p:sldMaster>"#
    )
}

fn slide_master_rels_xml() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout" Target="../slideLayouts/slideLayout1.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme" Target="../theme/theme1.xml"/>
</Relationships>"#
}

fn slide_layout_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldLayout {NS} type="blank">
  <p:cSld name="Blank">{EMPTY_TREE}</p:cSld>
</p:sldLayout>"#
    )
}

fn slide_layout_rels_xml() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster" Target="../slideMasters/slideMaster1.xml"/>
</Relationships>"#
}

fn theme_xml() -> String {
    let color = |tag: &str, rgb: Rgb| format!("<a:{tag}><a:srgbClr val=\"{}\"/></a:{tag}>", rgb.hex());
    let scheme = [
        color("dk1", brand::NAVY),
        color("lt1", brand::WHITE),
        color("dk2", brand::TEAL),
        color("lt2", brand::CREAM),
        color("accent1", brand::TEAL),
        color("accent2", brand::CORAL),
        color("accent3", brand::SUCCESS),
        color("accent4", brand::MUTED),
        color("accent5", brand::SAND),
        color("accent6", brand::NAVY),
        color("hlink", brand::TEAL),
        color("folHlink", brand::MUTED),
    ]
    .join("\n      ");
    let font = brand::DECK_FONT;
    let fill = "<a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill>";
    let line = format!("<a:ln w=\"6350\">{fill}</a:ln>");
    let effect = "<a:effectStyle><a:effectLst/></a:effectStyle>";
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Rent-A-Vacation">
  <a:themeElements>
    <a:clrScheme name="Rent-A-Vacation">
      {scheme}
    </a:clrScheme>
    <a:fontScheme name="Rent-A-Vacation">
      <a:majorFont><a:latin typeface="{font}"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>
      <a:minorFont><a:latin typeface="{font}"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>
    </a:fontScheme>
    <a:fmtScheme name="Rent-A-Vacation">
      <a:fillStyleLst>{fill}{fill}{fill}</a:fillStyleLst>
      <a:lnStyleLst>{line}{line}{line}</a:lnStyleLst>
      <a:effectStyleLst>{effect}{effect}{effect}</a:effectStyleLst>
      <a:bgFillStyleLst>{fill}{fill}{fill}</a:bgFillStyleLst>
    </a:fmtScheme>
  </a:themeElements>
</a:theme>"#
    )
}

fn solid_fill(color: Rgb) -> String {
    format!("<a:solidFill><a:srgbClr val=\"{}\"/></a:solidFill>", color.hex())
}

fn xfrm(frame: &Frame) -> String {
    format!(
        "<a:xfrm><a:off x=\"{}\" y=\"{}\"/><a:ext cx=\"{}\" cy=\"{}\"/></a:xfrm>",
        frame.x, frame.y, frame.cx, frame.cy
    )
}

fn paragraphs_xml(body: &TextBody) -> String {
    let style = &body.style;
    let size = (style.size_pt * 100.0).round() as u32;
    let bold = if style.bold { " b=\"1\"" } else { "" };
    let run_props = format!(
        "<a:rPr lang=\"en-US\" sz=\"{size}\"{bold} dirty=\"0\">{}<a:latin typeface=\"{}\"/></a:rPr>",
        solid_fill(style.color),
        xml_escape(style.font)
    );
    body.text
        .split('\n')
        .map(|line| {
            format!(
                "<a:p><a:pPr algn=\"{}\"/><a:r>{run_props}<a:t>{}</a:t></a:r></a:p>",
                style.align.attr(),
                xml_escape(line)
            )
        })
        .collect()
}

fn shape_xml(id: usize, shape: &Shape) -> String {
    match shape {
        Shape::Auto {
            geometry,
            frame,
            fill,
            outline,
            text,
        } => {
            let line = match outline {
                Some(o) => format!(
                    "<a:ln w=\"{}\">{}</a:ln>",
                    brand::pt_emu(o.width_pt),
                    solid_fill(o.color)
                ),
                None => "<a:ln><a:noFill/></a:ln>".to_string(),
            };
            let tx_body = text
                .as_ref()
                .map(|body| {
                    format!(
                        "<p:txBody><a:bodyPr wrap=\"square\" rtlCol=\"0\" anchor=\"ctr\"/><a:lstStyle/>{}</p:txBody>",
                        paragraphs_xml(body)
                    )
                })
                .unwrap_or_default();
            format!(
                "<p:sp><p:nvSpPr><p:cNvPr id=\"{id}\" name=\"Shape {id}\"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr><p:spPr>{}<a:prstGeom prst=\"{}\"><a:avLst/></a:prstGeom>{}{line}</p:spPr>{tx_body}</p:sp>",
                xfrm(frame),
                geometry.preset(),
                solid_fill(*fill)
            )
        }
        Shape::TextBox { frame, body } => format!(
            "<p:sp><p:nvSpPr><p:cNvPr id=\"{id}\" name=\"TextBox {id}\"/><p:cNvSpPr txBox=\"1\"/><p:nvPr/></p:nvSpPr><p:spPr>{}<a:prstGeom prst=\"rect\"><a:avLst/></a:prstGeom><a:noFill/></p:spPr><p:txBody><a:bodyPr wrap=\"square\" rtlCol=\"0\"><a:spAutoFit/></a:bodyPr><a:lstStyle/>{}</p:txBody></p:sp>",
            xfrm(frame),
            paragraphs_xml(body)
        ),
    }
}

fn slide_xml(slide: &Slide) -> String {
    // id 1 is the group shape.
    let shapes: String = slide
        .shapes
        .iter()
        .enumerate()
        .map(|(i, shape)| format!("      {}\n", shape_xml(i + 2, shape)))
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld {NS}>
  <p:cSld name="{}">
    <p:spTree>
      <p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>
      <p:grpSpPr/>
{shapes}    </p:spTree>
  </p:cSld>
  <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:sld>"#,
        xml_escape(&slide.name)
    )
}

fn slide_rels_xml() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout" Target="../slideLayouts/slideLayout1.xml"/>
</Relationships>"#
}
