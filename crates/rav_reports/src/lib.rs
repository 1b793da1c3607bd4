// Rent-A-Vacation document set: Word reports and the brand deck.

pub mod brand_deck;
pub mod platform_overview;
pub mod roadmap;
pub mod status_report;
pub mod tech_inventory;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rav_core::GeneratorConfig;
use rav_docs::{BrandedDocument, Deck, Logo};
use std::path::{Path, PathBuf};
use tracing::info;

/// Inputs shared by every report builder.
#[derive(Debug, Clone)]
pub struct GenerationContext {
    pub today: NaiveDate,
    pub logo: Option<Logo>,
    pub write_markdown: bool,
    pub write_outline: bool,
}

impl GenerationContext {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            logo: None,
            write_markdown: false,
            write_outline: false,
        }
    }

    /// A missing logo file leaves the masthead without the logo row. A logo
    /// that exists but cannot be read as a PNG is an error.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self> {
        let logo = Logo::load(&config.logo_path)
            .with_context(|| format!("Unusable logo {}", config.logo_path.display()))?;
        Ok(Self {
            today: config.effective_date(),
            logo,
            write_markdown: config.write_markdown,
            write_outline: config.write_outline,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    Roadmap,
    StatusReport,
    PlatformOverview,
    TechInventory,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        Self::Roadmap,
        Self::StatusReport,
        Self::PlatformOverview,
        Self::TechInventory,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Roadmap => "roadmap",
            Self::StatusReport => "status report",
            Self::PlatformOverview => "platform overview",
            Self::TechInventory => "technology inventory",
        }
    }

    pub fn file_name(self, today: NaiveDate) -> String {
        match self {
            Self::Roadmap => roadmap::FILE_NAME.into(),
            Self::StatusReport => status_report::FILE_NAME.into(),
            Self::PlatformOverview => platform_overview::file_name(today),
            Self::TechInventory => tech_inventory::FILE_NAME.into(),
        }
    }

    pub fn build(self, ctx: &GenerationContext) -> BrandedDocument {
        match self {
            Self::Roadmap => roadmap::build(ctx),
            Self::StatusReport => status_report::build(ctx),
            Self::PlatformOverview => platform_overview::build(ctx),
            Self::TechInventory => tech_inventory::build(ctx),
        }
    }
}

/// Build one report and write it under `out_dir`, along with the Markdown
/// mirror and outline when the context asks for them. Returns every path
/// written, `.docx` first.
pub fn write_report(kind: ReportKind, ctx: &GenerationContext, out_dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let doc = kind.build(ctx);
    let docx_path = out_dir.join(kind.file_name(ctx.today));
    let bytes = doc
        .to_docx_bytes()
        .with_context(|| format!("Failed to render {}", kind.label()))?;
    write_file(&docx_path, &bytes)?;
    let mut written = vec![docx_path];

    if ctx.write_markdown {
        let path = written[0].with_extension("md");
        write_file(&path, rav_docs::markdown::render_markdown(&doc).as_bytes())?;
        written.push(path);
    }

    if ctx.write_outline {
        let path = written[0].with_extension("outline.json");
        let json = doc.outline().to_json()?;
        write_file(&path, json.as_bytes())?;
        written.push(path);
    }

    Ok(written)
}

/// Write the brand template deck under `deck_dir` and log its slide overview.
pub fn write_brand_deck(deck_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(deck_dir)
        .with_context(|| format!("Failed to create {}", deck_dir.display()))?;

    let deck = brand_deck::build();
    let path = deck_dir.join(brand_deck::FILE_NAME);
    write_file(&path, &deck.to_pptx_bytes()?)?;

    for line in deck_summary(&deck) {
        info!("{line}");
    }
    Ok(path)
}

/// Slide count, then an overview header and one line per slide.
pub fn deck_summary(deck: &Deck) -> Vec<String> {
    let mut lines = vec![
        format!("Slides: {}", deck.slides().len()),
        "Slide overview:".to_string(),
    ];
    lines.extend(deck.overview());
    lines
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes)
        .map_err(|e| rav_core::RavError::FileSystem(format!("{}: {e}", path.display())))?;
    info!("Saved: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 26).unwrap()
    }

    #[test]
    fn test_file_names() {
        assert_eq!(
            ReportKind::Roadmap.file_name(date()),
            "RAV-roadmap-draft-02222026.docx"
        );
        assert_eq!(
            ReportKind::PlatformOverview.file_name(date()),
            "RAV-Platform-Overview-02262026.docx"
        );
        assert_eq!(
            ReportKind::TechInventory.file_name(date()),
            "RAV-Technology-Inventory-02262026.docx"
        );
    }

    #[test]
    fn test_from_config_without_logo() {
        let tmp = tempfile::tempdir().unwrap();
        let config = GeneratorConfig {
            logo_path: tmp.path().join("missing.png"),
            date: Some(date()),
            write_markdown: true,
            ..Default::default()
        };
        let ctx = GenerationContext::from_config(&config).unwrap();
        assert!(ctx.logo.is_none());
        assert_eq!(ctx.today, date());
        assert!(ctx.write_markdown);
        assert!(!ctx.write_outline);
    }

    #[test]
    fn test_from_config_rejects_corrupt_logo() {
        let tmp = tempfile::tempdir().unwrap();
        let logo_path = tmp.path().join("logo.png");
        std::fs::write(&logo_path, b"not a png").unwrap();
        let config = GeneratorConfig {
            logo_path,
            ..Default::default()
        };
        let err = GenerationContext::from_config(&config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<rav_core::RavError>(),
            Some(rav_core::RavError::Asset(_))
        ));
    }

    #[test]
    fn test_deck_summary_has_overview_header() {
        let summary = deck_summary(&brand_deck::build());
        assert_eq!(summary.len(), 8);
        assert_eq!(summary[0], "Slides: 6");
        assert_eq!(summary[1], "Slide overview:");
        assert_eq!(summary[2], "  1. Title Slide (teal bg)");
        assert_eq!(summary[7], "  6. Closing / Thank You (teal bg)");
    }

    #[test]
    fn test_write_report_extra_outputs() {
        let tmp = tempfile::tempdir().unwrap();
        let mut ctx = GenerationContext::new(date());
        ctx.write_markdown = true;
        ctx.write_outline = true;

        let paths = write_report(ReportKind::StatusReport, &ctx, tmp.path()).unwrap();
        let names: Vec<String> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "RAV-Development-Status-Report-02222026.docx",
                "RAV-Development-Status-Report-02222026.md",
                "RAV-Development-Status-Report-02222026.outline.json",
            ]
        );
        assert!(paths.iter().all(|p| p.is_file()));
    }
}
