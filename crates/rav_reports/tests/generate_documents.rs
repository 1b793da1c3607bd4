use chrono::NaiveDate;
use rav_reports::{GenerationContext, ReportKind, write_brand_deck, write_report};
use std::io::Read;
use std::path::Path;

fn ctx() -> GenerationContext {
    GenerationContext::new(NaiveDate::from_ymd_opt(2026, 2, 26).unwrap())
}

fn read_part(path: &Path, name: &str) -> String {
    let file = std::fs::File::open(path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut part = archive.by_name(name).unwrap();
    let mut xml = String::new();
    part.read_to_string(&mut xml).unwrap();
    xml
}

#[test]
fn every_report_is_written_as_a_zip_package() {
    let tmp = tempfile::tempdir().unwrap();
    for kind in ReportKind::ALL {
        let paths = write_report(kind, &ctx(), tmp.path()).unwrap();
        assert_eq!(paths.len(), 1, "{}", kind.label());
        let bytes = std::fs::read(&paths[0]).unwrap();
        assert_eq!(&bytes[..2], b"PK", "{}", kind.label());
    }
    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 4);
}

#[test]
fn output_directory_is_created() {
    let tmp = tempfile::tempdir().unwrap();
    let nested = tmp.path().join("docs").join("exports");
    let paths = write_report(ReportKind::Roadmap, &ctx(), &nested).unwrap();
    assert!(paths[0].starts_with(&nested));
    assert!(paths[0].is_file());
}

#[test]
fn table_cells_carry_literal_text() {
    let tmp = tempfile::tempdir().unwrap();
    let paths = write_report(ReportKind::Roadmap, &ctx(), tmp.path()).unwrap();
    let xml = read_part(&paths[0], "word/document.xml");

    assert!(xml.contains("User Authentication"));
    assert!(xml.contains("Email/password + Google OAuth with admin approval workflow"));

    let outline = ReportKind::Roadmap.build(&ctx()).outline();
    assert_eq!(xml.matches("<w:tbl>").count(), outline.tables.len());
    let expected_rows: usize = outline.tables.iter().map(|t| t.rows + 1).sum();
    assert_eq!(xml.matches("</w:tr>").count(), expected_rows);
}

#[test]
fn outlines_are_stable_across_runs() {
    for kind in ReportKind::ALL {
        let first = kind.build(&ctx()).outline();
        let second = kind.build(&ctx()).outline();
        assert_eq!(first, second, "{}", kind.label());
    }
}

#[test]
fn outline_file_round_trips() {
    let tmp = tempfile::tempdir().unwrap();
    let mut ctx = ctx();
    ctx.write_outline = true;
    let paths = write_report(ReportKind::TechInventory, &ctx, tmp.path()).unwrap();
    let json = std::fs::read_to_string(&paths[1]).unwrap();
    let outline: rav_docs::DocumentOutline = serde_json::from_str(&json).unwrap();
    assert_eq!(outline, ReportKind::TechInventory.build(&ctx).outline());
}

#[test]
fn missing_logo_is_tolerated() {
    let tmp = tempfile::tempdir().unwrap();
    let config = rav_core::GeneratorConfig {
        logo_path: tmp.path().join("no-such-logo.png"),
        date: NaiveDate::from_ymd_opt(2026, 2, 26),
        ..Default::default()
    };
    let ctx = GenerationContext::from_config(&config).unwrap();
    assert!(ctx.logo.is_none());

    let paths = write_report(ReportKind::StatusReport, &ctx, tmp.path()).unwrap();
    let xml = read_part(&paths[0], "word/document.xml");
    assert!(xml.contains("RENT-A-VACATION"));
    assert!(!xml.contains("<pic:pic"));
}

#[test]
fn brand_deck_has_six_slides() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_brand_deck(tmp.path()).unwrap();
    assert_eq!(path.file_name().unwrap(), "RAV-Brand-Template.pptx");

    let file = std::fs::File::open(&path).unwrap();
    let archive = zip::ZipArchive::new(file).unwrap();
    let slides = archive
        .file_names()
        .filter(|name| name.starts_with("ppt/slides/slide") && name.ends_with(".xml"))
        .count();
    assert_eq!(slides, 6);

    let closing = read_part(&path, "ppt/slides/slide6.xml");
    assert!(closing.contains("Thank You"));
}

#[test]
fn corrupt_logo_fails_generation() {
    let tmp = tempfile::tempdir().unwrap();
    let logo_path = tmp.path().join("logo.png");
    std::fs::write(&logo_path, b"GIF89a").unwrap();
    let config = rav_core::GeneratorConfig {
        logo_path,
        ..Default::default()
    };
    let err = GenerationContext::from_config(&config).unwrap_err();
    assert!(format!("{err:#}").contains("not a PNG"));
}
