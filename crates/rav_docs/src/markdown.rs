//! Markdown mirror of a [`BrandedDocument`], for review in pull requests.

use crate::docx::BrandedDocument;
use crate::model::{Block, Inline, Para, TextRun};

/// Generate a Markdown table from headers and rows.
///
/// Pipes in cell content are escaped to prevent breaking the table structure.
pub fn generate_markdown_table(headers: &[String], rows: &[Vec<String>]) -> String {
    if headers.is_empty() {
        return String::new();
    }

    let mut lines = Vec::new();

    let header_cells: Vec<String> = headers.iter().map(|h| escape_cell(h)).collect();
    lines.push(format!("| {} |", header_cells.join(" | ")));

    let separators: Vec<&str> = headers.iter().map(|_| "---").collect();
    lines.push(format!("| {} |", separators.join(" | ")));

    for row in rows {
        let cells: Vec<String> = row.iter().map(|c| escape_cell(c)).collect();
        lines.push(format!("| {} |", cells.join(" | ")));
    }

    lines.join("\n")
}

/// Render the whole document. Headings shift down one level under the
/// title and images are dropped.
pub fn render_markdown(doc: &BrandedDocument) -> String {
    let mut parts = vec![format!("# {}", doc.title())];

    for block in doc.blocks() {
        match block {
            Block::Heading { level, text } => {
                parts.push(format!("{} {text}", "#".repeat(usize::from(*level) + 1)));
            }
            Block::Paragraph(para) => {
                let line = render_para(para);
                if !line.trim().is_empty() {
                    parts.push(line);
                }
            }
            Block::Table(table) => parts.push(generate_markdown_table(&table.headers, &table.rows)),
            Block::Spacer => {}
        }
    }

    let mut out = parts.join("\n\n");
    out.push('\n');
    out
}

fn render_para(para: &Para) -> String {
    let mut line: String = para
        .inlines
        .iter()
        .filter_map(|inline| match inline {
            Inline::Text(run) => Some(render_run(run)),
            Inline::Picture(_) => None,
        })
        .collect();
    if para.format.rule.is_some() && line.trim().is_empty() {
        line = "---".into();
    }
    if para.format.list_bullet {
        line = format!("- {line}");
    } else if let Some(rest) = line.strip_prefix('\u{2022}') {
        line = format!("-{rest}");
    }
    line.replace('\n', "  \n")
}

fn render_run(run: &TextRun) -> String {
    let text = run.text.as_str();
    let trimmed = text.trim();
    if trimmed.is_empty() || (!run.bold && !run.italic) {
        return text.to_string();
    }
    let marker = match (run.bold, run.italic) {
        (true, true) => "***",
        (true, false) => "**",
        _ => "_",
    };
    // Emphasis markers must hug the text, so keep surrounding spaces outside.
    let lead = &text[..text.len() - text.trim_start().len()];
    let tail = &text[text.trim_end().len()..];
    format!("{lead}{marker}{trimmed}{marker}{tail}")
}

fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_generate_markdown_table_basic() {
        let headers = strings(&["Name", "Score"]);
        let rows = vec![strings(&["Alice", "95"]), strings(&["Bob", "87"])];
        let table = generate_markdown_table(&headers, &rows);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "| Name | Score |");
        assert_eq!(lines[1], "| --- | --- |");
        assert_eq!(lines[2], "| Alice | 95 |");
        assert_eq!(lines[3], "| Bob | 87 |");
    }

    #[test]
    fn test_generate_markdown_table_escapes_pipes() {
        let table = generate_markdown_table(&strings(&["Data"]), &[strings(&["a|b"])]);
        assert!(table.contains("a\\|b"));
    }

    #[test]
    fn test_generate_markdown_table_empty_headers() {
        assert_eq!(generate_markdown_table(&[], &[]), "");
    }

    #[test]
    fn test_render_markdown_document() {
        let mut doc = BrandedDocument::new("Status Report");
        doc.heading(1, "1. Executive Summary")
            .body("Plain text.")
            .label_bullets(&[("Auth: ", "done")])
            .horizontal_rule()
            .table(&["A", "B"], &[["1", "2"]]);

        let md = render_markdown(&doc);
        assert!(md.starts_with("# Status Report\n\n## 1. Executive Summary"));
        assert!(md.contains("Plain text."));
        assert!(md.contains("\n- **Auth:** done"));
        assert!(md.contains("\n---\n"));
        assert!(md.contains("| 1 | 2 |"));
    }

    #[test]
    fn test_render_run_emphasis() {
        assert_eq!(render_run(&TextRun::new("x").bold().italic()), "***x***");
        assert_eq!(render_run(&TextRun::new(" y ").italic()), " _y_ ");
        assert_eq!(render_run(&TextRun::new("z")), "z");
    }
}
