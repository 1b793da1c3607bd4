#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, info};

use rav_core::{GeneratorConfig, RavError, logging};
use rav_reports::{GenerationContext, ReportKind};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Parser)]
#[command(name = "rav-docs")]
#[command(about = "Generate Rent-A-Vacation branded documents")]
#[command(version)]
struct Cli {
    /// JSON config file (defaults to ./rav-docs.json when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Directory for the Word reports.
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,
    /// Directory for the brand template deck.
    #[arg(long, global = true)]
    deck_dir: Option<PathBuf>,
    /// PNG logo placed in report headers.
    #[arg(long, global = true)]
    logo: Option<PathBuf>,
    /// Generation date (YYYY-MM-DD) stamped into dated documents.
    #[arg(long, global = true)]
    date: Option<String>,
    /// Also write a Markdown mirror of each report.
    #[arg(long, global = true, default_value_t = false)]
    markdown: bool,
    /// Also write a JSON outline of each report.
    #[arg(long, global = true, default_value_t = false)]
    outline: bool,
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
enum Command {
    /// Every report plus the brand deck.
    All,
    Roadmap,
    StatusReport,
    PlatformOverview,
    TechInventory,
    BrandDeck,
    /// The roadmap and status report pair.
    Docx,
}

impl Command {
    fn reports(self) -> &'static [ReportKind] {
        match self {
            Command::All => &ReportKind::ALL,
            Command::Roadmap => &[ReportKind::Roadmap],
            Command::StatusReport => &[ReportKind::StatusReport],
            Command::PlatformOverview => &[ReportKind::PlatformOverview],
            Command::TechInventory => &[ReportKind::TechInventory],
            Command::BrandDeck => &[],
            Command::Docx => &[ReportKind::Roadmap, ReportKind::StatusReport],
        }
    }

    fn includes_deck(self) -> bool {
        matches!(self, Command::All | Command::BrandDeck)
    }
}

impl Cli {
    /// Config file values with command-line overrides applied on top.
    fn config(&self) -> Result<GeneratorConfig> {
        let cwd = std::env::current_dir().context("Failed to read working directory")?;
        let mut config = GeneratorConfig::discover(self.config.as_deref(), &cwd)?;

        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(dir) = &self.deck_dir {
            config.deck_dir = dir.clone();
        }
        if let Some(logo) = &self.logo {
            config.logo_path = logo.clone();
        }
        if let Some(raw) = &self.date {
            config.date = Some(GeneratorConfig::parse_date(raw)?);
        }
        config.write_markdown |= self.markdown;
        config.write_outline |= self.outline;
        match self.verbose {
            0 => {}
            1 => config.log_level = "debug".into(),
            _ => config.log_level = "trace".into(),
        }

        Ok(config.resolve_paths(&cwd))
    }
}

fn run(cli: &Cli, config: &GeneratorConfig) -> Result<Vec<PathBuf>> {
    let command = cli.command.unwrap_or(Command::All);
    debug!("Running {command:?} with {config:?}");

    let ctx = GenerationContext::from_config(config)?;
    let mut written = Vec::new();
    for &kind in command.reports() {
        info!("Generating {}", kind.label());
        written.extend(rav_reports::write_report(kind, &ctx, &config.output_dir)?);
    }
    if command.includes_deck() {
        info!("Generating brand deck");
        written.push(rav_reports::write_brand_deck(&config.deck_dir)?);
    }
    Ok(written)
}

fn report_failure(e: &anyhow::Error) {
    match e.downcast_ref::<RavError>() {
        Some(rav) => {
            error!("{:?}: {e:#}", rav.category());
            eprintln!("{}", rav.user_message());
        }
        None => {
            error!("{e:#}");
            eprintln!("Error: {e:#}");
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.config() {
        Ok(config) => config,
        Err(e) => {
            report_failure(&e);
            return ExitCode::FAILURE;
        }
    };

    let log_init = match &config.log_dir {
        Some(dir) => logging::init_logging_to_dir(dir, &config.log_level).map(Some),
        None => logging::init_logging(&config.log_level).map(|()| None),
    };
    // Flushes the file appender on drop.
    let _log_guard = match log_init {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    info!("Starting rav-docs v{VERSION}");

    match run(&cli, &config) {
        Ok(paths) => {
            for path in &paths {
                println!("Saved: {}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            report_failure(&e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("rav-docs").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_default_command_is_all() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
        assert_eq!(Command::All.reports().len(), 4);
        assert!(Command::All.includes_deck());
    }

    #[test]
    fn test_docx_pair() {
        let cli = parse(&["docx"]);
        assert_eq!(cli.command, Some(Command::Docx));
        assert_eq!(
            Command::Docx.reports(),
            &[ReportKind::Roadmap, ReportKind::StatusReport]
        );
        assert!(!Command::Docx.includes_deck());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["tech-inventory", "--markdown", "-vv", "--date", "2026-02-26"]);
        assert_eq!(cli.command, Some(Command::TechInventory));
        assert!(cli.markdown);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.date.as_deref(), Some("2026-02-26"));
    }

    #[test]
    fn test_overrides_apply_over_config_file() {
        let tmp = tempfile::tempdir().unwrap();
        let config_path = tmp.path().join("custom.json");
        std::fs::write(&config_path, r#"{ "deck_dir": "slides", "log_level": "warn" }"#).unwrap();
        let out = tmp.path().join("out");

        let cli = parse(&[
            "--config",
            config_path.to_str().unwrap(),
            "--output-dir",
            out.to_str().unwrap(),
            "--outline",
            "-v",
            "--date",
            "2026-03-05",
        ]);
        let config = cli.config().unwrap();
        assert_eq!(config.output_dir, out);
        assert!(config.deck_dir.ends_with("slides"));
        assert!(config.deck_dir.is_absolute());
        assert!(config.write_outline);
        assert_eq!(config.log_level, "debug");
        assert_eq!(
            config.date,
            chrono::NaiveDate::from_ymd_opt(2026, 3, 5)
        );
    }

    #[test]
    fn test_bad_date_is_config_error() {
        let cli = parse(&["--date", "03/05/2026"]);
        let err = cli.config().unwrap_err();
        assert!(matches!(err.downcast_ref::<RavError>(), Some(RavError::Config(_))));
    }

    #[test]
    fn test_run_writes_selected_outputs() {
        let tmp = tempfile::tempdir().unwrap();
        let cli = parse(&["brand-deck"]);
        let config = GeneratorConfig {
            output_dir: tmp.path().join("exports"),
            deck_dir: tmp.path().join("deck"),
            logo_path: tmp.path().join("none.png"),
            ..Default::default()
        };
        let paths = run(&cli, &config).unwrap();
        assert_eq!(paths, vec![tmp.path().join("deck").join("RAV-Brand-Template.pptx")]);
        assert!(!tmp.path().join("exports").exists());
    }
}
