//! Entry point for `check-i18n-usage`.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use i18n_catalog_tools::audit::{
    AuditError,
    run_audit,
};
use i18n_catalog_tools::config::{
    ConfigError,
    Settings,
    load_settings,
};
use i18n_catalog_tools::logging;

/// Check that two translation catalogs share the same keys and find keys
/// no source file references.
#[derive(Debug, Parser)]
#[command(name = "check-i18n-usage", version)]
struct Cli {
    /// Config file (defaults to `.i18n-tools.json` in the current directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Source-locale catalog
    #[arg(long)]
    source: Option<PathBuf>,

    /// Target-locale catalog
    #[arg(long)]
    target: Option<PathBuf>,

    /// Directory searched for key usages; repeat to search several
    #[arg(long = "search-dir", value_name = "DIR")]
    search_dirs: Vec<PathBuf>,

    /// Separator between key path segments
    #[arg(long)]
    separator: Option<String>,

    /// Usage paths are shown relative to this directory (default: current directory)
    #[arg(long)]
    project_root: Option<PathBuf>,

    /// Print the structured report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Config file (or defaults) with command-line overrides applied, validated.
    fn settings(&self) -> Result<Settings, ConfigError> {
        let working_dir = std::env::current_dir()?;
        let mut settings = load_settings(self.config.as_deref(), &working_dir)?;

        if let Some(source) = &self.source {
            settings.source_catalog.clone_from(source);
        }
        if let Some(target) = &self.target {
            settings.target_catalog.clone_from(target);
        }
        if !self.search_dirs.is_empty() {
            settings.search_directories.clone_from(&self.search_dirs);
        }
        if let Some(separator) = &self.separator {
            settings.key_separator.clone_from(separator);
        }
        if let Some(root) = &self.project_root {
            settings.project_root = Some(root.clone());
        }
        settings.project_root.get_or_insert(working_dir);

        settings.validate().map_err(ConfigError::ValidationErrors)?;
        Ok(settings)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let settings = match cli.settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::from(2);
        }
    };

    let mut stdout = std::io::stdout().lock();
    let result = if cli.json {
        run_audit(&settings, &mut std::io::sink())
    } else {
        run_audit(&settings, &mut stdout)
    };

    let report = match result {
        Ok(report) => report,
        Err(e @ AuditError::Matcher(_)) => {
            tracing::error!("{e}");
            return ExitCode::from(2);
        }
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if cli.json {
        let written = serde_json::to_string_pretty(&report)
            .map_err(std::io::Error::from)
            .and_then(|json| writeln!(stdout, "{json}"));
        if let Err(e) = written {
            tracing::error!("Failed to write report: {e}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
