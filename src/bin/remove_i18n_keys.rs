//! Entry point for `remove-i18n-keys`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use i18n_catalog_tools::config::{
    ConfigError,
    Settings,
    load_settings,
};
use i18n_catalog_tools::logging;
use i18n_catalog_tools::removal::{
    parse_key_list,
    run_removal,
};

/// Remove keys from both translation catalogs, keeping a backup of each file.
#[derive(Debug, Parser)]
#[command(name = "remove-i18n-keys", version)]
struct Cli {
    /// Flat keys to remove (e.g. `speak.modal.startFrom`)
    #[arg(value_name = "KEY")]
    keys: Vec<String>,

    /// File with one key per line; `#` starts a comment line
    #[arg(long, value_name = "FILE")]
    keys_file: Option<PathBuf>,

    /// Config file (defaults to `.i18n-tools.json` in the current directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Source-locale catalog
    #[arg(long)]
    source: Option<PathBuf>,

    /// Target-locale catalog
    #[arg(long)]
    target: Option<PathBuf>,

    /// Separator between key path segments
    #[arg(long)]
    separator: Option<String>,

    /// Suffix appended to each catalog path for its backup copy
    #[arg(long)]
    backup_suffix: Option<String>,

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
        if let Some(separator) = &self.separator {
            settings.key_separator.clone_from(separator);
        }
        if let Some(suffix) = &self.backup_suffix {
            settings.backup_suffix.clone_from(suffix);
        }

        settings.validate().map_err(ConfigError::ValidationErrors)?;
        Ok(settings)
    }

    /// Keys from the command line and the keys file, or the configured list when both are empty.
    fn keys(&self, settings: &Settings) -> std::io::Result<Vec<String>> {
        let mut keys = self.keys.clone();
        if let Some(path) = &self.keys_file {
            let text = std::fs::read_to_string(path)?;
            keys.extend(parse_key_list(&text));
        }
        if keys.is_empty() {
            keys.clone_from(&settings.keys_to_remove);
        }
        Ok(keys)
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

    let keys = match cli.keys(&settings) {
        Ok(keys) if keys.is_empty() => {
            tracing::error!("No keys to remove: pass KEY arguments, --keys-file, or keysToRemove");
            return ExitCode::from(2);
        }
        Ok(keys) => keys,
        Err(e) => {
            tracing::error!("Failed to read keys file: {e}");
            return ExitCode::from(2);
        }
    };

    match run_removal(&settings, &keys, &mut std::io::stdout().lock()) {
        Ok(summary) if summary.has_failures() => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Failed to write progress: {e}");
            ExitCode::FAILURE
        }
    }
}
