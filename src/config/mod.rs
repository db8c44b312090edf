//! Configuration shared by both tools.
/// Config file loader
mod loader;
/// Source file pattern matcher
mod matcher;
/// Configuration types and settings
mod types;

pub use loader::{
    CONFIG_FILE_NAME,
    load_settings,
};
pub use matcher::{
    MatcherError,
    SourceMatcher,
};
pub use types::{
    ConfigError,
    ReportConfig,
    Settings,
    ValidationError,
};
