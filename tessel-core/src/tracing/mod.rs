//! Tracing integration for structured logging
//!
//! The layout engine emits `tracing` events for every structural change
//! (splits, closes, tab changes) and wraps window commands in spans. This
//! module configures a `tracing-subscriber` for binaries that want to see
//! them and defines the shared span names.

use std::path::PathBuf;

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Errors that can occur during tracing initialization
#[derive(Debug, Error)]
pub enum TracingError {
    /// The filter directive could not be parsed
    #[error("invalid log filter: {0}")]
    InvalidFilter(String),

    /// A global subscriber is already installed
    #[error("failed to initialize tracing: {0}")]
    InitializationFailed(String),

    /// Failed to create log file
    #[error("failed to create log file {}: {source}", .path.display())]
    FileCreationFailed {
        /// Requested log file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Result type for tracing operations
pub type TracingResult<T> = Result<T, TracingError>;

/// Tracing log level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum TracingLevel {
    /// Error level - only errors
    Error,
    /// Warn level - errors and warnings (default)
    #[default]
    Warn,
    /// Info level - errors, warnings, and info
    Info,
    /// Debug level - every layout mutation
    Debug,
    /// Trace level - all messages including trace
    Trace,
}

impl TracingLevel {
    /// Converts to tracing crate's Level
    #[must_use]
    pub const fn to_tracing_level(self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Maps a count of `-v` flags to a level, starting from the default.
    #[must_use]
    pub const fn from_verbosity(count: u8) -> Self {
        match count {
            0 => Self::Warn,
            1 => Self::Info,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }
}

impl std::str::FromStr for TracingLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            other => Err(format!("unknown log level '{other}'")),
        }
    }
}

impl std::fmt::Display for TracingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Output destination for tracing logs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TracingOutput {
    /// Output to stdout
    Stdout,
    /// Output to stderr
    #[default]
    Stderr,
    /// Output to a file, truncated on startup
    File {
        /// Path to the log file
        path: PathBuf,
    },
}

/// Configuration for tracing initialization
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Log level for Tessel's own targets
    pub level: TracingLevel,
    /// Output destination
    pub output: TracingOutput,
    /// Custom filter string (overrides level if set)
    pub filter: Option<String>,
}

impl TracingConfig {
    /// Creates a new tracing configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the log level
    #[must_use]
    pub fn with_level(mut self, level: TracingLevel) -> Self {
        self.level = level;
        self
    }

    /// Sets the output destination
    #[must_use]
    pub fn with_output(mut self, output: TracingOutput) -> Self {
        self.output = output;
        self
    }

    /// Sets a custom filter string
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Builds the `EnvFilter` this configuration describes.
    ///
    /// Without a custom filter only the `tessel_core` and `tessel_cli`
    /// targets are enabled, at the configured level.
    ///
    /// # Errors
    ///
    /// Returns `TracingError::InvalidFilter` if the custom filter does not
    /// parse.
    pub fn env_filter(&self) -> TracingResult<EnvFilter> {
        let directives = self.filter.clone().unwrap_or_else(|| {
            format!(
                "tessel_core={level},tessel_cli={level}",
                level = self.level
            )
        });
        EnvFilter::try_new(&directives).map_err(|e| TracingError::InvalidFilter(e.to_string()))
    }
}

/// Installs a global tracing subscriber for the given configuration
///
/// # Errors
///
/// Returns an error if:
/// - The custom filter is invalid
/// - File output is configured but the file cannot be created
/// - A global subscriber has already been installed
pub fn init_tracing(config: &TracingConfig) -> TracingResult<()> {
    let filter = config.env_filter()?;
    let layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true);

    let installed = match &config.output {
        TracingOutput::Stdout => tracing_subscriber::registry()
            .with(filter)
            .with(layer.with_writer(std::io::stdout))
            .try_init(),
        TracingOutput::Stderr => tracing_subscriber::registry()
            .with(filter)
            .with(layer.with_writer(std::io::stderr))
            .try_init(),
        TracingOutput::File { path } => {
            let file =
                std::fs::File::create(path).map_err(|source| TracingError::FileCreationFailed {
                    path: path.clone(),
                    source,
                })?;
            tracing_subscriber::registry()
                .with(filter)
                .with(layer.with_ansi(false).with_writer(file))
                .try_init()
        }
    };
    installed.map_err(|e| TracingError::InitializationFailed(e.to_string()))?;

    tracing::debug!(level = %config.level, "Tracing initialized");
    Ok(())
}

/// Standard span names for Tessel operations
pub mod span_names {
    /// Execution of one window command
    pub const COMMAND_EXECUTE: &str = "command.execute";
    /// Parsing of an ex-style command line
    pub const COMMAND_PARSE: &str = "command.parse";
    /// Key chord resolution
    pub const KEYMAP_RESOLVE: &str = "keymap.resolve";
    /// Settings file load
    pub const CONFIG_LOAD: &str = "config.load";
}
