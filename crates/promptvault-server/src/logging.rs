//! Logging setup.
//!
//! Verbosity comes from a preset picked by CLI flags, refined by per-target
//! `--log TARGET=LEVEL` overrides. `RUST_LOG` replaces both when set.
//! Output is plain text or JSON lines.

use std::collections::BTreeMap;
use tracing::Level;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Root of every target this workspace logs under.
const TARGET_ROOT: &str = "promptvault";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Invalid log format: '{}'. Use 'text' or 'json'.", s)),
        }
    }
}

/// Verbosity presets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogPreset {
    /// Startup and API errors, quiet HTTP tracing
    #[default]
    Production,
    Verbose,
    Debug,
    Trace,
    /// Warnings and errors only
    Quiet,
}

impl LogPreset {
    /// Pick the preset from CLI flags. Quiet beats trace beats debug beats verbose.
    pub fn from_flags(verbose: bool, debug: bool, trace: bool, quiet: bool) -> Self {
        match (quiet, trace, debug, verbose) {
            (true, ..) => LogPreset::Quiet,
            (_, true, ..) => LogPreset::Trace,
            (_, _, true, _) => LogPreset::Debug,
            (_, _, _, true) => LogPreset::Verbose,
            _ => LogPreset::Production,
        }
    }

    fn directives(self) -> &'static [&'static str] {
        match self {
            LogPreset::Production => &[
                "promptvault::startup=info",
                "promptvault::api=info",
                "promptvault::versions=warn",
                "tower_http=warn",
            ],
            LogPreset::Verbose => &["promptvault=info", "tower_http=info"],
            LogPreset::Debug => &["promptvault=debug", "tower_http=debug"],
            LogPreset::Trace => &["promptvault=trace", "tower_http=trace"],
            LogPreset::Quiet => &["promptvault=warn", "tower_http=error"],
        }
    }
}

/// Logging configuration built from CLI arguments.
#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    pub preset: LogPreset,
    /// Full target name -> level. Sorted so the filter string is stable.
    pub overrides: BTreeMap<String, Level>,
    pub format: LogFormat,
}

impl LogConfig {
    pub fn from_cli(
        verbose: bool,
        debug: bool,
        trace: bool,
        quiet: bool,
        log_overrides: Vec<String>,
        format: LogFormat,
    ) -> Self {
        Self {
            preset: LogPreset::from_flags(verbose, debug, trace, quiet),
            overrides: parse_overrides(&log_overrides),
            format,
        }
    }

    /// Filter directives for this config, overrides last so they win.
    pub fn directives(&self) -> String {
        self.preset
            .directives()
            .iter()
            .map(|d| d.to_string())
            .chain(
                self.overrides
                    .iter()
                    .map(|(target, level)| format!("{}={}", target, level_name(*level))),
            )
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Build an EnvFilter, preferring RUST_LOG when it parses.
    pub fn build_filter(&self) -> EnvFilter {
        if let Ok(env_filter) = EnvFilter::try_from_default_env() {
            return env_filter;
        }

        EnvFilter::try_new(self.directives()).unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Parse `TARGET=LEVEL` items. Each item may hold several comma-separated pairs.
/// Pairs with an unknown level are skipped.
fn parse_overrides(items: &[String]) -> BTreeMap<String, Level> {
    items
        .iter()
        .flat_map(|item| item.split(','))
        .filter_map(|pair| pair.split_once('='))
        .filter_map(|(target, level)| {
            let level = parse_level(level.trim())?;
            Some((qualify_target(target.trim()), level))
        })
        .collect()
}

/// "api" -> "promptvault::api"; tower_http and already-qualified targets pass through.
fn qualify_target(target: &str) -> String {
    if target == TARGET_ROOT
        || target.starts_with("promptvault::")
        || target.starts_with("tower_http")
    {
        target.to_string()
    } else {
        format!("{}::{}", TARGET_ROOT, target)
    }
}

fn parse_level(s: &str) -> Option<Level> {
    match s.to_ascii_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" | "warning" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

fn level_name(level: Level) -> &'static str {
    match level {
        Level::TRACE => "trace",
        Level::DEBUG => "debug",
        Level::INFO => "info",
        Level::WARN => "warn",
        Level::ERROR => "error",
    }
}

/// Install the global tracing subscriber.
pub fn init(config: &LogConfig) {
    let filter = config.build_filter();

    match config.format {
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_target(true))
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_span_events(FmtSpan::CLOSE),
                )
                .init();
        }
    }
}
