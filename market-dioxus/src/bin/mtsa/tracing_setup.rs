//! Logging for the mtsa binary.
//!
//! Installs a `tracing` subscriber that honours `RUST_LOG`, keeps the HTTP
//! and webview stacks at `warn` unless asked otherwise, and drops lines
//! matching `[logging] suppressed_patterns`. Output is appended to the
//! configured log file, or goes to stderr.
//!
//! Must be initialized BEFORE Dioxus launch to prevent dioxus-logger from
//! setting its own subscriber.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use market_dioxus::config::LoggingConfig;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{self, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Crates that log every request or window event at `info`/`debug`.
const CHATTY_TARGETS: &[&str] = &["hyper", "hyper_util", "reqwest", "rustls", "tao", "wry"];

/// Filter directives for a configured level.
fn default_directives(level: &str) -> String {
    CHATTY_TARGETS
        .iter()
        .fold(level.to_string(), |directives, target| {
            format!("{directives},{target}=warn")
        })
}

/// Substrings whose lines are dropped from the output.
#[derive(Debug, Clone, Default)]
struct SuppressList(Vec<String>);

impl SuppressList {
    fn matches(&self, line: &str) -> bool {
        self.0
            .iter()
            .any(|pattern| !pattern.is_empty() && line.contains(pattern.as_str()))
    }
}

/// Formats with the default format, then skips suppressed lines.
struct SuppressingFormat {
    inner: fmt::format::Format,
    suppressed: SuppressList,
}

impl<S, N> FormatEvent<S, N> for SuppressingFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let mut line = String::new();
        self.inner.format_event(ctx, Writer::new(&mut line), event)?;
        if self.suppressed.matches(&line) {
            return Ok(());
        }
        write!(writer, "{line}")
    }
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Initialize the tracing subscriber from `LoggingConfig`.
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init(config: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&config.level)));
    let format = SuppressingFormat {
        inner: fmt::format::Format::default(),
        suppressed: SuppressList(config.suppressed_patterns.clone()),
    };

    let log_file = config.log_file.as_deref().and_then(|path| match open_log_file(path) {
        Ok(file) => Some((path, file)),
        Err(err) => {
            eprintln!("Cannot open log file {}: {err}", path.display());
            None
        }
    });

    match log_file {
        Some((path, file)) => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file))
                        .event_format(format),
                )
                .init();
            eprintln!("Logging to {}", path.display());
        }
        None => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(io::stderr).event_format(format))
                .init();
        }
    }
}
