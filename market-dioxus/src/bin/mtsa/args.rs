//! Command-line argument parsing.
//!
//! Parsing happens before the config (and with it the log destination) is
//! known, so problems are collected in [`CliOverrides::warnings`] and logged
//! by `main` once tracing is up.

use std::path::PathBuf;

/// Overrides collected from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// Alternative config file instead of `<config_dir>/mtsa/mtsa.toml`.
    pub config: Option<PathBuf>,
    /// Marketplace API base URL.
    pub api_url: Option<String>,
    /// Signed-in user id.
    pub user_id: Option<String>,
    pub warnings: Vec<String>,
}

/// Parse the process arguments.
pub fn parse_args() -> CliOverrides {
    parse_from(std::env::args().skip(1))
}

/// Parse `--config <path>`, `--api <url>` and `--user <id>`.
///
/// Unknown arguments and flags missing their value are skipped.
fn parse_from(args: impl IntoIterator<Item = String>) -> CliOverrides {
    let mut overrides = CliOverrides::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let has_value = match arg.as_str() {
            "--config" => {
                overrides.config = args.next().map(PathBuf::from);
                overrides.config.is_some()
            }
            "--api" => {
                overrides.api_url = args.next();
                overrides.api_url.is_some()
            }
            "--user" => {
                overrides.user_id = args.next();
                overrides.user_id.is_some()
            }
            other => {
                overrides
                    .warnings
                    .push(format!("Ignoring unknown argument: {other}"));
                true
            }
        };
        if !has_value {
            overrides.warnings.push(format!("Missing value for {arg}"));
        }
    }

    overrides
}
