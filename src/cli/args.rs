//! Command-line argument parsing.

use std::path::PathBuf;

/// Values given on the command line. They take precedence over the config
/// file and the environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    pub api_url: Option<String>,
    pub host: Option<String>,
    pub db_name: Option<String>,
    pub user: Option<String>,
    pub log_file: Option<PathBuf>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    Version,
    Help,
    /// Run the TUI application (default)
    RunTui(CliOverrides),
}

/// Parse command-line arguments.
///
/// The first item is the program name. Unknown flags are ignored. A value
/// flag followed by another `--` flag, or by nothing, is ignored too, so the
/// next flag is still parsed.
///
/// ```
/// use eavtui::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["eavtui".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut overrides = CliOverrides::default();
    let mut args = args.skip(1).peekable();

    while let Some(arg) = args.next() {
        let mut value = || args.next_if(|next| !next.starts_with("--"));
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--api-url" => overrides.api_url = value(),
            "--host" => overrides.host = value(),
            "--db" => overrides.db_name = value(),
            "--user" => overrides.user = value(),
            "--log-file" => overrides.log_file = value().map(PathBuf::from),
            _ => {}
        }
    }
    CliCommand::RunTui(overrides)
}

pub const USAGE: &str = "\
Usage: eavtui [OPTIONS]

Options:
  --api-url <URL>     EAV backend base URL (env: EAV_API_URL)
  --host <HOST>       Database host (env: EAV_DB_HOST)
  --db <NAME>         Database name (env: EAV_DB_NAME)
  --user <USER>       Database user (env: EAV_DB_USER)
  --log-file <PATH>   Log file path (env: EAVTUI_LOG_FILE)
  -V, --version       Print version
  -h, --help          Print this help

The database password is read from EAV_DB_PASSWORD or ~/.eavtui/config.json.";
