//! Command-line interface.
//!
//! Called at the top of `main`, before the terminal is touched:
//!
//! ```ignore
//! use eavtui::cli::{parse_args, run_cli_command, CliCommand};
//!
//! let command = parse_args(std::env::args());
//! if run_cli_command(&command) {
//!     return Ok(());
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, CliOverrides, USAGE};
pub use version::{version_line, VERSION};

/// Print the output of a non-TUI command.
///
/// Returns `true` when the command was handled and the process should exit,
/// `false` for [`CliCommand::RunTui`].
pub fn run_cli_command(command: &CliCommand) -> bool {
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            true
        }
        CliCommand::Help => {
            println!("{}\n\n{}", version_line(), USAGE);
            true
        }
        CliCommand::RunTui(_) => false,
    }
}
