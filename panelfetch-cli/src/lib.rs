// panelfetch-cli/src/lib.rs
//
// Library portion of the panelfetch CLI application.
// Contains argument definitions, rendering and command logic.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod progress;
pub mod terminal;

// Re-export items needed by the binary or integration tests
pub use cli::{BannerArgs, Cli, Commands, ShellArgs, StartArgs};
pub use commands::banner::run_banner;
pub use commands::shell::run_shell;
pub use commands::start::run_start;
pub use error::{CliErrorContext, CliResult};
