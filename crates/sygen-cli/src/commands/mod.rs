//! One module per subcommand. Handlers take parsed args plus the loaded
//! config and return [`crate::error::CliResult`].

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod list;
