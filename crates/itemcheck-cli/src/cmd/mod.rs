//! Command module for the `itemcheck` CLI.
//!
//! Each submodule implements one subcommand. Its `run` function takes the
//! parsed arguments and returns `Ok(())` on success or a
//! [`crate::error::CliError`] on failure.
pub mod rules;
pub mod validate;
