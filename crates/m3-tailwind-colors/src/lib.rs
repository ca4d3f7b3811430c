//! # m3-tailwind-colors
//!
//! Command-line front end for [`m3_palette`]: `init` writes a
//! `m3-colors.config.json`, `generate` turns it (or flags) into a
//! Tailwind v4 stylesheet or NativeWind CSS plus a TypeScript colors
//! module.
//!
//! ```text
//! m3-tailwind-colors init --primary "#6750A4" --generate
//! m3-tailwind-colors generate --primary "#6750A4" --format oklch --dark-mode class
//! m3-tailwind-colors generate --target nativewind
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;

use std::io::Write;

pub use cli::{Cli, Command};
pub use config::{ColorsConfig, ConfigError, ConfigOverrides, Target};

/// Dispatches a parsed command line, reporting success to `out`.
pub fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    match &cli.command {
        Command::Init(args) => commands::init::handle(args, out),
        Command::Generate(args) => commands::generate::handle(args, out),
    }
}
