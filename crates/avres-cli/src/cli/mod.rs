//! CLI for the avres avatar asset resolver.

mod commands;

use anyhow::Result;
use avres_core::config::{self, ResolverConfig};
use clap::{Parser, Subcommand};

use commands::{run_list, run_manifest, run_probe, run_resolve};

/// Top-level CLI for the avres avatar asset resolver.
#[derive(Debug, Parser)]
#[command(name = "avres")]
#[command(about = "avres: avatar asset registry and CDN URL resolver", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve an avatar id to its asset URL.
    Resolve {
        /// Registry id, flattened CDN id, or CDN-relative path.
        id: String,
        /// Force CDN resolution regardless of config.
        #[arg(long, conflicts_with = "local")]
        cdn: bool,
        /// Force local-registry resolution regardless of config.
        #[arg(long)]
        local: bool,
    },

    /// List bundled presets, optionally filtered.
    List {
        /// Filter by gender code (M, F, or N).
        #[arg(long)]
        gender: Option<String>,
        /// Filter by ethnicity (case-insensitive).
        #[arg(long)]
        ethnicity: Option<String>,
        /// Filter by outfit (case-insensitive).
        #[arg(long)]
        outfit: Option<String>,
        /// Filter by tag (exact match).
        #[arg(long)]
        tag: Option<String>,
        /// Only presets bundled with the app.
        #[arg(long)]
        local_only: bool,
        /// Emit JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Fetch the CDN manifest and list its presets.
    Manifest {
        /// Emit JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Resolve an avatar id and HEAD the resulting URL.
    Probe {
        /// Avatar id to check.
        id: String,
        /// Force CDN resolution regardless of config.
        #[arg(long, conflicts_with = "local")]
        cdn: bool,
        /// Force local-registry resolution regardless of config.
        #[arg(long)]
        local: bool,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Resolve { id, cdn, local } => {
                apply_mode_override(&mut cfg, cdn, local);
                run_resolve(&cfg, &id)?;
            }
            CliCommand::List {
                gender,
                ethnicity,
                outfit,
                tag,
                local_only,
                json,
            } => run_list(gender.as_deref(), ethnicity, outfit, tag, local_only, json)?,
            CliCommand::Manifest { json } => run_manifest(&cfg, json).await?,
            CliCommand::Probe { id, cdn, local } => {
                apply_mode_override(&mut cfg, cdn, local);
                run_probe(&cfg, &id).await?;
            }
        }

        Ok(())
    }
}

fn apply_mode_override(cfg: &mut ResolverConfig, cdn: bool, local: bool) {
    if cdn {
        cfg.force_cdn = true;
    }
    if local {
        cfg.force_cdn = false;
    }
}

#[cfg(test)]
mod tests;
