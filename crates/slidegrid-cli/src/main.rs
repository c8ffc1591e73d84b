//! Slidegrid layout inspector: entry point.
//!
//! A small command-line front end over `slidegrid-core`.  It resolves layout
//! descriptions into regions, lists the preset catalogue, answers hit tests,
//! and batch-checks files of saved descriptions.
//!
//! # Usage
//!
//! ```text
//! slidegrid [OPTIONS] <COMMAND>
//!
//! Commands:
//!   parse        Resolve a description and print its regions
//!   presets      List built-in and configured presets
//!   hit          Print the area id under a normalized point
//!   check        Strict-parse every line of a file
//!   init-config  Write a default config file
//!
//! Options:
//!   --config <PATH>          Config file [env: SLIDEGRID_CONFIG]
//!   --format <table|json>    Output format [env: SLIDEGRID_FORMAT]
//! ```
//!
//! Log output goes to stderr.  `RUST_LOG` overrides the configured
//! `general.log_level`.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use slidegrid_cli::application::inspect::{
    check_descriptions, render_cells, render_check_report, render_presets, summarize_presets,
    OutputFormat,
};
use slidegrid_cli::infrastructure::storage::config::{
    config_file_path, load_config, save_config, AppConfig,
};
use slidegrid_core::{hit_test, parse_layout_description, try_parse_layout_description};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Slide layout inspector.
#[derive(Debug, Parser)]
#[command(
    name = "slidegrid",
    about = "Parse and inspect slide layout descriptions",
    version
)]
struct Cli {
    /// Path to the config file.  Defaults to the platform config directory.
    #[arg(long, global = true, env = "SLIDEGRID_CONFIG")]
    config: Option<PathBuf>,

    /// Output format.  Overrides `output.format` from the config file.
    #[arg(long, global = true, value_enum, env = "SLIDEGRID_FORMAT")]
    format: Option<FormatArg>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve a layout description and print its regions.
    Parse {
        /// Layout description, e.g. `3S|20:60:20/2R|50:50/1R|100/2R|50:50`.
        description: String,

        /// Fail on malformed input instead of printing the full-bleed fallback.
        #[arg(long)]
        strict: bool,
    },

    /// List the built-in presets followed by presets from the config file.
    Presets,

    /// Print the area id of the region containing a normalized point.
    Hit {
        description: String,
        /// Horizontal position in `[0, 1)`.
        #[arg(allow_negative_numbers = true)]
        x: f64,
        /// Vertical position in `[0, 1)`.
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },

    /// Strict-parse every non-blank, non-comment line of a file.
    Check {
        /// File with one description per line.
        file: PathBuf,
    },

    /// Write a default config file.
    InitConfig {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Table,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // `init-config` creates the file, so it must not require one to exist.
    let config = match cli.command {
        Command::InitConfig { .. } => AppConfig::default(),
        _ => load_config(cli.config.as_deref()).context("failed to load configuration")?,
    };

    // ── Logging setup ─────────────────────────────────────────────────────────
    //
    // `RUST_LOG` wins when set; otherwise the configured level applies.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let format = cli.format.map(OutputFormat::from).unwrap_or(config.output.format);
    debug!("output format {:?}, precision {}", format, config.output.precision);

    match cli.command {
        Command::Parse {
            description,
            strict,
        } => {
            let cells = if strict {
                try_parse_layout_description(&description)
                    .with_context(|| format!("malformed layout description {description:?}"))?
            } else {
                parse_layout_description(&description)
            };
            info!("resolved {} regions", cells.len());
            print!("{}", render_cells(&cells, format, config.output.precision)?);
        }

        Command::Presets => {
            let summaries = summarize_presets(&config.catalogue());
            print!("{}", render_presets(&summaries, format)?);
        }

        Command::Hit { description, x, y } => {
            let cells = parse_layout_description(&description);
            let area_id = hit_test(&cells, x, y);
            match format {
                OutputFormat::Json => println!("{}", serde_json::json!({ "area_id": area_id })),
                OutputFormat::Table => match area_id {
                    Some(id) => println!("{id}"),
                    None => println!("none"),
                },
            }
        }

        Command::Check { file } => {
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let report = check_descriptions(&text);
            print!("{}", render_check_report(&report, format)?);
            if !report.is_clean() {
                bail!(
                    "{} of {} descriptions in {} are malformed",
                    report.failures.len(),
                    report.checked,
                    file.display()
                );
            }
        }

        Command::InitConfig { force } => {
            let path = match cli.config {
                Some(path) => path,
                None => config_file_path()?,
            };
            save_config(&AppConfig::default(), &path, force)
                .with_context(|| format!("failed to write config to {}", path.display()))?;
            info!("wrote default config to {}", path.display());
            println!("{}", path.display());
        }
    }

    Ok(())
}
