//! Command-line surface
//!
//! Parsing lives here rather than in `main.rs` so the commands can be driven
//! from tests with `Cli::try_parse_from`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::WrapErr;
use jiff::civil::Date;
use vault_core::model::{MetricsSnapshot, TransactionKind};
use vault_core::{MetricsConfig, evaluate};

use crate::data::{DataDirectory, LedgerData, load_ledger};
use crate::report::{render_months, render_snapshot};
use crate::util::io::atomic_write;

#[derive(Parser, Debug)]
#[command(name = "vault")]
#[command(about = "Income and expense evaluation metrics for Alpha Vault ledgers")]
pub struct Cli {
    /// Path to the data directory (default: ~/.alpha-vault/)
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute the metrics snapshot of a ledger
    Evaluate {
        /// Ledger file (.yaml, .yml or .json)
        ledger: PathBuf,

        /// Evaluate only incomes or only expenses (default: both)
        #[arg(short, long)]
        kind: Option<TransactionKind>,

        /// Reference date, YYYY-MM-DD (default: today)
        #[arg(long)]
        as_of: Option<Date>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List monthly totals of a ledger
    Months {
        ledger: PathBuf,

        #[arg(short, long, default_value = "income")]
        kind: TransactionKind,
    },
    /// Write a config.yaml with every default spelled out
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    pub fn data_directory(&self) -> DataDirectory {
        DataDirectory::new(
            self.data_dir
                .clone()
                .unwrap_or_else(DataDirectory::default_path),
        )
    }
}

fn today() -> Date {
    jiff::Zoned::now().date()
}

/// Evaluate one or both panels of a loaded ledger
pub fn evaluate_ledger(
    ledger: &LedgerData,
    kind: Option<TransactionKind>,
    as_of: Date,
    config: &MetricsConfig,
) -> Vec<MetricsSnapshot> {
    let kinds = match kind {
        Some(kind) => vec![kind],
        None => vec![TransactionKind::Income, TransactionKind::Expense],
    };
    kinds
        .into_iter()
        .map(|kind| {
            evaluate(
                kind,
                ledger.records(),
                ledger.period_totals_for(kind),
                as_of,
                config,
            )
        })
        .collect()
}

/// Render snapshots in the requested format
pub fn render(
    snapshots: &[MetricsSnapshot],
    format: OutputFormat,
    config: &MetricsConfig,
) -> color_eyre::Result<String> {
    match format {
        OutputFormat::Text => Ok(snapshots
            .iter()
            .map(|s| render_snapshot(s, config))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            let json = match snapshots {
                [single] => serde_json::to_string_pretty(single)?,
                _ => serde_json::to_string_pretty(snapshots)?,
            };
            Ok(json + "\n")
        }
    }
}

/// Execute a parsed command, returning what should be printed to stdout
pub fn run(cli: &Cli) -> color_eyre::Result<String> {
    let data_dir = cli.data_directory();

    match &cli.command {
        Command::Evaluate {
            ledger,
            kind,
            as_of,
            format,
            output,
        } => {
            let config = data_dir.load_config()?;
            let ledger_data = load_ledger(ledger)?;
            let as_of = as_of.unwrap_or_else(today);

            let snapshots = evaluate_ledger(&ledger_data, *kind, as_of, &config);
            let rendered = render(&snapshots, *format, &config)?;

            match output {
                Some(path) => {
                    atomic_write(path, &rendered)
                        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
                    tracing::info!(path = %path.display(), "Report written");
                    Ok(String::new())
                }
                None => Ok(rendered),
            }
        }
        Command::Months { ledger, kind } => {
            let config = data_dir.load_config()?;
            let ledger_data = load_ledger(ledger)?;
            let snapshot = evaluate(
                *kind,
                ledger_data.records(),
                ledger_data.period_totals_for(*kind),
                today(),
                &config,
            );
            Ok(render_months(&snapshot.monthly_series, &config))
        }
        Command::InitConfig { force } => {
            let path = data_dir.config_path();
            if path.exists() && !force {
                color_eyre::eyre::bail!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                );
            }
            data_dir.save_config(&MetricsConfig::default())?;
            tracing::info!(path = %path.display(), "Wrote default config");
            Ok(format!("Wrote {}\n", path.display()))
        }
    }
}
