pub mod commands;
pub mod dto;

use std::io::Write;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use genescope_catalog::config::{DEFAULT_CHUNK_SIZE, DEFAULT_PAGE_SIZE, DEFAULT_RECORDS_PATH};
use genescope_catalog::CatalogConfig;
use genescope_core::primer::DEFAULT_PRIMER_LENGTH;
use tracing_subscriber::EnvFilter;

use commands::links::{PrintOpener, ServiceArg};
use commands::sequence::SeqCommand;
use commands::{catalog, links, sequence};

/// Explore the TE/Alzheimer's gene catalogue and run sequence tools
#[derive(Parser, Debug)]
#[command(name = "genescope")]
#[command(version)]
#[command(about = "Gene catalogue search and sequence toolkit", long_about = None)]
pub struct Cli {
    /// Record file loaded at startup
    #[arg(long, global = true, env = "GENESCOPE_RECORDS", default_value = DEFAULT_RECORDS_PATH)]
    pub records: PathBuf,

    /// Results per page
    #[arg(long, global = true, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: NonZeroUsize,

    /// Primer length for `seq primers`
    #[arg(long, global = true, default_value_t = DEFAULT_PRIMER_LENGTH)]
    pub primer_length: usize,

    /// Symbols per group when printing sequences
    #[arg(long, global = true, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: NonZeroUsize,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// More log output (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search every field of every record (case-insensitive substring)
    Search {
        /// Search term; omit to show the search prompt
        query: Option<String>,
        /// Page to show (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Export all records matching a query as CSV
    Export {
        query: String,
        /// Directory the dated CSV file is written to
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },

    /// Show every field of one record by its catalogue index
    Show { index: usize },

    /// Sequence tools
    Seq {
        #[command(subcommand)]
        tool: SeqCommand,
    },

    /// Build the request URL for an external analysis service
    Link {
        #[arg(value_enum)]
        service: ServiceArg,
        text: String,
    },
}

impl Cli {
    pub fn config(&self) -> CatalogConfig {
        CatalogConfig {
            records_path: self.records.clone(),
            page_size: self.page_size,
            primer_length: self.primer_length,
            chunk_size: self.chunk_size,
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // Ignore the error if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Execute one parsed command, writing user-facing output to `out`.
pub fn execute(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let config = cli.config();
    tracing::debug!(?config, "starting");

    match &cli.command {
        Commands::Search { query, page } => {
            let store = catalog::load_store(&config)?;
            let query = query.as_deref().unwrap_or_default();
            catalog::search(&store, &config, query, *page, cli.json, out)
        }
        Commands::Export { query, out: dir } => {
            let store = catalog::load_store(&config)?;
            let path = catalog::export(&store, &config, query, dir)?;
            writeln!(out, "Exported results to {}", path.display())?;
            Ok(())
        }
        Commands::Show { index } => {
            let store = catalog::load_store(&config)?;
            catalog::show(&store, *index, cli.json, out)
        }
        Commands::Seq { tool } => sequence::run(tool, &config, cli.json, out),
        Commands::Link { service, text } => {
            let mut opener = PrintOpener::new(&mut *out);
            links::open_service(&mut opener, (*service).into(), text)
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&cli, &mut out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["genescope", "search", "apoe"]);
        let config = cli.config();
        assert_eq!(config.records_path, PathBuf::from(DEFAULT_RECORDS_PATH));
        assert_eq!(config.page_size.get(), 10);
        assert_eq!(config.primer_length, 20);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["genescope", "search", "tau", "--page-size", "5", "--json"]);
        assert_eq!(cli.page_size.get(), 5);
        assert!(cli.json);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        assert!(Cli::try_parse_from(["genescope", "search", "x", "--page-size", "0"]).is_err());
    }
}
