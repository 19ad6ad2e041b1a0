//! Snippets CLI
//!
//! Store and retrieve named snippets of text.

use clap::{Parser, Subcommand, ValueEnum};
use snippets_core::logging_facility::{self, Profile};
use snippets_core_types::RequestId;
use snippets_store::SnippetStore;
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "snippets")]
#[command(version, about = "Store and retrieve snippets of text.", long_about = None)]
struct Cli {
    /// Path to the snippet database
    #[arg(long, global = true, env = "SNIPPETS_DB", default_value = ".snippets/store.db")]
    db: PathBuf,

    /// Log output format (written to stderr; verbosity via RUST_LOG)
    #[arg(
        long,
        global = true,
        env = "SNIPPETS_LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Pretty
    )]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    /// Human-readable lines
    Pretty,
    /// One JSON object per event
    Json,
}

impl LogFormat {
    fn profile(self) -> Profile {
        match self {
            LogFormat::Pretty => Profile::Development,
            LogFormat::Json => Profile::Production,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Store a snippet
    Put(commands::put::PutArgs),
    /// Retrieve a snippet
    Get(commands::get::GetArgs),
    /// List the names of all stored snippets
    Catalog,
    /// Find snippets whose content contains a string
    Search(commands::search::SearchArgs),
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Put(_) => "put",
            Commands::Get(_) => "get",
            Commands::Catalog => "catalog",
            Commands::Search(_) => "search",
        }
    }
}

fn main() {
    let cli = Cli::parse();

    logging_facility::init(cli.log_format.profile());

    let request_id = RequestId::new();
    let span = tracing::info_span!(
        "invocation",
        request_id = %request_id,
        command = cli.command.name()
    );
    let _guard = span.enter();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> snippets_store::Result<()> {
    tracing::debug!(db = %cli.db.display(), "opening snippet store");
    let mut store = SnippetStore::open(&cli.db)?;

    match cli.command {
        Commands::Put(args) => commands::put::execute(args, &mut store),
        Commands::Get(args) => commands::get::execute(args, &store),
        Commands::Catalog => commands::catalog::execute(&store),
        Commands::Search(args) => commands::search::execute(args, &store),
    }
}
