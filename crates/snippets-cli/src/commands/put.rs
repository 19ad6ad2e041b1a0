//! Store command
//!
//! Usage: snippets put <NAME> <SNIPPET>

use clap::Args;
use snippets_core::errors::ExError;
use snippets_core::rules::validate_name;
use snippets_store::{Result, SnippetStore};

#[derive(Debug, Args)]
pub struct PutArgs {
    /// The name of the snippet
    pub name: String,

    /// The snippet text
    pub snippet: String,
}

/// Store the snippet, creating it or replacing the content under an existing name
///
/// Blank names are refused at the command line. The store itself accepts
/// any name.
pub fn execute(args: PutArgs, store: &mut SnippetStore) -> Result<()> {
    validate_name(&args.name).map_err(|e| ExError::from(e).with_name(args.name.as_str()))?;

    let outcome = store.store(&args.name, &args.snippet)?;

    let verb = if outcome.created { "new" } else { "updated" };
    println!(
        "Stored {} ({}): {}",
        outcome.snippet.name, verb, outcome.snippet.content
    );

    Ok(())
}
