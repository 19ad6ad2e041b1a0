//! Search command
//!
//! Usage: snippets search <QUERY>

use clap::Args;
use snippets_store::{Result, SnippetStore};

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Text to look for (literal, case-sensitive)
    pub query: String,
}

/// Print `name: content` for every snippet containing the query
pub fn execute(args: SearchArgs, store: &SnippetStore) -> Result<()> {
    let hits = store.search(&args.query)?;

    if hits.is_empty() {
        eprintln!("No snippets match '{}'", args.query);
    }
    for snippet in hits {
        println!("{}: {}", snippet.name, snippet.content);
    }

    Ok(())
}
