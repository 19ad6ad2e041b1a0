//! Retrieve command
//!
//! Usage: snippets get <NAME>

use clap::Args;
use snippets_store::{Result, SnippetStore};

#[derive(Debug, Args)]
pub struct GetArgs {
    /// The name of the snippet
    pub name: String,
}

/// Print the snippet's content; a missing snippet is reported but is not a failure
pub fn execute(args: GetArgs, store: &SnippetStore) -> Result<()> {
    match store.retrieve(&args.name)? {
        Some(content) => println!("{}", content),
        None => eprintln!("No snippet named '{}'", args.name),
    }

    Ok(())
}
