//! Catalog command
//!
//! Usage: snippets catalog

use snippets_store::{Result, SnippetStore};

/// Print every stored name, one per line
pub fn execute(store: &SnippetStore) -> Result<()> {
    let names = store.list_names()?;

    if names.is_empty() {
        eprintln!("No snippets stored");
    }
    for name in names {
        println!("{}", name);
    }

    Ok(())
}
