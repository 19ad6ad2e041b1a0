use crate::errors::{Result, SnippetError};

/// Validate a snippet name typed by a user
///
/// A name must contain at least one non-whitespace character. The name is
/// otherwise stored exactly as given (no trimming or case folding).
///
/// # Errors
/// Returns `SnippetError::InvalidName` for empty or whitespace-only names.
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(SnippetError::InvalidName {
            reason: "name must not be empty".to_string(),
        });
    }

    Ok(())
}
