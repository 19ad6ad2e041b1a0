use thiserror::Error;

/// Result type alias using SnippetError
pub type Result<T> = std::result::Result<T, SnippetError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for
/// programmatic error handling, tests and CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,
    ConstraintViolation,

    // Integration/IO
    Io,
    Persistence,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification (`kind`) for programmatic handling plus the
/// operation and snippet name it happened in, for humans reading the CLI
/// output or the logs.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    name: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            name: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the snippet name the error relates to
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(name) = &self.name {
            write!(f, " (name: {})", name)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain errors raised before the backing store is touched
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SnippetError {
    /// Snippet name is empty or whitespace only
    #[error("Invalid snippet name: {reason}")]
    InvalidName { reason: String },
}

impl From<SnippetError> for ExError {
    fn from(err: SnippetError) -> Self {
        match err {
            SnippetError::InvalidName { reason } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("validate_name")
                .with_message(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(ExErrorKind::InvalidInput.code(), "ERR_INVALID_INPUT");
        assert_eq!(ExErrorKind::Persistence.code(), "ERR_PERSISTENCE");
        assert_eq!(
            ExErrorKind::ConstraintViolation.code(),
            "ERR_CONSTRAINT_VIOLATION"
        );
    }

    #[test]
    fn test_display_includes_context() {
        let err = ExError::new(ExErrorKind::Persistence)
            .with_op("store")
            .with_name("greeting")
            .with_message("disk I/O error");

        assert_eq!(
            err.to_string(),
            "[ERR_PERSISTENCE] in operation 'store': disk I/O error (name: greeting)"
        );
    }

    #[test]
    fn test_display_without_context() {
        let err = ExError::new(ExErrorKind::Io);
        assert_eq!(err.to_string(), "[ERR_IO]");
    }

    #[test]
    fn test_invalid_name_converts_to_invalid_input() {
        let err: ExError = SnippetError::InvalidName {
            reason: "name must not be empty".to_string(),
        }
        .into();

        assert_eq!(err.kind(), ExErrorKind::InvalidInput);
        assert_eq!(err.op(), Some("validate_name"));
        assert_eq!(err.message(), "name must not be empty");
    }
}
