use std::fmt;

/// Non-fatal issues found while computing tags.
/// These never stop processing; callers decide how to report them.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// Repository tag that cannot be parsed as a version
    UnparsableTag { tag: String, reason: String },
    /// CI event payload that could not be read; the base repository is used instead
    UnreadableEvent { path: String, reason: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnparsableTag { tag, reason } => {
                write!(f, "Failed to parse repository tag '{}': {}", tag, reason)
            }
            Diagnostic::UnreadableEvent { path, reason } => {
                write!(
                    f,
                    "Failed to parse pull request event '{}', using base repository: {}",
                    path, reason
                )
            }
        }
    }
}

/// Collector passed explicitly through the pure parts of the pipeline
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    /// Move every entry from `other` into this collector
    pub fn extend(&mut self, other: Diagnostics) {
        self.entries.extend(other.entries);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Emit every entry as a `tracing` warning
    pub fn log(&self) {
        for diagnostic in &self.entries {
            tracing::warn!("{}", diagnostic);
        }
    }
}
