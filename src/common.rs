//! Shared types: the crate error enum, the visualization outcome, and the
//! conversion of user supplied mismatch counts.
//!
//! ## Errors
//! Every failure is one of three kinds:
//! - [`GmaError::Load`]: the genome source could not be read or parsed.
//! - [`GmaError::InvalidInput`]: bad call arguments (empty motif, negative
//!   threshold).
//! - [`GmaError::Render`]: the plot could not be written.
//!
//! "No matches" is **not** an error. It is reported as
//! [`Visualization::NoOccurrences`] so callers can print a friendly message.
//!
use std::path::PathBuf;

/// Errors that can be returned by the operations in this crate.
#[derive(thiserror::Error, Debug)]
pub enum GmaError {
    /// The genome source is missing, unreadable or not valid FASTA.
    #[error("error loading genome from {source_name}: {reason}")]
    Load { source_name: String, reason: String },
    /// Malformed call arguments.
    #[error("invalid input to {operation}: {reason}")]
    InvalidInput { operation: &'static str, reason: String },
    /// The plot destination is unwritable or the renderer failed.
    #[error("error rendering plot to {}: {reason}", path.display())]
    Render { path: PathBuf, reason: String },
}

impl GmaError {
    pub(crate) fn invalid(operation: &'static str, reason: impl Into<String>) -> Self {
        GmaError::InvalidInput { operation, reason: reason.into() }
    }

    pub(crate) fn render(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        GmaError::Render { path: path.into(), reason: reason.to_string() }
    }
}

/// Outcome of a visualization request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Visualization {
    /// A plot was written to this path.
    Written(PathBuf),
    /// The motif has no stored positions; nothing was rendered.
    NoOccurrences,
}

impl Visualization {
    /// The artifact path, if a plot was written.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Visualization::Written(p) => Some(p),
            Visualization::NoOccurrences => None,
        }
    }
}

/// Convert a signed, user supplied mismatch count into a threshold.
///
/// Negative values are rejected with [`GmaError::InvalidInput`].
pub fn mismatch_threshold(n: i64) -> Result<usize, GmaError> {
    usize::try_from(n)
        .map_err(|_| GmaError::invalid("find", format!("mismatch threshold must be >= 0 (got {n})")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_accepts_zero_and_positive() {
        assert_eq!(mismatch_threshold(0).unwrap(), 0);
        assert_eq!(mismatch_threshold(3).unwrap(), 3);
    }

    #[test]
    fn threshold_rejects_negative() {
        let err = mismatch_threshold(-1).unwrap_err();
        assert!(matches!(err, GmaError::InvalidInput { .. }));
        assert!(err.to_string().contains("-1"));
    }

    #[test]
    fn visualization_path() {
        let v = Visualization::Written(PathBuf::from("x.svg"));
        assert_eq!(v.path(), Some(&PathBuf::from("x.svg")));
        assert_eq!(Visualization::NoOccurrences.path(), None);
    }
}
