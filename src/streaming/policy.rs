use tracing::warn;

use super::error::SourceError;

/// Policy for handling item source errors during processing
pub trait ErrorPolicy: Send + Sync {
    /// Return true to keep pulling, false to fail the run
    fn handle_source_error(&self, error: &SourceError) -> bool;
}

/// Fail the run on the first source error
#[derive(Debug, Clone, Copy, Default)]
pub struct AbortOnError;

impl ErrorPolicy for AbortOnError {
    fn handle_source_error(&self, error: &SourceError) -> bool {
        warn!(%error, "Source error (aborting)");
        false
    }
}

/// Skip failed pulls and keep going
///
/// A skipped pull presents no item to the basket.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkipErrors;

impl ErrorPolicy for SkipErrors {
    fn handle_source_error(&self, error: &SourceError) -> bool {
        warn!(%error, "Source error (skipping)");
        true
    }
}
