use thiserror::Error;

/// Top-level error type for the segclip kernel.
#[derive(Debug, Error)]
pub enum ClipError {
    #[error("degenerate clip boundary: {points} point(s), need at least 3")]
    DegenerateBoundary { points: usize },
}

/// Convenience type alias for results using [`ClipError`].
pub type Result<T> = std::result::Result<T, ClipError>;
