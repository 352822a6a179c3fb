use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the simulation core.
///
/// The core itself is total over well-formed state; the only recognized
/// failure is a malformed surface at construction time.
#[derive(Debug, Error)]
pub enum Error {
    /// Surface dimensions were zero, negative, or non-finite.
    #[error("invalid surface bounds: {0}")]
    InvalidSurfaceBounds(String),
}
