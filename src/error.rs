use thiserror::Error;

/// Failures a wake attempt can produce.
///
/// Address errors are detected before any socket is touched; `Transmission`
/// carries the OS-level cause of a failed socket operation.
#[derive(Debug, Error)]
pub enum WolError {
    #[error("hardware address has {0} hex digits, expected 12")]
    InvalidLength(usize),

    #[error("invalid character '{0}' in hardware address")]
    InvalidFormat(char),

    #[error("transmission failed: {0}")]
    Transmission(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WolError>;
