//! # BASALT Error Handling
//!
//! Unified error type for the buffer allocation backends.
//!
//! Error handling follows the driver-stack principles:
//! - Errors are typed and categorized per lifecycle operation
//! - No panics in production code paths
//! - Errors carry the context needed for debugging
//! - Errors are `no_std` compatible

use core::fmt;

use crate::descriptor::GlobalName;
use crate::format::PixelFormat;

// =============================================================================
// RESULT TYPE
// =============================================================================

/// BASALT Result type alias
pub type Result<T> = core::result::Result<T, Error>;

// =============================================================================
// ERROR ENUM
// =============================================================================

/// BASALT unified error type
///
/// One variant per failure class of the backend lifecycle. Release-side
/// operations (free, unmap) have no failure channel by contract and do
/// not appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Wrapping the device file descriptor failed (wrong driver bound to
    /// the device node, or the kernel interface rejected the descriptor)
    Initialization,
    /// The format table has no byte size for the requested pixel format
    UnsupportedFormat(PixelFormat),
    /// The kernel rejected the global name during a cross-process import
    Import(GlobalName),
    /// The kernel denied the buffer-object allocation
    Allocation,
    /// Exporting a global name for a freshly allocated buffer failed
    Export,
    /// The kernel mapping call failed; carries the kernel error code
    Map(i32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initialization => write!(f, "failed to wrap device descriptor"),
            Self::UnsupportedFormat(format) => write!(f, "unsupported pixel format {format}"),
            Self::Import(name) => write!(f, "failed to import buffer name {name}"),
            Self::Allocation => write!(f, "kernel buffer allocation failed"),
            Self::Export => write!(f, "failed to export buffer name"),
            Self::Map(code) => write!(f, "kernel mapping failed (errno {code})"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
