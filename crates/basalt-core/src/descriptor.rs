//! # Buffer Descriptor
//!
//! The record the dispatcher hands to a backend for every buffer.
//!
//! The descriptor carries the requested geometry, format, and usage in;
//! the backend writes the computed stride and the exported global name
//! back out before the buffer is consumed downstream.

use core::fmt;

use crate::format::PixelFormat;

// =============================================================================
// GLOBAL NAME
// =============================================================================

/// Process-independent buffer identifier
///
/// A nonzero name lets another process import the underlying kernel buffer
/// object. Zero means "no name": on input it requests a fresh allocation,
/// on output it means the buffer was never exported.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct GlobalName(u32);

static_assertions::assert_eq_size!(GlobalName, u32);

impl GlobalName {
    /// The absent name
    pub const NONE: Self = Self(0);

    /// Wrap a raw kernel-exported name
    #[inline]
    pub const fn new(name: u32) -> Self {
        Self(name)
    }

    /// Get the raw name value
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check whether a name is present
    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for GlobalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GlobalName({})", self.0)
    }
}

impl fmt::Display for GlobalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// USAGE FLAGS
// =============================================================================

bitflags::bitflags! {
    /// Requested buffer usage
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct UsageFlags: u32 {
        /// CPU reads the buffer
        const SW_READ = 1 << 0;
        /// CPU writes the buffer
        const SW_WRITE = 1 << 1;
        /// GPU samples from the buffer
        const HW_TEXTURE = 1 << 8;
        /// GPU renders into the buffer
        const HW_RENDER = 1 << 9;
        /// Buffer is a display framebuffer target
        const HW_FB = 1 << 12;
    }
}

// =============================================================================
// BUFFER DESCRIPTOR
// =============================================================================

/// Generic buffer-descriptor record
///
/// Owned by the dispatcher layer; backends read `width`, `height`,
/// `format`, `usage`, and `name`, and write `stride` and `name`.
///
/// Invariant: `stride` is valid only after a successful fresh allocation —
/// it must be computed before the dimensions are consumed downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferDescriptor {
    /// Requested width in pixels
    pub width: u32,
    /// Requested height in pixels
    pub height: u32,
    /// Requested pixel format
    pub format: PixelFormat,
    /// Requested usage
    pub usage: UsageFlags,
    /// Row stride in bytes, written by the backend on fresh allocation
    pub stride: u32,
    /// Global name: nonzero on input requests a cross-process import;
    /// written by the backend after a fresh allocation is exported
    pub name: GlobalName,
}

impl BufferDescriptor {
    /// Describe a fresh allocation request
    pub const fn new(width: u32, height: u32, format: PixelFormat, usage: UsageFlags) -> Self {
        Self {
            width,
            height,
            format,
            usage,
            stride: 0,
            name: GlobalName::NONE,
        }
    }

    /// Describe a cross-process import request
    pub const fn for_import(name: GlobalName, format: PixelFormat, usage: UsageFlags) -> Self {
        Self {
            width: 0,
            height: 0,
            format,
            usage,
            stride: 0,
            name,
        }
    }

    /// Check whether the descriptor requests an import rather than a
    /// fresh allocation
    #[inline]
    pub const fn is_import(&self) -> bool {
        !self.name.is_none()
    }
}
