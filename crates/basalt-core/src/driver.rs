//! # Backend Driver Trait
//!
//! The operation table every hardware backend implements.
//!
//! This is the compile-time rendition of the dispatcher's function-pointer
//! table: a backend is chosen once at device-open time by probing the
//! kernel driver name, and every later call dispatches statically.
//!
//! ## Lifecycle
//!
//! ```text
//! BackendKind::probe(name)
//!        │
//!        └── BackendDriver::open(fd) ──► driver
//!                │
//!                ├── negotiate_kms_caps(&mut caps)     once, at startup
//!                │
//!                ├── alloc(&mut desc) ──► Buffer
//!                │      ├── map / unmap                per CPU access
//!                │      └── free(Buffer)               exactly once
//!                │
//!                └── drop(driver)                      closes the device
//! ```
//!
//! Calls on the same driver or buffer are serialized by the dispatcher;
//! backends perform no internal locking.

use core::ptr::NonNull;

use crate::descriptor::BufferDescriptor;
use crate::error::Result;
use crate::kms::KmsCaps;

// =============================================================================
// BACKEND SELECTION
// =============================================================================

/// Known hardware backend families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum BackendKind {
    /// NVIDIA Tegra
    Tegra,
}

impl BackendKind {
    /// Select a backend by the kernel driver name reported for the opened
    /// device node
    ///
    /// Selection happens once at startup; there is no re-probing.
    pub fn probe(driver_name: &str) -> Option<Self> {
        match driver_name {
            "tegra" => Some(Self::Tegra),
            _ => None,
        }
    }
}

// =============================================================================
// MAP REGION
// =============================================================================

/// Sub-region of a buffer requested for CPU access
///
/// Carried for protocol symmetry across backends; a backend is free to
/// map the entire buffer instead of the region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapRegion {
    /// Left edge in pixels
    pub x: u32,
    /// Top edge in pixels
    pub y: u32,
    /// Region width in pixels
    pub width: u32,
    /// Region height in pixels
    pub height: u32,
}

impl MapRegion {
    /// Describe a region covering `width` x `height` from the origin
    pub const fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }
}

// =============================================================================
// BACKEND DRIVER TRAIT
// =============================================================================

/// One hardware family's buffer allocation backend
///
/// Implementations adapt the [`BufferDescriptor`] contract onto their GPU
/// family's kernel memory-management interface. Dropping the driver
/// releases the kernel device context.
pub trait BackendDriver: Sized {
    /// Backend buffer object, valid from a successful [`alloc`] until
    /// [`free`]
    ///
    /// [`alloc`]: BackendDriver::alloc
    /// [`free`]: BackendDriver::free
    type Buffer;

    /// Open the backend over an already-open device file descriptor
    ///
    /// Fails with [`Error::Initialization`] if the kernel interface cannot
    /// wrap the descriptor; nothing is retained on failure.
    ///
    /// [`Error::Initialization`]: crate::Error::Initialization
    fn open(fd: i32) -> Result<Self>;

    /// Fill in the display capabilities for this hardware family
    ///
    /// Pure configuration mutation, no I/O: the same input produces the
    /// same output regardless of call ordering.
    fn negotiate_kms_caps(&self, caps: &mut KmsCaps);

    /// Allocate a fresh buffer, or import one if the descriptor carries a
    /// nonzero global name
    ///
    /// On fresh allocation the computed stride and exported name are
    /// written back into the descriptor. Every failure path releases all
    /// partially constructed state; no partial buffer escapes.
    fn alloc(&self, desc: &mut BufferDescriptor) -> Result<Self::Buffer>;

    /// Release a buffer and its kernel reference
    ///
    /// Fire-and-forget: there is no failure channel, and the release
    /// happens exactly once per buffer.
    fn free(&self, buffer: Self::Buffer);

    /// Map the buffer for CPU access
    ///
    /// On success the returned address is always valid; on failure the
    /// error carries the actual kernel code.
    fn map(
        &self,
        buffer: &mut Self::Buffer,
        region: MapRegion,
        write: bool,
    ) -> Result<NonNull<u8>>;

    /// Release the CPU mapping established by [`map`]
    ///
    /// Calling this without a prior successful map is a caller contract
    /// violation; the behavior is delegated to the kernel interface.
    ///
    /// [`map`]: BackendDriver::map
    fn unmap(&self, buffer: &mut Self::Buffer);
}
