//! # Tegra Kernel Interface Seam
//!
//! The buffer-object protocol of the Tegra kernel-mode driver, as the
//! backend consumes it.
//!
//! The protocol itself is owned by the kernel-interface library; this
//! trait is the seam where production binds that library and tests bind
//! an instrumented mock. All calls are synchronous blocking ioctls with
//! no cancellation semantics.

use core::fmt;
use core::ptr::NonNull;

use basalt_core::GlobalName;

// =============================================================================
// ERRNO
// =============================================================================

/// Raw kernel error code
#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct Errno(i32);

impl Errno {
    /// Wrap a raw errno value
    #[inline]
    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    /// Get the raw errno value
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }
}

impl fmt::Debug for Errno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Errno({})", self.0)
    }
}

impl fmt::Display for Errno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "errno {}", self.0)
    }
}

/// Result of a kernel-interface call
pub type KmdResult<T> = core::result::Result<T, Errno>;

// =============================================================================
// KERNEL INTERFACE TRAIT
// =============================================================================

/// The Tegra kernel buffer-management transport
///
/// One instance wraps one opened device context; dropping it closes the
/// context. Buffer objects ([`TegraKmd::Bo`]) are opaque kernel references:
/// they stay valid until passed to [`bo_unref`], and the driver above
/// this seam guarantees each is unreferenced exactly once.
///
/// Concurrent use of different buffer objects under one context is an
/// invariant of the kernel-interface library, not re-verified here.
///
/// [`bo_unref`]: TegraKmd::bo_unref
pub trait TegraKmd: Sized {
    /// Opaque kernel buffer-object handle
    type Bo;

    /// Wrap an already-open device file descriptor into a kernel context
    ///
    /// Fails if a different driver is bound to the device node.
    fn wrap(fd: i32) -> KmdResult<Self>;

    /// Allocate a buffer object of `size` bytes
    fn bo_new(&self, flags: u32, size: u64) -> KmdResult<Self::Bo>;

    /// Resolve a buffer object from a process-global name
    fn bo_from_name(&self, name: GlobalName) -> KmdResult<Self::Bo>;

    /// Export a process-global name for a buffer object
    fn bo_name(&self, bo: &Self::Bo) -> KmdResult<GlobalName>;

    /// Resolve the kernel-level handle used to attach the object as a
    /// display framebuffer
    fn bo_handle(&self, bo: &Self::Bo) -> KmdResult<u32>;

    /// Map the object's full backing memory for CPU access
    fn bo_map(&self, bo: &Self::Bo) -> KmdResult<NonNull<u8>>;

    /// Release the CPU mapping
    ///
    /// Calling this without a prior successful [`bo_map`] is undefined.
    ///
    /// [`bo_map`]: TegraKmd::bo_map
    fn bo_unmap(&self, bo: &Self::Bo);

    /// Drop the kernel reference to a buffer object
    ///
    /// Fire-and-forget; any underlying error is swallowed by the
    /// kernel-interface library.
    fn bo_unref(&self, bo: Self::Bo);
}
