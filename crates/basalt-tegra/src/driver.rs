//! # Tegra Backend Driver
//!
//! The adapter between the generic buffer-descriptor contract and the
//! Tegra kernel memory-management interface.
//!
//! One [`TegraDriver`] owns one wrapped device context. Allocation either
//! imports a buffer object by its process-global name or allocates a
//! fresh one sized from the shared format table, aligns the stride to the
//! hardware's 64-byte row boundary, and exports a global name so other
//! processes can import the buffer later.
//!
//! No internal locking: the dispatcher serializes calls on a driver and
//! on each buffer. All kernel calls are short synchronous ioctls.

use core::fmt;
use core::ptr::NonNull;

use basalt_core::geometry::{align, align_geometry};
use basalt_core::{
    BackendDriver, BufferDescriptor, Error, KmsCaps, MapRegion, PixelFormat, Result, SwapMode,
    UsageFlags,
};

use crate::kmd::TegraKmd;

/// Row stride alignment of the Tegra scanout and texture units, in bytes
const STRIDE_ALIGN: u32 = 64;

// =============================================================================
// BUFFER OBJECT
// =============================================================================

/// One allocated or imported Tegra buffer
///
/// Owns the kernel buffer-object reference from a successful
/// [`TegraDriver::alloc`] until [`TegraDriver::free`]; map and unmap are
/// only defined inside that window. Dropping the buffer without `free`
/// leaks the kernel reference — release always goes through the driver.
pub struct TegraBuffer<K: TegraKmd> {
    bo: K::Bo,
    fb_handle: Option<u32>,
    desc: BufferDescriptor,
}

impl<K: TegraKmd> TegraBuffer<K> {
    /// The descriptor as updated by allocation (stride and name filled in
    /// on the fresh-allocation path)
    #[inline]
    pub fn descriptor(&self) -> &BufferDescriptor {
        &self.desc
    }

    /// Kernel-level display handle, resolved when the buffer was
    /// requested as a framebuffer target
    #[inline]
    pub fn fb_handle(&self) -> Option<u32> {
        self.fb_handle
    }
}

impl<K: TegraKmd> fmt::Debug for TegraBuffer<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TegraBuffer")
            .field("desc", &self.desc)
            .field("fb_handle", &self.fb_handle)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// DRIVER
// =============================================================================

/// Tegra buffer allocation backend
///
/// Owns the wrapped kernel device context plus the raw descriptor it was
/// opened over. Dropping the driver closes the context; the drop happens
/// exactly once by ownership.
///
/// Not synchronized internally: share across threads only with external
/// serialization, per the dispatcher contract.
pub struct TegraDriver<K: TegraKmd> {
    kmd: K,
    fd: i32,
}

impl<K: TegraKmd> TegraDriver<K> {
    /// Bind an already-wrapped kernel context
    pub fn from_kmd(kmd: K, fd: i32) -> Self {
        Self { kmd, fd }
    }

    /// The device file descriptor this backend was opened over
    #[inline]
    pub fn fd(&self) -> i32 {
        self.fd
    }

    /// The wrapped kernel-interface context
    #[inline]
    pub fn kmd(&self) -> &K {
        &self.kmd
    }

    fn alloc_fresh(&self, desc: &mut BufferDescriptor) -> Result<K::Bo> {
        let Some(bpp) = desc.format.bytes_per_pixel() else {
            log::error!("unrecognized format {:?}", desc.format);
            return Err(Error::UnsupportedFormat(desc.format));
        };

        let mut width = desc.width;
        let mut height = desc.height;
        align_geometry(desc.format, &mut width, &mut height);

        let stride = align(width * bpp, STRIDE_ALIGN);
        let size = u64::from(stride) * u64::from(height);

        let bo = self.kmd.bo_new(0, size).map_err(|e| {
            log::error!(
                "failed to allocate {}x{}x{} bo: {}",
                desc.width,
                desc.height,
                bpp,
                e
            );
            Error::Allocation
        })?;

        match self.kmd.bo_name(&bo) {
            Ok(name) => desc.name = name,
            Err(e) => {
                log::error!("failed to flink tegra bo: {e}");
                self.kmd.bo_unref(bo);
                return Err(Error::Export);
            }
        }

        desc.stride = stride;
        Ok(bo)
    }
}

impl<K: TegraKmd> BackendDriver for TegraDriver<K> {
    type Buffer = TegraBuffer<K>;

    fn open(fd: i32) -> Result<Self> {
        let kmd = K::wrap(fd).map_err(|e| {
            log::error!("failed to wrap existing tegra device: {e}");
            Error::Initialization
        })?;

        Ok(Self { kmd, fd })
    }

    fn negotiate_kms_caps(&self, caps: &mut KmsCaps) {
        // Scanout on this family is limited to 32-bit BGRA and 16-bit RGB.
        if caps.fb_format != PixelFormat::BGRA_8888 && caps.fb_format != PixelFormat::RGB_565 {
            caps.fb_format = PixelFormat::BGRA_8888;
        }

        caps.mode_quirk_vmwgfx = false;
        caps.swap_mode = SwapMode::Flip;
        caps.mode_sync_flip = true;
        caps.swap_interval = 1;
        caps.vblank_secondary = false;
    }

    fn alloc(&self, desc: &mut BufferDescriptor) -> Result<Self::Buffer> {
        // Import and fresh allocation are mutually exclusive: a nonzero
        // name resolves an existing kernel object and never consults the
        // format table.
        let bo = if desc.is_import() {
            self.kmd.bo_from_name(desc.name).map_err(|e| {
                log::error!("failed to create bo from name {}: {}", desc.name, e);
                Error::Import(desc.name)
            })?
        } else {
            self.alloc_fresh(desc)?
        };

        // Framebuffer targets additionally need the kernel display handle.
        // Resolution stays best-effort: allocation already succeeded, and
        // scanout setup will report the missing handle on its own.
        let fb_handle = if desc.usage.contains(UsageFlags::HW_FB) {
            match self.kmd.bo_handle(&bo) {
                Ok(handle) => Some(handle),
                Err(e) => {
                    log::warn!("failed to resolve fb handle for {}: {}", desc.name, e);
                    None
                }
            }
        } else {
            None
        };

        Ok(TegraBuffer {
            bo,
            fb_handle,
            desc: desc.clone(),
        })
    }

    fn free(&self, buffer: Self::Buffer) {
        let TegraBuffer { bo, .. } = buffer;
        self.kmd.bo_unref(bo);
    }

    fn map(
        &self,
        buffer: &mut Self::Buffer,
        _region: MapRegion,
        _write: bool,
    ) -> Result<NonNull<u8>> {
        // The whole buffer is mapped; the region is accepted for protocol
        // symmetry with backends that can sub-range.
        self.kmd.bo_map(&buffer.bo).map_err(|e| Error::Map(e.raw()))
    }

    fn unmap(&self, buffer: &mut Self::Buffer) {
        self.kmd.bo_unmap(&buffer.bo);
    }
}

// =============================================================================
// TESTS
// =============================================================================
