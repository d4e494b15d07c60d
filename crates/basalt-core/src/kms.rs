//! # KMS Capability Record
//!
//! Display-path policy the dispatcher shares with its KMS output stage.
//!
//! Backends fill this record once during capability negotiation; the
//! values are static facts about the hardware family, not measurements.

use crate::format::PixelFormat;

// =============================================================================
// SWAP MODE
// =============================================================================

/// How the display path presents a completed frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapMode {
    /// Page-flip between front and back buffers
    Flip,
    /// Copy the back buffer into the scanout buffer
    Copy,
    /// Full mode-set on every swap (legacy fallback)
    SetCrtc,
}

// =============================================================================
// KMS CAPS
// =============================================================================

/// Negotiated display capabilities
///
/// Mutated in place by [`BackendDriver::negotiate_kms_caps`]; plain data,
/// no I/O involved.
///
/// [`BackendDriver::negotiate_kms_caps`]: crate::driver::BackendDriver::negotiate_kms_caps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KmsCaps {
    /// Framebuffer pixel format; normalized by the backend to one the
    /// hardware can scan out
    pub fb_format: PixelFormat,
    /// Frame presentation policy
    pub swap_mode: SwapMode,
    /// Mode-set waits for flip completion
    pub mode_sync_flip: bool,
    /// Minimum frames between presents
    pub swap_interval: u32,
    /// Wait for vblank on the secondary pipe
    pub vblank_secondary: bool,
    /// Legacy vmwgfx mode-setting quirk
    pub mode_quirk_vmwgfx: bool,
}

impl KmsCaps {
    /// A request for the given framebuffer format with every policy field
    /// left at its conservative default
    pub const fn request(fb_format: PixelFormat) -> Self {
        Self {
            fb_format,
            swap_mode: SwapMode::Copy,
            mode_sync_flip: false,
            swap_interval: 0,
            vblank_secondary: false,
            mode_quirk_vmwgfx: false,
        }
    }
}

impl Default for KmsCaps {
    fn default() -> Self {
        Self::request(PixelFormat::BGRA_8888)
    }
}
