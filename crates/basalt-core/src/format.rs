//! # Pixel Formats
//!
//! HAL pixel format codes and the shared format table.
//!
//! The raw code travels across the dispatcher ABI unchanged; unknown codes
//! stay representable and are rejected by [`PixelFormat::bytes_per_pixel`],
//! never by construction.

use core::fmt;

// =============================================================================
// PIXEL FORMAT
// =============================================================================

/// HAL pixel format code
///
/// Wraps the raw `u32` carried by the buffer descriptor. The associated
/// constants cover every format the dispatcher layer knows how to size.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct PixelFormat(u32);

static_assertions::assert_eq_size!(PixelFormat, u32);

impl PixelFormat {
    /// 32-bit RGBA
    pub const RGBA_8888: Self = Self(1);
    /// 32-bit RGBX (alpha ignored)
    pub const RGBX_8888: Self = Self(2);
    /// 24-bit RGB
    pub const RGB_888: Self = Self(3);
    /// 16-bit RGB 5:6:5
    pub const RGB_565: Self = Self(4);
    /// 32-bit BGRA
    pub const BGRA_8888: Self = Self(5);
    /// Semi-planar YCbCr 4:2:2
    pub const YCBCR_422_SP: Self = Self(0x10);
    /// Semi-planar YCrCb 4:2:0
    pub const YCRCB_420_SP: Self = Self(0x11);
    /// Interleaved YCbCr 4:2:2
    pub const YCBCR_422_I: Self = Self(0x14);
    /// Planar YVU 4:2:0 (fourcc YV12)
    pub const YV12: Self = Self(0x3231_5659);

    /// Wrap a raw HAL format code
    #[inline]
    pub const fn from_raw(code: u32) -> Self {
        Self(code)
    }

    /// Get the raw format code
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Shared format table: bytes per pixel of the dominant plane
    ///
    /// Returns `None` for formats the dispatcher layer cannot size; a
    /// backend must reject such formats without touching the kernel.
    pub const fn bytes_per_pixel(self) -> Option<u32> {
        match self {
            Self::RGBA_8888 | Self::RGBX_8888 | Self::BGRA_8888 => Some(4),
            Self::RGB_888 => Some(3),
            Self::RGB_565 | Self::YCBCR_422_I => Some(2),
            Self::YCBCR_422_SP | Self::YCRCB_420_SP | Self::YV12 => Some(1),
            _ => None,
        }
    }

    /// Check whether the format carries separate chroma planes
    pub const fn is_planar_yuv(self) -> bool {
        matches!(self, Self::YCBCR_422_SP | Self::YCRCB_420_SP | Self::YV12)
    }
}

impl fmt::Debug for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PixelFormat(0x{:x})", self.0)
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::RGBA_8888 => write!(f, "RGBA_8888"),
            Self::RGBX_8888 => write!(f, "RGBX_8888"),
            Self::RGB_888 => write!(f, "RGB_888"),
            Self::RGB_565 => write!(f, "RGB_565"),
            Self::BGRA_8888 => write!(f, "BGRA_8888"),
            Self::YCBCR_422_SP => write!(f, "YCbCr_422_SP"),
            Self::YCRCB_420_SP => write!(f, "YCrCb_420_SP"),
            Self::YCBCR_422_I => write!(f, "YCbCr_422_I"),
            Self::YV12 => write!(f, "YV12"),
            _ => write!(f, "0x{:x}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_formats_have_sizes() {
        assert_eq!(PixelFormat::RGBA_8888.bytes_per_pixel(), Some(4));
        assert_eq!(PixelFormat::RGBX_8888.bytes_per_pixel(), Some(4));
        assert_eq!(PixelFormat::BGRA_8888.bytes_per_pixel(), Some(4));
        assert_eq!(PixelFormat::RGB_888.bytes_per_pixel(), Some(3));
        assert_eq!(PixelFormat::RGB_565.bytes_per_pixel(), Some(2));
        assert_eq!(PixelFormat::YCBCR_422_I.bytes_per_pixel(), Some(2));
        assert_eq!(PixelFormat::YV12.bytes_per_pixel(), Some(1));
        assert_eq!(PixelFormat::YCBCR_422_SP.bytes_per_pixel(), Some(1));
        assert_eq!(PixelFormat::YCRCB_420_SP.bytes_per_pixel(), Some(1));
    }

    #[test]
    fn unknown_format_has_no_size() {
        assert_eq!(PixelFormat::from_raw(0xDEAD).bytes_per_pixel(), None);
        assert_eq!(PixelFormat::from_raw(0).bytes_per_pixel(), None);
    }

    #[test]
    fn raw_round_trips() {
        let f = PixelFormat::from_raw(0x32315659);
        assert_eq!(f, PixelFormat::YV12);
        assert_eq!(f.raw(), 0x32315659);
    }
}
