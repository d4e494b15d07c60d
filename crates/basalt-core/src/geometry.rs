//! # Geometry Alignment
//!
//! Hardware-mandated rounding of buffer dimensions.
//!
//! Tiling and chroma-subsampling rules require some formats to round their
//! width and height up before the stride is computed; planar YUV formats
//! additionally extend the height to make room for the chroma planes.

use crate::format::PixelFormat;

/// Round `value` up to a multiple of `boundary`
///
/// `boundary` must be a power of two.
#[inline]
pub const fn align(value: u32, boundary: u32) -> u32 {
    (value + boundary - 1) & !(boundary - 1)
}

/// Round buffer dimensions per the format's hardware tiling rules
///
/// RGB formats pass through untouched. YUV formats round to their chroma
/// macroblock size, and planar layouts grow the height by the space the
/// chroma planes occupy below the luma plane.
pub fn align_geometry(format: PixelFormat, width: &mut u32, height: &mut u32) {
    let (align_w, align_h, extra_height_div) = match format {
        PixelFormat::YV12 => (32, 2, 2),
        PixelFormat::YCBCR_422_SP => (2, 1, 1),
        PixelFormat::YCRCB_420_SP => (2, 2, 2),
        PixelFormat::YCBCR_422_I => (2, 1, 0),
        _ => (1, 1, 0),
    };

    *width = align(*width, align_w);
    *height = align(*height, align_h);
    if extra_height_div != 0 {
        *height += *height / extra_height_div;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn align_rounds_up_to_power_of_two() {
        assert_eq!(align(0, 64), 0);
        assert_eq!(align(1, 64), 64);
        assert_eq!(align(64, 64), 64);
        assert_eq!(align(400, 64), 448);
        assert_eq!(align(65, 2), 66);
    }

    #[test]
    fn rgb_geometry_is_untouched() {
        let (mut w, mut h) = (101, 51);
        align_geometry(PixelFormat::BGRA_8888, &mut w, &mut h);
        assert_eq!((w, h), (101, 51));
    }

    #[test]
    fn yv12_geometry_gains_chroma_rows() {
        let (mut w, mut h) = (100, 51);
        align_geometry(PixelFormat::YV12, &mut w, &mut h);
        // Width to 32, height to 2, then half again for the chroma planes.
        assert_eq!(w, 128);
        assert_eq!(h, 52 + 26);
    }

    #[test]
    fn nv21_geometry_gains_chroma_rows() {
        let (mut w, mut h) = (99, 99);
        align_geometry(PixelFormat::YCRCB_420_SP, &mut w, &mut h);
        assert_eq!(w, 100);
        assert_eq!(h, 100 + 50);
    }

    #[test]
    fn interleaved_422_only_rounds_width() {
        let (mut w, mut h) = (99, 33);
        align_geometry(PixelFormat::YCBCR_422_I, &mut w, &mut h);
        assert_eq!((w, h), (100, 33));
    }
}
