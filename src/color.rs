//! RGB <-> YCbCr color-space conversion.
//!
//! Both directions truncate the floating-point result toward zero and then
//! clamp to [0, 255]. The pair is lossy by design: truncation means a
//! round trip is only accurate to within a few units per channel.

/// Truncates toward zero, then clamps to the 8-bit channel range.
///
/// Out-of-range intermediates are handled here in-band; overflow is never
/// an error.
#[inline]
fn quantize_channel(value: f32) -> u8 {
    (value as i32).clamp(0, 255) as u8
}

/// Converts an RGB triple to YCbCr.
#[inline]
pub fn rgb_to_ycbcr(r: u8, g: u8, b: u8) -> (u8, u8, u8) {
    let (r, g, b) = (f32::from(r), f32::from(g), f32::from(b));
    let y = 0.299 * r + 0.587 * g + 0.114 * b;
    let cb = -0.1687 * r - 0.3313 * g + 0.5 * b + 128.0;
    let cr = 0.5 * r - 0.4187 * g - 0.0813 * b + 128.0;
    (quantize_channel(y), quantize_channel(cb), quantize_channel(cr))
}

/// Converts a YCbCr triple back to RGB.
#[inline]
pub fn ycbcr_to_rgb(y: u8, cb: u8, cr: u8) -> (u8, u8, u8) {
    let y = f32::from(y);
    let cb = f32::from(cb) - 128.0;
    let cr = f32::from(cr) - 128.0;
    let r = y + 1.402 * cr;
    let g = y - 0.34414 * cb - 0.71414 * cr;
    let b = y + 1.772 * cb;
    (quantize_channel(r), quantize_channel(g), quantize_channel(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncation_of_known_triples() {
        // 0.299 * 255 = 76.245 truncates to 76, and Cr saturates at 255.
        assert_eq!(rgb_to_ycbcr(255, 0, 0), (76, 84, 255));
        assert_eq!(rgb_to_ycbcr(0, 0, 0), (0, 128, 128));
        assert_eq!(rgb_to_ycbcr(0, 0, 255), (29, 255, 107));
    }

    #[test]
    fn test_overflow_clamps_to_255() {
        // Yellow pushes Cb below zero before clamping.
        assert_eq!(rgb_to_ycbcr(255, 255, 0), (225, 0, 148));

        // Full luma with extreme chroma overflows G and B on the way back.
        assert_eq!(ycbcr_to_rgb(255, 255, 0), (75, 255, 255));
    }

    #[test]
    fn test_underflow_clamps_to_zero() {
        assert_eq!(ycbcr_to_rgb(0, 0, 0), (0, 135, 0));
    }

    #[test]
    fn test_roundtrip_error_is_bounded() {
        let samples: [(u8, u8, u8); 6] = [
            (255, 0, 0),
            (12, 200, 97),
            (128, 128, 128),
            (47, 63, 200),
            (200, 150, 100),
            (1, 254, 3),
        ];
        for (r, g, b) in samples {
            let (y, cb, cr) = rgb_to_ycbcr(r, g, b);
            let (r2, g2, b2) = ycbcr_to_rgb(y, cb, cr);
            for (a, b) in [(r, r2), (g, g2), (b, b2)] {
                let diff = (i32::from(a) - i32::from(b)).abs();
                assert!(diff <= 4, "channel drifted by {diff}: {a} vs {b}");
            }
        }
    }
}
