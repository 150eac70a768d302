//! Pulse width to bit thresholding.

use crate::{frame::Frame, pulse::FRAME_BITS};

/// Decodes 40 pulse widths into a frame.
///
/// Widths are split at the midpoint between the shortest and the longest
/// pulse; anything strictly above it is a `1`. Bits arrive most significant
/// first. This relies on the widths forming two separate clusters across the
/// whole frame.
pub fn decode(widths: &[u32; FRAME_BITS]) -> Frame {
    let min = widths.iter().copied().min().unwrap_or(0);
    let max = widths.iter().copied().max().unwrap_or(0);
    // width > (min + max) / 2, kept in integers
    let midpoint = u64::from(min) + u64::from(max);

    let bits = widths.iter().fold(0u64, |bits, &width| {
        (bits << 1) | u64::from(2 * u64::from(width) > midpoint)
    });

    let [_, _, _, b0, b1, b2, b3, b4] = bits.to_be_bytes();
    trace!("threshold {}..{}, bits {:x}", min, max, bits);
    Frame::new([b0, b1, b2, b3, b4])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widths_for(bytes: [u8; 5], short: u32, long: u32) -> [u32; FRAME_BITS] {
        let mut widths = [0; FRAME_BITS];
        for (i, width) in widths.iter_mut().enumerate() {
            let bit = (bytes[i / 8] >> (7 - i % 8)) & 1;
            *width = if bit == 1 { long } else { short };
        }
        widths
    }

    #[test]
    fn test_two_bands() {
        let mut widths: [u32; FRAME_BITS] = [10; FRAME_BITS];
        widths[20..].fill(50);

        assert_eq!(decode(&widths).bytes(), [0x00, 0x00, 0x0F, 0xFF, 0xFF]);
    }

    #[test]
    fn test_alternating_bits() {
        let widths: [u32; FRAME_BITS] =
            core::array::from_fn(|i| if i % 2 == 0 { 50 } else { 10 });

        assert_eq!(decode(&widths).bytes(), [0xAA; 5]);
    }

    #[test]
    fn test_reference_frame() {
        let bytes = [40, 2, 23, 5, 70];
        assert_eq!(decode(&widths_for(bytes, 9, 27)).bytes(), bytes);
    }

    #[test]
    fn test_jittered_widths() {
        let bytes = [0x37, 0x00, 0x16, 0x09, 0x56];
        let mut widths = widths_for(bytes, 8, 24);
        for (i, width) in widths.iter_mut().enumerate() {
            // +-2 polls of jitter keeps both bands apart
            *width = (*width + (i as u32 % 5)).saturating_sub(2);
        }
        assert_eq!(decode(&widths).bytes(), bytes);
    }

    #[test]
    fn test_midpoint_counts_as_zero() {
        let mut widths: [u32; FRAME_BITS] = [10; FRAME_BITS];
        widths[0] = 30;
        widths[1] = 20;
        assert_eq!(decode(&widths).bytes(), [0x80, 0, 0, 0, 0]);
    }

    #[test]
    fn test_uniform_widths_decode_to_zero() {
        assert_eq!(decode(&[12; FRAME_BITS]).bytes(), [0; 5]);
    }
}
