//! Pulse width extraction from a raw waveform.

use crate::waveform::Level;

/// Number of data bits in a frame.
pub const FRAME_BITS: usize = 40;

/// High pulse widths in polls, in capture order.
///
/// Only the first [`FRAME_BITS`] widths are kept, but every detected pulse is
/// counted so a noisy capture still reports how many pulses it held.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PulseWidths {
    widths: heapless::Vec<u32, FRAME_BITS>,
    count: usize,
}

impl PulseWidths {
    /// Creates an empty set of widths.
    pub const fn new() -> Self {
        Self {
            widths: heapless::Vec::new(),
            count: 0,
        }
    }

    fn push(&mut self, width: u32) {
        self.count += 1;
        // Anything past a full frame is only counted.
        let _ = self.widths.push(width);
    }

    /// Number of pulses detected.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if no pulse was detected.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The stored widths.
    pub fn as_slice(&self) -> &[u32] {
        &self.widths
    }

    /// The widths of a complete frame, if exactly [`FRAME_BITS`] pulses were detected.
    pub fn frame(&self) -> Option<&[u32; FRAME_BITS]> {
        if self.count != FRAME_BITS {
            return None;
        }
        self.widths.as_slice().try_into().ok()
    }
}

/// Progress through the low, high, low start-of-frame marker.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Marker {
    Idle,
    Low,
    LowHigh,
}

/// Index of the low sample that closes the sensor's acknowledgement pulse.
fn frame_start(trace: &[Level]) -> Option<usize> {
    let mut marker = Marker::Idle;
    trace.iter().position(|&level| {
        match (marker, level) {
            (Marker::Idle, Level::Low) => marker = Marker::Low,
            (Marker::Low, Level::High) => marker = Marker::LowHigh,
            (Marker::LowHigh, Level::Low) => return true,
            _ => {}
        }
        false
    })
}

/// Extracts the width of every high pulse after the start-of-frame marker.
///
/// A trace without a marker yields no widths. A high run still open at the
/// end of the trace is the idle tail and is dropped.
pub fn extract(trace: &[Level]) -> PulseWidths {
    let mut widths = PulseWidths::new();
    let Some(start) = frame_start(trace) else {
        return widths;
    };

    let mut run: u32 = 0;
    for level in &trace[start..] {
        match level {
            Level::High => run += 1,
            Level::Low if run > 0 => {
                widths.push(run);
                run = 0;
            }
            Level::Low => {}
        }
    }

    debug!("extracted {} pulses", widths.len());
    widths
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::PinState::{High as H, Low as L};

    fn levels(pattern: &[(Level, usize)]) -> Vec<Level> {
        pattern
            .iter()
            .flat_map(|&(level, n)| std::iter::repeat_n(level, n))
            .collect()
    }

    #[test]
    fn test_no_marker_yields_nothing() {
        assert!(extract(&levels(&[(H, 50)])).is_empty());
        assert!(extract(&levels(&[(H, 5), (L, 5), (H, 5)])).is_empty());
        assert!(extract(&[]).is_empty());
    }

    #[test]
    fn test_skips_acknowledgement_pulse() {
        // idle, ack low, ack high, then two data pulses and the idle tail
        let trace = levels(&[
            (H, 2),
            (L, 4),
            (H, 4),
            (L, 3),
            (H, 2),
            (L, 3),
            (H, 6),
            (L, 3),
            (H, 20),
        ]);

        let widths = extract(&trace);

        assert_eq!(widths.len(), 2);
        assert_eq!(widths.as_slice(), &[2, 6]);
        assert!(widths.frame().is_none());
    }

    #[test]
    fn test_forty_pulses_in_capture_order() {
        let mut pattern = vec![(H, 1), (L, 4), (H, 4)];
        for i in 0..FRAME_BITS {
            pattern.push((L, 3));
            pattern.push((H, i + 1));
        }
        pattern.push((L, 3));
        pattern.push((H, 200));

        let widths = extract(&levels(&pattern));

        let frame = widths.frame().unwrap();
        let expected: Vec<u32> = (1..=40).collect();
        assert_eq!(frame.as_slice(), expected.as_slice());
    }

    #[test]
    fn test_counts_excess_pulses() {
        let mut pattern = vec![(L, 2), (H, 2)];
        for _ in 0..45 {
            pattern.push((L, 1));
            pattern.push((H, 1));
        }
        pattern.push((L, 1));

        let widths = extract(&levels(&pattern));

        assert_eq!(widths.len(), 45);
        assert_eq!(widths.as_slice().len(), FRAME_BITS);
        assert!(widths.frame().is_none());
    }

    #[test]
    fn test_trailing_run_dropped() {
        let widths = extract(&levels(&[(L, 1), (H, 1), (L, 1), (H, 3), (L, 1), (H, 9)]));
        assert_eq!(widths.as_slice(), &[3]);
    }
}
