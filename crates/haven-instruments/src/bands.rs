//! Severity band lookup over ordered, contiguous range tables.
//!
//! Tables are checked once by [`validate_bands`] when the catalog loads. After
//! that a table is a sorted partition of `[0, max]`, so lookup is a binary
//! search rather than a first-match scan.

use crate::definition::SeverityRange;
use crate::error::BandError;

/// Find the band containing `score`, inclusive on both ends.
pub fn find_band(bands: &[SeverityRange], score: u32) -> Option<&SeverityRange> {
    band_index(bands, score).map(|i| &bands[i])
}

/// Position of the band containing `score`.
pub fn band_index(bands: &[SeverityRange], score: u32) -> Option<usize> {
    let idx = bands.partition_point(|b| b.max < score);
    bands
        .get(idx)
        .filter(|b| b.contains(score))
        .map(|_| idx)
}

/// Position of the band whose level equals `level` (case-insensitive).
/// Bands are ordered least to most severe, so a higher position is worse.
pub fn level_rank(bands: &[SeverityRange], level: &str) -> Option<usize> {
    bands
        .iter()
        .position(|b| b.level.eq_ignore_ascii_case(level.trim()))
}

/// Check that `bands` exactly partitions `[0, max_score]`: sorted, no gaps,
/// no overlaps, every band labelled.
pub fn validate_bands(bands: &[SeverityRange], max_score: u32) -> Result<(), BandError> {
    let first = bands.first().ok_or(BandError::Empty)?;
    if first.min != 0 {
        return Err(BandError::DoesNotStartAtZero { min: first.min });
    }

    let mut expected = 0u32;
    let mut last_max = 0u32;
    for (index, band) in bands.iter().enumerate() {
        if band.min > band.max {
            return Err(BandError::Inverted {
                index,
                min: band.min,
                max: band.max,
            });
        }
        if band.level.trim().is_empty() {
            return Err(BandError::BlankLevel { index });
        }
        if band.min != expected {
            return Err(BandError::NotContiguous {
                index,
                min: band.min,
                expected,
            });
        }
        last_max = band.max;
        expected = band.max.saturating_add(1);
    }

    if last_max != max_score {
        return Err(BandError::EndMismatch {
            max: last_max,
            expected: max_score,
        });
    }
    Ok(())
}
