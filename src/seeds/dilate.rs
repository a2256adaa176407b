//! Seed dilation: growing clicked pixels into disc neighborhoods.
//!
//! A single click should influence a small region, not one pixel, so every
//! seed index is expanded into the set of integer offsets inside a Euclidean
//! disc of radius R. The output is raw: duplicates are kept, and candidates
//! are not clipped to the image - offsets past the left or right border wrap
//! to the adjacent row, and offsets past the top or bottom fall outside
//! `[0, width*height)`. Range filtering happens during terminal wiring.

use crate::graph::Stride;

// ============================================================================
// Inclusion Rule
// ============================================================================

/// Which disc offsets a dilation admits.
///
/// The historical rule skips any offset with a zero component, which drops
/// the whole seed row and column along with the center - probably meant to
/// exclude just the center. Both readings are available so the corrected
/// disc can be swapped in without touching the rest of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DilationRule {
    /// Admit only offsets with both components nonzero (`dx != 0 && dy != 0`)
    #[default]
    OffAxis,
    /// Admit the full disc except the exact center
    ExcludeCenterOnly,
}

impl DilationRule {
    #[inline]
    fn admits(self, dx: i64, dy: i64) -> bool {
        match self {
            DilationRule::OffAxis => dx != 0 && dy != 0,
            DilationRule::ExcludeCenterOnly => dx != 0 || dy != 0,
        }
    }
}

// ============================================================================
// Dilation
// ============================================================================

/// Expand seed indices into disc-shaped candidate neighborhoods.
///
/// For every seed, each integer offset (dx, dy) with `dx^2 + dy^2 <= R^2`
/// admitted by the rule is mapped through the shared stride and appended.
/// The seed center itself is never included. Output grows with
/// `seeds.len() * disc area`; callers downstream discard out-of-range
/// candidates.
///
/// # Arguments
/// * `seeds` - Clicked pixel indices, `row * stride + col`
/// * `radius` - Disc radius in pixels
/// * `stride` - The image's index encoding
/// * `rule` - Offset inclusion rule
///
/// # Returns
/// Candidate indices, unclipped and with duplicates preserved
pub fn dilate_seeds(seeds: &[i64], radius: i64, stride: Stride, rule: DilationRule) -> Vec<i64> {
    let w = stride.get() as i64;
    let mut dilated = Vec::new();

    for &seed in seeds {
        let row = seed.div_euclid(w);
        let col = seed.rem_euclid(w);
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= radius * radius && rule.admits(dx, dy) {
                    dilated.push((row + dy) * w + (col + dx));
                }
            }
        }
    }

    log::debug!(
        "dilated {} seeds into {} candidates (radius {radius}, {rule:?})",
        seeds.len(),
        dilated.len()
    );
    dilated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_radius_is_empty() {
        // No offset satisfies dx^2+dy^2 <= 0 together with either rule
        let stride = Stride::new(10);
        assert!(dilate_seeds(&[0], 0, stride, DilationRule::OffAxis).is_empty());
        assert!(dilate_seeds(&[0], 0, stride, DilationRule::ExcludeCenterOnly).is_empty());
    }

    #[test]
    fn test_off_axis_excludes_rows_and_columns() {
        let stride = Stride::new(100);
        let seed = stride.index(50, 50) as i64;
        let dilated = dilate_seeds(&[seed], 5, stride, DilationRule::OffAxis);

        assert!(!dilated.is_empty());
        for &candidate in &dilated {
            assert_ne!(candidate, seed, "center must never appear");
            let row = candidate.div_euclid(100);
            let col = candidate.rem_euclid(100);
            assert_ne!(row, 50, "purely horizontal offsets are excluded");
            assert_ne!(col, 50, "purely vertical offsets are excluded");
        }
    }

    #[test]
    fn test_off_axis_radius_one_is_empty() {
        // The unit disc only holds axis-aligned offsets and the center
        let stride = Stride::new(10);
        assert!(dilate_seeds(&[55], 1, stride, DilationRule::OffAxis).is_empty());
    }

    #[test]
    fn test_off_axis_radius_two_diagonals() {
        let stride = Stride::new(10);
        let seed = stride.index(5, 5) as i64;
        let dilated = dilate_seeds(&[seed], 2, stride, DilationRule::OffAxis);

        // Only the four diagonal unit offsets fit inside radius 2
        assert_eq!(
            dilated,
            vec![
                stride.index(4, 4) as i64,
                stride.index(4, 6) as i64,
                stride.index(6, 4) as i64,
                stride.index(6, 6) as i64,
            ]
        );
    }

    #[test]
    fn test_exclude_center_only_keeps_axes() {
        let stride = Stride::new(10);
        let seed = stride.index(5, 5) as i64;
        let dilated = dilate_seeds(&[seed], 1, stride, DilationRule::ExcludeCenterOnly);

        assert_eq!(
            dilated,
            vec![
                stride.index(4, 5) as i64,
                stride.index(5, 4) as i64,
                stride.index(5, 6) as i64,
                stride.index(6, 5) as i64,
            ]
        );
    }

    #[test]
    fn test_disc_counts() {
        // Disc of radius 5 holds 81 lattice points; 1 center + 20 on the axes
        let stride = Stride::new(1000);
        let seed = stride.index(500, 500) as i64;
        assert_eq!(
            dilate_seeds(&[seed], 5, stride, DilationRule::ExcludeCenterOnly).len(),
            80
        );
        assert_eq!(
            dilate_seeds(&[seed], 5, stride, DilationRule::OffAxis).len(),
            60
        );
    }

    #[test]
    fn test_duplicates_preserved_for_overlapping_seeds() {
        let stride = Stride::new(10);
        let seed = stride.index(5, 5) as i64;
        let once = dilate_seeds(&[seed], 2, stride, DilationRule::OffAxis);
        let twice = dilate_seeds(&[seed, seed], 2, stride, DilationRule::OffAxis);
        assert_eq!(twice.len(), 2 * once.len());
    }

    #[test]
    fn test_border_seed_produces_out_of_range_candidates() {
        // Candidates above the top row go negative and are left in place
        // for the terminal wiring step to discard
        let stride = Stride::new(10);
        let dilated = dilate_seeds(&[0], 2, stride, DilationRule::OffAxis);
        assert!(dilated.iter().any(|&c| c < 0));
    }
}
