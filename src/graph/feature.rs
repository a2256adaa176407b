//! Photometric features and the pairwise affinity function.
//!
//! Every pixel is reduced to a 3-component feature derived from HSV:
//! brightness plus hue encoded as a saturation-and-value scaled vector on a
//! circle. The circular encoding avoids the 0/360 degree hue discontinuity
//! and damps hue noise at low saturation, where hue is numerically unstable.
//!
//! Edge weights between neighboring pixels come from a Gaussian kernel over
//! the Euclidean distance of their features.

// ============================================================================
// Feature Type
// ============================================================================

/// Gaussian kernel width for the affinity function.
pub const SIGMA: f64 = 0.2;

/// Photometric feature of a single pixel.
///
/// Computed once per pixel and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PhotometricFeature {
    /// HSV value (brightness), 0.0-1.0
    pub value: f64,
    /// Hue vector component: V * S * sin(H)
    pub sin_hue: f64,
    /// Hue vector component: V * S * cos(H)
    pub cos_hue: f64,
}

/// Compute the photometric feature of an RGB pixel.
///
/// Standard HSV decomposition: hue is picked by equality against the channel
/// maximum in R, G, B priority order (ties resolve to the first match), wraps
/// negative values by +360, and defaults to 0 for achromatic pixels.
///
/// H stays degree-valued when fed to sin/cos. The affinity only needs a
/// stable angular encoding shared by both endpoints, not a geometric one,
/// so the unconverted argument is kept as-is.
///
/// # Arguments
/// * `r`, `g`, `b` - Channel values, 0-255
///
/// # Returns
/// Feature with `value` in [0,1] and `sin_hue`/`cos_hue` in [-1,1]
pub fn rgb_to_feature(r: u8, g: u8, b: u8) -> PhotometricFeature {
    let rd = r as f64 / 255.0;
    let gd = g as f64 / 255.0;
    let bd = b as f64 / 255.0;

    let cmax = rd.max(gd).max(bd);
    let cmin = rd.min(gd).min(bd);
    let delta = cmax - cmin;

    let mut h = if delta == 0.0 {
        0.0
    } else if cmax == rd {
        60.0 * (((gd - bd) / delta) % 6.0)
    } else if cmax == gd {
        60.0 * (((bd - rd) / delta) + 2.0)
    } else {
        60.0 * (((rd - gd) / delta) + 4.0)
    };
    if h < 0.0 {
        h += 360.0;
    }

    let s = if cmax == 0.0 { 0.0 } else { delta / cmax };
    let v = cmax;

    PhotometricFeature {
        value: v,
        sin_hue: v * s * h.sin(),
        cos_hue: v * s * h.cos(),
    }
}

// ============================================================================
// Affinity
// ============================================================================

/// Euclidean distance between two features.
#[inline]
pub fn feature_distance(f1: &PhotometricFeature, f2: &PhotometricFeature) -> f64 {
    let dv = f1.value - f2.value;
    let ds = f1.sin_hue - f2.sin_hue;
    let dc = f1.cos_hue - f2.cos_hue;
    (dv * dv + ds * ds + dc * dc).sqrt()
}

/// Photometric similarity of two features, in (0,1].
///
/// Gaussian kernel `exp(-d^2 / (2 * SIGMA^2))`: 1.0 for identical features,
/// approaching 0 as they diverge. Symmetric and deterministic; recomputing
/// from the same inputs is bit-identical.
#[inline]
pub fn affinity(f1: &PhotometricFeature, f2: &PhotometricFeature) -> f64 {
    let d = feature_distance(f1, f2);
    (-(d * d) / (2.0 * SIGMA * SIGMA)).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_is_zero_feature() {
        let f = rgb_to_feature(0, 0, 0);
        assert_eq!(f.value, 0.0);
        assert_eq!(f.sin_hue, 0.0);
        assert_eq!(f.cos_hue, 0.0);
    }

    #[test]
    fn test_white_is_achromatic() {
        // delta == 0, so hue falls back to 0 and saturation kills the vector
        let f = rgb_to_feature(255, 255, 255);
        assert_eq!(f.value, 1.0);
        assert_eq!(f.sin_hue, 0.0);
        assert_eq!(f.cos_hue, 0.0);
    }

    #[test]
    fn test_pure_red_hue_zero() {
        // H = 0 for pure red, so the hue vector points at (sin 0, cos 0)
        let f = rgb_to_feature(255, 0, 0);
        assert_eq!(f.value, 1.0);
        assert_eq!(f.sin_hue, 0.0);
        assert_eq!(f.cos_hue, 1.0);
    }

    #[test]
    fn test_feature_bounds() {
        let samples = [
            (0u8, 0u8, 0u8),
            (255, 255, 255),
            (255, 0, 0),
            (0, 255, 0),
            (0, 0, 255),
            (12, 200, 97),
            (200, 12, 97),
            (97, 200, 12),
            (1, 2, 3),
            (254, 253, 252),
        ];
        for (r, g, b) in samples {
            let f = rgb_to_feature(r, g, b);
            assert!((0.0..=1.0).contains(&f.value), "value out of range for {r},{g},{b}");
            // sin^2 + cos^2 == (V*S)^2 <= V^2 since S <= 1
            let hue_sq = f.sin_hue * f.sin_hue + f.cos_hue * f.cos_hue;
            assert!(
                hue_sq <= f.value * f.value + 1e-12,
                "hue vector exceeds value for {r},{g},{b}"
            );
        }
    }

    #[test]
    fn test_feature_deterministic() {
        let a = rgb_to_feature(137, 42, 250);
        let b = rgb_to_feature(137, 42, 250);
        assert_eq!(a, b);
    }

    #[test]
    fn test_affinity_identity() {
        let f = rgb_to_feature(120, 60, 30);
        assert_eq!(affinity(&f, &f), 1.0);
    }

    #[test]
    fn test_affinity_symmetric() {
        let f1 = rgb_to_feature(255, 0, 0);
        let f2 = rgb_to_feature(0, 0, 255);
        assert_eq!(affinity(&f1, &f2), affinity(&f2, &f1));
    }

    #[test]
    fn test_affinity_decreases_with_distance() {
        let black = rgb_to_feature(0, 0, 0);
        let gray = rgb_to_feature(128, 128, 128);
        let white = rgb_to_feature(255, 255, 255);

        let near = affinity(&black, &gray);
        let far = affinity(&black, &white);
        assert!(near < 1.0);
        assert!(far < near);
        assert!(far > 0.0);
    }

    #[test]
    fn test_affinity_black_white() {
        // d = 1.0 exactly, so the kernel evaluates to exp(-1 / 0.08)
        let black = rgb_to_feature(0, 0, 0);
        let white = rgb_to_feature(255, 255, 255);
        let expected = (-1.0f64 / (2.0 * SIGMA * SIGMA)).exp();
        assert!((affinity(&black, &white) - expected).abs() < 1e-15);
    }
}
