//! Comparison tolerances for snapshot verification.

/// Tolerances applied when comparing a snapshot to its reference.
///
/// `per_pixel` is the amount a pixel's channels may differ, as a
/// fraction of the channel range, for the pixel to still count as
/// unchanged. `overall` is the fraction of pixels that may change (as
/// defined by `per_pixel`) for the image to still count as matching.
/// Both are in `[0, 1]`; zero means exact.
///
/// Raising either tolerance above zero may let regressions through.
/// Prefer `per_pixel` over `overall`, and raise them only as far as
/// needed to make tests stable across machines.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tolerances {
    /// Maximum per-channel difference fraction for an unchanged pixel.
    pub per_pixel: f64,
    /// Maximum fraction of changed pixels for a matching image.
    pub overall: f64,
}

impl Tolerances {
    /// Exact comparison: no pixel may differ.
    pub const ZERO: Self = Self {
        per_pixel: 0.0,
        overall: 0.0,
    };

    /// Create tolerances, clamping both values into `[0, 1]`.
    #[must_use]
    pub fn new(per_pixel: f64, overall: f64) -> Self {
        Self {
            per_pixel: per_pixel.clamp(0.0, 1.0),
            overall: overall.clamp(0.0, 1.0),
        }
    }

    /// Whether this is an exact (zero-tolerance) comparison.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.per_pixel == 0.0 && self.overall == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_exact() {
        assert!(Tolerances::ZERO.is_exact());
        assert!(Tolerances::default().is_exact());
    }

    #[test]
    fn test_new_clamps_range() {
        let t = Tolerances::new(-0.5, 1.5);
        assert_eq!(t.per_pixel, 0.0);
        assert_eq!(t.overall, 1.0);
    }

    #[test]
    fn test_nonzero_is_not_exact() {
        assert!(!Tolerances::new(0.1, 0.0).is_exact());
        assert!(!Tolerances::new(0.0, 0.1).is_exact());
    }
}
