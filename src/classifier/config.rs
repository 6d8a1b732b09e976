//! Classification thresholds.

use super::types::Category;

/// Volume at or above which a package is bulky (cubic length-unit).
pub const VOLUME_THRESHOLD: f64 = 1_000_000.0;

/// Single-dimension length at or above which a package is bulky.
pub const DIMENSION_THRESHOLD: f64 = 150.0;

/// Mass at or above which a package is heavy.
pub const MASS_THRESHOLD: f64 = 20.0;

/// Threshold set used by the bulky/heavy predicates.
///
/// The free functions [`is_bulky`](super::is_bulky),
/// [`is_heavy`](super::is_heavy) and [`sort`](super::sort) always use
/// [`Thresholds::DEFAULT`]. A custom set is useful for building rule sets
/// with different limits via [`rules_for`](crate::rules::rules_for).
///
/// # Examples
///
/// ```
/// use parcel_sort::classifier::Thresholds;
///
/// let oversize = Thresholds::default()
///     .with_dimension(120.0)
///     .with_mass(25.0);
/// assert!(oversize.validate().is_ok());
/// assert!(oversize.is_bulky(120.0, 10.0, 10.0));
/// assert!(!oversize.is_heavy(20.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Thresholds {
    /// Minimum `width * height * length` for a bulky package.
    pub volume: f64,

    /// Minimum single dimension for a bulky package.
    pub dimension: f64,

    /// Minimum mass for a heavy package.
    pub mass: f64,
}

impl Thresholds {
    /// The fixed production thresholds.
    pub const DEFAULT: Thresholds = Thresholds {
        volume: VOLUME_THRESHOLD,
        dimension: DIMENSION_THRESHOLD,
        mass: MASS_THRESHOLD,
    };

    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = volume;
        self
    }

    pub fn with_dimension(mut self, dimension: f64) -> Self {
        self.dimension = dimension;
        self
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.volume.is_finite() || self.volume <= 0.0 {
            return Err(format!("volume threshold must be positive, got {}", self.volume));
        }
        if !self.dimension.is_finite() || self.dimension <= 0.0 {
            return Err(format!(
                "dimension threshold must be positive, got {}",
                self.dimension
            ));
        }
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(format!("mass threshold must be positive, got {}", self.mass));
        }
        Ok(())
    }

    /// Returns `true` if any dimension or the volume reaches its threshold.
    ///
    /// Dimensions are checked first; the volume is only computed when no
    /// single dimension qualifies.
    pub fn is_bulky(&self, width: f64, height: f64, length: f64) -> bool {
        if width >= self.dimension || height >= self.dimension || length >= self.dimension {
            return true;
        }
        width * height * length >= self.volume
    }

    /// Returns `true` if `mass` reaches the mass threshold.
    pub fn is_heavy(&self, mass: f64) -> bool {
        mass >= self.mass
    }

    /// Applies the bulky/heavy decision matrix.
    pub fn classify(&self, width: f64, height: f64, length: f64, mass: f64) -> Category {
        Category::from_flags(self.is_bulky(width, height, length), self.is_heavy(mass))
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let t = Thresholds::default();
        assert!((t.volume - 1_000_000.0).abs() < 1e-10);
        assert!((t.dimension - 150.0).abs() < 1e-10);
        assert!((t.mass - 20.0).abs() < 1e-10);
        assert_eq!(t, Thresholds::DEFAULT);
    }

    #[test]
    fn test_validate_ok() {
        assert!(Thresholds::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_volume() {
        assert!(Thresholds::default().with_volume(0.0).validate().is_err());
        assert!(Thresholds::default()
            .with_volume(f64::INFINITY)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_bad_dimension() {
        assert!(Thresholds::default()
            .with_dimension(-1.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_bad_mass() {
        assert!(Thresholds::default().with_mass(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_custom_thresholds_classify() {
        let t = Thresholds::default().with_dimension(100.0).with_mass(5.0);
        assert_eq!(t.classify(100.0, 1.0, 1.0, 1.0), Category::Special);
        assert_eq!(t.classify(100.0, 1.0, 1.0, 5.0), Category::Rejected);
        assert_eq!(t.classify(99.0, 1.0, 1.0, 4.9), Category::Standard);
    }
}
