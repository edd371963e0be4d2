//! Placement configuration.
//!
//! Every geometric constant the placer depends on lives here as a named
//! value, so tests and frontends can shrink or reshape the geometry without
//! touching the algorithm. `PlacementConfig::default()` reproduces the brain
//! layout used by the visualizer.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;
use crate::geometry::Boundary;

/// How many of the requested neurons a region should receive.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Share {
    /// `floor(count * fraction)` neurons.
    Fraction(f32),
    /// Whatever the fraction regions leave over.
    Remainder,
}

/// A named sphere-shaped zone that neurons are sampled from.
///
/// Fields:
/// - `center`: world-space center of the sampling sphere
/// - `radius`: nominal radius; samples only reach `radial.inner + radial.span` of it
/// - `share`: proportion of the requested count this region receives
/// - `floor`: minimum quota, subject to [`FloorPolicy`]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegionSpec {
    pub name: String,
    pub center: Vec3,
    pub radius: f32,
    pub share: Share,
    pub floor: usize,
}

impl RegionSpec {
    pub fn new(
        name: impl Into<String>,
        center: Vec3,
        radius: f32,
        share: Share,
        floor: usize,
    ) -> Self {
        Self {
            name: name.into(),
            center,
            radius,
            share,
            floor,
        }
    }
}

/// Radial fraction `inner + span * cbrt(u)` applied to a region's radius.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RadialProfile {
    pub inner: f32,
    pub span: f32,
}

impl RadialProfile {
    /// Largest fraction of a region radius a sample can reach.
    #[inline]
    pub fn max_fraction(&self) -> f32 {
        self.inner + self.span
    }
}

impl Default for RadialProfile {
    fn default() -> Self {
        Self {
            inner: RADIAL_INNER,
            span: RADIAL_SPAN,
        }
    }
}

/// What to do when per-region floors add up to more than the requested count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloorPolicy {
    /// Drop the floors so quotas sum to exactly the requested count.
    #[default]
    Clamped,
    /// Always honor floors, even if that places more neurons than requested.
    Strict,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    pub regions: Vec<RegionSpec>,
    pub boundary: Boundary,
    pub min_separation: f32,
    pub attempts_per_point: usize,
    pub radial: RadialProfile,
    pub floor_policy: FloorPolicy,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            regions: Self::brain_regions(),
            boundary: Boundary::brain(),
            min_separation: MIN_SEPARATION,
            attempts_per_point: ATTEMPTS_PER_POINT,
            radial: RadialProfile::default(),
            floor_policy: FloorPolicy::default(),
        }
    }
}

impl PlacementConfig {
    /// Right frontal, left frontal, central core and occipital, in placement order.
    pub fn brain_regions() -> Vec<RegionSpec> {
        vec![
            RegionSpec::new(
                "right-frontal",
                lifted(RIGHT_FRONTAL_CENTER),
                FRONTAL_RADIUS,
                Share::Fraction(FRONTAL_SHARE),
                FRONTAL_FLOOR,
            ),
            RegionSpec::new(
                "left-frontal",
                lifted(LEFT_FRONTAL_CENTER),
                FRONTAL_RADIUS,
                Share::Fraction(FRONTAL_SHARE),
                FRONTAL_FLOOR,
            ),
            RegionSpec::new(
                "central-core",
                lifted(CENTRAL_CORE_CENTER),
                CENTRAL_CORE_RADIUS,
                Share::Fraction(CENTRAL_CORE_SHARE),
                CENTRAL_CORE_FLOOR,
            ),
            RegionSpec::new(
                "occipital",
                lifted(OCCIPITAL_CENTER),
                OCCIPITAL_RADIUS,
                Share::Remainder,
                OCCIPITAL_FLOOR,
            ),
        ]
    }

    pub fn with_floor_policy(mut self, floor_policy: FloorPolicy) -> Self {
        self.floor_policy = floor_policy;
        self
    }

    pub fn with_min_separation(mut self, min_separation: f32) -> Self {
        self.min_separation = min_separation;
        self
    }

    pub fn with_attempts_per_point(mut self, attempts_per_point: usize) -> Self {
        self.attempts_per_point = attempts_per_point;
        self
    }

    /// Maximum sampling trials spent on a region with the given quota.
    #[inline]
    pub fn attempt_budget(&self, quota: usize) -> usize {
        quota.saturating_mul(self.attempts_per_point)
    }

    /// Sum of all region floors.
    pub fn floor_total(&self) -> usize {
        self.regions.iter().map(|r| r.floor).sum()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.regions.is_empty() {
            return Err(ConfigError::NoRegions);
        }
        if self.boundary.ellipsoids.is_empty() {
            return Err(ConfigError::EmptyBoundary);
        }
        if let Some(index) = self
            .boundary
            .ellipsoids
            .iter()
            .position(|e| !e.is_well_formed())
        {
            return Err(ConfigError::InvalidEllipsoid { index });
        }

        let mut fraction_total = 0.0_f32;
        let mut remainders = 0usize;
        for region in &self.regions {
            if !region.center.is_finite() {
                return Err(ConfigError::NonFiniteCenter {
                    name: region.name.clone(),
                });
            }
            if !(region.radius.is_finite() && region.radius > 0.0) {
                return Err(ConfigError::InvalidRadius {
                    name: region.name.clone(),
                    radius: region.radius,
                });
            }
            match region.share {
                Share::Fraction(share) if !(0.0..=1.0).contains(&share) => {
                    return Err(ConfigError::InvalidShare {
                        name: region.name.clone(),
                        share,
                    });
                }
                Share::Fraction(share) => fraction_total += share,
                Share::Remainder => remainders += 1,
            }
        }
        // small slack so 0.25 + 0.25 + 0.5 style splits survive f32 rounding
        if fraction_total > 1.0 + 1e-4 {
            return Err(ConfigError::SharesExceedOne(fraction_total));
        }
        if remainders > 1 {
            return Err(ConfigError::MultipleRemainders(remainders));
        }

        if !(self.min_separation.is_finite() && self.min_separation >= 0.0) {
            return Err(ConfigError::InvalidSeparation(self.min_separation));
        }
        if self.attempts_per_point == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        let RadialProfile { inner, span } = self.radial;
        if !(inner.is_finite() && span.is_finite() && inner >= 0.0 && span >= 0.0) {
            return Err(ConfigError::InvalidRadialProfile { inner, span });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Ellipsoid;

    #[test]
    fn default_config_is_valid() {
        let config = PlacementConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.regions.len(), 4);
        assert_eq!(config.floor_total(), 22);
        assert!((config.radial.max_fraction() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn validate_rejects_broken_geometry() {
        let mut config = PlacementConfig::default();
        config.regions[2].radius = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRadius { ref name, .. }) if name == "central-core"
        ));

        let mut config = PlacementConfig::default();
        config.boundary.ellipsoids[1] = Ellipsoid::new(Vec3::ZERO, Vec3::new(1.0, -1.0, 1.0));
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidEllipsoid { index: 1 })
        );

        let config = PlacementConfig {
            boundary: Boundary::new(Vec::new()),
            ..PlacementConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyBoundary));
    }

    #[test]
    fn validate_rejects_bad_shares() {
        let mut config = PlacementConfig::default();
        config.regions[0].share = Share::Fraction(0.8);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SharesExceedOne(_))
        ));

        let mut config = PlacementConfig::default();
        config.regions[1].share = Share::Remainder;
        assert_eq!(config.validate(), Err(ConfigError::MultipleRemainders(2)));

        let mut config = PlacementConfig::default();
        config.regions[1].share = Share::Fraction(-0.1);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidShare { .. })
        ));
    }

    #[test]
    fn validate_rejects_bad_sampling_knobs() {
        let config = PlacementConfig::default().with_attempts_per_point(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroAttempts));

        let config = PlacementConfig::default().with_min_separation(f32::NAN);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSeparation(_))
        ));

        let config = PlacementConfig {
            radial: RadialProfile {
                inner: -0.1,
                span: 0.5,
            },
            ..PlacementConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRadialProfile { .. })
        ));

        let config = PlacementConfig {
            regions: Vec::new(),
            ..PlacementConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoRegions));
    }
}
