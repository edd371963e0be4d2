//! Containment tests for the brain silhouette.
//!
//! The boundary is a union of axis-aligned ellipsoids: two overlapping
//! hemispheres plus a flatter bridge that fills the gap between them. A point
//! is inside the brain when it is inside at least one of them.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::{
    lifted, BRIDGE_CENTER, BRIDGE_RADII, HEMISPHERE_RADII, LEFT_HEMISPHERE_CENTER,
    RIGHT_HEMISPHERE_CENTER,
};

/// Axis-aligned ellipsoid given by its center and three semi-axis radii.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ellipsoid {
    pub center: Vec3,
    pub radii: Vec3,
}

impl Ellipsoid {
    pub const fn new(center: Vec3, radii: Vec3) -> Self {
        Self { center, radii }
    }

    /// Squared distance from the center after scaling each axis by its radius.
    ///
    /// Values `<= 1` lie inside or on the surface.
    #[inline]
    pub fn normalized_distance_sq(&self, p: Vec3) -> f32 {
        ((p - self.center) / self.radii).length_squared()
    }

    #[inline]
    pub fn contains(&self, p: Vec3) -> bool {
        self.normalized_distance_sq(p) <= 1.0
    }

    pub(crate) fn is_well_formed(&self) -> bool {
        self.center.is_finite() && self.radii.is_finite() && self.radii.min_element() > 0.0
    }
}

/// Union of ellipsoids used as the "inside the brain" predicate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    pub ellipsoids: Vec<Ellipsoid>,
}

impl Boundary {
    pub fn new(ellipsoids: Vec<Ellipsoid>) -> Self {
        Self { ellipsoids }
    }

    /// Left hemisphere, right hemisphere and the central bridge, in that order.
    pub fn brain() -> Self {
        let hemi = Vec3::from_array(HEMISPHERE_RADII);
        Self::new(vec![
            Ellipsoid::new(lifted(LEFT_HEMISPHERE_CENTER), hemi),
            Ellipsoid::new(lifted(RIGHT_HEMISPHERE_CENTER), hemi),
            Ellipsoid::new(lifted(BRIDGE_CENTER), Vec3::from_array(BRIDGE_RADII)),
        ])
    }

    #[inline]
    pub fn contains(&self, p: Vec3) -> bool {
        self.ellipsoids.iter().any(|e| e.contains(p))
    }
}

impl Default for Boundary {
    fn default() -> Self {
        Self::brain()
    }
}
