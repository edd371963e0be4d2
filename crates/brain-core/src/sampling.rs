use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use crate::config::{RadialProfile, RegionSpec};

/// Uniformly distributed direction on the unit sphere.
///
/// The polar angle comes from `acos(2u - 1)` rather than a uniform angle so
/// samples do not bunch up at the poles.
pub fn unit_direction<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let theta = rng.gen::<f32>() * TAU;
    let phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    Vec3::new(sin_phi * cos_theta, sin_phi * sin_theta, cos_phi)
}

/// Fraction of a region radius, biased toward the outer end of the shell
/// `[inner, inner + span)`.
#[inline]
pub fn radial_fraction<R: Rng + ?Sized>(rng: &mut R, profile: &RadialProfile) -> f32 {
    profile.inner + profile.span * rng.gen::<f32>().cbrt()
}

/// One candidate neuron position inside `region`'s sampling shell.
pub fn candidate_in<R: Rng + ?Sized>(
    rng: &mut R,
    region: &RegionSpec,
    profile: &RadialProfile,
) -> Vec3 {
    let direction = unit_direction(rng);
    let distance = radial_fraction(rng, profile) * region.radius;
    region.center + direction * distance
}
