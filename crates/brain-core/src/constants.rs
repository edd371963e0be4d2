use glam::Vec3;

// Shared placement/visual tuning constants used by both web and native frontends.

// Scene layout
pub const Y_OFFSET: f32 = 0.8; // lifts every neuron into the main brain volume

// Placement
pub const MIN_SEPARATION: f32 = 0.36; // world units between any two neurons
pub const ATTEMPTS_PER_POINT: usize = 200; // rejection-sampling budget per quota slot
pub const RADIAL_INNER: f32 = 0.4; // radial fraction lower bound
pub const RADIAL_SPAN: f32 = 0.35; // inner + span caps samples at 75% of region radius

// Boundary (centers before Y_OFFSET)
pub const LEFT_HEMISPHERE_CENTER: [f32; 3] = [-1.0, 0.2, 0.0];
pub const RIGHT_HEMISPHERE_CENTER: [f32; 3] = [1.0, 0.2, 0.0];
pub const BRIDGE_CENTER: [f32; 3] = [0.0, 0.2, 0.0];
pub const HEMISPHERE_RADII: [f32; 3] = [1.5, 1.3, 1.0];
pub const BRIDGE_RADII: [f32; 3] = [0.8, 0.55, 0.85];

// Regions (centers before Y_OFFSET)
pub const RIGHT_FRONTAL_CENTER: [f32; 3] = [1.0, 0.2, 0.0];
pub const LEFT_FRONTAL_CENTER: [f32; 3] = [-1.0, 0.2, 0.0];
pub const CENTRAL_CORE_CENTER: [f32; 3] = [0.0, -0.1, 0.0];
pub const OCCIPITAL_CENTER: [f32; 3] = [0.0, 0.05, -1.0];

pub const FRONTAL_RADIUS: f32 = 1.2;
pub const CENTRAL_CORE_RADIUS: f32 = 1.35;
pub const OCCIPITAL_RADIUS: f32 = 0.95;

pub const FRONTAL_SHARE: f32 = 0.25;
pub const CENTRAL_CORE_SHARE: f32 = 0.30; // occipital takes whatever is left

pub const FRONTAL_FLOOR: usize = 6;
pub const CENTRAL_CORE_FLOOR: usize = 6;
pub const OCCIPITAL_FLOOR: usize = 4;

// Connections
pub const SIMILARITY_SAME_CATEGORY: f32 = 0.6;
pub const SIMILARITY_SAME_SOURCE: f32 = 0.3;
pub const SIMILARITY_CLOSE_INTENSITY: f32 = 0.1;
pub const CLOSE_INTENSITY_DELTA: f32 = 0.2; // |a - b| below this counts as "trending together"
pub const CONNECTION_MIN_SIMILARITY: f32 = 0.6;
pub const CONNECTION_MAX_DISTANCE: f32 = 4.0;
pub const CONNECTION_OPACITY_SCALE: f32 = 0.45;
pub const CONNECTION_OPACITY_MAX: f32 = 0.6;

// Neuron sizing and glow
pub const NEURON_BASE_RADIUS: f32 = 0.065;
pub const NEURON_INTENSITY_RADIUS: f32 = 0.09; // added at full intensity
pub const EMPTY_NEURON_RADIUS: f32 = 0.05;
pub const EMISSIVE_INTENSITY_SCALE: f32 = 0.5;
pub const HOVER_EMISSIVE: f32 = 0.8;
pub const EMPTY_EMISSIVE: f32 = 0.1;

/// Lift a pre-offset layout coordinate into world space.
#[inline]
pub fn lifted(p: [f32; 3]) -> Vec3 {
    Vec3::from_array(p) + Vec3::new(0.0, Y_OFFSET, 0.0)
}
