use glam::Vec3;
use rand::prelude::*;
use serde::Serialize;

use crate::config::PlacementConfig;
use crate::error::ConfigError;
use crate::quota::region_quotas;
use crate::sampling::candidate_in;

/// How one region fared during a placement pass.
///
/// Fields:
/// - `quota`: neurons the region was asked for
/// - `placed`: neurons actually accepted (less than `quota` on a partial fill)
/// - `attempts`: candidates drawn, never more than `quota * attempts_per_point`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegionFill {
    pub name: String,
    pub quota: usize,
    pub placed: usize,
    pub attempts: usize,
}

impl RegionFill {
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.placed >= self.quota
    }
}

/// Accepted neuron positions plus a per-region fill report.
///
/// `points` are in region order, then insertion order within a region.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Placement {
    pub points: Vec<Vec3>,
    pub regions: Vec<RegionFill>,
}

impl Placement {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Total of all region quotas.
    pub fn requested(&self) -> usize {
        self.regions.iter().map(|r| r.quota).sum()
    }

    /// True when every region reached its quota.
    pub fn is_complete(&self) -> bool {
        self.regions.iter().all(RegionFill::is_complete)
    }

    /// The slice of `points` contributed by region `index`.
    pub fn region_points(&self, index: usize) -> &[Vec3] {
        if index >= self.regions.len() {
            return &[];
        }
        let start: usize = self.regions[..index].iter().map(|r| r.placed).sum();
        &self.points[start..start + self.regions[index].placed]
    }

    pub fn into_points(self) -> Vec<Vec3> {
        self.points
    }
}

/// Upper bound on the up-front point reservation.
const MAX_RESERVED_POINTS: usize = 1024;

/// Place `count` neurons using `config` and randomness drawn from `rng`.
///
/// Each region draws candidates from its sampling shell until it reaches its
/// quota or exhausts `quota * attempts_per_point` attempts. A candidate is kept
/// only if it lies inside the boundary and is at least `min_separation` away
/// from every neuron accepted so far, including other regions' neurons.
/// Running out of attempts is not an error: the region is simply short.
///
/// `config` must already pass [`PlacementConfig::validate`]; a NaN spacing
/// would otherwise accept every candidate. [`NeuronPlacer`] checks this once
/// at construction.
pub fn generate_with<R: Rng + ?Sized>(
    count: usize,
    config: &PlacementConfig,
    rng: &mut R,
) -> Placement {
    debug_assert!(
        config.validate().is_ok(),
        "generate_with called with an invalid config"
    );
    let quotas = region_quotas(count, config);
    let min_separation_sq = config.min_separation * config.min_separation;

    // Only a few dozen points fit at the default spacing, so the requested
    // total is no guide to the final length.
    let reserve = quotas.iter().sum::<usize>().min(MAX_RESERVED_POINTS);
    let mut points: Vec<Vec3> = Vec::with_capacity(reserve);
    let mut regions = Vec::with_capacity(config.regions.len());

    for (region, &quota) in config.regions.iter().zip(quotas.iter()) {
        let budget = config.attempt_budget(quota);
        let mut placed = 0usize;
        let mut attempts = 0usize;
        while placed < quota && attempts < budget {
            attempts += 1;
            let candidate = candidate_in(rng, region, &config.radial);
            if !config.boundary.contains(candidate) {
                continue;
            }
            if points
                .iter()
                .any(|p| p.distance_squared(candidate) < min_separation_sq)
            {
                continue;
            }
            points.push(candidate);
            placed += 1;
        }
        if placed < quota {
            log::debug!(
                "[placement] region {} short: placed {}/{} after {} attempts",
                region.name,
                placed,
                quota,
                attempts
            );
        }
        regions.push(RegionFill {
            name: region.name.clone(),
            quota,
            placed,
            attempts,
        });
    }

    log::trace!(
        "[placement] requested={} quotas={:?} placed={}",
        count,
        quotas.as_slice(),
        points.len()
    );
    Placement { points, regions }
}

/// Place `count` neurons in the default brain layout using the thread RNG.
pub fn generate_brain_neurons(count: usize) -> Vec<Vec3> {
    generate_with(count, &PlacementConfig::default(), &mut thread_rng()).into_points()
}

/// Reusable placer owning a validated config and its own seeded RNG.
///
/// Typical usage:
/// - Construct with `NeuronPlacer::new(config, seed)` for reproducible layouts,
///   or `NeuronPlacer::from_entropy(config)` for a fresh layout each session
/// - Call `place(count)` once per data refresh
/// - Use `reseed` to restart the random sequence
pub struct NeuronPlacer {
    config: PlacementConfig,
    rng: StdRng,
}

impl NeuronPlacer {
    pub fn new(config: PlacementConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn from_entropy(config: PlacementConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            rng: StdRng::from_entropy(),
        })
    }

    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    /// Reseed the RNG. If `seed` is None, a new random seed is chosen.
    pub fn reseed(&mut self, seed: Option<u64>) {
        let new_seed = seed.unwrap_or_else(|| self.rng.gen());
        self.rng = StdRng::seed_from_u64(new_seed);
    }

    pub fn place(&mut self, count: usize) -> Placement {
        generate_with(count, &self.config, &mut self.rng)
    }
}
