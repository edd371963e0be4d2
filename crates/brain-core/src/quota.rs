//! Splitting a requested neuron count across placement regions.

use smallvec::SmallVec;

use crate::config::{FloorPolicy, PlacementConfig, RegionSpec, Share};

/// Per-region quotas, in region order. Four regions fit inline.
pub type Quotas = SmallVec<[usize; 4]>;

/// Split `count` across `config.regions`.
///
/// Fraction regions get `max(floor, floor(count * share))` and the remainder
/// region absorbs the rest (the last region does when none is marked
/// `Remainder`). Under [`FloorPolicy::Clamped`] the floors are dropped whenever
/// they would push the total above `count`, so the result always sums to
/// exactly `count`.
pub fn region_quotas(count: usize, config: &PlacementConfig) -> Quotas {
    let floored = split(count, &config.regions, true);
    match config.floor_policy {
        FloorPolicy::Strict => floored,
        FloorPolicy::Clamped if floored.iter().sum::<usize>() <= count => floored,
        FloorPolicy::Clamped => split(count, &config.regions, false),
    }
}

fn split(count: usize, regions: &[RegionSpec], with_floors: bool) -> Quotas {
    let floor_of = |r: &RegionSpec| if with_floors { r.floor } else { 0 };

    let mut quotas: Quotas = regions
        .iter()
        .map(|r| match r.share {
            Share::Fraction(share) => {
                let proportional = (count as f64 * f64::from(share)).floor() as usize;
                floor_of(r).max(proportional)
            }
            Share::Remainder => 0,
        })
        .collect();

    let rest = count.saturating_sub(quotas.iter().sum());
    match regions.iter().position(|r| r.share == Share::Remainder) {
        Some(i) => quotas[i] = floor_of(&regions[i]).max(rest),
        None => {
            if let Some(last) = quotas.last_mut() {
                *last += rest;
            }
        }
    }
    quotas
}
