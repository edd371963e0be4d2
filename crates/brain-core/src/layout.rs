use fnv::FnvHashMap;
use glam::Vec3;

use crate::placement::{NeuronPlacer, Placement};
use crate::topic::{Category, Topic};

/// Give topic `i` the position `points[i]`.
///
/// Topics past the end of `points` (a short placement) lose any previous
/// position; extra points are ignored.
pub fn assign_positions(topics: &mut [Topic], points: &[Vec3]) {
    for (i, topic) in topics.iter_mut().enumerate() {
        topic.position = points.get(i).map(|p| p.to_array());
    }
}

/// Place one neuron per topic and assign the positions in order.
pub fn layout_topics(topics: &mut [Topic], placer: &mut NeuronPlacer) -> Placement {
    let placement = placer.place(topics.len());
    assign_positions(topics, &placement.points);
    if placement.len() < topics.len() {
        log::warn!(
            "[layout] only {} of {} topics received a position",
            placement.len(),
            topics.len()
        );
    }
    placement
}

/// Number of topics per category. Categories with no topics are absent.
pub fn category_counts(topics: &[Topic]) -> FnvHashMap<Category, usize> {
    let mut counts = FnvHashMap::default();
    for topic in topics {
        *counts.entry(topic.category).or_insert(0) += 1;
    }
    counts
}
