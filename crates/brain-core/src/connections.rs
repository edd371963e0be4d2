//! Lines drawn between related neurons.
//!
//! Two topics are related when they share a category, a source or a similar
//! intensity. Only strongly related pairs that also sit close together in the
//! brain get a connection.

use serde::Serialize;

use crate::color::Rgb;
use crate::constants::*;
use crate::topic::{Category, Topic};

/// A line between topic `from` and topic `to` (indices into the input slice).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub from: usize,
    pub to: usize,
    pub start: [f32; 3],
    pub end: [f32; 3],
    pub strength: f32,
    pub color: Rgb,
    pub opacity: f32,
}

/// Relatedness score in `[0, 1]`.
pub fn similarity(a: &Topic, b: &Topic) -> f32 {
    let mut score = 0.0;
    if a.category == b.category {
        score += SIMILARITY_SAME_CATEGORY;
    }
    if a.source == b.source {
        score += SIMILARITY_SAME_SOURCE;
    }
    if (a.intensity - b.intensity).abs() < CLOSE_INTENSITY_DELTA {
        score += SIMILARITY_CLOSE_INTENSITY;
    }
    score
}

/// Same-category links use the category color, mixed links blend both.
pub fn connection_color(a: Category, b: Category) -> Rgb {
    if a == b {
        a.color()
    } else {
        a.color().blend(b.color())
    }
}

#[inline]
pub fn connection_opacity(strength: f32) -> f32 {
    (strength * CONNECTION_OPACITY_SCALE).min(CONNECTION_OPACITY_MAX)
}

/// All connections between positioned topics, ordered by `(from, to)`.
///
/// Topics without a finite position are skipped.
pub fn build_connections(topics: &[Topic]) -> Vec<Connection> {
    let placed: Vec<_> = topics
        .iter()
        .enumerate()
        .filter_map(|(i, t)| t.position_vec3().map(|p| (i, t, p)))
        .collect();

    let mut lines = Vec::new();
    for (k, &(i, a, pa)) in placed.iter().enumerate() {
        for &(j, b, pb) in &placed[k + 1..] {
            let strength = similarity(a, b);
            if strength < CONNECTION_MIN_SIMILARITY {
                continue;
            }
            if pa.distance(pb) >= CONNECTION_MAX_DISTANCE {
                continue;
            }
            lines.push(Connection {
                from: i,
                to: j,
                start: pa.to_array(),
                end: pb.to_array(),
                strength,
                color: connection_color(a.category, b.category),
                opacity: connection_opacity(strength),
            });
        }
    }
    lines
}
