//! Intensity-driven neuron sizing and glow, handed to the renderer as data.

use serde::Serialize;

use crate::color::Rgb;
use crate::constants::*;
use crate::topic::Topic;

/// Color of a neuron that carries no topic.
pub const EMPTY_NEURON_COLOR: Rgb = Rgb::new(0x66, 0x66, 0x66);

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct NeuronStyle {
    pub radius: f32,
    pub emissive: f32,
    pub color: Rgb,
}

/// Sphere radius; hotter topics render larger.
pub fn neuron_radius(topic: Option<&Topic>) -> f32 {
    match topic {
        Some(t) => NEURON_BASE_RADIUS + t.intensity * NEURON_INTENSITY_RADIUS,
        None => EMPTY_NEURON_RADIUS,
    }
}

/// Emissive strength. Hovering always lights a neuron fully.
pub fn emissive_intensity(topic: Option<&Topic>, hovered: bool) -> f32 {
    match (hovered, topic) {
        (true, _) => HOVER_EMISSIVE,
        (false, Some(t)) => t.intensity * EMISSIVE_INTENSITY_SCALE,
        (false, None) => EMPTY_EMISSIVE,
    }
}

pub fn neuron_color(topic: Option<&Topic>) -> Rgb {
    topic.map_or(EMPTY_NEURON_COLOR, |t| t.category.color())
}

pub fn neuron_style(topic: Option<&Topic>, hovered: bool) -> NeuronStyle {
    NeuronStyle {
        radius: neuron_radius(topic),
        emissive: emissive_intensity(topic, hovered),
        color: neuron_color(topic),
    }
}
