#![cfg(target_arch = "wasm32")]
use anyhow::Context;
use brain_core::{
    build_connections, layout_topics, mock_topics as sample_topics, Category, NeuronPlacer,
    PlacementConfig, Topic, TrendsResponse,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use wasm_bindgen::prelude::*;

mod scene;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("brain-web starting");
    Ok(())
}

// Errors cross the JS boundary as plain strings with their context chain.
fn to_js(err: anyhow::Error) -> JsValue {
    log::error!("{:#}", err);
    JsValue::from_str(&format!("{:#}", err))
}

fn placer() -> anyhow::Result<NeuronPlacer> {
    NeuronPlacer::from_entropy(PlacementConfig::default()).context("default placement config")
}

fn parse_topics(topics_json: &str) -> anyhow::Result<Vec<Topic>> {
    serde_json::from_str(topics_json).context("topics JSON")
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .context("serialize response")
        .map_err(to_js)
}

/// Neuron positions for `count` topics as a flat `[x0, y0, z0, x1, ...]` array.
#[wasm_bindgen]
pub fn generate_brain_neurons(count: u32) -> Vec<f32> {
    brain_core::generate_brain_neurons(count as usize)
        .into_iter()
        .flat_map(|p| p.to_array())
        .collect()
}

/// Take a trends payload (`{ topics, updatedAt }`) and return it with every
/// topic's `position` filled in.
#[wasm_bindgen]
pub fn layout_trends(trends_json: &str) -> Result<String, JsValue> {
    let mut trends: TrendsResponse = serde_json::from_str(trends_json)
        .context("trends JSON")
        .map_err(to_js)?;
    let mut placer = placer().map_err(to_js)?;
    let placement = layout_topics(&mut trends.topics, &mut placer);
    log::info!(
        "[layout] {} topics, {} placed, updated {}",
        trends.topics.len(),
        placement.len(),
        trends.updated_at
    );
    to_json(&trends)
}

/// Connection lines between the positioned topics in a JSON topic array.
#[wasm_bindgen]
pub fn topic_connections(topics_json: &str) -> Result<String, JsValue> {
    let topics = parse_topics(topics_json).map_err(to_js)?;
    to_json(&build_connections(&topics))
}

/// Styled neurons (and optionally connections) for a JSON topic array.
#[wasm_bindgen]
pub fn topic_scene(
    topics_json: &str,
    hovered_id: Option<String>,
    show_connections: bool,
) -> Result<String, JsValue> {
    let topics = parse_topics(topics_json).map_err(to_js)?;
    to_json(&scene::scene_data(
        &topics,
        hovered_id.as_deref(),
        show_connections,
    ))
}

/// Built-in sample topics, already laid out, for when the live feed is down.
#[wasm_bindgen]
pub fn mock_topics() -> Result<String, JsValue> {
    let now = DateTime::<Utc>::from_timestamp_millis(js_sys::Date::now() as i64)
        .context("browser clock out of range")
        .map_err(to_js)?;
    let mut placer = placer().map_err(to_js)?;
    to_json(&sample_topics(now, &mut placer))
}

#[derive(Serialize)]
struct PaletteEntry {
    id: &'static str,
    label: &'static str,
    color: String,
}

/// Category ids, labels and colors in filter-panel order.
#[wasm_bindgen]
pub fn category_palette() -> Result<String, JsValue> {
    let entries: Vec<PaletteEntry> = Category::ALL
        .iter()
        .map(|c| PaletteEntry {
            id: c.id(),
            label: c.label(),
            color: c.color().to_hex(),
        })
        .collect();
    to_json(&entries)
}
