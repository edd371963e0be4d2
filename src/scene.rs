use brain_core::{build_connections, neuron_style, Connection, NeuronStyle, Topic};
use serde::Serialize;

/// Everything the JS renderer needs to draw one neuron.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NeuronView {
    pub topic_id: String,
    pub position: [f32; 3],
    #[serde(flatten)]
    pub style: NeuronStyle,
}

/// Neurons plus the connection lines between them for one refresh.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SceneData {
    pub neurons: Vec<NeuronView>,
    pub connections: Vec<Connection>,
}

/// Styled neurons for every positioned topic; `hovered_id` lights one up.
pub fn neuron_views(topics: &[Topic], hovered_id: Option<&str>) -> Vec<NeuronView> {
    topics
        .iter()
        .filter_map(|t| {
            let position = t.position_vec3()?.to_array();
            let hovered = hovered_id == Some(t.id.as_str());
            Some(NeuronView {
                topic_id: t.id.clone(),
                position,
                style: neuron_style(Some(t), hovered),
            })
        })
        .collect()
}

pub fn scene_data(topics: &[Topic], hovered_id: Option<&str>, show_connections: bool) -> SceneData {
    SceneData {
        neurons: neuron_views(topics, hovered_id),
        connections: if show_connections {
            build_connections(topics)
        } else {
            Vec::new()
        },
    }
}
