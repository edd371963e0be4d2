//! Topic records exchanged with the UI layer.
//!
//! Field names follow the UI's camelCase JSON so a fetched trends payload
//! deserializes directly into these types.

use chrono::{DateTime, Utc};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::color::Rgb;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Tech,
    Politics,
    Entertainment,
    Science,
    Sports,
    Other,
}

impl Category {
    /// All categories in the order the filter panel lists them.
    pub const ALL: [Category; 6] = [
        Category::Tech,
        Category::Politics,
        Category::Entertainment,
        Category::Science,
        Category::Sports,
        Category::Other,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            Category::Tech => "tech",
            Category::Politics => "politics",
            Category::Entertainment => "entertainment",
            Category::Science => "science",
            Category::Sports => "sports",
            Category::Other => "other",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::Tech => "Technology",
            Category::Politics => "Politics",
            Category::Entertainment => "Entertainment",
            Category::Science => "Science",
            Category::Sports => "Sports",
            Category::Other => "Other",
        }
    }

    /// Neuron and connection color for this category.
    pub const fn color(self) -> Rgb {
        match self {
            Category::Tech => Rgb::new(0x00, 0xd4, 0xff),
            Category::Politics => Rgb::new(0xff, 0x47, 0x57),
            Category::Entertainment => Rgb::new(0xff, 0xa5, 0x02),
            Category::Science => Rgb::new(0x1e, 0x90, 0xff),
            Category::Sports => Rgb::new(0x2e, 0xd5, 0x73),
            Category::Other => Rgb::new(0xa2, 0x9b, 0xfe),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedditData {
    pub score: i64,
    pub comments: i64,
}

/// One trending item rendered as a neuron.
///
/// `intensity` is a 0..1 popularity measure. `position` is empty until the
/// topic has been laid out, and stays empty if placement ran short.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub intensity: f32,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_summary: Option<String>,
    pub source: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<[f32; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reddit_data: Option<RedditData>,
}

impl Topic {
    /// World-space position, if assigned and finite.
    pub fn position_vec3(&self) -> Option<Vec3> {
        self.position
            .map(Vec3::from_array)
            .filter(|p| p.is_finite())
    }
}

/// Payload of one trends refresh.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendsResponse {
    pub topics: Vec<Topic>,
    pub updated_at: DateTime<Utc>,
}
