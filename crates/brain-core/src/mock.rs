//! Built-in sample topics used when no live feed is available.

use chrono::{DateTime, Duration, Utc};

use crate::layout::assign_positions;
use crate::placement::NeuronPlacer;
use crate::topic::{Category, Topic};

struct Sample {
    name: &'static str,
    category: Category,
    intensity: f32,
    summary: &'static str,
    source: &'static str,
    age_minutes: i64,
}

const SAMPLES: &[Sample] = &[
    Sample {
        name: "AI Chip Breakthrough",
        category: Category::Tech,
        intensity: 0.9,
        summary: "New neural processing units achieve 100x performance gains in machine learning tasks.",
        source: "Reddit r/technology",
        age_minutes: 60,
    },
    Sample {
        name: "Climate Summit 2025",
        category: Category::Politics,
        intensity: 0.75,
        summary: "World leaders gather to discuss aggressive carbon reduction targets.",
        source: "Reddit r/worldnews",
        age_minutes: 120,
    },
    Sample {
        name: "Taylor Swift Tour",
        category: Category::Entertainment,
        intensity: 0.85,
        summary: "Record-breaking concert series announced for Asian cities.",
        source: "Reddit r/popculture",
        age_minutes: 30,
    },
    Sample {
        name: "Mars Colony Progress",
        category: Category::Science,
        intensity: 0.7,
        summary: "SpaceX completes successful test of life support systems for Mars mission.",
        source: "Reddit r/space",
        age_minutes: 90,
    },
    Sample {
        name: "Cricket World Cup",
        category: Category::Sports,
        intensity: 0.95,
        summary: "India advances to finals with stunning victory over Australia.",
        source: "Reddit r/cricket",
        age_minutes: 15,
    },
    Sample {
        name: "Quantum Computing",
        category: Category::Tech,
        intensity: 0.65,
        summary: "IBM announces new quantum processor with 1000+ qubits.",
        source: "Reddit r/Futurology",
        age_minutes: 180,
    },
    Sample {
        name: "Electric Vehicle Sales",
        category: Category::Tech,
        intensity: 0.6,
        summary: "EVs surpass 50% of new car sales in Europe for first time.",
        source: "Reddit r/electricvehicles",
        age_minutes: 240,
    },
    Sample {
        name: "New Movie Trailer",
        category: Category::Entertainment,
        intensity: 0.8,
        summary: "Highly anticipated sci-fi sequel drops surprise trailer.",
        source: "Reddit r/movies",
        age_minutes: 45,
    },
];

/// Number of built-in sample topics.
pub const MOCK_TOPIC_COUNT: usize = SAMPLES.len();

/// The sample topics, ids `topic-0`.., timestamped relative to `now` and
/// laid out with `placer`.
pub fn mock_topics(now: DateTime<Utc>, placer: &mut NeuronPlacer) -> Vec<Topic> {
    let mut topics: Vec<Topic> = SAMPLES
        .iter()
        .enumerate()
        .map(|(i, s)| Topic {
            id: format!("topic-{i}"),
            name: s.name.to_string(),
            category: s.category,
            intensity: s.intensity,
            summary: s.summary.to_string(),
            ai_summary: None,
            source: s.source.to_string(),
            timestamp: now - Duration::minutes(s.age_minutes),
            position: None,
            url: None,
            reddit_data: None,
        })
        .collect();
    let placement = placer.place(topics.len());
    assign_positions(&mut topics, &placement.points);
    topics
}
