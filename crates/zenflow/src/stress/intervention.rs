use super::score::StressScore;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Severity tier that decides which message pool is sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterventionBand {
    Calm,
    Light,
    Medium,
    High,
}

/// Bands in ascending order with their exclusive upper bound. The last band
/// has no bound and catches everything else.
const BAND_TABLE: [(InterventionBand, Option<f64>); 4] = [
    (InterventionBand::Calm, Some(30.0)),
    (InterventionBand::Light, Some(60.0)),
    (InterventionBand::Medium, Some(80.0)),
    (InterventionBand::High, None),
];

const CALM_MESSAGES: [&str; 3] = [
    "You're calm! Keep it up.",
    "Everything seems smooth — enjoy the moment.",
    "Great job staying relaxed today!",
];

const LIGHT_MESSAGES: [&str; 3] = [
    "Try a quick 1-minute breathing exercise.",
    "Stretch your arms and shoulders for a minute.",
    "Take a short walk around the room.",
];

const MEDIUM_MESSAGES: [&str; 3] = [
    "Take a 3-minute break away from your screen.",
    "Listen to a relaxing song.",
    "Try a short guided meditation.",
];

const HIGH_MESSAGES: [&str; 3] = [
    "High stress detected — take a 5-minute walk or hydration break.",
    "Step outside for fresh air and deep breaths.",
    "Do a short body scan to release tension.",
];

impl InterventionBand {
    pub const ALL: [InterventionBand; 4] = [
        InterventionBand::Calm,
        InterventionBand::Light,
        InterventionBand::Medium,
        InterventionBand::High,
    ];

    pub fn for_score(score: StressScore) -> Self {
        let value = score.value();
        BAND_TABLE
            .iter()
            .find(|(_, upper)| upper.map_or(true, |bound| value < bound))
            .map(|(band, _)| *band)
            .unwrap_or(InterventionBand::High)
    }

    pub fn messages(self) -> &'static [&'static str] {
        match self {
            InterventionBand::Calm => &CALM_MESSAGES,
            InterventionBand::Light => &LIGHT_MESSAGES,
            InterventionBand::Medium => &MEDIUM_MESSAGES,
            InterventionBand::High => &HIGH_MESSAGES,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InterventionBand::Calm => "calm",
            InterventionBand::Light => "light",
            InterventionBand::Medium => "medium",
            InterventionBand::High => "high",
        }
    }
}

/// Picks one message for the score's band, uniformly at random.
///
/// Each call draws independently from `rng`; repeats across calls are
/// allowed.
pub fn choose_intervention<R>(score: StressScore, rng: &mut R) -> &'static str
where
    R: Rng + ?Sized,
{
    let messages = InterventionBand::for_score(score).messages();
    // Every band table holds three entries, so `choose` only sees non-empty slices.
    messages.choose(rng).copied().unwrap_or(messages[0])
}
