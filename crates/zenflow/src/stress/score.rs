use serde::Serialize;
use std::fmt;

/// Mood value that contributes no stress.
pub const MOOD_CEILING: f64 = 100.0;
/// Typing speed (words per minute) treated as the relaxed baseline.
pub const TYPING_BASELINE_WPM: f64 = 100.0;
/// Screen hours are scaled onto the same range as the other components.
pub const SCREEN_TIME_SCALE: f64 = 10.0;

pub const MOOD_WEIGHT: f64 = 0.5;
pub const SCREEN_TIME_WEIGHT: f64 = 0.3;
pub const TYPING_WEIGHT: f64 = 0.2;

/// Self-reported signals for a single assessment.
///
/// Ranges are conventional only: mood is usually 0-100 and screen time is
/// non-negative, but nothing here rejects values outside those ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StressInput {
    pub mood: i64,
    pub screen_time: f64,
    pub typing_speed: i64,
}

impl StressInput {
    pub fn new(mood: i64, screen_time: f64, typing_speed: i64) -> Self {
        Self {
            mood,
            screen_time,
            typing_speed,
        }
    }

    pub fn score(&self) -> StressScore {
        calculate_stress_score(self)
    }
}

/// Weighted stress score, rounded to two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct StressScore(f64);

impl StressScore {
    /// Wraps an already computed value, rounding it to two decimals.
    pub fn new(value: f64) -> Self {
        Self(round_hundredths(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<StressScore> for f64 {
    fn from(score: StressScore) -> Self {
        score.0
    }
}

impl fmt::Display for StressScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn calculate_stress_score(input: &StressInput) -> StressScore {
    let mood_component = MOOD_CEILING - input.mood as f64;
    let screen_component = input.screen_time * SCREEN_TIME_SCALE;
    let typing_component = (TYPING_BASELINE_WPM - input.typing_speed as f64).abs();

    let raw = MOOD_WEIGHT * mood_component
        + SCREEN_TIME_WEIGHT * screen_component
        + TYPING_WEIGHT * typing_component;

    StressScore::new(raw)
}

// Rounds from the exact decimal expansion of `value`; scaling by 100 first
// can manufacture a tie that the real value does not have. Fixed-precision
// formatting rounds exact ties to even.
fn round_hundredths(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
