//! Stress scoring and intervention selection.
//!
//! Everything in this module is pure: a [`StressInput`] maps to a
//! [`StressScore`] by a fixed weighted formula, the score maps to an
//! [`InterventionBand`], and the band's message pool is sampled with a
//! caller-supplied random source.

pub mod assessment;
pub mod intervention;
pub mod score;

pub use assessment::{assess, StressAssessment};
pub use intervention::{choose_intervention, InterventionBand};
pub use score::{calculate_stress_score, StressInput, StressScore};
