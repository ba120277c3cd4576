use super::intervention::{choose_intervention, InterventionBand};
use super::score::{calculate_stress_score, StressInput, StressScore};
use rand::Rng;
use serde::Serialize;

/// Score, band, and suggested intervention for one input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StressAssessment {
    pub score: StressScore,
    pub band: InterventionBand,
    pub intervention: &'static str,
}

pub fn assess<R>(input: &StressInput, rng: &mut R) -> StressAssessment
where
    R: Rng + ?Sized,
{
    let score = calculate_stress_score(input);
    StressAssessment {
        score,
        band: InterventionBand::for_score(score),
        intervention: choose_intervention(score, rng),
    }
}
