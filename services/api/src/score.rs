use crate::routes::StressResponse;
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use zenflow::error::AppError;
use zenflow::stress::{assess, StressAssessment, StressInput};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Mood from 0 (very bad) to 100 (very good)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) mood: i64,
    /// Hours spent on screens today
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) screen_time: f64,
    /// Typing speed in words per minute
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) typing_speed: i64,
    /// Seed the intervention pick for reproducible output
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Print the `/stress` JSON payload instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let input = StressInput::new(args.mood, args.screen_time, args.typing_speed);
    let assessment = score_with_seed(&input, args.seed);

    if args.json {
        println!("{}", render_json(&assessment)?);
        return Ok(());
    }

    println!("ZenFlow stress check");
    println!(
        "- mood {} | screen time {}h | typing {} wpm",
        input.mood, input.screen_time, input.typing_speed
    );
    println!(
        "Stress score: {} ({})",
        assessment.score,
        assessment.band.label()
    );
    println!("Suggestion: {}", assessment.intervention);
    Ok(())
}

fn render_json(assessment: &StressAssessment) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(&StressResponse::from(assessment))?)
}

fn score_with_seed(input: &StressInput, seed: Option<u64>) -> StressAssessment {
    match seed {
        Some(seed) => assess(input, &mut StdRng::seed_from_u64(seed)),
        None => assess(input, &mut rand::thread_rng()),
    }
}
