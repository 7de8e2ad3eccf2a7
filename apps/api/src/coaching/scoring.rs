//! Scoring Simulator: bounded pseudo-random scores and suggestion subsets
//! for the mock path.
//!
//! Every draw goes through a caller-supplied `rand::Rng`, so production code
//! passes `thread_rng()` and tests pass a seeded `StdRng` for deterministic
//! runs. No determinism is promised between production calls; the ranges are
//! the contract.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::interview::InterviewFeedback;

/// Simulated resume-analysis scores. Bands sit inside [0,100] and above the
/// UI's 60-point amber threshold so mock results render like plausible ones.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedScores {
    pub overall: u8,
    pub ats: u8,
    pub content: u8,
    pub formatting: u8,
}

/// Draws the four analysis scores, each independently and uniformly.
pub fn draw_resume_scores<R: Rng>(rng: &mut R) -> SimulatedScores {
    SimulatedScores {
        overall: rng.gen_range(70..=95),
        ats: rng.gen_range(65..=95),
        content: rng.gen_range(70..=95),
        formatting: rng.gen_range(65..=95),
    }
}

/// Draws one interview feedback record.
///
/// Axis ranges are fixed: clarity, relevance and overall are uniform in
/// [7,9]; confidence is uniform in [6,9].
pub fn draw_feedback<R: Rng>(rng: &mut R, suggestion_pool: &[&str]) -> InterviewFeedback {
    InterviewFeedback {
        clarity: rng.gen_range(7..=9),
        relevance: rng.gen_range(7..=9),
        confidence: rng.gen_range(6..=9),
        overall: rng.gen_range(7..=9),
        suggestions: pick_suggestions(rng, suggestion_pool),
    }
}

/// Uniformly shuffles the fixed candidate pool and takes the first k items,
/// k uniform in {2,3}. Shuffling a copy means no duplicates are possible.
pub fn pick_suggestions<R: Rng>(rng: &mut R, pool: &[&str]) -> Vec<String> {
    let mut shuffled: Vec<&str> = pool.to_vec();
    shuffled.shuffle(rng);
    let k = rng.gen_range(2..=3).min(shuffled.len());
    shuffled.truncate(k);
    shuffled.into_iter().map(String::from).collect()
}
