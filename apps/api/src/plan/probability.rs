//! Success probability — "current path" vs "with guidance".
//!
//! Two derivation modes:
//! - `Additive`: base score plus fixed increments per positive signal, capped at 80;
//!   the optimized score is 85 plus an offset drawn from an injected source.
//! - `FixedDefault`: 35 / 90.
//!
//! A caller-supplied override always wins over either mode.

use std::str::FromStr;
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::answers::typed::{ApplicationVolume, QuizAnswers, ResumeStrategy};
use crate::config::UnknownSetting;

pub const BASE_SCORE: u8 = 15;
pub const CURRENT_CAP: u8 = 80;
pub const FIXED_CURRENT: u8 = 35;
pub const FIXED_OPTIMIZED: u8 = 90;
pub const OPTIMIZED_FLOOR: u8 = 85;
/// Offsets are drawn from `0..OPTIMIZED_SPREAD`, giving 85–92.
pub const OPTIMIZED_SPREAD: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessProbability {
    pub current: u8,
    pub optimized: u8,
}

/// Caller-supplied pair. Accepts the quiz's `withSystem` spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ProbabilityOverride {
    pub current: i64,
    #[serde(alias = "withSystem", alias = "with_system")]
    pub optimized: i64,
}

impl From<ProbabilityOverride> for SuccessProbability {
    fn from(o: ProbabilityOverride) -> Self {
        SuccessProbability {
            current: o.current.clamp(0, 100) as u8,
            optimized: o.optimized.clamp(0, 100) as u8,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbabilityMode {
    #[default]
    Additive,
    FixedDefault,
}

impl FromStr for ProbabilityMode {
    type Err = UnknownSetting;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "additive" => Ok(ProbabilityMode::Additive),
            "fixed" | "fixed_default" => Ok(ProbabilityMode::FixedDefault),
            other => Err(UnknownSetting::new("PROBABILITY_MODE", other)),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Optimized-score sources
// ────────────────────────────────────────────────────────────────────────────

/// Supplies the "with guidance" score. Carried in `PlanEngine` as
/// `Arc<dyn OptimizedScoreSource>` so tests can pin the value.
pub trait OptimizedScoreSource: Send + Sync {
    fn next_score(&self) -> u8;
    fn backend(&self) -> &'static str;
}

/// Fresh thread-local randomness on every call.
pub struct ThreadRngScore;

impl OptimizedScoreSource for ThreadRngScore {
    fn next_score(&self) -> u8 {
        OPTIMIZED_FLOOR + rand::thread_rng().gen_range(0..OPTIMIZED_SPREAD)
    }

    fn backend(&self) -> &'static str {
        "thread_rng"
    }
}

/// Reproducible sequence from a fixed seed.
pub struct SeededScore {
    rng: Mutex<StdRng>,
}

impl SeededScore {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl OptimizedScoreSource for SeededScore {
    fn next_score(&self) -> u8 {
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        OPTIMIZED_FLOOR + rng.gen_range(0..OPTIMIZED_SPREAD)
    }

    fn backend(&self) -> &'static str {
        "seeded"
    }
}

/// Constant score, clamped into the optimized band.
pub struct FixedScore(u8);

impl FixedScore {
    pub fn new(score: u8) -> Self {
        Self(score.clamp(OPTIMIZED_FLOOR, OPTIMIZED_FLOOR + OPTIMIZED_SPREAD - 1))
    }
}

impl OptimizedScoreSource for FixedScore {
    fn next_score(&self) -> u8 {
        self.0
    }

    fn backend(&self) -> &'static str {
        "fixed"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

/// Additive "current path" score. Non-decreasing in every signal, capped at 80.
pub fn additive_current(answers: &QuizAnswers) -> u8 {
    let mut score = BASE_SCORE;

    if answers.resume_is(&ResumeStrategy::TailoredAts)
        || answers.resume_is(&ResumeStrategy::MinorTweaks)
    {
        score += 15;
    }
    if answers.resume_is(&ResumeStrategy::TailoredAts) {
        score += 10;
    }
    if answers.applying.as_ref().is_some_and(|c| c.uses_network()) {
        score += 20;
    }
    if answers.linkedin_is_large() {
        score += 15;
    }
    if answers.applications_in(&[
        ApplicationVolume::From30To70,
        ApplicationVolume::From70To150,
        ApplicationVolume::Over150,
    ]) {
        score += 10;
    }
    if answers.interviews.as_ref().is_some_and(|i| i.has_activity()) {
        score += 15;
    }

    score.min(CURRENT_CAP)
}

/// Resolves the probability pair: override, then mode.
pub fn compute_probability(
    mode: ProbabilityMode,
    answers: &QuizAnswers,
    source: &dyn OptimizedScoreSource,
    override_pair: Option<ProbabilityOverride>,
) -> SuccessProbability {
    if let Some(pair) = override_pair {
        return pair.into();
    }

    match mode {
        ProbabilityMode::Additive => SuccessProbability {
            current: additive_current(answers),
            optimized: source.next_score(),
        },
        ProbabilityMode::FixedDefault => SuccessProbability {
            current: FIXED_CURRENT,
            optimized: FIXED_OPTIMIZED,
        },
    }
}
