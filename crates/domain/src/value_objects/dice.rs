//! Dice rolling value objects
//!
//! Feng Shui 2 resolves every check with a *swerve*: a positive d6 minus a
//! negative d6, where any 6 explodes (is rerolled and added). Rolling both
//! sixes on the first throw is *boxcars*.
//!
//! The domain never owns a random number generator. Every roll takes an
//! injected range generator `FnMut(min, max) -> i32` with inclusive bounds, so
//! callers decide between real randomness, a seeded generator, or fixed test
//! values. Manual results (physical dice at the table) are also supported.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Faces on a Feng Shui 2 die.
pub const DIE_SIDES: i32 = 6;

/// Upper bound on rerolls for one exploding die, so a generator stuck on 6
/// cannot loop forever.
const MAX_EXPLOSIONS: usize = 32;

/// Roll one plain d6.
pub fn roll_die<R: FnMut(i32, i32) -> i32>(rng: &mut R) -> i32 {
    rng(1, DIE_SIDES)
}

/// Roll one exploding d6 and return every face thrown.
///
/// A 6 is kept and the die is thrown again; the sequence ends on the first
/// non-6 face.
pub fn roll_exploding_die<R: FnMut(i32, i32) -> i32>(rng: &mut R) -> Vec<i32> {
    let mut faces = Vec::new();
    loop {
        let face = roll_die(rng);
        faces.push(face);
        if face != DIE_SIDES || faces.len() >= MAX_EXPLOSIONS {
            break;
        }
    }
    faces
}

/// Result of a swerve roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Swerve {
    /// Faces thrown on the positive die (including explosions)
    pub positives: Vec<i32>,
    /// Faces thrown on the negative die (including explosions)
    pub negatives: Vec<i32>,
    /// Sum of positives minus sum of negatives
    pub total: i32,
    /// Both dice came up 6 on the first throw
    pub boxcars: bool,
}

impl Swerve {
    /// Roll a fresh swerve.
    pub fn roll<R: FnMut(i32, i32) -> i32>(rng: &mut R) -> Self {
        let positives = roll_exploding_die(rng);
        let negatives = roll_exploding_die(rng);
        Self::from_faces(positives, negatives)
    }

    /// Build a swerve from faces already thrown.
    pub fn from_faces(positives: Vec<i32>, negatives: Vec<i32>) -> Self {
        let total = positives.iter().sum::<i32>() - negatives.iter().sum::<i32>();
        let boxcars = positives.first() == Some(&DIE_SIDES) && negatives.first() == Some(&DIE_SIDES);
        Self {
            positives,
            negatives,
            total,
            boxcars,
        }
    }

    /// Create a result from a manual input (no actual dice rolled)
    pub fn from_manual(total: i32) -> Self {
        Self {
            positives: vec![],
            negatives: vec![],
            total,
            boxcars: false,
        }
    }

    /// Check if this was a manual roll
    pub fn is_manual(&self) -> bool {
        self.positives.is_empty() && self.negatives.is_empty()
    }

    /// Format as a breakdown string (e.g., "+[6, 2] -[3] = 5" or "Manual: 5")
    pub fn breakdown(&self) -> String {
        if self.is_manual() {
            return format!("Manual: {}", self.total);
        }
        let join = |faces: &[i32]| {
            faces
                .iter()
                .map(|f| f.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        let mut text = format!(
            "+[{}] -[{}] = {}",
            join(&self.positives),
            join(&self.negatives),
            self.total
        );
        if self.boxcars {
            text.push_str(" (boxcars)");
        }
        text
    }
}

impl fmt::Display for Swerve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.breakdown())
    }
}

/// Input for a swerve - either roll the dice or take a manual result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SwerveInput {
    /// Roll the swerve with the supplied generator
    Roll,
    /// Use a manual result (physical dice roll)
    ManualResult(i32),
}

impl SwerveInput {
    /// Resolve the input to a swerve
    pub fn resolve<R: FnMut(i32, i32) -> i32>(&self, rng: &mut R) -> Swerve {
        match self {
            Self::Roll => Swerve::roll(rng),
            Self::ManualResult(total) => Swerve::from_manual(*total),
        }
    }
}

impl From<Option<i32>> for SwerveInput {
    fn from(value: Option<i32>) -> Self {
        value.map_or(SwerveInput::Roll, SwerveInput::ManualResult)
    }
}
