//! Combatant type classification and the wound/chase-point threshold table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// The role a combatant plays in a fight, read from the `Type` action value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatantType {
    #[serde(rename = "PC")]
    Pc,
    Ally,
    Boss,
    #[serde(rename = "Uber-Boss")]
    UberBoss,
    #[serde(rename = "Featured Foe")]
    FeaturedFoe,
    Mook,
}

/// Point totals at which a combatant gains impairment, and at which its
/// wounds (or chase points) become serious.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointThresholds {
    pub low: i32,
    pub high: i32,
    pub serious: i32,
}

const BOSS_THRESHOLDS: PointThresholds = PointThresholds {
    low: 40,
    high: 45,
    serious: 50,
};

const STANDARD_THRESHOLDS: PointThresholds = PointThresholds {
    low: 25,
    high: 30,
    serious: 35,
};

impl CombatantType {
    /// Label used in the `Type` action value.
    pub fn label(&self) -> &'static str {
        match self {
            CombatantType::Pc => "PC",
            CombatantType::Ally => "Ally",
            CombatantType::Boss => "Boss",
            CombatantType::UberBoss => "Uber-Boss",
            CombatantType::FeaturedFoe => "Featured Foe",
            CombatantType::Mook => "Mook",
        }
    }

    /// Threshold table entry. Mooks have none.
    pub fn thresholds(&self) -> Option<PointThresholds> {
        match self {
            CombatantType::Boss | CombatantType::UberBoss => Some(BOSS_THRESHOLDS),
            CombatantType::Pc | CombatantType::Ally | CombatantType::FeaturedFoe => {
                Some(STANDARD_THRESHOLDS)
            }
            CombatantType::Mook => None,
        }
    }

    pub fn is_friendly(&self) -> bool {
        matches!(self, CombatantType::Pc | CombatantType::Ally)
    }

    /// Bosses and uber-bosses shrug off impairment on their drive checks.
    pub fn is_boss_level(&self) -> bool {
        matches!(self, CombatantType::Boss | CombatantType::UberBoss)
    }
}

impl fmt::Display for CombatantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for CombatantType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "PC" => Ok(CombatantType::Pc),
            "Ally" => Ok(CombatantType::Ally),
            "Boss" => Ok(CombatantType::Boss),
            "Uber-Boss" => Ok(CombatantType::UberBoss),
            "Featured Foe" => Ok(CombatantType::FeaturedFoe),
            "Mook" => Ok(CombatantType::Mook),
            other => Err(DomainError::parse(format!(
                "Unknown combatant type: {}",
                other
            ))),
        }
    }
}
