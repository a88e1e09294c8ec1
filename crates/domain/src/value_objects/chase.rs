//! Chase vocabulary: relative position and the four chase maneuvers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Distance between pursuer and evader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Near,
    #[default]
    Far,
}

impl Position {
    /// Stored form in the `Position` action value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Near => "near",
            Position::Far => "far",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Position {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "near" => Ok(Position::Near),
            "far" => Ok(Position::Far),
            other => Err(DomainError::parse(format!("Unknown position: {}", other))),
        }
    }
}

/// Chase maneuver chosen by the acting driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChaseMethod {
    /// Shake off the other vehicle without changing distance
    Evade,
    /// Pursuer closes in
    NarrowTheGap,
    /// Evader pulls away
    WidenTheGap,
    /// Contact maneuver; uses Crunch against Frame and can bump the rammer
    RamSideswipe,
}

impl ChaseMethod {
    pub fn label(&self) -> &'static str {
        match self {
            ChaseMethod::Evade => "Evade",
            ChaseMethod::NarrowTheGap => "Narrow the Gap",
            ChaseMethod::WidenTheGap => "Widen the Gap",
            ChaseMethod::RamSideswipe => "Ram/Sideswipe",
        }
    }

    pub fn is_ram(&self) -> bool {
        matches!(self, ChaseMethod::RamSideswipe)
    }
}

impl fmt::Display for ChaseMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ChaseMethod {
    type Err = DomainError;

    /// Accepts wire names (`NARROW_THE_GAP`) and labels (`Narrow the Gap`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "evade" => Ok(ChaseMethod::Evade),
            "narrowthegap" => Ok(ChaseMethod::NarrowTheGap),
            "widenthegap" => Ok(ChaseMethod::WidenTheGap),
            "ramsideswipe" | "ram" | "sideswipe" => Ok(ChaseMethod::RamSideswipe),
            _ => Err(DomainError::parse(format!("Unknown chase method: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_parses_case_insensitively() {
        assert_eq!("NEAR".parse::<Position>(), Ok(Position::Near));
        assert_eq!(" far ".parse::<Position>(), Ok(Position::Far));
        assert!("adjacent".parse::<Position>().is_err());
    }

    #[test]
    fn chase_method_parses_wire_names_and_labels() {
        assert_eq!("EVADE".parse::<ChaseMethod>(), Ok(ChaseMethod::Evade));
        assert_eq!(
            "NARROW_THE_GAP".parse::<ChaseMethod>(),
            Ok(ChaseMethod::NarrowTheGap)
        );
        assert_eq!(
            "Widen the Gap".parse::<ChaseMethod>(),
            Ok(ChaseMethod::WidenTheGap)
        );
        assert_eq!(
            "Ram/Sideswipe".parse::<ChaseMethod>(),
            Ok(ChaseMethod::RamSideswipe)
        );
        assert!("Drift".parse::<ChaseMethod>().is_err());
    }

    #[test]
    fn chase_method_serde_uses_screaming_case() {
        let json = serde_json::to_string(&ChaseMethod::RamSideswipe).unwrap();
        assert_eq!(json, "\"RAM_SIDESWIPE\"");
    }
}
