//! Test fixtures loader for JSON fixture files and common test helpers.
//!
//! Fixtures live in the crate's `test_data/` directory.

use std::path::PathBuf;

use chiwar_domain::{Character, Fight, Vehicle};
use chrono::{DateTime, TimeZone, Utc};

use crate::infrastructure::memory::InMemoryRepositories;
use crate::infrastructure::ports::{CharacterRepo, FightRepo, VehicleRepo};

// =============================================================================
// Fixture Loading
// =============================================================================

/// Load a JSON fixture from test_data/ directory.
///
/// # Panics
///
/// Panics if the fixture file cannot be read or parsed.
pub fn load_fixture<T: serde::de::DeserializeOwned>(path: &str) -> T {
    let fixture_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_data")
        .join(path);
    let content = std::fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read fixture '{}': {}",
            fixture_path.display(),
            e
        )
    });
    serde_json::from_str(&content).unwrap_or_else(|e| {
        panic!(
            "Failed to parse fixture '{}': {}",
            fixture_path.display(),
            e
        )
    })
}

pub fn fixture_path(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_data")
        .join(path)
}

/// Fixed instant used wherever a clock is needed.
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 20, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

// =============================================================================
// Combatant Fixtures
// =============================================================================

pub mod vehicles {
    use super::*;

    /// Police cruiser driven by Carolina (Driving 13), pursuing from far.
    pub fn cop_car() -> Vehicle {
        load_fixture("vehicles/cop_car.json")
    }

    /// Featured foe's heavy car (Frame 11), evading from far.
    pub fn brick_mobile() -> Vehicle {
        load_fixture("vehicles/brick_mobile.json")
    }
}

pub mod characters {
    use super::*;

    /// PC gunman: Guns 14, Damage 10, Defense 13, Toughness 6, Speed 7.
    pub fn jack() -> Character {
        load_fixture("characters/jack.json")
    }

    /// Featured foe: Defense 13, Toughness 6.
    pub fn thug() -> Character {
        load_fixture("characters/thug.json")
    }

    /// Twelve mooks, Defense 8.
    pub fn mooks() -> Character {
        load_fixture("characters/mooks.json")
    }
}

// =============================================================================
// Seeded Storage
// =============================================================================

/// In-memory repositories holding one fight with the given combatants.
pub async fn seeded_fight(
    characters: &[Character],
    vehicles: &[Vehicle],
) -> (InMemoryRepositories, Fight) {
    let repos = InMemoryRepositories::new();
    let mut fight = Fight::new("Test Fight");
    for character in characters {
        repos.character.save(character).await.unwrap();
        fight = fight.with_character(character.id);
    }
    for vehicle in vehicles {
        repos.vehicle.save(vehicle).await.unwrap();
        fight = fight.with_vehicle(vehicle.id);
    }
    repos.fight.save(&fight).await.unwrap();
    (repos, fight)
}
