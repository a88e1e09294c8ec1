//! JSON scenario files for the command line.
//!
//! A scenario carries full combatant snapshots plus the action to resolve.
//! Omitting `swerve` means the dice are rolled.

use std::path::{Path, PathBuf};

use chiwar_domain::{Character, ChaseMethod, Position, Vehicle, VehicleArchetypeCatalog};
use serde::de::DeserializeOwned;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid scenario {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid archetype catalog {path}: {message}")]
    Catalog { path: PathBuf, message: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChaseScenario {
    #[serde(default = "default_fight_name")]
    pub fight: String,
    pub attacker: Vehicle,
    pub target: Vehicle,
    pub method: ChaseMethod,
    /// Starting range; falls back to the attacker's Position
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default)]
    pub swerve: Option<i32>,
    #[serde(default)]
    pub stunt: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AttackScenario {
    #[serde(default = "default_fight_name")]
    pub fight: String,
    pub attacker: Character,
    pub target: Character,
    #[serde(default)]
    pub swerve: Option<i32>,
    #[serde(default)]
    pub stunt: bool,
    #[serde(default)]
    pub mooks_targeted: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InitiativeScenario {
    #[serde(default = "default_fight_name")]
    pub fight: String,
    #[serde(default)]
    pub characters: Vec<Character>,
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
}

fn default_fight_name() -> String {
    "Scenario".to_string()
}

/// Read and parse a JSON file.
pub async fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ScenarioError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    serde_json::from_str(&raw).map_err(|source| ScenarioError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Built-in catalog, or the one at `path` when given.
pub async fn load_catalog(path: Option<&Path>) -> Result<VehicleArchetypeCatalog, ScenarioError> {
    let Some(path) = path else {
        return VehicleArchetypeCatalog::builtin().map_err(|e| ScenarioError::Catalog {
            path: PathBuf::from("<builtin>"),
            message: e.to_string(),
        });
    };
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    VehicleArchetypeCatalog::from_json(&raw).map_err(|e| ScenarioError::Catalog {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn loads_chase_scenario_with_defaults() {
        let file = write_temp(
            r#"{
                "attacker": {"name": "Cop Car", "action_values": {"Acceleration": 8}},
                "target": {"name": "Brick Mobile"},
                "method": "NARROW_THE_GAP"
            }"#,
        );
        let scenario: ChaseScenario = load_json(file.path()).await.unwrap();
        assert_eq!(scenario.fight, "Scenario");
        assert_eq!(scenario.method, ChaseMethod::NarrowTheGap);
        assert_eq!(scenario.attacker.acceleration(), 8);
        assert_eq!(scenario.position, None);
        assert_eq!(scenario.swerve, None);
        assert!(!scenario.stunt);
    }

    #[tokio::test]
    async fn loads_attack_scenario() {
        let file = write_temp(
            r#"{
                "fight": "Warehouse",
                "attacker": {"name": "Jack", "action_values": {"MainAttack": "Guns", "Guns": "14"}},
                "target": {"name": "Mooks", "action_values": {"Type": "Mook"}, "count": 8},
                "swerve": -2,
                "mooks_targeted": 2
            }"#,
        );
        let scenario: AttackScenario = load_json(file.path()).await.unwrap();
        assert_eq!(scenario.fight, "Warehouse");
        assert_eq!(scenario.attacker.main_attack_value(), 14);
        assert_eq!(scenario.swerve, Some(-2));
        assert_eq!(scenario.mooks_targeted, Some(2));
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        let err = load_json::<ChaseScenario>(&path).await.unwrap_err();
        assert!(matches!(err, ScenarioError::Io { .. }));
    }

    #[tokio::test]
    async fn malformed_file_is_parse_error() {
        let file = write_temp("{ not json");
        let err = load_json::<InitiativeScenario>(file.path()).await.unwrap_err();
        assert!(matches!(err, ScenarioError::Parse { .. }));
    }

    #[tokio::test]
    async fn catalog_defaults_to_builtin() {
        let catalog = load_catalog(None).await.unwrap();
        assert!(catalog.find("Sedan").is_some());
    }

    #[tokio::test]
    async fn catalog_can_be_replaced() {
        let file = write_temp(
            r#"[{"name": "Hover Bike", "acceleration": 12, "handling": 12, "squeal": 13, "frame": 2, "crunch": 3}]"#,
        );
        let catalog = load_catalog(Some(file.path())).await.unwrap();
        assert_eq!(catalog.names(), vec!["Hover Bike"]);
        assert!(catalog.find("Sedan").is_none());
    }
}
