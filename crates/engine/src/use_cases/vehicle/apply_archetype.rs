//! Apply vehicle archetype use case.

use std::sync::Arc;

use chiwar_domain::{Vehicle, VehicleArchetype, VehicleArchetypeCatalog, VehicleId};

use crate::infrastructure::ports::{RepoError, VehicleRepo};

#[derive(Debug, thiserror::Error)]
pub enum ArchetypeError {
    #[error("Vehicle not found: {0}")]
    VehicleNotFound(VehicleId),
    #[error("Unknown vehicle archetype: {0}")]
    UnknownArchetype(String),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

/// Replace a stored vehicle's name and core stats with a catalog preset.
///
/// Chase state (points, position, pursuer flag) and the driver are kept.
pub struct ApplyVehicleArchetype {
    vehicles: Arc<dyn VehicleRepo>,
    catalog: Arc<VehicleArchetypeCatalog>,
}

impl ApplyVehicleArchetype {
    pub fn new(vehicles: Arc<dyn VehicleRepo>, catalog: Arc<VehicleArchetypeCatalog>) -> Self {
        Self { vehicles, catalog }
    }

    pub fn list(&self) -> Vec<VehicleArchetype> {
        self.catalog.iter().cloned().collect()
    }

    pub async fn execute(
        &self,
        vehicle_id: VehicleId,
        archetype: &str,
    ) -> Result<Vehicle, ArchetypeError> {
        let preset = self
            .catalog
            .find(archetype)
            .ok_or_else(|| ArchetypeError::UnknownArchetype(archetype.to_string()))?;

        let vehicle = self
            .vehicles
            .get(vehicle_id)
            .await?
            .ok_or(ArchetypeError::VehicleNotFound(vehicle_id))?;

        let updated = vehicle.apply_archetype(preset);
        self.vehicles.save(&updated).await?;

        tracing::info!(
            %vehicle_id,
            from = %vehicle.name,
            archetype = %preset.name,
            "Vehicle archetype applied"
        );

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::InMemoryVehicleRepo;
    use crate::infrastructure::ports::MockVehicleRepo;
    use crate::test_fixtures::vehicles;

    fn catalog() -> Arc<VehicleArchetypeCatalog> {
        Arc::new(VehicleArchetypeCatalog::builtin().unwrap())
    }

    #[tokio::test]
    async fn when_valid_input_replaces_stats_and_keeps_chase_state() {
        let repo = Arc::new(InMemoryVehicleRepo::new());
        let cop = vehicles::cop_car().take_raw_chase_points(6);
        repo.save(&cop).await.unwrap();

        let use_case = ApplyVehicleArchetype::new(repo.clone(), catalog());
        let updated = use_case.execute(cop.id, "motorcycle").await.unwrap();

        assert_eq!(updated.name, "Motorcycle");
        assert_eq!(updated.acceleration(), 10);
        assert_eq!(updated.frame(), 3);
        assert_eq!(updated.chase_points(), 6);
        assert!(updated.is_pursuer());
        assert_eq!(updated.driving_value(), 13);

        let stored = repo.get(cop.id).await.unwrap().unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn when_archetype_unknown_returns_error_without_lookup() {
        let mut repo = MockVehicleRepo::new();
        repo.expect_get().never();
        repo.expect_save().never();

        let use_case = ApplyVehicleArchetype::new(Arc::new(repo), catalog());
        let result = use_case.execute(VehicleId::new(), "Hovercraft").await;

        assert!(matches!(result, Err(ArchetypeError::UnknownArchetype(name)) if name == "Hovercraft"));
    }

    #[tokio::test]
    async fn when_vehicle_not_found_returns_error() {
        let mut repo = MockVehicleRepo::new();
        repo.expect_get().returning(|_| Ok(None));

        let use_case = ApplyVehicleArchetype::new(Arc::new(repo), catalog());
        let result = use_case.execute(VehicleId::new(), "Sedan").await;

        assert!(matches!(result, Err(ArchetypeError::VehicleNotFound(_))));
    }

    #[test]
    fn list_returns_catalog_in_order() {
        let use_case = ApplyVehicleArchetype::new(Arc::new(MockVehicleRepo::new()), catalog());
        let names: Vec<String> = use_case.list().into_iter().map(|a| a.name).collect();
        assert_eq!(names.first().map(String::as_str), Some("Compact Car"));
        assert_eq!(names.len(), 15);
    }
}
