//! Application state and composition.

use std::sync::Arc;

use chiwar_domain::VehicleArchetypeCatalog;

use crate::config::EngineConfig;
use crate::infrastructure::{
    clock::{SeededRandom, SystemClock, SystemRandom},
    memory::InMemoryRepositories,
    ports::{CharacterRepo, ClockPort, FightRepo, RandomPort, VehicleRepo},
};
use crate::use_cases;

/// Main application state.
///
/// Holds all repositories and use cases.
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
    pub catalog: Arc<VehicleArchetypeCatalog>,
}

/// Container for all repositories, injected as port traits.
pub struct Repositories {
    pub character: Arc<dyn CharacterRepo>,
    pub vehicle: Arc<dyn VehicleRepo>,
    pub fight: Arc<dyn FightRepo>,
}

impl From<InMemoryRepositories> for Repositories {
    fn from(repos: InMemoryRepositories) -> Self {
        Self {
            character: repos.character,
            vehicle: repos.vehicle,
            fight: repos.fight,
        }
    }
}

/// Container for all use cases.
pub struct UseCases {
    pub combat: use_cases::CombatUseCases,
    pub archetype: Arc<use_cases::ApplyVehicleArchetype>,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(
        repositories: Repositories,
        catalog: VehicleArchetypeCatalog,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        let catalog = Arc::new(catalog);

        let combat = use_cases::CombatUseCases::new(
            Arc::new(use_cases::combat::ResolveChase::new(
                repositories.vehicle.clone(),
                repositories.fight.clone(),
                random.clone(),
                clock.clone(),
            )),
            Arc::new(use_cases::combat::ResolveAttack::new(
                repositories.character.clone(),
                repositories.fight.clone(),
                random.clone(),
                clock.clone(),
            )),
            Arc::new(use_cases::combat::RollInitiative::new(
                repositories.character.clone(),
                repositories.vehicle.clone(),
                repositories.fight.clone(),
                random,
                clock,
            )),
        );
        let archetype = Arc::new(use_cases::ApplyVehicleArchetype::new(
            repositories.vehicle.clone(),
            catalog.clone(),
        ));

        Self {
            repositories,
            use_cases: UseCases { combat, archetype },
            catalog,
        }
    }

    /// In-memory app with the system clock, seeded dice when configured.
    pub fn in_memory(config: &EngineConfig, catalog: VehicleArchetypeCatalog) -> Self {
        let random: Arc<dyn RandomPort> = match config.seed {
            Some(seed) => {
                tracing::info!(seed, "Using seeded dice");
                Arc::new(SeededRandom::new(seed))
            }
            None => Arc::new(SystemRandom::new()),
        };
        Self::new(
            InMemoryRepositories::new().into(),
            catalog,
            Arc::new(SystemClock::new()),
            random,
        )
    }
}
