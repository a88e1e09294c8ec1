//! Command line interface: resolve scenario files and print JSON results.

use std::path::PathBuf;

use anyhow::Context;
use chiwar_domain::{Fight, SwerveInput, Vehicle};
use clap::{Parser, Subcommand};
use serde_json::Value;

use crate::app::App;
use crate::infrastructure::scenario::{
    load_json, AttackScenario, ChaseScenario, InitiativeScenario,
};
use crate::use_cases::combat::{AttackInput, ChaseInput};

/// Chi War rules engine - resolve chases, attacks and initiative
#[derive(Parser, Debug)]
#[command(name = "chiwar-engine")]
#[command(about = "Resolve Feng Shui 2 chases and fights from JSON scenario files")]
pub struct Cli {
    /// Seed for repeatable dice (overrides CHIWAR_SEED)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve one chase maneuver between two vehicles
    Chase {
        /// Scenario file with attacker, target and method
        scenario: PathBuf,
    },
    /// Resolve one attack between two characters
    Attack {
        /// Scenario file with attacker and target
        scenario: PathBuf,
    },
    /// Roll initiative for every combatant in a scenario
    Initiative {
        /// Scenario file with characters and vehicles
        scenario: PathBuf,
    },
    /// List vehicle archetypes, or apply one to a vehicle file
    Archetypes {
        /// Vehicle JSON file to update
        #[arg(long, requires = "apply")]
        vehicle: Option<PathBuf>,
        /// Archetype name to apply
        #[arg(long, requires = "vehicle")]
        apply: Option<String>,
    },
}

/// Run a command against the app and return its JSON result.
pub async fn run(app: &App, command: Command) -> anyhow::Result<Value> {
    match command {
        Command::Chase { scenario } => {
            let scenario: ChaseScenario = load_json(&scenario).await?;
            run_chase(app, scenario).await
        }
        Command::Attack { scenario } => {
            let scenario: AttackScenario = load_json(&scenario).await?;
            run_attack(app, scenario).await
        }
        Command::Initiative { scenario } => {
            let scenario: InitiativeScenario = load_json(&scenario).await?;
            run_initiative(app, scenario).await
        }
        Command::Archetypes {
            vehicle: Some(path),
            apply: Some(name),
        } => {
            let vehicle: Vehicle = load_json(&path).await?;
            app.repositories.vehicle.save(&vehicle).await?;
            let updated = app
                .use_cases
                .archetype
                .execute(vehicle.id, &name)
                .await?;
            Ok(serde_json::to_value(updated)?)
        }
        Command::Archetypes { .. } => Ok(serde_json::to_value(app.use_cases.archetype.list())?),
    }
}

async fn run_chase(app: &App, scenario: ChaseScenario) -> anyhow::Result<Value> {
    let repos = &app.repositories;
    repos.vehicle.save(&scenario.attacker).await?;
    repos.vehicle.save(&scenario.target).await?;
    let fight = Fight::new(scenario.fight)
        .with_vehicle(scenario.attacker.id)
        .with_vehicle(scenario.target.id);
    repos.fight.save(&fight).await?;

    let outcome = app
        .use_cases
        .combat
        .chase
        .execute(ChaseInput {
            fight_id: fight.id,
            attacker_id: scenario.attacker.id,
            target_id: scenario.target.id,
            method: scenario.method,
            position: scenario.position,
            swerve: SwerveInput::from(scenario.swerve),
            stunt: scenario.stunt,
        })
        .await
        .context("chase could not be resolved")?;
    Ok(serde_json::to_value(outcome)?)
}

async fn run_attack(app: &App, scenario: AttackScenario) -> anyhow::Result<Value> {
    let repos = &app.repositories;
    repos.character.save(&scenario.attacker).await?;
    repos.character.save(&scenario.target).await?;
    let fight = Fight::new(scenario.fight)
        .with_character(scenario.attacker.id)
        .with_character(scenario.target.id);
    repos.fight.save(&fight).await?;

    let outcome = app
        .use_cases
        .combat
        .attack
        .execute(AttackInput {
            fight_id: fight.id,
            attacker_id: scenario.attacker.id,
            target_id: scenario.target.id,
            swerve: SwerveInput::from(scenario.swerve),
            stunt: scenario.stunt,
            mooks_targeted: scenario.mooks_targeted,
        })
        .await
        .context("attack could not be resolved")?;
    Ok(serde_json::to_value(outcome)?)
}

async fn run_initiative(app: &App, scenario: InitiativeScenario) -> anyhow::Result<Value> {
    let repos = &app.repositories;
    let mut fight = Fight::new(scenario.fight);
    for character in &scenario.characters {
        repos.character.save(character).await?;
        fight = fight.with_character(character.id);
    }
    for vehicle in &scenario.vehicles {
        repos.vehicle.save(vehicle).await?;
        fight = fight.with_vehicle(vehicle.id);
    }
    repos.fight.save(&fight).await?;

    let report = app
        .use_cases
        .combat
        .initiative
        .execute(fight.id)
        .await
        .context("initiative could not be rolled")?;
    Ok(serde_json::to_value(report)?)
}
