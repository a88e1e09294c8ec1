//! Feng Shui 2 combat and chase rules.
//!
//! Every rule is a pure function of a combatant snapshot: nothing is mutated
//! in place, and dice are thrown by the caller through an injected range
//! generator.
//!
//! # Layout
//!
//! - `shared`: the `CombatantRules` trait for rules common to people and vehicles
//! - `character`: person accessors, wounds, fortune
//! - `vehicle`: vehicle accessors and chase maneuvers
//! - `archetypes`: vehicle stat presets
//! - `resolution`: full outcome of a chase maneuver or an attack

mod archetypes;
mod character;
mod resolution;
mod shared;
mod vehicle;

pub use archetypes::{VehicleArchetype, VehicleArchetypeCatalog};
pub use resolution::{
    resolve_attack, resolve_chase, Attack, AttackOutcome, ChaseAttack, ChaseOutcome,
    STUNT_PENALTY,
};
pub use shared::CombatantRules;
pub use vehicle::{
    bump, evade, narrow_the_gap, ram_sideswipe, widen_the_gap, MAX_DRIVE_IMPAIRMENT,
    UNTRAINED_DRIVING,
};
