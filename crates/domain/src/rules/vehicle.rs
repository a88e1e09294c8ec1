//! Vehicle rules: stat accessors and the chase maneuver state machine.
//!
//! Chase state lives in action values: `Position` is "near" or "far", and
//! `Pursuer` is the string flag "true"/"false" (an evader is simply a vehicle
//! that is not pursuing).
//!
//! Maneuvers take `(attacker, smackdown, target)` and return the updated
//! `(attacker, target)` pair.

use super::archetypes::{VehicleArchetype, VehicleArchetypeCatalog};
use super::shared::CombatantRules;
use crate::entities::Vehicle;
use crate::value_objects::{keys, CombatantType, Position};

/// Driving value for a vehicle with nobody (or nobody trained) at the wheel.
pub const UNTRAINED_DRIVING: i32 = 7;

/// Cap on combined driver and vehicle impairment for drive checks.
pub const MAX_DRIVE_IMPAIRMENT: i32 = 2;

impl Vehicle {
    // =========================================================================
    // Accessors
    // =========================================================================

    /// Driver's Driving skill, or the untrained value.
    pub fn driving_value(&self) -> i32 {
        match &self.driver {
            Some(driver) if driver.has_skill(keys::DRIVING) => driver.skill(keys::DRIVING),
            _ => UNTRAINED_DRIVING,
        }
    }

    /// Driver and vehicle impairments combined, capped at 2. Zero when either
    /// the vehicle or its driver is a boss or uber-boss.
    pub fn total_impairments(&self) -> i32 {
        let boss_level = |t: Option<CombatantType>| t.is_some_and(|t| t.is_boss_level());
        let driver_is_boss = self
            .driver
            .as_ref()
            .is_some_and(|d| boss_level(d.combatant_type()));
        if boss_level(self.combatant_type()) || driver_is_boss {
            return 0;
        }
        let driver_impairments = self.driver.as_ref().map_or(0, |d| d.impairments);
        driver_impairments
            .saturating_add(self.impairments)
            .clamp(0, MAX_DRIVE_IMPAIRMENT)
    }

    pub fn main_attack_value(&self) -> i32 {
        (self.driving_value() - self.total_impairments()).max(0)
    }

    /// Attack and defense in a chase share the Driving-based value.
    pub fn defense(&self) -> i32 {
        self.main_attack_value()
    }

    pub fn acceleration(&self) -> i32 {
        self.raw_action_value(keys::ACCELERATION)
    }

    /// Speed is Acceleration; never impairment-adjusted.
    pub fn speed(&self) -> i32 {
        self.acceleration()
    }

    pub fn handling(&self) -> i32 {
        self.raw_action_value(keys::HANDLING)
    }

    pub fn squeal(&self) -> i32 {
        self.raw_action_value(keys::SQUEAL)
    }

    pub fn frame(&self) -> i32 {
        self.raw_action_value(keys::FRAME)
    }

    pub fn crunch(&self) -> i32 {
        self.raw_action_value(keys::CRUNCH)
    }

    pub fn chase_points(&self) -> i32 {
        self.raw_action_value(keys::CHASE_POINTS)
    }

    pub fn condition_points(&self) -> i32 {
        self.raw_action_value(keys::CONDITION_POINTS)
    }

    pub fn serious_chase_points(&self) -> bool {
        self.serious_points(self.chase_points())
    }

    pub fn serious_condition_points(&self) -> bool {
        self.serious_points(self.condition_points())
    }

    pub fn is_pursuer(&self) -> bool {
        self.other_action_value(keys::PURSUER) == "true"
    }

    pub fn is_evader(&self) -> bool {
        !self.is_pursuer()
    }

    pub fn position(&self) -> Option<Position> {
        self.other_action_value(keys::POSITION).parse().ok()
    }

    pub fn is_near(&self) -> bool {
        self.position() == Some(Position::Near)
    }

    pub fn is_far(&self) -> bool {
        self.position() == Some(Position::Far)
    }

    // =========================================================================
    // Updates
    // =========================================================================

    pub fn update_position(&self, position: Position) -> Self {
        self.update_action_value(keys::POSITION, position.as_str())
    }

    pub fn update_pursuer(&self, pursuer: bool) -> Self {
        self.update_action_value(keys::PURSUER, pursuer)
    }

    /// Apply a chase hit. Mooks lose `smackdown` vehicles; anyone else takes
    /// `smackdown - damage_reduction` chase points (never negative).
    pub fn take_chase_points(&self, smackdown: i32, damage_reduction: i32) -> Self {
        if self.is_mook() {
            return self.kill_mooks(smackdown);
        }
        self.take_raw_chase_points(smackdown.saturating_sub(damage_reduction).max(0))
    }

    /// Add chase points with no reduction, recalculating impairment.
    pub fn take_raw_chase_points(&self, points: i32) -> Self {
        let original = self.chase_points();
        let updated = original.saturating_add(points.max(0));
        self.add_impairments(self.calculate_impairments(original, updated))
            .update_action_value(keys::CHASE_POINTS, updated)
    }

    pub fn take_raw_condition_points(&self, points: i32) -> Self {
        self.update_action_value(
            keys::CONDITION_POINTS,
            self.condition_points().saturating_add(points.max(0)),
        )
    }

    /// Inverse of `take_raw_chase_points`, floored at zero. Impairment gained
    /// while taking the points is given back.
    pub fn heal_chase_points(&self, amount: i32) -> Self {
        let original = self.chase_points();
        let updated = original.saturating_sub(amount.max(0)).max(0);
        self.add_impairments(self.calculate_impairments(original, updated))
            .update_action_value(keys::CHASE_POINTS, updated)
    }

    pub fn heal_condition_points(&self, amount: i32) -> Self {
        self.update_action_value(
            keys::CONDITION_POINTS,
            self.condition_points().saturating_sub(amount.max(0)).max(0),
        )
    }

    /// Replace name and the five core stats with a built-in preset. Any
    /// failure (unknown archetype, unreadable catalog) returns the vehicle
    /// unchanged.
    pub fn update_from_archetype(&self, archetype: &str) -> Self {
        match VehicleArchetypeCatalog::builtin() {
            Ok(catalog) => self.update_from_archetype_in(&catalog, archetype),
            Err(_) => self.clone(),
        }
    }

    pub fn update_from_archetype_in(&self, catalog: &VehicleArchetypeCatalog, archetype: &str) -> Self {
        match catalog.get(archetype) {
            Ok(preset) => self.apply_archetype(preset),
            Err(_) => self.clone(),
        }
    }

    pub fn apply_archetype(&self, preset: &VehicleArchetype) -> Self {
        let mut updated = self
            .update_action_value(keys::ACCELERATION, preset.acceleration)
            .update_action_value(keys::HANDLING, preset.handling)
            .update_action_value(keys::SQUEAL, preset.squeal)
            .update_action_value(keys::FRAME, preset.frame)
            .update_action_value(keys::CRUNCH, preset.crunch);
        updated.name = preset.name.clone();
        updated
    }
}

// =============================================================================
// Maneuvers
// =============================================================================

/// Target absorbs the smackdown as chase points, reduced by its Handling.
pub fn evade(attacker: &Vehicle, smackdown: i32, target: &Vehicle) -> (Vehicle, Vehicle) {
    let target = target.take_chase_points(smackdown, target.handling());
    (attacker.clone(), target)
}

/// As `evade`, and both vehicles end up near.
pub fn narrow_the_gap(attacker: &Vehicle, smackdown: i32, target: &Vehicle) -> (Vehicle, Vehicle) {
    let (attacker, target) = evade(attacker, smackdown, target);
    (
        attacker.update_position(Position::Near),
        target.update_position(Position::Near),
    )
}

/// As `evade`, and both vehicles end up far.
pub fn widen_the_gap(attacker: &Vehicle, smackdown: i32, target: &Vehicle) -> (Vehicle, Vehicle) {
    let (attacker, target) = evade(attacker, smackdown, target);
    (
        attacker.update_position(Position::Far),
        target.update_position(Position::Far),
    )
}

/// Extra points the rammer takes when the target has the heavier Frame.
pub fn bump(attacker: &Vehicle, target: &Vehicle) -> i32 {
    target.frame().saturating_sub(attacker.frame()).max(0)
}

/// Target takes `smackdown - Frame` as both chase and condition points. If
/// the target's Frame is heavier, the attacker takes the difference as raw
/// chase and condition points. A mook convoy loses `smackdown` vehicles when
/// rammed, and shrugs off bump.
pub fn ram_sideswipe(attacker: &Vehicle, smackdown: i32, target: &Vehicle) -> (Vehicle, Vehicle) {
    let bump = bump(attacker, target);
    let attacker = if bump > 0 && !attacker.is_mook() {
        attacker
            .take_raw_chase_points(bump)
            .take_raw_condition_points(bump)
    } else {
        attacker.clone()
    };

    let target = if target.is_mook() {
        target.kill_mooks(smackdown)
    } else {
        let points = smackdown.saturating_sub(target.frame()).max(0);
        target
            .take_raw_chase_points(points)
            .take_raw_condition_points(points)
    };

    (attacker, target)
}
