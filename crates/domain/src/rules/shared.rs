//! Rules shared by every kind of combatant.
//!
//! `CombatantRules` needs only field accessors from its implementors; every
//! rule is a provided method. Rules are pure: anything that "changes" a
//! combatant returns a new value and leaves `self` untouched.
//!
//! Impairment is applied when an action value is *read* (`action_value`),
//! never baked into the stored value.

use crate::entities::{Character, Combatant, Vehicle};
use crate::value_objects::{keys, roll_die, ActionValue, ActionValues, CombatantType, PointThresholds};

pub trait CombatantRules: Clone {
    fn action_values(&self) -> &ActionValues;
    fn action_values_mut(&mut self) -> &mut ActionValues;
    fn impairments(&self) -> i32;
    fn set_impairments(&mut self, impairments: i32);
    /// Raw group size, regardless of type
    fn count(&self) -> i32;
    fn set_count(&mut self, count: i32);
    fn current_shot(&self) -> i32;
    fn set_current_shot(&mut self, shot: i32);
    fn set_name(&mut self, name: String);
    fn is_task(&self) -> bool;
    fn set_task(&mut self, task: bool);
    /// Value added to the initiative die.
    fn initiative_speed(&self) -> i32;

    // =========================================================================
    // Classification
    // =========================================================================

    /// Type read from the `Type` action value; `None` when missing or unknown.
    fn combatant_type(&self) -> Option<CombatantType> {
        self.other_action_value(keys::TYPE).parse().ok()
    }

    fn is_type(&self, combatant_type: CombatantType) -> bool {
        self.combatant_type() == Some(combatant_type)
    }

    fn is_mook(&self) -> bool {
        self.is_type(CombatantType::Mook)
    }

    fn is_pc(&self) -> bool {
        self.is_type(CombatantType::Pc)
    }

    fn is_ally(&self) -> bool {
        self.is_type(CombatantType::Ally)
    }

    fn is_boss(&self) -> bool {
        self.is_type(CombatantType::Boss)
    }

    fn is_uber_boss(&self) -> bool {
        self.is_type(CombatantType::UberBoss)
    }

    fn is_featured_foe(&self) -> bool {
        self.is_type(CombatantType::FeaturedFoe)
    }

    fn is_friendly(&self) -> bool {
        self.combatant_type().is_some_and(|t| t.is_friendly())
    }

    fn is_unfriendly(&self) -> bool {
        self.combatant_type().is_some_and(|t| !t.is_friendly())
    }

    // =========================================================================
    // Action values
    // =========================================================================

    /// Stored value, 0 when absent.
    fn raw_action_value(&self, key: &str) -> i32 {
        self.action_values().number(key)
    }

    /// Value used in resolution: `max(0, raw - impairments)`.
    fn action_value(&self, key: &str) -> i32 {
        self.raw_action_value(key).saturating_sub(self.impairments()).max(0)
    }

    /// Non-numeric values (Type, Archetype, Position, Pursuer); "" when absent.
    fn other_action_value(&self, key: &str) -> String {
        self.action_values().text(key)
    }

    fn is_impaired(&self) -> bool {
        self.impairments() > 0
    }

    // =========================================================================
    // Impairment and thresholds
    // =========================================================================

    /// Threshold table entry for this combatant; mooks and unknown types have none.
    fn thresholds(&self) -> Option<PointThresholds> {
        if self.is_mook() {
            return None;
        }
        self.combatant_type().and_then(|t| t.thresholds())
    }

    /// Impairment change when points move from `original_points` to
    /// `new_points`.
    ///
    /// Crossing the low threshold is worth one impairment, crossing the high
    /// threshold another; crossing both in one step is worth two. Healing
    /// (`new_points < original_points`) counts the same crossings in reverse
    /// and returns them negated.
    fn calculate_impairments(&self, original_points: i32, new_points: i32) -> i32 {
        let Some(thresholds) = self.thresholds() else {
            return 0;
        };
        if new_points >= original_points {
            threshold_crossings(thresholds, original_points, new_points)
        } else {
            -threshold_crossings(thresholds, new_points, original_points)
        }
    }

    fn serious_points(&self, value: i32) -> bool {
        self.thresholds().is_some_and(|t| value >= t.serious)
    }

    // =========================================================================
    // Mooks
    // =========================================================================

    fn mooks(&self) -> i32 {
        if self.is_mook() {
            self.count()
        } else {
            0
        }
    }

    fn kill_mooks(&self, n: i32) -> Self {
        let mut updated = self.clone();
        updated.set_count(self.count().saturating_sub(n).max(0));
        updated
    }

    // =========================================================================
    // Immutable setters
    // =========================================================================

    /// Adds `delta` to impairments. Not clamped: a negative total is stored as
    /// is and only `action_value` clamps on read.
    fn add_impairments(&self, delta: i32) -> Self {
        let mut updated = self.clone();
        updated.set_impairments(self.impairments().saturating_add(delta));
        updated
    }

    fn update_action_value(&self, key: &str, value: impl Into<ActionValue>) -> Self {
        let mut updated = self.clone();
        updated.action_values_mut().set(key, value);
        updated
    }

    /// Set a top-level field by name. Unknown keys leave the combatant as is.
    fn update_value(&self, key: &str, value: impl Into<ActionValue>) -> Self {
        let value = value.into();
        let mut updated = self.clone();
        match key {
            "name" => updated.set_name(value.as_text()),
            "impairments" => updated.set_impairments(value.as_number()),
            "count" => updated.set_count(value.as_number()),
            "current_shot" => updated.set_current_shot(value.as_number()),
            "task" => updated.set_task(value.as_text() == "true"),
            _ => {}
        }
        updated
    }

    // =========================================================================
    // Initiative
    // =========================================================================

    /// `current_shot' = max(0, speed + die + current_shot)`. When `roll` is
    /// `None` a fresh die is thrown with `rng`.
    fn roll_initiative<R: FnMut(i32, i32) -> i32>(&self, roll: Option<i32>, rng: &mut R) -> Self {
        let die = roll.unwrap_or_else(|| roll_die(rng));
        let mut updated = self.clone();
        updated.set_current_shot((self.initiative_speed() + die + self.current_shot()).max(0));
        updated
    }

    /// Adds `initiative` to the current shot (a carried-over penalty is
    /// already sitting in `current_shot`).
    fn set_initiative(&self, initiative: i32) -> Self {
        let mut updated = self.clone();
        updated.set_current_shot((initiative + self.current_shot()).max(0));
        updated
    }
}

fn threshold_crossings(thresholds: PointThresholds, from: i32, to: i32) -> i32 {
    let PointThresholds { low, high, .. } = thresholds;
    if from < low && to >= high {
        2
    } else if from < low && to >= low && to < high {
        1
    } else if from >= low && from < high && to >= high {
        1
    } else {
        0
    }
}

impl CombatantRules for Character {
    fn action_values(&self) -> &ActionValues {
        &self.action_values
    }

    fn action_values_mut(&mut self) -> &mut ActionValues {
        &mut self.action_values
    }

    fn impairments(&self) -> i32 {
        self.impairments
    }

    fn set_impairments(&mut self, impairments: i32) {
        self.impairments = impairments;
    }

    fn count(&self) -> i32 {
        self.count
    }

    fn set_count(&mut self, count: i32) {
        self.count = count;
    }

    fn current_shot(&self) -> i32 {
        self.current_shot
    }

    fn set_current_shot(&mut self, shot: i32) {
        self.current_shot = shot;
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn is_task(&self) -> bool {
        self.task
    }

    fn set_task(&mut self, task: bool) {
        self.task = task;
    }

    /// A driver acts at the speed of the vehicle; on foot, at their own Speed.
    fn initiative_speed(&self) -> i32 {
        match &self.driving {
            Some(vehicle) => vehicle.acceleration(),
            None => self.raw_action_value(keys::SPEED),
        }
    }
}

impl CombatantRules for Vehicle {
    fn action_values(&self) -> &ActionValues {
        &self.action_values
    }

    fn action_values_mut(&mut self) -> &mut ActionValues {
        &mut self.action_values
    }

    fn impairments(&self) -> i32 {
        self.impairments
    }

    fn set_impairments(&mut self, impairments: i32) {
        self.impairments = impairments;
    }

    fn count(&self) -> i32 {
        self.count
    }

    fn set_count(&mut self, count: i32) {
        self.count = count;
    }

    fn current_shot(&self) -> i32 {
        self.current_shot
    }

    fn set_current_shot(&mut self, shot: i32) {
        self.current_shot = shot;
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn is_task(&self) -> bool {
        self.task
    }

    fn set_task(&mut self, task: bool) {
        self.task = task;
    }

    fn initiative_speed(&self) -> i32 {
        self.speed()
    }
}

macro_rules! delegate {
    ($self:ident, $c:ident => $body:expr) => {
        match $self {
            Combatant::Person($c) => $body,
            Combatant::Vehicle($c) => $body,
        }
    };
}

impl CombatantRules for Combatant {
    fn action_values(&self) -> &ActionValues {
        delegate!(self, c => c.action_values())
    }

    fn action_values_mut(&mut self) -> &mut ActionValues {
        delegate!(self, c => c.action_values_mut())
    }

    fn impairments(&self) -> i32 {
        delegate!(self, c => c.impairments())
    }

    fn set_impairments(&mut self, impairments: i32) {
        delegate!(self, c => c.set_impairments(impairments))
    }

    fn count(&self) -> i32 {
        delegate!(self, c => c.count())
    }

    fn set_count(&mut self, count: i32) {
        delegate!(self, c => c.set_count(count))
    }

    fn current_shot(&self) -> i32 {
        delegate!(self, c => c.current_shot())
    }

    fn set_current_shot(&mut self, shot: i32) {
        delegate!(self, c => c.set_current_shot(shot))
    }

    fn set_name(&mut self, name: String) {
        delegate!(self, c => c.set_name(name))
    }

    fn is_task(&self) -> bool {
        delegate!(self, c => c.is_task())
    }

    fn set_task(&mut self, task: bool) {
        delegate!(self, c => c.set_task(task))
    }

    fn initiative_speed(&self) -> i32 {
        delegate!(self, c => c.initiative_speed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pc() -> Character {
        Character::new("Jack Jones").with_type(CombatantType::Pc)
    }

    fn boss() -> Character {
        Character::new("Ugly Shing").with_type(CombatantType::Boss)
    }

    fn mooks(count: i32) -> Character {
        Character::new("Thugs")
            .with_type(CombatantType::Mook)
            .with_count(count)
    }

    #[test]
    fn classification_predicates() {
        assert!(pc().is_pc());
        assert!(pc().is_friendly());
        assert!(!pc().is_unfriendly());
        assert!(boss().is_boss());
        assert!(boss().is_unfriendly());
        assert!(mooks(5).is_mook());
        assert!(mooks(5).is_unfriendly());

        let uber = Character::new("Big Bad").with_type(CombatantType::UberBoss);
        assert!(uber.is_uber_boss());
        let foe = Character::new("Henchman").with_type(CombatantType::FeaturedFoe);
        assert!(foe.is_featured_foe());
        let ally = Character::new("Sidekick").with_type(CombatantType::Ally);
        assert!(ally.is_ally() && ally.is_friendly());
    }

    #[test]
    fn untyped_combatant_is_neither_friendly_nor_unfriendly() {
        let blank = Character::new("Blank");
        assert_eq!(blank.combatant_type(), None);
        assert!(!blank.is_friendly());
        assert!(!blank.is_unfriendly());
    }

    #[test]
    fn task_flag() {
        let mut task = Character::new("Defuse the bomb");
        task.task = true;
        assert!(task.is_task());
        assert!(!pc().is_task());
    }

    #[test]
    fn action_value_applies_impairments_on_read() {
        let jack = pc().with_action_value("Guns", 14).with_impairments(2);
        assert_eq!(jack.raw_action_value("Guns"), 14);
        assert_eq!(jack.action_value("Guns"), 12);
        assert!(jack.is_impaired());
    }

    #[test]
    fn action_value_never_drops_below_zero() {
        let jack = pc().with_action_value("Sorcery", 1).with_impairments(2);
        assert_eq!(jack.action_value("Sorcery"), 0);
    }

    #[test]
    fn missing_values_default() {
        let blank = Character::new("Blank");
        assert_eq!(blank.raw_action_value("Guns"), 0);
        assert_eq!(blank.action_value("Guns"), 0);
        assert_eq!(blank.other_action_value("Archetype"), "");
    }

    #[test]
    fn calculate_impairments_for_pc_thresholds() {
        let jack = pc();
        assert_eq!(jack.calculate_impairments(20, 27), 1);
        assert_eq!(jack.calculate_impairments(27, 31), 1);
        assert_eq!(jack.calculate_impairments(20, 31), 2);
        assert_eq!(jack.calculate_impairments(10, 20), 0);
        assert_eq!(jack.calculate_impairments(26, 28), 0);
        assert_eq!(jack.calculate_impairments(31, 40), 0);
    }

    #[test]
    fn calculate_impairments_boundaries_are_inclusive() {
        let jack = pc();
        assert_eq!(jack.calculate_impairments(24, 25), 1);
        assert_eq!(jack.calculate_impairments(29, 30), 1);
        assert_eq!(jack.calculate_impairments(24, 30), 2);
    }

    #[test]
    fn calculate_impairments_for_boss_thresholds() {
        let shing = boss();
        assert_eq!(shing.calculate_impairments(30, 35), 0);
        assert_eq!(shing.calculate_impairments(35, 42), 1);
        assert_eq!(shing.calculate_impairments(42, 46), 1);
        assert_eq!(shing.calculate_impairments(35, 46), 2);
    }

    #[test]
    fn calculate_impairments_reverses_on_heal() {
        let jack = pc();
        assert_eq!(jack.calculate_impairments(27, 20), -1);
        assert_eq!(jack.calculate_impairments(31, 27), -1);
        assert_eq!(jack.calculate_impairments(31, 20), -2);
        assert_eq!(jack.calculate_impairments(20, 10), 0);
    }

    #[test]
    fn mooks_and_untyped_never_gain_impairments() {
        assert_eq!(mooks(10).calculate_impairments(0, 50), 0);
        assert_eq!(Character::new("Blank").calculate_impairments(0, 50), 0);
    }

    #[test]
    fn serious_points() {
        assert!(pc().serious_points(35));
        assert!(!pc().serious_points(34));
        assert!(boss().serious_points(50));
        assert!(!boss().serious_points(49));
        assert!(!mooks(12).serious_points(100));
    }

    #[test]
    fn mook_count() {
        assert_eq!(mooks(8).mooks(), 8);
        assert_eq!(pc().with_count(3).mooks(), 0);
    }

    #[test]
    fn kill_mooks_is_pure_and_clamped() {
        let group = mooks(5);
        let fewer = group.kill_mooks(2);
        assert_eq!(fewer.count, 3);
        assert_eq!(group.count, 5);
        assert_eq!(group.kill_mooks(9).count, 0);
    }

    #[test]
    fn kill_mooks_saturates_on_extreme_counts() {
        assert_eq!(mooks(5).kill_mooks(i32::MAX).count, 0);
        assert_eq!(mooks(5).kill_mooks(i32::MIN).count, i32::MAX);
        assert_eq!(mooks(-3).kill_mooks(i32::MAX).count, 0);
    }

    #[test]
    fn add_impairments_is_unclamped() {
        let healed = pc().with_impairments(1).add_impairments(-2);
        assert_eq!(healed.impairments, -1);
        let healed = healed.with_action_value("Guns", 13);
        assert_eq!(healed.action_value("Guns"), 14);
    }

    #[test]
    fn update_action_value_returns_new_value() {
        let jack = pc();
        let updated = jack.update_action_value("Guns", 15);
        assert_eq!(updated.raw_action_value("Guns"), 15);
        assert_eq!(jack.raw_action_value("Guns"), 0);
    }

    #[test]
    fn update_value_sets_known_fields() {
        let jack = pc()
            .update_value("name", "Jack")
            .update_value("impairments", 1)
            .update_value("current_shot", 12)
            .update_value("task", true);
        assert_eq!(jack.name, "Jack");
        assert_eq!(jack.impairments, 1);
        assert_eq!(jack.current_shot, 12);
        assert!(jack.task);
        assert_eq!(jack.update_value("color", "red"), jack);
    }

    #[test]
    fn roll_initiative_uses_supplied_roll() {
        let jack = pc().with_action_value(keys::SPEED, 7);
        let mut rng = |_min: i32, _max: i32| -> i32 { panic!("must not roll") };
        assert_eq!(jack.roll_initiative(Some(4), &mut rng).current_shot, 11);
    }

    #[test]
    fn roll_initiative_rolls_when_not_supplied() {
        let jack = pc().with_action_value(keys::SPEED, 6);
        let mut rng = |_min: i32, _max: i32| 3;
        assert_eq!(jack.roll_initiative(None, &mut rng).current_shot, 9);
    }

    #[test]
    fn roll_initiative_keeps_carried_penalty_and_clamps() {
        let mut slowed = pc().with_action_value(keys::SPEED, 5);
        slowed.current_shot = -3;
        let mut rng = |_min: i32, _max: i32| 1;
        assert_eq!(slowed.roll_initiative(None, &mut rng).current_shot, 3);

        slowed.current_shot = -20;
        assert_eq!(slowed.roll_initiative(Some(1), &mut rng).current_shot, 0);
    }

    #[test]
    fn driver_rolls_initiative_with_vehicle_acceleration() {
        let car = Vehicle::new("Sedan").with_stats(9, 8, 10, 7, 9);
        let driver = pc().with_action_value(keys::SPEED, 5).driving(car);
        let mut rng = |_min: i32, _max: i32| 2;
        assert_eq!(driver.roll_initiative(None, &mut rng).current_shot, 11);
    }

    #[test]
    fn set_initiative_adds_to_current_shot() {
        let mut jack = pc();
        jack.current_shot = -2;
        assert_eq!(jack.set_initiative(10).current_shot, 8);
        jack.current_shot = -12;
        assert_eq!(jack.set_initiative(10).current_shot, 0);
    }

    #[test]
    fn combatant_enum_delegates() {
        let combatant = Combatant::from(pc().with_action_value("Guns", 13).with_impairments(1));
        assert!(combatant.is_pc());
        assert_eq!(combatant.action_value("Guns"), 12);
        let hurt = combatant.add_impairments(1);
        assert_eq!(hurt.impairments(), 2);
    }

    proptest! {
        #[test]
        fn prop_action_value_is_clamped_difference(raw in -20i32..40, impairments in -3i32..5) {
            let c = pc().with_action_value("Guns", raw).with_impairments(impairments);
            prop_assert_eq!(c.action_value("Guns"), (raw - impairments).max(0));
        }

        #[test]
        fn prop_kill_mooks_clamps(count in 0i32..50, n in 0i32..100) {
            prop_assert_eq!(mooks(count).kill_mooks(n).count, (count - n).max(0));
        }

        #[test]
        fn prop_heal_reverses_damage(original in 0i32..60, amount in 0i32..40) {
            let jack = pc();
            let gained = jack.calculate_impairments(original, original + amount);
            let lost = jack.calculate_impairments(original + amount, original);
            prop_assert_eq!(gained, -lost);
            prop_assert!((0..=2).contains(&gained));
        }
    }
}
