//! Person-specific rules: attack/defense accessors, wounds, fortune.

use super::shared::CombatantRules;
use crate::entities::Character;
use crate::value_objects::keys;

impl Character {
    /// Name of the main attack action value (e.g. "Guns", "Martial Arts").
    pub fn main_attack(&self) -> String {
        self.other_action_value(keys::MAIN_ATTACK)
    }

    pub fn main_attack_value(&self) -> i32 {
        self.action_value(&self.main_attack())
    }

    pub fn secondary_attack(&self) -> String {
        self.other_action_value(keys::SECONDARY_ATTACK)
    }

    pub fn secondary_attack_value(&self) -> i32 {
        self.action_value(&self.secondary_attack())
    }

    pub fn defense(&self) -> i32 {
        self.action_value(keys::DEFENSE)
    }

    pub fn toughness(&self) -> i32 {
        self.action_value(keys::TOUGHNESS)
    }

    /// Speed is exempt from impairment.
    pub fn speed(&self) -> i32 {
        self.raw_action_value(keys::SPEED)
    }

    pub fn damage(&self) -> i32 {
        self.raw_action_value(keys::DAMAGE)
    }

    pub fn fortune_type(&self) -> String {
        self.other_action_value(keys::FORTUNE_TYPE)
    }

    pub fn fortune(&self) -> i32 {
        self.raw_action_value(keys::FORTUNE)
    }

    pub fn max_fortune(&self) -> i32 {
        self.raw_action_value(keys::MAX_FORTUNE)
    }

    /// Skill rating, 0 when the character has no entry for it.
    pub fn skill(&self, name: &str) -> i32 {
        self.skills.get(name).copied().unwrap_or(0)
    }

    pub fn has_skill(&self, name: &str) -> bool {
        self.skills.contains_key(name)
    }

    /// Mooks count bodies, not wounds.
    pub fn wounds(&self) -> i32 {
        if self.is_mook() {
            self.count
        } else {
            self.raw_action_value(keys::WOUNDS)
        }
    }

    pub fn serious_wounds(&self) -> bool {
        self.serious_points(self.wounds())
    }

    /// Apply a hit. A mook group loses one mook; anyone else takes
    /// `smackdown - toughness` wounds (never negative).
    pub fn take_smackdown(&self, smackdown: i32) -> Self {
        if self.is_mook() {
            return self.kill_mooks(1);
        }
        let wounds = smackdown.saturating_sub(self.toughness()).max(0);
        self.take_raw_wounds(wounds)
    }

    /// Add wounds without toughness reduction, recalculating impairment.
    pub fn take_raw_wounds(&self, wounds: i32) -> Self {
        if self.is_mook() {
            return self.clone();
        }
        let original = self.wounds();
        let updated = original.saturating_add(wounds.max(0));
        self.add_impairments(self.calculate_impairments(original, updated))
            .update_action_value(keys::WOUNDS, updated)
    }

    /// Remove wounds, floored at zero; impairment gained on the way up is
    /// given back on the way down.
    pub fn heal_wounds(&self, amount: i32) -> Self {
        if self.is_mook() {
            return self.clone();
        }
        let original = self.wounds();
        let updated = original.saturating_sub(amount.max(0)).max(0);
        self.add_impairments(self.calculate_impairments(original, updated))
            .update_action_value(keys::WOUNDS, updated)
    }

    /// Spend one fortune point, never going below zero.
    pub fn spend_fortune(&self) -> Self {
        self.update_action_value(keys::FORTUNE, (self.fortune() - 1).max(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::CombatantType;

    fn jack() -> Character {
        Character::new("Jack Jones")
            .with_type(CombatantType::Pc)
            .with_action_value(keys::MAIN_ATTACK, "Guns")
            .with_action_value("Guns", 14)
            .with_action_value(keys::SECONDARY_ATTACK, "Martial Arts")
            .with_action_value("Martial Arts", 12)
            .with_action_value(keys::DEFENSE, 13)
            .with_action_value(keys::TOUGHNESS, 6)
            .with_action_value(keys::SPEED, 7)
            .with_action_value(keys::DAMAGE, 10)
            .with_action_value(keys::FORTUNE_TYPE, "Fortune")
            .with_action_value(keys::FORTUNE, 5)
            .with_action_value(keys::MAX_FORTUNE, 7)
            .with_skill(keys::DRIVING, 13)
    }

    #[test]
    fn attack_accessors_apply_impairments() {
        let hurt = jack().with_impairments(1);
        assert_eq!(hurt.main_attack(), "Guns");
        assert_eq!(hurt.main_attack_value(), 13);
        assert_eq!(hurt.secondary_attack(), "Martial Arts");
        assert_eq!(hurt.secondary_attack_value(), 11);
        assert_eq!(hurt.defense(), 12);
        assert_eq!(hurt.toughness(), 5);
    }

    #[test]
    fn speed_and_damage_are_raw() {
        let hurt = jack().with_impairments(2);
        assert_eq!(hurt.speed(), 7);
        assert_eq!(hurt.damage(), 10);
    }

    #[test]
    fn fortune_accessors() {
        let j = jack();
        assert_eq!(j.fortune_type(), "Fortune");
        assert_eq!(j.fortune(), 5);
        assert_eq!(j.max_fortune(), 7);
    }

    #[test]
    fn missing_main_attack_reads_zero() {
        let blank = Character::new("Blank");
        assert_eq!(blank.main_attack(), "");
        assert_eq!(blank.main_attack_value(), 0);
    }

    #[test]
    fn skills_default_to_zero() {
        assert_eq!(jack().skill(keys::DRIVING), 13);
        assert_eq!(jack().skill("Sabotage"), 0);
        assert!(!jack().has_skill("Sabotage"));
    }

    #[test]
    fn take_smackdown_subtracts_toughness() {
        let hit = jack().take_smackdown(15);
        assert_eq!(hit.wounds(), 9);
        assert_eq!(hit.impairments, 0);
    }

    #[test]
    fn take_smackdown_below_toughness_does_nothing() {
        assert_eq!(jack().take_smackdown(4).wounds(), 0);
    }

    #[test]
    fn take_smackdown_crossing_threshold_impairs() {
        let bloodied = jack().take_raw_wounds(22);
        let hit = bloodied.take_smackdown(12);
        assert_eq!(hit.wounds(), 28);
        assert_eq!(hit.impairments, 1);
    }

    #[test]
    fn take_smackdown_on_mooks_kills_one() {
        let thugs = Character::new("Thugs")
            .with_type(CombatantType::Mook)
            .with_count(6);
        let hit = thugs.take_smackdown(20);
        assert_eq!(hit.count, 5);
        assert_eq!(hit.wounds(), 5);
    }

    #[test]
    fn heal_wounds_restores_impairment() {
        let battered = jack().take_raw_wounds(31);
        assert_eq!(battered.impairments, 2);
        assert!(!battered.serious_wounds());
        let healed = battered.heal_wounds(10);
        assert_eq!(healed.wounds(), 21);
        assert_eq!(healed.impairments, 0);
    }

    #[test]
    fn wounds_saturate_instead_of_overflowing() {
        let dead = jack().take_raw_wounds(i32::MAX).take_raw_wounds(i32::MAX);
        assert_eq!(dead.wounds(), i32::MAX);
        assert_eq!(dead.heal_wounds(i32::MAX).wounds(), 0);
        assert_eq!(jack().take_smackdown(i32::MIN).wounds(), 0);
    }

    #[test]
    fn heal_wounds_floors_at_zero() {
        let healed = jack().take_raw_wounds(5).heal_wounds(20);
        assert_eq!(healed.wounds(), 0);
    }

    #[test]
    fn serious_wounds_at_threshold() {
        assert!(jack().take_raw_wounds(35).serious_wounds());
    }

    #[test]
    fn spend_fortune_floors_at_zero() {
        let j = jack().spend_fortune();
        assert_eq!(j.fortune(), 4);
        let broke = Character::new("Broke").spend_fortune();
        assert_eq!(broke.fortune(), 0);
    }
}
