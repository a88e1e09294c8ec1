//! Value objects - immutable, identity-less domain primitives.

mod action_values;
mod chase;
mod combatant_type;
mod dice;

pub use action_values::{keys, ActionValue, ActionValues};
pub use chase::{ChaseMethod, Position};
pub use combatant_type::{CombatantType, PointThresholds};
pub use dice::{roll_die, roll_exploding_die, Swerve, SwerveInput, DIE_SIDES};
