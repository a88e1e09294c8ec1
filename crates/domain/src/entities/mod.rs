//! Domain entities - combatants and encounters.

mod character;
mod combatant;
mod fight;
mod vehicle;

pub use character::{Character, FactionRef};
pub use combatant::Combatant;
pub use fight::{Fight, FightEvent, FightEventType};
pub use vehicle::Vehicle;
