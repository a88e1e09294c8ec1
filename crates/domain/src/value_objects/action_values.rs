//! Action values - the named stat block of every combatant
//!
//! Action values arrive from forms and the API as a loose JSON object where
//! numbers and strings are mixed (`{"Guns": 14, "Type": "PC", "Position":
//! "near"}`). Lookups are deliberately permissive: a missing or unreadable
//! value reads as `0` or `""`, never as an error.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Well-known action value keys.
pub mod keys {
    pub const TYPE: &str = "Type";
    pub const ARCHETYPE: &str = "Archetype";
    pub const MAIN_ATTACK: &str = "MainAttack";
    pub const SECONDARY_ATTACK: &str = "SecondaryAttack";
    pub const DEFENSE: &str = "Defense";
    pub const TOUGHNESS: &str = "Toughness";
    pub const SPEED: &str = "Speed";
    pub const DAMAGE: &str = "Damage";
    pub const WOUNDS: &str = "Wounds";
    pub const FORTUNE_TYPE: &str = "FortuneType";
    pub const FORTUNE: &str = "Fortune";
    pub const MAX_FORTUNE: &str = "Max Fortune";

    pub const ACCELERATION: &str = "Acceleration";
    pub const HANDLING: &str = "Handling";
    pub const SQUEAL: &str = "Squeal";
    pub const FRAME: &str = "Frame";
    pub const CRUNCH: &str = "Crunch";
    pub const CHASE_POINTS: &str = "Chase Points";
    pub const CONDITION_POINTS: &str = "Condition Points";
    pub const POSITION: &str = "Position";
    pub const PURSUER: &str = "Pursuer";

    /// Skill used by drivers for chase attack and defense
    pub const DRIVING: &str = "Driving";
}

/// A single action value: either a number or free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ActionValue {
    Number(i32),
    Text(String),
}

/// Reads whatever a form left behind. Floats truncate, booleans become the
/// "true"/"false" flag text, and anything else reads as empty text.
impl<'de> Deserialize<'de> for ActionValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => match n.as_i64() {
                Some(i) => ActionValue::Number(i.clamp(i32::MIN.into(), i32::MAX.into()) as i32),
                None => ActionValue::Number(n.as_f64().map_or(0, |f| f as i32)),
            },
            Value::String(s) => ActionValue::Text(s),
            Value::Bool(b) => ActionValue::from(b),
            Value::Null | Value::Array(_) | Value::Object(_) => ActionValue::Text(String::new()),
        })
    }
}

impl ActionValue {
    /// Numeric reading. Numeric text (`"13"`) parses; anything else is 0.
    pub fn as_number(&self) -> i32 {
        match self {
            ActionValue::Number(n) => *n,
            ActionValue::Text(s) => s.trim().parse().unwrap_or(0),
        }
    }

    /// Text reading. Numbers render as their decimal form.
    pub fn as_text(&self) -> String {
        match self {
            ActionValue::Number(n) => n.to_string(),
            ActionValue::Text(s) => s.clone(),
        }
    }
}

impl fmt::Display for ActionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionValue::Number(n) => write!(f, "{}", n),
            ActionValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i32> for ActionValue {
    fn from(value: i32) -> Self {
        ActionValue::Number(value)
    }
}

impl From<&str> for ActionValue {
    fn from(value: &str) -> Self {
        ActionValue::Text(value.to_string())
    }
}

impl From<String> for ActionValue {
    fn from(value: String) -> Self {
        ActionValue::Text(value)
    }
}

/// Flags such as `Pursuer` are stored as the strings "true"/"false".
impl From<bool> for ActionValue {
    fn from(value: bool) -> Self {
        ActionValue::Text(value.to_string())
    }
}

/// Map of action value name to value. Keys are unique; order is irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ActionValues(HashMap<String, ActionValue>);

/// `null` entries are dropped so they read exactly like missing keys.
impl<'de> Deserialize<'de> for ActionValues {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = HashMap::<String, Option<ActionValue>>::deserialize(deserializer)?;
        Ok(Self(
            raw.into_iter()
                .filter_map(|(key, value)| value.map(|v| (key, v)))
                .collect(),
        ))
    }
}

impl ActionValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ActionValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ActionValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ActionValue> {
        self.0.get(key)
    }

    /// Numeric value for `key`, 0 when absent.
    pub fn number(&self, key: &str) -> i32 {
        self.0.get(key).map(ActionValue::as_number).unwrap_or(0)
    }

    /// Text value for `key`, empty when absent.
    pub fn text(&self, key: &str) -> String {
        self.0.get(key).map(ActionValue::as_text).unwrap_or_default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<ActionValue>> FromIterator<(K, V)> for ActionValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
