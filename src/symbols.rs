//! Level symbol table
//!
//! Maps single characters in level rows to the actor they spawn. Passed to
//! the parser as a plain value; load a custom one from JSON like
//! `{"@": "player", "o": "coin", "v": "fire_rain"}`.

use std::collections::BTreeMap;
use std::f64::consts::TAU;
use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::sim::{Actor, Vector};

/// Actor constructor selected by a level symbol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Spawner {
    Actor,
    Player,
    Coin,
    Fireball,
    HorizontalFireball,
    VerticalFireball,
    FireRain,
    /// Name that maps to no actor; positions using it are skipped
    Unsupported(String),
}

impl Spawner {
    pub fn as_str(&self) -> &str {
        match self {
            Spawner::Actor => "actor",
            Spawner::Player => "player",
            Spawner::Coin => "coin",
            Spawner::Fireball => "fireball",
            Spawner::HorizontalFireball => "horizontal_fireball",
            Spawner::VerticalFireball => "vertical_fireball",
            Spawner::FireRain => "fire_rain",
            Spawner::Unsupported(name) => name,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "actor" => Spawner::Actor,
            "player" => Spawner::Player,
            "coin" => Spawner::Coin,
            "fireball" => Spawner::Fireball,
            "horizontal_fireball" => Spawner::HorizontalFireball,
            "vertical_fireball" => Spawner::VerticalFireball,
            "fire_rain" => Spawner::FireRain,
            _ => Spawner::Unsupported(name.to_string()),
        }
    }

    /// Build the actor for a symbol at grid position `pos`
    ///
    /// Returns `None` for unsupported spawners. Coins draw their spring phase
    /// from `rng`; nothing else consumes randomness.
    pub fn spawn<R: Rng>(&self, pos: Vector, rng: &mut R) -> Option<Result<Actor, SimError>> {
        let actor = match self {
            Spawner::Actor => Actor::at(pos),
            Spawner::Player => Actor::player(pos),
            Spawner::Coin => Actor::coin(pos, rng.random_range(0.0..TAU)),
            Spawner::Fireball => Actor::fireball(pos, Vector::ZERO),
            Spawner::HorizontalFireball => Actor::horizontal_fireball(pos),
            Spawner::VerticalFireball => Actor::vertical_fireball(pos),
            Spawner::FireRain => Actor::fire_rain(pos),
            Spawner::Unsupported(_) => return None,
        };
        Some(actor)
    }
}

impl From<String> for Spawner {
    fn from(name: String) -> Self {
        Spawner::from_name(&name)
    }
}

impl From<Spawner> for String {
    fn from(spawner: Spawner) -> Self {
        spawner.as_str().to_string()
    }
}

impl fmt::Display for Spawner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Character to spawner mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, Spawner>",
    into = "BTreeMap<String, Spawner>"
)]
pub struct SymbolTable {
    entries: BTreeMap<char, Spawner>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        [
            ('@', Spawner::Player),
            ('o', Spawner::Coin),
            ('=', Spawner::HorizontalFireball),
            ('|', Spawner::VerticalFireball),
            ('v', Spawner::FireRain),
        ]
        .into_iter()
        .collect()
    }
}

impl SymbolTable {
    /// Table with no symbols (levels parse to obstacles only)
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Load a table from a JSON object of one-character keys
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        serde_json::from_str(json).map_err(SimError::SymbolTable)
    }

    pub fn to_json(&self) -> Result<String, SimError> {
        serde_json::to_string(self).map_err(SimError::SymbolTable)
    }

    /// Bind a symbol, returning the spawner it replaced
    pub fn insert(&mut self, symbol: char, spawner: Spawner) -> Option<Spawner> {
        self.entries.insert(symbol, spawner)
    }

    pub fn get(&self, symbol: char) -> Option<&Spawner> {
        self.entries.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &Spawner)> {
        self.entries.iter().map(|(symbol, spawner)| (*symbol, spawner))
    }
}

impl FromIterator<(char, Spawner)> for SymbolTable {
    fn from_iter<I: IntoIterator<Item = (char, Spawner)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl TryFrom<BTreeMap<String, Spawner>> for SymbolTable {
    type Error = SimError;

    fn try_from(raw: BTreeMap<String, Spawner>) -> Result<Self, Self::Error> {
        raw.into_iter()
            .map(|(key, spawner)| {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(symbol), None) => Ok((symbol, spawner)),
                    _ => Err(SimError::SymbolKey(key)),
                }
            })
            .collect()
    }
}

impl From<SymbolTable> for BTreeMap<String, Spawner> {
    fn from(table: SymbolTable) -> Self {
        table
            .entries
            .into_iter()
            .map(|(symbol, spawner)| (symbol.to_string(), spawner))
            .collect()
    }
}
