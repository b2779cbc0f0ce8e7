use crate::Card;
use serde::{Deserialize, Serialize};

/// Capability tag, not a data difference: both kinds hold the same hand
/// and score, they just answer turns through different providers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Cpu,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: usize,
    pub name: String,
    pub kind: PlayerKind,
    pub hand: Vec<Card>,
    pub score: i32,
}

impl Player {
    pub fn new(id: usize, name: impl Into<String>, kind: PlayerKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            hand: Vec::new(),
            score: 0,
        }
    }
}
