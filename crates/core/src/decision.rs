use crate::{Card, Rank};
use serde::{Deserialize, Serialize};

/// The running total that makes the pot flow and restart.
pub const FLOW_TOTAL: i32 = 101;
/// The running total at which a joker wins outright instead of adding 50.
pub const SPECIAL_TOTAL: i32 = 100;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DecisionEffect {
    Value(i32),
    Skip,
    Reverse,
    SpecialWin,
}

/// One playable effect of a card, paired with the label shown when the
/// choice is offered. Produced fresh for every (card, total) pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardDecision {
    pub effect: DecisionEffect,
    pub label: String,
}

impl CardDecision {
    fn value(delta: i32) -> Self {
        let sign = if delta >= 0 { "+" } else { "" };
        Self {
            effect: DecisionEffect::Value(delta),
            label: format!("{sign}{delta}"),
        }
    }

    fn skip() -> Self {
        Self {
            effect: DecisionEffect::Skip,
            label: "total stays the same".to_string(),
        }
    }

    fn reverse() -> Self {
        Self {
            effect: DecisionEffect::Reverse,
            label: "turn order reverses".to_string(),
        }
    }

    fn special_win() -> Self {
        Self {
            effect: DecisionEffect::SpecialWin,
            label: "instant solo win".to_string(),
        }
    }
}

/// Every legal effect of `card` at the given total, never empty. Order is
/// presentational only; the first entry carries no preference.
pub fn decisions_for(card: Card, total: i32) -> Vec<CardDecision> {
    match card.rank {
        Rank::Ace => vec![CardDecision::value(1), CardDecision::value(11)],
        Rank::Ten => vec![CardDecision::value(-10), CardDecision::value(10)],
        Rank::Eight => vec![CardDecision::skip()],
        Rank::Nine => vec![CardDecision::reverse()],
        Rank::Joker if total == SPECIAL_TOTAL => vec![CardDecision::special_win()],
        Rank::Joker => vec![CardDecision::value(50)],
        rank => vec![CardDecision::value(rank.default_value())],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowRestart {
    pub value: i32,
    pub reverses: bool,
}

/// Fixed contribution of the card revealed after a flow. Unlike in-hand
/// play there is no choice menu: aces count 11, tens count +10, and a nine
/// reverses the direction while contributing nothing.
pub fn flow_restart(card: Card) -> FlowRestart {
    match card.rank {
        Rank::Ace => FlowRestart {
            value: 11,
            reverses: false,
        },
        Rank::Ten => FlowRestart {
            value: 10,
            reverses: false,
        },
        Rank::Nine => FlowRestart {
            value: 0,
            reverses: true,
        },
        rank => FlowRestart {
            value: rank.default_value(),
            reverses: false,
        },
    }
}
