use crate::{Card, Direction, RoundOutcome};
use serde::{Deserialize, Serialize};

/// Observable transitions of a round, in the order they happened. The core
/// never touches the console; front-ends drain the bus and render.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    RoundStarted {
        starting_player: usize,
    },
    TurnStarted {
        player: usize,
        total: i32,
        direction: Direction,
    },
    CardPlayed {
        player: usize,
        card: Card,
        label: String,
        from_draw: bool,
    },
    TotalChanged {
        from: i32,
        to: i32,
    },
    DirectionReversed,
    FlowTriggered {
        flow_count: u32,
    },
    FlowCardRevealed {
        card: Card,
        new_total: i32,
    },
    FlowDeckEmpty,
    HandReplenished {
        player: usize,
        card: Card,
    },
    RoundEnded {
        outcome: RoundOutcome,
    },
    ScoreApplied {
        player: usize,
        delta: i32,
        score: i32,
    },
    GameEnded {
        loser: usize,
    },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
