use crate::{
    flow_restart, Card, CardDecision, Deck, DecisionEffect, Event, EventBus, Player, RngState,
    FLOW_TOTAL,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoundError {
    #[error("round already ended")]
    RoundOver,
    #[error("player {0} has no cards at turn start")]
    EmptyHand(usize),
    #[error("hand index {index} out of range for {len} cards")]
    InvalidHandIndex { index: usize, len: usize },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn flip(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    pub fn step(self) -> i64 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }
}

/// One modular step around the table, always normalized non-negative.
pub fn next_index(current: usize, direction: Direction, count: usize) -> usize {
    (current as i64 + direction.step()).rem_euclid(count as i64) as usize
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The total went past 101; the active player alone pays.
    Bust { loser: usize },
    /// A joker landed on exactly 100; the player before the winner pays.
    SpecialWin { winner: usize, loser: usize },
}

/// What the active player's provider gets to see before committing.
#[derive(Debug, Clone, Copy)]
pub struct TurnView<'a> {
    pub hand: &'a [Card],
    pub total: i32,
    pub direction: Direction,
    pub can_draw: bool,
}

#[derive(Debug, Clone)]
pub enum PlaySource {
    Hand(usize),
    Drawn(Card),
}

#[derive(Debug, Clone)]
pub struct TurnChoice {
    pub source: PlaySource,
    pub decision: CardDecision,
}

/// A seat at the table, asked once per turn for a committed
/// (card, decision) pair. Implementations may draw through the deck during
/// the callback; a drawn card comes back as [`PlaySource::Drawn`] and must
/// be played, never returned to hand.
pub trait DecisionProvider {
    fn choose(&mut self, view: TurnView<'_>, deck: &mut Deck, rng: &mut RngState) -> TurnChoice;
}

#[derive(Debug, Clone)]
pub struct RoundState {
    pub deck: Deck,
    pub total: i32,
    pub direction: Direction,
    pub current: usize,
    /// Seat that acted before `current`, tracked continuously so a special
    /// win always knows who pays.
    pub previous: usize,
    pub flow_count: u32,
    pub outcome: Option<RoundOutcome>,
}

impl RoundState {
    /// Runs one turn for the current seat. Returns the outcome when this
    /// turn ended the round; callers loop until that happens.
    pub fn play_turn(
        &mut self,
        players: &mut [Player],
        provider: &mut dyn DecisionProvider,
        rng: &mut RngState,
        events: &mut EventBus,
    ) -> Result<Option<RoundOutcome>, RoundError> {
        if self.outcome.is_some() {
            return Err(RoundError::RoundOver);
        }
        let seat = self.current;
        if players[seat].hand.is_empty() {
            return Err(RoundError::EmptyHand(seat));
        }
        events.push(Event::TurnStarted {
            player: seat,
            total: self.total,
            direction: self.direction,
        });

        let view = TurnView {
            hand: &players[seat].hand,
            total: self.total,
            direction: self.direction,
            can_draw: self.deck.can_draw(),
        };
        let choice = provider.choose(view, &mut self.deck, rng);
        let (card, from_hand) = match choice.source {
            PlaySource::Hand(index) => {
                let len = players[seat].hand.len();
                if index >= len {
                    return Err(RoundError::InvalidHandIndex { index, len });
                }
                (players[seat].hand.remove(index), true)
            }
            PlaySource::Drawn(card) => (card, false),
        };
        events.push(Event::CardPlayed {
            player: seat,
            card,
            label: choice.decision.label.clone(),
            from_draw: !from_hand,
        });

        match choice.decision.effect {
            DecisionEffect::Skip => self.deck.discard(card),
            DecisionEffect::Reverse => {
                self.direction = self.direction.flip();
                events.push(Event::DirectionReversed);
                self.deck.discard(card);
            }
            DecisionEffect::SpecialWin => {
                self.deck.discard(card);
                self.outcome = Some(RoundOutcome::SpecialWin {
                    winner: seat,
                    loser: self.previous,
                });
            }
            DecisionEffect::Value(delta) => {
                let new_total = self.total + delta;
                events.push(Event::TotalChanged {
                    from: self.total,
                    to: new_total,
                });
                self.total = new_total;
                self.deck.discard(card);
                if new_total == FLOW_TOTAL {
                    self.flow_reset(rng, events);
                } else if new_total > FLOW_TOTAL {
                    self.outcome = Some(RoundOutcome::Bust { loser: seat });
                }
            }
        }

        if let Some(outcome) = self.outcome {
            events.push(Event::RoundEnded { outcome });
            return Ok(Some(outcome));
        }

        if from_hand {
            if let Some(card) = self.deck.draw_card(rng) {
                events.push(Event::HandReplenished {
                    player: seat,
                    card,
                });
                players[seat].hand.push(card);
            }
        }
        self.previous = seat;
        self.current = next_index(seat, self.direction, players.len());
        Ok(None)
    }

    /// The total landed on exactly 101: reveal one flow card and restart
    /// from its fixed contribution, or from 0 when nothing is drawable.
    /// The round continues either way.
    fn flow_reset(&mut self, rng: &mut RngState, events: &mut EventBus) {
        self.flow_count += 1;
        events.push(Event::FlowTriggered {
            flow_count: self.flow_count,
        });
        match self.deck.draw_card(rng) {
            Some(flow_card) => {
                let restart = flow_restart(flow_card);
                if restart.reverses {
                    self.direction = self.direction.flip();
                    events.push(Event::DirectionReversed);
                }
                self.total = restart.value;
                events.push(Event::FlowCardRevealed {
                    card: flow_card,
                    new_total: self.total,
                });
                self.deck.discard(flow_card);
            }
            None => {
                self.total = 0;
                events.push(Event::FlowDeckEmpty);
            }
        }
    }
}
