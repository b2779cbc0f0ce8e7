use crate::{
    next_index, Deck, Direction, Event, EventBus, GameConfig, Player, PlayerKind, RngState,
    RoundError, RoundOutcome, RoundState,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("need at least 2 players, have {0}")]
    NotEnoughPlayers(usize),
    #[error("round still in progress")]
    RoundNotFinished,
    #[error(transparent)]
    Round(#[from] RoundError),
}

/// Scores and roster that persist across rounds; each round gets a fresh
/// deck and hands.
#[derive(Debug)]
pub struct GameState {
    pub config: GameConfig,
    pub players: Vec<Player>,
    pub rng: RngState,
}

impl GameState {
    /// One human seat plus up to `max_cpu_players` CPU seats. A lone human
    /// still gets one CPU opponent.
    pub fn new(config: GameConfig, human_name: &str, cpu_count: usize, seed: u64) -> Self {
        let mut players = vec![Player::new(0, human_name, PlayerKind::Human)];
        for i in 0..cpu_count.min(config.max_cpu_players) {
            players.push(Player::new(i + 1, format!("CPU{}", i + 1), PlayerKind::Cpu));
        }
        if players.len() < 2 {
            players.push(Player::new(players.len(), "CPU1", PlayerKind::Cpu));
        }
        Self {
            config,
            players,
            rng: RngState::from_seed(seed),
        }
    }

    /// Deals a fresh shuffled deck and picks a random starting seat.
    /// `previous` starts one step behind the starter so a first-turn
    /// special win still has a well-defined loser.
    pub fn begin_round(&mut self, events: &mut EventBus) -> Result<RoundState, GameError> {
        if self.players.len() < 2 {
            return Err(GameError::NotEnoughPlayers(self.players.len()));
        }
        for player in &mut self.players {
            player.hand.clear();
        }
        let mut deck = Deck::standard54();
        deck.shuffle(&mut self.rng);
        for _ in 0..self.config.starting_hand_size {
            for player in &mut self.players {
                if let Some(card) = deck.draw_card(&mut self.rng) {
                    player.hand.push(card);
                }
            }
        }
        let direction = Direction::Clockwise;
        let current = self.rng.pick_index(self.players.len());
        let previous = next_index(current, direction.flip(), self.players.len());
        events.push(Event::RoundStarted {
            starting_player: current,
        });
        Ok(RoundState {
            deck,
            total: 0,
            direction,
            current,
            previous,
            flow_count: 0,
            outcome: None,
        })
    }

    /// Transfers the round penalty: `flow_count + 1` points, from the
    /// loser alone on a bust, or loser to winner on a special win.
    pub fn settle_round(
        &mut self,
        round: &RoundState,
        events: &mut EventBus,
    ) -> Result<RoundOutcome, GameError> {
        let outcome = round.outcome.ok_or(GameError::RoundNotFinished)?;
        let penalty = round.flow_count as i32 + 1;
        match outcome {
            RoundOutcome::SpecialWin { winner, loser } => {
                self.apply_score(winner, penalty, events);
                self.apply_score(loser, -penalty, events);
            }
            RoundOutcome::Bust { loser } => {
                self.apply_score(loser, -penalty, events);
            }
        }
        if self.is_over() {
            if let Some(loser) = self.loser() {
                events.push(Event::GameEnded { loser: loser.id });
            }
        }
        Ok(outcome)
    }

    fn apply_score(&mut self, player: usize, delta: i32, events: &mut EventBus) {
        let entry = &mut self.players[player];
        entry.score += delta;
        let score = entry.score;
        events.push(Event::ScoreApplied {
            player,
            delta,
            score,
        });
    }

    pub fn is_over(&self) -> bool {
        self.players
            .iter()
            .any(|player| player.score <= self.config.losing_threshold)
    }

    /// First-found minimum score; ties go to the earlier seat.
    pub fn loser(&self) -> Option<&Player> {
        self.players.iter().min_by_key(|player| player.score)
    }
}
