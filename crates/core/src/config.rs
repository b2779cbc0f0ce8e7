use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cards dealt to every player when a round begins.
    pub starting_hand_size: usize,
    /// Upper bound on CPU seats in a roster.
    pub max_cpu_players: usize,
    /// The game ends once any score drops to this value or below.
    pub losing_threshold: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_hand_size: 2,
            max_cpu_players: 3,
            losing_threshold: -5,
        }
    }
}
