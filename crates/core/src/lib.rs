//! Core logic for the card game 101. Keep this crate free of IO and
//! platform concerns.

pub mod cards;
pub mod config;
pub mod deck;
pub mod decision;
pub mod events;
pub mod game;
pub mod player;
pub mod rng;
pub mod round;
pub mod strategy;

pub use cards::*;
pub use config::*;
pub use deck::*;
pub use decision::*;
pub use events::*;
pub use game::*;
pub use player::*;
pub use rng::*;
pub use round::*;
pub use strategy::*;
