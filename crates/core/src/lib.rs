//! Core game logic. Keep this crate free of IO and platform concerns.

pub mod cards;
pub mod deck;
pub mod events;
pub mod game;
pub mod rng;
pub mod room;
pub mod rules;
pub mod scoring;
pub mod state;
pub mod weapon;

pub use cards::*;
pub use deck::*;
pub use events::*;
pub use game::*;
pub use rng::*;
pub use room::*;
pub use rules::*;
pub use scoring::*;
pub use state::*;
pub use weapon::*;
