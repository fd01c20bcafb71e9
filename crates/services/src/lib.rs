#![forbid(unsafe_code)]

pub mod error;
pub mod game;
pub mod rng;
pub mod view;

pub use guess_core::Clock;

pub use error::GameError;
pub use game::GameService;
pub use rng::GameRng;
pub use view::{GamePhase, GameSummary, GuessOutcome, RoundImage, RoundView};
