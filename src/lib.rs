pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod game;

pub use error::{EngineError, EngineResult};
pub use game::board::GameBoard;
pub use game::search::{find_best_move, Engine, ScoredMove, SearchConfig, SearchStats};
