//! Common types re-exported for convenience.

pub use crate::alpha_beta_searcher::{SearchConfig, SearchContext, SearchError, SearchOutcome};
pub use crate::board::{Board, BoardError, Coordinate, GameConfig, Player, Radius, Winner};
pub use crate::game::engine::{Engine, EngineConfig, EngineError};
pub use crate::pattern::{PatternCounts, PatternKind};
