mod cancel;
mod heuristic;
mod negamax;
mod random;
mod registry;
mod thinker;

pub use cancel::CancellationToken;
pub use heuristic::{CorridorHeuristic, Heuristic, HeuristicConfig, HeuristicLevel};
pub use negamax::{NegamaxThinker, ScoredMove, SearchConfig, SearchOutcome, SearchStats};
pub use random::RandomFallbackThinker;
pub use registry::ThinkerPrototype;
pub use thinker::Thinker;
