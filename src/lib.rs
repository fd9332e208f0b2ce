//! # ColorShapeLinks
//!
//! A search engine for ColorShapeLinks, a connect-four variant where pieces
//! have a color and a shape and a line of equal shapes beats a line of equal
//! colors. Given a position it picks a move with depth-limited negamax and
//! alpha-beta pruning under a cooperative cancellation token.
//!
//! ## Modules
//!
//! - [`game`]: Board, pieces, moves, win corridors and win detection
//! - [`ai`]: Thinker trait, negamax searcher, corridor heuristic, random fallback
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
