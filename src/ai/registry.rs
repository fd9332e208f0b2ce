use crate::config::AppConfig;
use crate::error::ThinkerError;

use super::heuristic::CorridorHeuristic;
use super::negamax::NegamaxThinker;
use super::random::RandomFallbackThinker;
use super::thinker::Thinker;

/// Identifier plus configuration from which fresh thinkers are built.
#[derive(Debug, Clone)]
pub struct ThinkerPrototype {
    id: String,
    config: AppConfig,
}

impl ThinkerPrototype {
    pub const KNOWN: [&'static str; 2] = ["negamax", "random"];

    pub fn new(id: impl Into<String>, config: AppConfig) -> Self {
        ThinkerPrototype {
            id: id.into(),
            config,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Build a configured thinker. Ids are case-insensitive.
    pub fn create(&self) -> Result<Box<dyn Thinker>, ThinkerError> {
        self.config.validate()?;
        match self.id.to_ascii_lowercase().as_str() {
            "negamax" => Ok(Box::new(NegamaxThinker::with_heuristic(
                self.config.search,
                Box::new(CorridorHeuristic::new(self.config.heuristic.clone())),
            ))),
            "random" => Ok(Box::new(RandomFallbackThinker::new())),
            _ => Err(ThinkerError::UnknownThinker(self.id.clone())),
        }
    }
}
