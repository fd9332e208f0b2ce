use std::path::Path;

use crate::ai::{HeuristicConfig, SearchConfig};
use crate::error::ConfigError;

/// Board geometry, piece supply and the per-move time budget.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub rows: usize,
    pub cols: usize,
    pub win_sequence: usize,
    /// Round pieces given to each player.
    pub round_pieces: usize,
    /// Square pieces given to each player.
    pub square_pieces: usize,
    pub time_limit_ms: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            rows: 6,
            cols: 7,
            win_sequence: 4,
            round_pieces: 10,
            square_pieces: 11,
            time_limit_ms: 3000,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: MatchConfig,
    pub search: SearchConfig,
    pub heuristic: HeuristicConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let board = &self.board;
        if board.rows == 0 || board.cols == 0 {
            return Err(ConfigError::Validation(
                "board.rows and board.cols must be >= 1".into(),
            ));
        }
        if board.win_sequence < 2 {
            return Err(ConfigError::Validation(
                "board.win_sequence must be >= 2".into(),
            ));
        }
        if board.win_sequence > board.rows.max(board.cols) {
            return Err(ConfigError::Validation(
                "board.win_sequence must fit in a row or column".into(),
            ));
        }
        if board.round_pieces == 0 || board.square_pieces == 0 {
            return Err(ConfigError::Validation(
                "board.round_pieces and board.square_pieces must be >= 1".into(),
            ));
        }
        if 2 * (board.round_pieces + board.square_pieces) < board.rows * board.cols {
            return Err(ConfigError::Validation(
                "players must hold enough pieces to fill the board".into(),
            ));
        }
        if board.time_limit_ms == 0 {
            return Err(ConfigError::Validation(
                "board.time_limit_ms must be > 0".into(),
            ));
        }

        if self.search.max_depth == 0 {
            return Err(ConfigError::Validation(
                "search.max_depth must be >= 1".into(),
            ));
        }

        let h = &self.heuristic;
        for (name, weight) in [
            ("color_weight", h.color_weight),
            ("shape_weight", h.shape_weight),
            ("run_weight", h.run_weight),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigError::Validation(format!(
                    "heuristic.{name} must be finite and >= 0"
                )));
            }
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::HeuristicLevel;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[search]
max_depth = 5
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.search.max_depth, 5);
        assert!(config.search.pruning);
        assert_eq!(config.board, MatchConfig::default());
        assert_eq!(config.heuristic.level, HeuristicLevel::OpenSpace);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.board.cols, 7);
        assert_eq!(config.search.max_depth, 3);
    }

    #[test]
    fn test_heuristic_level_names() {
        let config: AppConfig = toml::from_str(
            r#"
[heuristic]
level = "piece-count"
"#,
        )
        .unwrap();
        assert_eq!(config.heuristic.level, HeuristicLevel::PieceCount);
        assert!(toml::from_str::<AppConfig>("[heuristic]\nlevel = \"magic\"\n").is_err());
    }

    #[test]
    fn test_validation_rejects_zero_depth() {
        let mut config = AppConfig::default();
        config.search.max_depth = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_oversized_win_sequence() {
        let mut config = AppConfig::default();
        config.board.win_sequence = 8;
        assert!(config.validate().is_err());
        config.board.win_sequence = 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_short_piece_supply() {
        let mut config = AppConfig::default();
        config.board.square_pieces = 5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_weights() {
        let mut config = AppConfig::default();
        config.heuristic.run_weight = -1.0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.heuristic.shape_weight = f64::INFINITY;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_time_limit() {
        let mut config = AppConfig::default();
        config.board.time_limit_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.search.max_depth, 3);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[board]
rows = 5
cols = 5
round_pieces = 6
square_pieces = 7
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.board.rows, 5);
        assert_eq!(config.board.win_sequence, 4);
        // Others are defaults
        assert_eq!(config.search.max_depth, 3);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[search]\nmax_depth = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
