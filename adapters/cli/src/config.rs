//! Loading game configuration from TOML files and command-line overrides.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use clap::ValueEnum;
use goblin_trail_core::{GameConfig, PathAlgorithm};

/// Path strategy names accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum AlgorithmArg {
    /// Self-avoiding random walk.
    RandomWalk,
    /// Chained A* segments.
    AStar,
}

impl From<AlgorithmArg> for PathAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::RandomWalk => Self::RandomWalk,
            AlgorithmArg::AStar => Self::AStar,
        }
    }
}

/// Values given on the command line that take precedence over the file.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Overrides {
    pub(crate) seed: Option<u64>,
    pub(crate) algorithm: Option<AlgorithmArg>,
    pub(crate) grid_radius: Option<i32>,
    pub(crate) path_length: Option<usize>,
    pub(crate) hazard_count: Option<usize>,
}

/// Reads the configuration file, falling back to the defaults without one.
pub(crate) fn load(path: Option<&Path>) -> Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read game config at {}", path.display()))?;
    parse(&contents).with_context(|| format!("invalid game config at {}", path.display()))
}

fn parse(contents: &str) -> Result<GameConfig> {
    toml::from_str(contents).context("failed to parse game config toml contents")
}

/// Applies command-line overrides on top of `config`.
pub(crate) fn apply(mut config: GameConfig, overrides: Overrides) -> GameConfig {
    if let Some(seed) = overrides.seed {
        config.seed = seed;
    }
    if let Some(algorithm) = overrides.algorithm {
        config.path_algorithm = algorithm.into();
    }
    if let Some(radius) = overrides.grid_radius {
        config.grid_radius = radius;
    }
    if let Some(length) = overrides.path_length {
        config.path_length = length;
    }
    if let Some(count) = overrides.hazard_count {
        config.hazard_count = count;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_means_defaults() {
        let config = load(None).expect("defaults");
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = parse("hazard_count = 4\npath_algorithm = \"a_star\"\n").expect("valid toml");
        assert_eq!(config.hazard_count, 4);
        assert_eq!(config.path_algorithm, PathAlgorithm::AStar);
        assert_eq!(config.path_length, 50);
    }

    #[test]
    fn malformed_file_is_reported() {
        assert!(parse("hazard_count = \"many\"").is_err());
    }

    #[test]
    fn unreadable_file_names_the_path() {
        let error = load(Some(Path::new("/definitely/not/here.toml"))).expect_err("missing file");
        assert!(format!("{error:#}").contains("/definitely/not/here.toml"));
    }

    #[test]
    fn overrides_win_over_the_file() {
        let overrides = Overrides {
            seed: Some(9),
            algorithm: Some(AlgorithmArg::AStar),
            path_length: Some(30),
            ..Overrides::default()
        };

        let config = apply(GameConfig::default(), overrides);

        assert_eq!(config.seed, 9);
        assert_eq!(config.path_algorithm, PathAlgorithm::AStar);
        assert_eq!(config.path_length, 30);
        assert_eq!(config.hazard_count, 7);
    }
}
