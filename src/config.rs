//! Route planner configuration.
//!
//! All tuning knobs in one TOML-loadable structure. Every field has a
//! default, so a partial (or empty) config file yields the standard
//! behavior: 20-pixel cells, 128 brightness threshold, 80% free fraction,
//! 8-directional search with diagonal cost 1.414 and turn penalty 0.2,
//! smoothing on, silent clamping of out-of-range coordinates.

use crate::error::{Result, RouteError};
use crate::grid::GridBuilderConfig;
use crate::pathfinding::AStarConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration for [`RoutePlanner`](crate::planner::RoutePlanner).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Image discretization parameters
    #[serde(default)]
    pub grid: GridBuilderConfig,

    /// A* search parameters
    #[serde(default)]
    pub search: AStarConfig,

    /// Run the line-of-sight smoothing pass (default: true)
    #[serde(default = "default_smooth")]
    pub smooth: bool,

    /// Reject out-of-range coordinates and blocked endpoints instead of
    /// clamping and searching anyway (default: false)
    #[serde(default)]
    pub strict: bool,
}

fn default_smooth() -> bool {
    true
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            grid: GridBuilderConfig::default(),
            search: AStarConfig::default(),
            smooth: default_smooth(),
            strict: false,
        }
    }
}

impl RouteConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            RouteError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Ok(toml::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::OccupancyPolicy;

    #[test]
    fn test_defaults() {
        let config = RouteConfig::default();
        assert_eq!(config.grid.cell_size, 20);
        assert_eq!(config.grid.free_threshold, 128);
        assert_eq!(config.grid.policy, OccupancyPolicy::FreeFraction(0.8));
        assert!(config.search.allow_diagonal);
        assert!((config.search.diagonal_cost - 1.414).abs() < 1e-6);
        assert!((config.search.turn_penalty - 0.2).abs() < 1e-6);
        assert_eq!(config.search.max_iterations, 100_000);
        assert!(config.smooth);
        assert!(!config.strict);
    }

    #[test]
    fn test_serde_defaults_apply() {
        // Missing fields come from the default functions, not zeroes.
        let config: RouteConfig = toml::from_str("").unwrap();
        assert_eq!(config.grid.cell_size, 20);
        assert!(config.smooth);
    }

    #[test]
    fn test_parse_partial_toml() {
        let toml_str = r#"
            smooth = false

            [grid]
            cell_size = 10

            [search]
            allow_diagonal = false
            turn_penalty = 0.5
        "#;
        let config: RouteConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.grid.cell_size, 10);
        assert_eq!(config.grid.free_threshold, 128);
        assert!(!config.search.allow_diagonal);
        assert!((config.search.turn_penalty - 0.5).abs() < 1e-6);
        assert!(!config.smooth);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err: RouteError = toml::from_str::<RouteConfig>("smooth = \"yes\"")
            .map_err(RouteError::from)
            .unwrap_err();
        assert!(matches!(err, RouteError::Config(_)));
    }
}
