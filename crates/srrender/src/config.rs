//! Configuration for the renderer.

use serde::{Deserialize, Serialize};
use srrender_common::{RenderError, RenderResult, DEFAULT_SIGMA_ACCURACY};

use crate::strategy::StrategyPolicy;

/// Configuration for a [`crate::Renderer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Worker threads for a dedicated pool. `None` runs on rayon's global pool.
    pub num_threads: Option<usize>,

    /// Default Gaussian truncation radius, in sigmas.
    pub sigma_accuracy: f64,

    /// Sequential/parallel selection for single-image renders.
    pub strategy: StrategyPolicy,

    /// Sanity-check every point before rendering.
    pub check_points: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            num_threads: None,
            sigma_accuracy: DEFAULT_SIGMA_ACCURACY,
            strategy: StrategyPolicy::Auto,
            check_points: false,
        }
    }
}

impl RenderConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key lookup. Unset or unparsable values keep
    /// their defaults.
    pub fn from_lookup<L>(lookup: L) -> Self
    where
        L: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(val) = lookup("SRRENDER_NUM_THREADS") {
            if let Ok(n) = val.parse() {
                config.num_threads = Some(n);
            }
        }

        if let Some(val) = lookup("SRRENDER_SIGMA_ACCURACY") {
            if let Ok(accuracy) = val.parse() {
                config.sigma_accuracy = accuracy;
            }
        }

        if let Some(val) = lookup("SRRENDER_STRATEGY") {
            if let Some(policy) = StrategyPolicy::parse(&val) {
                config.strategy = policy;
            }
        }

        if let Some(val) = lookup("SRRENDER_CHECK_POINTS") {
            config.check_points = val.to_lowercase() == "true" || val == "1";
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> RenderResult<()> {
        if self.num_threads == Some(0) {
            return Err(RenderError::Config("num_threads must be > 0".to_string()));
        }

        if !(self.sigma_accuracy.is_finite() && self.sigma_accuracy > 0.0) {
            return Err(RenderError::InvalidSigmaAccuracy(self.sigma_accuracy));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.num_threads, None);
        assert_eq!(config.sigma_accuracy, 5.0);
        assert_eq!(config.strategy, StrategyPolicy::Auto);
        assert!(!config.check_points);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_lookup() {
        let config = RenderConfig::from_lookup(lookup(&[
            ("SRRENDER_NUM_THREADS", "3"),
            ("SRRENDER_SIGMA_ACCURACY", "4.5"),
            ("SRRENDER_STRATEGY", "sequential"),
            ("SRRENDER_CHECK_POINTS", "1"),
        ]));
        assert_eq!(config.num_threads, Some(3));
        assert_eq!(config.sigma_accuracy, 4.5);
        assert_eq!(config.strategy, StrategyPolicy::Sequential);
        assert!(config.check_points);
    }

    #[test]
    fn test_from_lookup_ignores_garbage() {
        let config = RenderConfig::from_lookup(lookup(&[
            ("SRRENDER_NUM_THREADS", "many"),
            ("SRRENDER_STRATEGY", "gpu"),
        ]));
        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn test_validate() {
        let config = RenderConfig {
            num_threads: Some(0),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(RenderError::Config(_))));

        let config = RenderConfig {
            sigma_accuracy: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(RenderError::InvalidSigmaAccuracy(_))
        ));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: RenderConfig =
            serde_json::from_str(r#"{"num_threads": 2, "strategy": "parallel"}"#).unwrap();
        assert_eq!(config.num_threads, Some(2));
        assert_eq!(config.strategy, StrategyPolicy::Parallel);
        assert_eq!(config.sigma_accuracy, 5.0);
    }
}
