//! Stage parameters for the rewriting pipeline.
//!
//! Rewriting runs in two stages — synonym substitution and expansion — each
//! with its own enable flag, substitution budget, and weight divider. The
//! parameters are supplied per call; callers typically deserialize them
//! from their own per-scope configuration source.

use serde::{Deserialize, Serialize};

use crate::error::{Result, XystonError};

/// Parameters for one rewriting stage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StageParams {
    /// Whether this stage runs at all.
    pub enabled: bool,
    /// Maximum number of substitutions applied per rewrite. Zero disables
    /// substitution for the stage even when enabled.
    pub max_rewrites: usize,
    /// Divider feeding the weight formula `base / (substitutions * divider)`.
    pub weight_divider: f64,
}

impl StageParams {
    /// Create enabled stage parameters.
    pub fn new(max_rewrites: usize, weight_divider: f64) -> Self {
        StageParams {
            enabled: true,
            max_rewrites,
            weight_divider,
        }
    }

    /// Create disabled stage parameters.
    pub fn disabled() -> Self {
        StageParams {
            enabled: false,
            max_rewrites: 0,
            weight_divider: 1.0,
        }
    }

    fn validate(&self, stage: &str) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }
        if !self.weight_divider.is_finite() || self.weight_divider <= 0.0 {
            return Err(XystonError::invalid_config(format!(
                "{stage} weight divider must be a positive number, got {}",
                self.weight_divider
            )));
        }
        Ok(())
    }
}

impl Default for StageParams {
    fn default() -> Self {
        StageParams::disabled()
    }
}

/// Parameters for a full rewrite call, one [`StageParams`] per stage.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RewriteParams {
    /// Synonym stage (direct substitution).
    pub synonym: StageParams,
    /// Expansion stage (broader/related terms, chained over synonym output).
    pub expansion: StageParams,
}

impl RewriteParams {
    /// Validate the parameters, failing fast on invalid configuration.
    pub fn validate(&self) -> Result<()> {
        self.synonym.validate("synonym")?;
        self.expansion.validate("expansion")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_are_disabled_and_valid() {
        let params = RewriteParams::default();
        assert!(!params.synonym.enabled);
        assert!(!params.expansion.enabled);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_enabled_stage_requires_positive_divider() {
        let params = RewriteParams {
            synonym: StageParams::new(2, 0.0),
            expansion: StageParams::disabled(),
        };
        let error = params.validate().unwrap_err();
        match error {
            XystonError::Config(msg) => assert!(msg.contains("synonym")),
            other => panic!("Expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_disabled_stage_skips_divider_validation() {
        let params = RewriteParams {
            synonym: StageParams {
                enabled: false,
                max_rewrites: 0,
                weight_divider: 0.0,
            },
            expansion: StageParams::disabled(),
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_params_serialization() {
        let params = RewriteParams {
            synonym: StageParams::new(2, 1.5),
            expansion: StageParams::new(1, 4.0),
        };
        let json = serde_json::to_string(&params).unwrap();
        let back: RewriteParams = serde_json::from_str(&json).unwrap();
        assert_eq!(params, back);
    }
}
