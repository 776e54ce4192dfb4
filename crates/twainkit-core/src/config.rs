// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Negotiation configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// What to do with a value the source reports as out of its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutOfRangePolicy {
    /// Send the value as-is and let the source accept, clamp, or refuse it.
    #[default]
    Forward,
    /// Skip instructions whose value lies outside the range the source
    /// advertises, logging a warning instead.
    SkipAndWarn,
}

/// Settings for a negotiation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NegotiationConfig {
    /// After each successful set, ask the source for the value it actually
    /// applied and record it in the report.
    pub read_back: bool,
    /// Log every instruction at debug level as it is attempted.
    pub trace_instructions: bool,
    /// Handling of values outside the source's advertised range.
    pub out_of_range: OutOfRangePolicy,
}

impl Default for NegotiationConfig {
    fn default() -> Self {
        Self {
            read_back: false,
            trace_instructions: true,
            out_of_range: OutOfRangePolicy::Forward,
        }
    }
}

impl NegotiationConfig {
    /// Load a config from a JSON file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&text)?;
        debug!(path = %path.display(), "loaded negotiation config");
        Ok(config)
    }

    /// Write the config as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TwainError;

    #[test]
    fn defaults_forward_everything() {
        let config = NegotiationConfig::default();
        assert_eq!(config.out_of_range, OutOfRangePolicy::Forward);
        assert!(!config.read_back);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("negotiation.json");
        std::fs::write(&path, r#"{ "read_back": true }"#).unwrap();

        let config = NegotiationConfig::load(&path).unwrap();
        assert!(config.read_back);
        assert!(config.trace_instructions);
        assert_eq!(config.out_of_range, OutOfRangePolicy::Forward);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("negotiation.json");
        let config = NegotiationConfig {
            read_back: true,
            trace_instructions: false,
            out_of_range: OutOfRangePolicy::SkipAndWarn,
        };
        config.save(&path).unwrap();
        assert_eq!(NegotiationConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = NegotiationConfig::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, TwainError::Io(_)));
    }
}
