// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for twainkit.
//
// The option model itself never fails. Errors come from the negotiation
// collaborator, from profile persistence, and from decoding wire values.

use thiserror::Error;

use crate::capability::CapabilityId;

/// Top-level error type for all twainkit operations.
#[derive(Debug, Error)]
pub enum TwainError {
    // -- Negotiation errors --
    #[error("capability {0} is not supported by the source")]
    CapabilityUnsupported(CapabilityId),

    #[error("source rejected value for {cap}: {reason}")]
    ValueRejected { cap: CapabilityId, reason: String },

    #[error("data source is not open")]
    SourceNotOpen,

    // -- Wire decoding --
    #[error("unknown {kind} wire value {value}")]
    UnknownWireValue { kind: &'static str, value: i32 },

    // -- Profiles / persistence --
    #[error("invalid acquisition profile: {0}")]
    Profile(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TwainError {
    /// Whether this error came from the device refusing an instruction, as
    /// opposed to a local failure.
    pub fn is_device_rejection(&self) -> bool {
        matches!(
            self,
            Self::CapabilityUnsupported(_) | Self::ValueRejected { .. }
        )
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, TwainError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::ICAP_BRIGHTNESS;

    #[test]
    fn messages_name_the_capability() {
        let err = TwainError::CapabilityUnsupported(ICAP_BRIGHTNESS);
        assert_eq!(
            err.to_string(),
            "capability ICAP_BRIGHTNESS is not supported by the source"
        );
    }

    #[test]
    fn device_rejections_are_classified() {
        assert!(TwainError::CapabilityUnsupported(ICAP_BRIGHTNESS).is_device_rejection());
        assert!(
            TwainError::ValueRejected {
                cap: ICAP_BRIGHTNESS,
                reason: "out of range".into()
            }
            .is_device_rejection()
        );
        assert!(!TwainError::SourceNotOpen.is_device_rejection());
        assert!(!TwainError::Profile("empty".into()).is_device_rejection());
    }
}
