//! Error types.
//!
//! Card plays never raise: a refused play is a `PlayFailure` carried
//! inside `ExecutionResult`. Only configuration loading returns `Result`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a card effect did not resolve.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayFailure {
    /// A targeted card was executed without a target.
    #[error("no target selected")]
    NoTarget,

    /// The card was executed without a game state to act on.
    #[error("no game state available")]
    NoGameState,
}

impl PlayFailure {
    /// Stable reason code for callers that switch on strings.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            PlayFailure::NoTarget => "no_target",
            PlayFailure::NoGameState => "no_game_state",
        }
    }
}

/// Errors raised while loading card tunables.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_codes() {
        assert_eq!(PlayFailure::NoTarget.code(), "no_target");
        assert_eq!(PlayFailure::NoGameState.code(), "no_game_state");
    }

    #[test]
    fn test_failure_display() {
        assert_eq!(PlayFailure::NoTarget.to_string(), "no target selected");
        assert_eq!(PlayFailure::NoGameState.to_string(), "no game state available");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::invalid("solar_beam.crit_chance", "must be within [0, 1]");
        assert_eq!(
            err.to_string(),
            "Invalid value for solar_beam.crit_chance: must be within [0, 1]"
        );
    }
}
