//! Error types for the simulation driver and service.

use goldfish_core::LibraryError;
use thiserror::Error;

/// Error returned from [`Agent::take_turn`](crate::Agent::take_turn).
///
/// Library precondition failures convert with `?`, so an agent can call
/// `library.top(&card)?` directly.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AgentError {
    /// A library override was rejected.
    #[error("library: {0}")]
    Library(#[from] LibraryError),
    /// The agent gave up for its own reasons.
    #[error("agent failed: {reason}")]
    Failed {
        /// Human-readable description of the failure.
        reason: String,
    },
}

impl AgentError {
    /// Shorthand for [`AgentError::Failed`].
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }
}

/// Error surfaced by [`SimulationService`](crate::SimulationService)
/// submission and retrieval.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// The simulation job returned an agent error.
    #[error("simulation failed: {0}")]
    Agent(#[from] AgentError),
    /// A library could not be built for the submission.
    #[error("library setup failed: {0}")]
    Library(#[from] LibraryError),
    /// The simulation job panicked on its worker thread.
    #[error("simulation panicked: {reason}")]
    Panicked {
        /// Panic payload, if it was a string.
        reason: String,
    },
    /// The service no longer accepts submissions.
    #[error("simulation service is shutting down")]
    ShuttingDown,
    /// Every worker exited before the pending result arrived.
    #[error("simulation workers disconnected")]
    Disconnected,
}

/// Errors detected while building a
/// [`SimulationService`](crate::SimulationService).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A worker thread could not be spawned.
    #[error("thread spawn failed: {reason}")]
    ThreadSpawnFailed {
        /// Description of which thread failed and why.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn library_error_converts_into_agent_error() {
        fn place() -> Result<(), AgentError> {
            Err(LibraryError::card_not_drawn(&1))?;
            Ok(())
        }
        assert_eq!(
            place(),
            Err(AgentError::Library(LibraryError::CardNotDrawn {
                card: "1".into()
            }))
        );
    }

    #[test]
    fn entropy_failure_surfaces_as_library_setup_error() {
        let err = SimulationError::from(LibraryError::EntropyUnavailable {
            reason: "no /dev/urandom".into(),
        });
        assert_eq!(
            err.to_string(),
            "library setup failed: entropy unavailable: no /dev/urandom"
        );
    }

    #[test]
    fn simulation_error_display_includes_cause() {
        let err = SimulationError::from(AgentError::failed("out of mana"));
        assert_eq!(
            err.to_string(),
            "simulation failed: agent failed: out of mana"
        );
    }
}
