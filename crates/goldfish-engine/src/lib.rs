//! Simulation engine for the Goldfish deck simulator.
//!
//! Provides the [`Agent`] trait callers implement to make in-game
//! decisions, the single-run [`Goldfish`] driver, and the concurrent
//! [`SimulationService`] that fans many runs out over a worker pool and
//! hands finished agents back in completion order.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod agent;
pub mod config;
pub mod error;
pub mod goldfish;
pub mod service;

pub use agent::Agent;
pub use config::{ServiceConfig, SimulationOptions};
pub use error::{AgentError, ConfigError, SimulationError};
pub use goldfish::{Goldfish, OPENING_HAND_SIZE};
pub use service::SimulationService;
