//! Test utilities for Goldfish development.
//!
//! Provides reusable [`Agent`](goldfish_engine::Agent) fixtures and small
//! deck builders for engine and service tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    land_spell_deck, numbered_deck, FailingAgent, PanickingAgent, ScriptedAgent, SleepyAgent,
};
