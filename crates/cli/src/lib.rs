//! Library interface for the imcodegen CLI
//!
//! The generation pipeline lives here so integration tests can drive it
//! without spawning the binary.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

pub mod pipeline;

pub use pipeline::{dump_model, run, write_output, GenerateRequest};

/// Starter bindings printed by `--dump-config`
pub const STARTER_CONFIG: &str = include_str!("../config/default_bindings.xml");
