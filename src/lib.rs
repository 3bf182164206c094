//! # policybot
//!
//! Reply interpretation for the PolicyBot HR assistant: trailing citations and
//! objects embedded in assistant prose.
//!
//! ## Testing
//!
//! Unit tests live next to the code they cover. Cross-module behavior, the
//! property tests and the CLI tests are under `tests/`.

pub mod config;
pub mod reply;
