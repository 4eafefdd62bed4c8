//! Version labeler action library.
//!
//! Exposes the command implementations so they can be driven from tests.

pub mod annotations;
pub mod commands;
pub mod config;
pub mod errors;
pub mod inputs;

#[cfg(test)]
mod test_support;
