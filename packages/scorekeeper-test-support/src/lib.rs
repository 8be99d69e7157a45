//! Scorekeeper test support utilities
//!
//! This crate provides utilities shared by the scorekeeper unit and
//! integration tests: unified logging initialization, unique fixture names,
//! and assertions over the persisted tournament record shape.

pub mod logging;
pub mod record_shape;
pub mod unique_helpers;
