//! # Automatic Door Controller
//!
//! A finite-state controller for an automatic door. The door moves between `Closed`, `Opening`,
//! `Open` and `Closing` in response to motion, timer and position-sensor events, driven entirely by
//! a data transition table. Notifications describing each transition go to a pluggable sink.

pub mod config;
pub mod controllers;
pub mod errors;
pub mod models;
pub mod simulation;
pub mod state_management;
pub mod utils;
