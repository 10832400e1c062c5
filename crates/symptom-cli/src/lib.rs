//! CLI library components for the symptom identifier.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod render;
pub mod shell;
