//! Library components for the intake CLI.

pub mod backend;
pub mod logging;
