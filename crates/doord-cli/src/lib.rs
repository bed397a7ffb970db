//! Shared argument parsing and command bodies for the doord binaries.

pub mod cli;
pub mod commands;
