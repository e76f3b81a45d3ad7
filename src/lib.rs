//! Dailycode: writes a dated Rust file of textbook algorithm snippets, and
//! ships the same algorithms as a small library.

pub mod algorithms;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod generator;

#[cfg(test)]
mod test_support;
