//! # Textkit CLI
//!
//! Library half of the `tkit` binary: argument definitions, layered configuration and
//! command dispatch. Kept separate from `main.rs` so it can be unit tested.

pub mod args;
pub mod commands;
pub mod config;
