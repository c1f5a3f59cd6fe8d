// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;

pub mod aggregate;
pub mod csv;
pub mod extract;
pub mod fetch;
pub mod file;
pub mod gui;
pub mod log;
pub mod progress;
pub mod runner;
