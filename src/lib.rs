// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod logging;

#[cfg(feature = "cli")]
pub mod cli;
pub mod collect;
pub mod config;
pub mod core;
pub mod csv;
pub mod data;
pub mod error;
pub mod file;
pub mod gui;
pub mod pages;
pub mod progress;
pub mod render;
pub mod sheets;
pub mod specs;
pub mod store;
