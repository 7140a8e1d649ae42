//! Configuration management for Stopboard
//!
//! This module provides the `ConfigManager` for loading and saving board
//! settings in TOML format.

mod manager;
pub mod settings;

pub use manager::ConfigManager;
pub use settings::BoardSettings;
