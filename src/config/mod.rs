// src/config/mod.rs

//! Configuration loading and validation for dagkit.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate parameter sanity before any component runs (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path, load_raw_or_default};
pub use model::{
    ConfigFile, DisplaySection, GenerateSection, RawConfigFile, RenderSection, WeightRange,
};
