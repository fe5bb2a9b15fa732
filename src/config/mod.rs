//! Workbench Configuration Module
//!
//! Provides deployment configuration loaded from TOML files, covering the
//! presentation-facing knobs: slider bounds, checkbox polarity, display
//! rounding, and the server address.
//!
//! ## Loading Order
//!
//! 1. `GPOS_CONFIG` environment variable (path to TOML file)
//! 2. `gpos_workbench.toml` in the current working directory
//! 3. Built-in defaults (matching the original calculator)
//!
//! ## Usage
//!
//! `main()` loads the config once and hands it to `WorkbenchState`; the
//! session and handlers carry what they need explicitly, so the config is
//! never ambient global state and the core stays testable in isolation.

mod workbench_config;
pub mod validation;

pub use workbench_config::*;
