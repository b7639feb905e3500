//! # Core Module
//!
//! Shared settings that other subsystems depend on.
//!
//! ## Organization
//!
//! - **Config**: Unified configuration for the engine and physics subsystems
//! - **Foundation**: Low-level utilities (math, logging)

pub mod config;

// Re-export foundation modules for convenience
pub use crate::foundation;

// Re-export commonly used config types
pub use config::{
    SimulationConfig,
    EngineConfig,
    PhysicsConfig,
    ResolveStrategy,
    DegenerateTrianglePolicy,
    Config,
    ConfigError,
};
