//! # Unified Configuration System
//!
//! Configuration for the engine shell (logging) and the collision subsystem.
//!
//! ## Design Goals
//!
//! - **Serializable**: Loadable from TOML or RON through [`Config`]
//! - **Type Safe**: Strategies and policies are enums, not magic numbers
//! - **Validated**: [`SimulationConfig::validate`] rejects unusable values

use serde::{Serialize, Deserialize};

// Re-export from the config module for compatibility
pub use crate::config::{Config, ConfigError};

/// Default contact tolerance and depenetration margin (world units)
pub const DEFAULT_CONTACT_EPSILON: f32 = 1e-4;

/// How the capsule resolver treats multi-triangle contacts within one call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolveStrategy {
    /// One scan over every triangle with probes computed up front.
    /// Corner contacts may take several ticks to settle.
    #[default]
    SinglePass,
    /// Repeat the scan with fresh probes until no pass pushes the capsule
    /// further than the contact epsilon, or the cap is reached.
    Relaxation {
        /// Upper bound on scans per call (1 behaves like `SinglePass`)
        max_iterations: u32,
    },
}

impl ResolveStrategy {
    /// Number of scans this strategy may perform in one call
    pub fn max_passes(&self) -> u32 {
        match self {
            Self::SinglePass => 1,
            Self::Relaxation { max_iterations } => *max_iterations,
        }
    }
}

/// What mesh ingestion does with zero-area triangles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegenerateTrianglePolicy {
    /// Drop the triangle with a warning and keep ingesting the mesh
    #[default]
    Skip,
    /// Fail the whole mesh
    Reject,
    /// Store it anyway (its normal is NaN)
    Keep,
}

/// # Physics Configuration
///
/// Tunables for the narrow-phase capsule resolver and for static mesh ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Penetration at or below this value counts as contact; also the extra
    /// margin added when pushing the capsule out
    pub contact_epsilon: f32,
    /// Multi-contact resolution strategy
    pub strategy: ResolveStrategy,
    /// Handling of zero-area triangles at ingestion time
    pub degenerate_triangles: DegenerateTrianglePolicy,
}

impl PhysicsConfig {
    /// Create a physics configuration with default values
    pub fn new() -> Self {
        Self {
            contact_epsilon: DEFAULT_CONTACT_EPSILON,
            strategy: ResolveStrategy::SinglePass,
            degenerate_triangles: DegenerateTrianglePolicy::Skip,
        }
    }

    /// Set contact epsilon
    pub fn with_contact_epsilon(mut self, epsilon: f32) -> Self {
        self.contact_epsilon = epsilon;
        self
    }

    /// Set resolve strategy
    pub fn with_strategy(mut self, strategy: ResolveStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the degenerate triangle policy
    pub fn with_degenerate_triangles(mut self, policy: DegenerateTrianglePolicy) -> Self {
        self.degenerate_triangles = policy;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.contact_epsilon.is_finite() || self.contact_epsilon <= 0.0 {
            return Err(format!(
                "Contact epsilon must be a positive finite number, got {}",
                self.contact_epsilon
            ));
        }

        if self.strategy.max_passes() == 0 {
            return Err("Relaxation needs at least one iteration".to_string());
        }

        Ok(())
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Engine Configuration
///
/// Core behavior shared by every subsystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Default log filter, overridden by `RUST_LOG`
    pub log_level: String,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Complete Simulation Configuration
///
/// Top-level configuration applications load at startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Engine core configuration
    pub engine: EngineConfig,
    /// Collision subsystem configuration
    pub physics: PhysicsConfig,
}

impl SimulationConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.engine.log_level.trim().is_empty() {
            return Err(ConfigError::Invalid("Log level cannot be empty".to_string()));
        }
        self.physics.validate().map_err(ConfigError::Invalid)
    }
}

impl Config for SimulationConfig {}
