use serde::{Deserialize, Serialize};

/// Knobs for the column-index resolution pass.
///
/// - `refine_neighbor_projections` canonicalizes a projection's bare column
///   references when its child is also a projection that passes one input
///   through more than once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanConfig {
    /// Canonicalize duplicate passthrough columns across stacked projections
    pub refine_neighbor_projections: bool,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self { refine_neighbor_projections: true }
    }
}

impl PlanConfig {
    /// Create default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience: resolve every node but skip the stacked-projection
    /// canonicalization step.
    pub fn without_projection_refinement() -> Self {
        Self { refine_neighbor_projections: false }
    }
}
