//! Configuration for the sandwich solver and the family layout.

use crate::error::{LayoutError, Result};

/// Default bound on the number of simultaneously open intervals
pub const DEFAULT_MAX_WIDTH: usize = 3;

/// Default number of worklist pops before a search attempt gives up
pub const DEFAULT_MAX_ITERATIONS: usize = 100_000;

/// Configuration for the `SandwichSolver`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// A realization may never reach this many active vertices
    pub max_width: usize,
    /// Hard cap on worklist pops per search attempt
    pub max_iterations: usize,
    /// Whether `solve` may drop forbidden edges when no strict layout exists
    pub relax_forbidden: bool,
    /// Largest number of forbidden edges removed at once (None = all of them)
    pub max_relaxation: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            relax_forbidden: true,
            max_relaxation: None,
        }
    }
}

impl SolverConfig {
    /// Create a new instance with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder for constructing a solver configuration
    #[must_use]
    pub fn builder() -> SolverConfigBuilder {
        SolverConfigBuilder::new()
    }

    /// Check that the configuration can drive a search
    pub fn validate(&self) -> Result<()> {
        if self.max_width < 2 {
            return Err(LayoutError::InvalidConfig(format!(
                "max_width must be at least 2, got {}",
                self.max_width
            )));
        }
        if self.max_iterations == 0 {
            return Err(LayoutError::InvalidConfig(
                "max_iterations must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for constructing a solver configuration
#[derive(Debug, Clone)]
pub struct SolverConfigBuilder {
    config: SolverConfig,
}

impl Default for SolverConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverConfigBuilder {
    /// Create a new builder with default settings
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Set the active vertex bound
    #[must_use]
    pub const fn max_width(mut self, width: usize) -> Self {
        self.config.max_width = width;
        self
    }

    /// Set the iteration cap of a single search attempt
    #[must_use]
    pub const fn max_iterations(mut self, iterations: usize) -> Self {
        self.config.max_iterations = iterations;
        self
    }

    /// Set whether forbidden edges may be relaxed
    #[must_use]
    pub const fn relax_forbidden(mut self, relax: bool) -> Self {
        self.config.relax_forbidden = relax;
        self
    }

    /// Cap the size of relaxed edge combinations
    #[must_use]
    pub const fn max_relaxation(mut self, edges: usize) -> Self {
        self.config.max_relaxation = Some(edges);
        self
    }

    /// Build the solver configuration
    #[must_use]
    pub const fn build(self) -> SolverConfig {
        self.config
    }
}

/// Configuration for laying out whole families
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Solver settings used for every connected component
    pub solver: SolverConfig,
    /// Synthesize placeholder parents before building connections
    pub add_missing_members: bool,
    /// Show a progress bar when laying out batches of families
    pub show_progress: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            solver: SolverConfig::default(),
            add_missing_members: true,
            show_progress: false,
        }
    }
}

impl LayoutConfig {
    /// Use the given solver configuration
    #[must_use]
    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    /// Enable or disable placeholder parents
    #[must_use]
    pub const fn with_missing_members(mut self, add: bool) -> Self {
        self.add_missing_members = add;
        self
    }

    /// Enable or disable the batch progress bar
    #[must_use]
    pub const fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }
}
