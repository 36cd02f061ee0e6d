//! Dispatch configuration.

/// Configuration for the dispatch loop.
///
/// # Examples
///
/// ```
/// use fleet_dispatch::dispatch::DispatchConfig;
///
/// let config = DispatchConfig::default()
///     .with_exact_search_threshold(16)
///     .with_epsilon(1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// Largest pending-set size for which the exact (exhaustive) selector
    /// runs; above it the greedy selector takes over.
    ///
    /// Subset enumeration is exponential: 2^20 subsets is tractable, much
    /// beyond that is not. Must not exceed 63 (the enumeration uses a
    /// 64-bit mask).
    pub exact_search_threshold: usize,

    /// Tolerance for treating two shipment weights as equal when ranking
    /// candidate subsets. Absorbs floating-point drift in weight sums.
    pub epsilon: f64,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            exact_search_threshold: 20,
            epsilon: 1e-9,
        }
    }
}

impl DispatchConfig {
    pub fn with_exact_search_threshold(mut self, n: usize) -> Self {
        self.exact_search_threshold = n;
        self
    }

    pub fn with_epsilon(mut self, eps: f64) -> Self {
        self.epsilon = eps;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.exact_search_threshold > 63 {
            return Err(format!(
                "exact_search_threshold must be at most 63, got {}",
                self.exact_search_threshold
            ));
        }
        if self.epsilon <= 0.0 {
            return Err(format!("epsilon must be positive, got {}", self.epsilon));
        }
        Ok(())
    }
}
