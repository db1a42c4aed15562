//! Solver configuration types.

use num_traits::Float;

/// Configuration shared by the root-finding methods.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for the tolerances (e.g., `f64`)
///
/// # Tolerances
///
/// The methods use two independent tolerances:
/// - `delta` bounds the step size (open methods) or the bracket width
///   (bracketing methods)
/// - `epsilon` bounds the residual `|f(root)|`
///
/// Bisection derives its own iteration count from `delta` and the
/// bracket width; it reads neither `epsilon` nor `max_iterations`.
///
/// # Example
///
/// ```
/// use numerix_roots::SolverConfig;
///
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert!(config.delta <= 1e-6);
/// assert!(config.max_iterations >= 50);
///
/// let custom = SolverConfig {
///     delta: 1e-10,
///     epsilon: 1e-12,
///     max_iterations: 200,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig<T: Float> {
    /// Step-size / bracket-width tolerance.
    pub delta: T,

    /// Residual tolerance: convergence once `|f(root)| < epsilon`.
    pub epsilon: T,

    /// Maximum number of iterations before the open and false-position
    /// methods return the current iterate.
    pub max_iterations: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Create a default configuration with sensible values.
    ///
    /// Default values:
    /// - `delta`: 1e-6
    /// - `epsilon`: 1e-6
    /// - `max_iterations`: 100
    fn default() -> Self {
        Self {
            delta: T::from(1e-6).unwrap(),
            epsilon: T::from(1e-6).unwrap(),
            max_iterations: 100,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a new configuration with specified values.
    ///
    /// # Arguments
    ///
    /// * `delta` - Step-size tolerance (must be positive)
    /// * `epsilon` - Residual tolerance (must be positive)
    /// * `max_iterations` - Iteration cap (must be > 0)
    ///
    /// # Panics
    ///
    /// Panics if either tolerance is not positive or `max_iterations`
    /// is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use numerix_roots::SolverConfig;
    ///
    /// let config = SolverConfig::new(1e-8, 1e-8, 250);
    /// assert_eq!(config.max_iterations, 250);
    /// ```
    pub fn new(delta: T, epsilon: T, max_iterations: usize) -> Self {
        assert!(delta > T::zero(), "delta must be positive");
        assert!(epsilon > T::zero(), "epsilon must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            delta,
            epsilon,
            max_iterations,
        }
    }

    /// Create a configuration with high precision settings.
    ///
    /// Tighter tolerances (1e-10) and more iterations (500) for cases
    /// requiring extra precision.
    pub fn high_precision() -> Self {
        Self {
            delta: T::from(1e-10).unwrap(),
            epsilon: T::from(1e-10).unwrap(),
            max_iterations: 500,
        }
    }

    /// Create a configuration optimised for fast convergence.
    ///
    /// Relaxed tolerances (1e-4) and fewer iterations (50) for cases
    /// where speed matters more than precision.
    pub fn fast() -> Self {
        Self {
            delta: T::from(1e-4).unwrap(),
            epsilon: T::from(1e-4).unwrap(),
            max_iterations: 50,
        }
    }
}
