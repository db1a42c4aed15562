//! Secant root-finding method.

use num_traits::Float;

use crate::SolverConfig;

/// Secant root finder.
///
/// Newton-like iteration that estimates the slope from the two previous
/// iterates instead of an explicit derivative:
/// `p2 = p1 - f(p1)·(p1 - p0) / (f(p1) - f(p0))`.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Convergence
///
/// Identical dual test to [`crate::NewtonRaphsonSolver`] applied to the
/// step `p2 - p1` and the residual `|f(p2)|`, capped at
/// `max_iterations`.
///
/// # Numerical Hazards
///
/// Open method: no bracket and no convergence guarantee. The division
/// by `f(p1) - f(p0)` is deliberately unguarded; equal function values
/// at consecutive iterates propagate ±inf/NaN into the returned
/// iterate. The method itself never fails.
///
/// # Example
///
/// ```
/// use numerix_roots::{SecantSolver, SolverConfig};
///
/// // Solve x³ - 3x + 2 = 0 from seeds near -2
/// let solver = SecantSolver::new(SolverConfig::default());
///
/// let f = |x: f64| x * x * x - 3.0 * x + 2.0;
/// let root = solver.find_root(f, -2.6, -2.4);
/// assert!((root + 2.0).abs() < 1e-5);
/// ```
#[derive(Debug, Clone)]
pub struct SecantSolver<T: Float> {
    /// Solver configuration
    config: SolverConfig<T>,
}

impl<T: Float> SecantSolver<T> {
    /// Create a new secant solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Find a root of `f` from the two initial approximations.
    ///
    /// # Arguments
    ///
    /// * `f` - Function to find a root of
    /// * `p0` - First initial approximation
    /// * `p1` - Second initial approximation
    ///
    /// # Returns
    ///
    /// The last iterate once a convergence test passes or the iteration
    /// cap is reached; non-finite when the secant denominator vanishes
    /// (see the type-level hazard notes).
    pub fn find_root<F>(&self, f: F, p0: T, p1: T) -> T
    where
        F: Fn(T) -> T,
    {
        let two = T::from(2.0).unwrap();
        let mut p0 = p0;
        let mut p1 = p1;

        for _iteration in 0..self.config.max_iterations {
            let p2 = p1 - f(p1) * (p1 - p0) / (f(p1) - f(p0));
            let absolute_error = (p2 - p1).abs();
            let relative_error = two * absolute_error / (p2.abs() + self.config.delta);
            p0 = p1;
            p1 = p2;
            let y = f(p1);

            if absolute_error < self.config.delta
                || relative_error < self.config.delta
                || y.abs() < self.config.epsilon
            {
                break;
            }
        }

        p1
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}
