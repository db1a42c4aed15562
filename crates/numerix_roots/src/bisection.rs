//! Bisection root-finding method.

use num_traits::Float;
use numerix_core::types::SolverError;

use crate::SolverConfig;

/// Bisection root finder.
///
/// Repeatedly halves a bracket `[a, b]` whose endpoints produce function
/// values of different sign, keeping the half that still contains the
/// sign change.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Termination
///
/// Unlike the other methods, bisection does not run an open-ended
/// convergence loop: the iteration count is precomputed as
/// `ceil(log2((b - a) / delta)) + 1`, the number of halvings guaranteed
/// to shrink the bracket below `delta`. A secondary early exit fires as
/// soon as `b - a < delta`, and an exact-zero midpoint stops
/// immediately. `epsilon` and `max_iterations` from the configuration
/// are not consulted.
///
/// # Example
///
/// ```
/// use numerix_roots::{BisectionSolver, SolverConfig};
///
/// let solver = BisectionSolver::new(SolverConfig::default());
///
/// // Solve x² - 2 = 0 in [0, 2]
/// let f = |x: f64| x * x - 2.0;
///
/// let root = solver.find_root(f, 0.0, 2.0).unwrap();
/// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-5);
/// ```
#[derive(Debug, Clone)]
pub struct BisectionSolver<T: Float> {
    /// Solver configuration
    config: SolverConfig<T>,
}

impl<T: Float> BisectionSolver<T> {
    /// Create a new bisection solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Find a root of `f` in the bracket `[a, b]`.
    ///
    /// Requires that `f(a)` and `f(b)` have strictly different sign:
    /// `f(a) * f(b) >= 0` — including a zero at either endpoint — is
    /// rejected before any midpoint is evaluated.
    ///
    /// # Arguments
    ///
    /// * `f` - Function to find a root of
    /// * `a` - Left bracket endpoint
    /// * `b` - Right bracket endpoint
    ///
    /// # Returns
    ///
    /// * `Ok(root)` - Last computed midpoint; within `delta` of a root
    ///   for any continuous `f` over a valid bracket
    /// * `Err(SolverError::InvalidInterval)` - Sign condition violated
    ///
    /// # Example
    ///
    /// ```
    /// use numerix_roots::{BisectionSolver, SolverConfig};
    ///
    /// let solver = BisectionSolver::new(SolverConfig::default());
    ///
    /// // Solve x·sin(x) - 1 = 0 in [0, 2]
    /// let f = |x: f64| x * x.sin() - 1.0;
    ///
    /// let root = solver.find_root(f, 0.0, 2.0).unwrap();
    /// assert!((f(root)).abs() < 1e-5);
    /// ```
    pub fn find_root<F>(&self, f: F, a: T, b: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        let mut a = a;
        let mut b = b;
        let ya = f(a);
        let mut yb = f(b);

        if ya * yb >= T::zero() {
            return Err(SolverError::InvalidInterval {
                a: a.to_f64().unwrap_or(f64::NAN),
                b: b.to_f64().unwrap_or(f64::NAN),
            });
        }

        let two = T::from(2.0).unwrap();

        // Halvings needed to shrink the bracket below delta. A bracket
        // already narrower than delta yields a negative bound, which
        // collapses to a single midpoint evaluation.
        let bound = (((b - a).ln() - self.config.delta.ln()) / two.ln()).ceil();
        let max_iterations = bound.to_usize().unwrap_or(0) + 1;

        let mut root = (a + b) / two;
        for _iteration in 0..max_iterations {
            root = (a + b) / two;
            let yc = f(root);

            if yc == T::zero() {
                break;
            } else if yc * yb > T::zero() {
                b = root;
                yb = yc;
            } else {
                a = root;
            }

            if b - a < self.config.delta {
                break;
            }
        }

        Ok(root)
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}
