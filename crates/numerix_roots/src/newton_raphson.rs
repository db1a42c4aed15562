//! Newton-Raphson root-finding method.

use num_traits::Float;

use crate::SolverConfig;

/// Newton-Raphson root finder.
///
/// Uses Newton's iteration `p1 = p0 - f(p0) / f'(p0)` for fast quadratic
/// convergence on smooth functions. The caller supplies both `f` and its
/// derivative.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Convergence
///
/// Three tests are applied after every step, and any one terminates the
/// iteration:
/// - absolute error `|p1 - p0| < delta`
/// - relative error `2·|p1 - p0| / (|p1| + delta) < delta`
/// - residual `|f(p1)| < epsilon`
///
/// # Numerical Hazards
///
/// This is an open method: there is no bracket, no guarantee of
/// convergence, and the division by `f'(p0)` is deliberately unguarded.
/// A zero derivative or a divergent iteration propagates through
/// floating-point division as ±inf/NaN and comes back in the returned
/// iterate; the method itself never fails. Callers who need a
/// convergence guarantee should prefer a bracketing method.
///
/// # Example
///
/// ```
/// use numerix_roots::{NewtonRaphsonSolver, SolverConfig};
///
/// // Solve x² - 2 = 0 (find √2)
/// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
///
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let root = solver.find_root(f, df, 1.0);
/// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonRaphsonSolver<T: Float> {
    /// Solver configuration
    config: SolverConfig<T>,
}

impl<T: Float> NewtonRaphsonSolver<T> {
    /// Create a new Newton-Raphson solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Find a root of `f` from the initial approximation `p0`.
    ///
    /// # Arguments
    ///
    /// * `f` - Function to find a root of
    /// * `df` - Derivative of `f`
    /// * `p0` - Initial approximation
    ///
    /// # Returns
    ///
    /// The last iterate once a convergence test passes or the iteration
    /// cap is reached. Non-finite values are possible when the
    /// derivative vanishes or the iteration diverges (see the type-level
    /// hazard notes).
    pub fn find_root<F, G>(&self, f: F, df: G, p0: T) -> T
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        let two = T::from(2.0).unwrap();
        let mut p0 = p0;

        for _iteration in 0..self.config.max_iterations {
            let p1 = p0 - f(p0) / df(p0);
            let absolute_error = (p1 - p0).abs();
            let relative_error = two * absolute_error / (p1.abs() + self.config.delta);
            p0 = p1;
            let y = f(p0);

            if absolute_error < self.config.delta
                || relative_error < self.config.delta
                || y.abs() < self.config.epsilon
            {
                break;
            }
        }

        p0
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_sqrt_2() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());

        let f = |x: f64| x * x - 2.0;
        let df = |x: f64| 2.0 * x;

        let root = solver.find_root(f, df, 1.0);
        assert!(
            (root - std::f64::consts::SQRT_2).abs() < 1e-10,
            "Expected √2, got {}",
            root
        );
    }

    #[test]
    fn test_textbook_root() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());

        // 1980(1 - e^(-x/10)) - 98x = 0 from p0 = 16
        let f = |x: f64| 1980.0 * (1.0 - (-x / 10.0).exp()) - 98.0 * x;
        let df = |x: f64| 198.0 * (-x / 10.0).exp() - 98.0;

        let root = solver.find_root(f, df, 16.0);
        assert!(
            (root - 16.20957798).abs() < 1e-4,
            "Expected ≈ 16.20957798, got {}",
            root
        );
    }

    #[test]
    fn test_find_sin_root() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());

        let f = |x: f64| x.sin();
        let df = |x: f64| x.cos();

        let root = solver.find_root(f, df, 3.0);
        assert!((root - std::f64::consts::PI).abs() < 1e-8);
    }

    #[test]
    fn test_zero_derivative_propagates_non_finite() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());

        // Constant function with identically zero derivative: the
        // division is unguarded and the iterate blows up
        let f = |_x: f64| 1.0;
        let df = |_x: f64| 0.0;

        let root = solver.find_root(f, df, 0.5);
        assert!(!root.is_finite());
    }

    #[test]
    fn test_iteration_cap_returns_current_iterate() {
        let config = SolverConfig {
            delta: 1e-300,
            epsilon: 1e-300,
            max_iterations: 3,
        };
        let solver = NewtonRaphsonSolver::new(config);

        let f = |x: f64| x * x - 2.0;
        let df = |x: f64| 2.0 * x;

        let root = solver.find_root(f, df, 1.0);
        assert!(root.is_finite());
    }

    #[test]
    fn test_deterministic() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());

        let f = |x: f64| x.exp() - 2.0;
        let df = |x: f64| x.exp();

        let r1 = solver.find_root(f, df, 0.5);
        let r2 = solver.find_root(f, df, 0.5);
        assert_eq!(r1, r2);
    }

    #[test]
    fn test_with_f32() {
        let solver: NewtonRaphsonSolver<f32> =
            NewtonRaphsonSolver::new(SolverConfig::new(1e-4, 1e-4, 100));

        let f = |x: f32| x * x - 2.0;
        let df = |x: f32| 2.0 * x;

        let root = solver.find_root(f, df, 1.0_f32);
        assert!((root - std::f32::consts::SQRT_2).abs() < 1e-4);
    }
}
