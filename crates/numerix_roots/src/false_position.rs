//! False position (regula falsi) root-finding method.

use num_traits::Float;
use numerix_core::types::SolverError;

use crate::SolverConfig;

/// False position root finder.
///
/// Keeps a bracket like bisection, but replaces the midpoint with the
/// secant-interpolated root `b - f(b)·(b-a)/(f(b)-f(a))`, typically
/// converging much faster on smooth functions.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Convergence
///
/// Two tests are applied after every step, and either one terminates
/// the iteration:
/// - step size: `min(|dx|, root - a)` falls below `delta`, where `dx`
///   is the raw secant step before clamping to the endpoint distance
/// - residual: `|f(root)|` falls below `epsilon`
///
/// The loop is additionally capped at `max_iterations`, after which the
/// current interpolated root is returned as-is.
///
/// # Example
///
/// ```
/// use numerix_roots::{FalsePositionSolver, SolverConfig};
///
/// let solver = FalsePositionSolver::new(SolverConfig::default());
///
/// let f = |x: f64| x * x.sin() - 1.0;
/// let root = solver.find_root(f, 0.0, 2.0).unwrap();
/// assert!((root - 1.114157141).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct FalsePositionSolver<T: Float> {
    /// Solver configuration
    config: SolverConfig<T>,
}

impl<T: Float> FalsePositionSolver<T> {
    /// Create a new false position solver with the given configuration.
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
    /// Requires `f(a) * f(b) <= 0`. Note the asymmetry with bisection:
    /// a zero at either endpoint passes this check (the product is
    /// zero), in which case the first interpolated root lands on that
    /// endpoint and the residual test stops immediately.
    ///
    /// # Arguments
    ///
    /// * `f` - Function to find a root of
    /// * `a` - Left bracket endpoint
    /// * `b` - Right bracket endpoint
    ///
    /// # Returns
    ///
    /// * `Ok(root)` - Last interpolated root
    /// * `Err(SolverError::InvalidInterval)` - `f(a) * f(b) > 0`
    pub fn find_root<F>(&self, f: F, a: T, b: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        let mut a = a;
        let mut b = b;
        let mut ya = f(a);
        let mut yb = f(b);

        if ya * yb > T::zero() {
            return Err(SolverError::InvalidInterval {
                a: a.to_f64().unwrap_or(f64::NAN),
                b: b.to_f64().unwrap_or(f64::NAN),
            });
        }

        let mut root = b;
        for _iteration in 0..self.config.max_iterations {
            // Raw secant step from the b endpoint
            let mut dx = yb * (b - a) / (yb - ya);
            root = b - dx;
            let ac = root - a;
            let yc = f(root);

            if yc == T::zero() {
                break;
            } else if yb * yc > T::zero() {
                b = root;
                yb = yc;
            } else {
                a = root;
                ya = yc;
            }

            // Clamp the step to the distance from the pre-update left
            // endpoint before testing it
            dx = dx.abs().min(ac);
            if dx.abs() < self.config.delta || yc.abs() < self.config.epsilon {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textbook_root() {
        let solver = FalsePositionSolver::new(SolverConfig::default());

        let f = |x: f64| x * x.sin() - 1.0;
        let root = solver.find_root(f, 0.0, 2.0).unwrap();
        assert!(
            (root - 1.114157141).abs() < 1e-6,
            "Expected ≈ 1.114157141, got {}",
            root
        );
    }

    #[test]
    fn test_matches_bisection_root() {
        let config = SolverConfig::default();
        let false_position = FalsePositionSolver::new(config);
        let bisection = crate::BisectionSolver::new(config);

        let f = |x: f64| x * x * x - x - 2.0;
        let r1 = false_position.find_root(f, 1.0, 2.0).unwrap();
        let r2 = bisection.find_root(f, 1.0, 2.0).unwrap();
        assert!((r1 - r2).abs() < 1e-4);
    }

    #[test]
    fn test_same_sign_rejected() {
        let solver = FalsePositionSolver::new(SolverConfig::default());

        let f = |x: f64| x * x + 1.0;
        let err = solver.find_root(f, -1.0, 1.0).unwrap_err();
        assert_eq!(err, SolverError::InvalidInterval { a: -1.0, b: 1.0 });
    }

    #[test]
    fn test_zero_at_endpoint_passes() {
        let solver = FalsePositionSolver::new(SolverConfig::default());

        // f(a) = 0 makes the product zero, which false position accepts
        // (unlike bisection); the first interpolated root is a itself
        let f = |x: f64| x;
        let root = solver.find_root(f, 0.0, 1.0).unwrap();
        assert_eq!(root, 0.0);
    }

    #[test]
    fn test_iteration_cap_returns_current_iterate() {
        let config = SolverConfig {
            delta: 1e-300,
            epsilon: 1e-300,
            max_iterations: 2,
        };
        let solver = FalsePositionSolver::new(config);

        // Impossible tolerances: the loop runs exactly twice and the
        // last interpolated root comes back without an error
        let f = |x: f64| x * x.sin() - 1.0;
        let root = solver.find_root(f, 0.0, 2.0).unwrap();
        assert!(root.is_finite());
    }

    #[test]
    fn test_deterministic() {
        let solver = FalsePositionSolver::new(SolverConfig::default());
        let f = |x: f64| x.cos() - x;

        let r1 = solver.find_root(f, 0.0, 1.0).unwrap();
        let r2 = solver.find_root(f, 0.0, 1.0).unwrap();
        assert_eq!(r1, r2);
    }

    #[test]
    fn test_with_f32() {
        let solver: FalsePositionSolver<f32> =
            FalsePositionSolver::new(SolverConfig::new(1e-4, 1e-4, 100));

        let f = |x: f32| x * x - 2.0;
        let root = solver.find_root(f, 0.0_f32, 2.0_f32).unwrap();
        assert!((root - std::f32::consts::SQRT_2).abs() < 1e-3);
    }
}
