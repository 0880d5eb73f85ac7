//! Derivative-free scalar minimization
//!
//! A one-parameter trust-region method: each iteration samples the objective
//! at both ends of the current region, fits a quadratic through the three
//! points and steps to its minimizer (clamped to the region). The region
//! grows after a step that hits its boundary and shrinks whenever a step
//! fails to improve or lands inside it. The search stops once the radius
//! falls below the tolerance or the evaluation budget is spent.
//!
//! The returned point is the lowest objective value ever sampled, which is
//! not necessarily the last iterate.

use tracing::trace;

/// Trust-region parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrustRegion {
    /// Starting half-width of the region
    pub initial_radius: f64,
    /// Stop once the radius drops below this
    pub tolerance: f64,
    /// Hard cap on objective evaluations
    pub max_evaluations: usize,
}

impl Default for TrustRegion {
    fn default() -> Self {
        Self {
            initial_radius: 1.0,
            tolerance: 1e-6,
            max_evaluations: 500,
        }
    }
}

/// Result of a minimization
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Minimum {
    /// Argument of the best sample
    pub x: f64,
    /// Objective value at `x`
    pub fx: f64,
    /// Number of objective evaluations spent
    pub evaluations: usize,
}

/// Counts evaluations and remembers the best sample
struct Tracker<F> {
    f: F,
    evaluations: usize,
    best: (f64, f64),
}

impl<F: FnMut(f64) -> f64> Tracker<F> {
    fn eval(&mut self, x: f64) -> f64 {
        self.evaluations += 1;
        let fx = rank((self.f)(x));
        if fx < self.best.1 {
            self.best = (x, fx);
        }
        fx
    }
}

/// NaN never wins a comparison
#[inline]
fn rank(fx: f64) -> f64 {
    if fx.is_nan() { f64::INFINITY } else { fx }
}

/// Minimize `f` starting from `x0`
pub fn minimize<F>(f: F, x0: f64, region: &TrustRegion) -> Minimum
where
    F: FnMut(f64) -> f64,
{
    let mut tracker = Tracker {
        f,
        evaluations: 0,
        best: (x0, f64::INFINITY),
    };

    let mut x = x0;
    let mut fx = tracker.eval(x0);
    let mut r = region.initial_radius;

    while r >= region.tolerance && tracker.evaluations + 3 <= region.max_evaluations {
        let fl = tracker.eval(x - r);
        let fr = tracker.eval(x + r);

        let g = (fr - fl) / (2.0 * r);
        let h = (fr - 2.0 * fx + fl) / (r * r);

        let model_step = -g / h;
        let (xc, fc, boundary) = if h > 0.0 && model_step.is_finite() && model_step.abs() < r {
            let xc = x + model_step;
            (xc, tracker.eval(xc), false)
        } else if fl < fr {
            (x - r, fl, true)
        } else {
            (x + r, fr, true)
        };

        trace!(x, fx, radius = r, candidate = xc, candidate_fx = fc, "trust region step");

        // Best of the points sampled this round becomes the new center
        let (nx, nfx) = [(x - r, fl), (x + r, fr), (xc, fc)]
            .into_iter()
            .fold((x, fx), |acc, p| if p.1 < acc.1 { p } else { acc });

        if nfx < fx {
            let moved_to_edge = boundary || (nx - x).abs() >= r;
            x = nx;
            fx = nfx;
            if moved_to_edge {
                r *= 2.0;
            } else {
                r *= 0.5;
            }
        } else {
            r *= 0.5;
        }
    }

    let (x, fx) = tracker.best;
    Minimum {
        x,
        fx,
        evaluations: tracker.evaluations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parabola_exact() {
        let region = TrustRegion::default();
        let min = minimize(|x| (x - 7.0) * (x - 7.0) + 2.0, 0.0, &region);
        assert!((min.x - 7.0).abs() < 1e-9, "{min:?}");
        assert!((min.fx - 2.0).abs() < 1e-12, "{min:?}");
    }

    #[test]
    fn test_kink() {
        let region = TrustRegion::default();
        let min = minimize(|x: f64| (x - 1.3).abs(), 0.0, &region);
        assert!((min.x - 1.3).abs() < 1e-4, "{min:?}");
    }

    #[test]
    fn test_far_start_expands_region() {
        let region = TrustRegion {
            initial_radius: 500.0,
            tolerance: 0.01,
            max_evaluations: 500,
        };
        let min = minimize(|t| ((t - 3200.0) / 1000.0).powi(2), 7000.0, &region);
        assert!((min.x - 3200.0).abs() < 0.01, "{min:?}");
    }

    #[test]
    fn test_budget_is_respected() {
        let region = TrustRegion {
            initial_radius: 1.0,
            tolerance: 0.0,
            max_evaluations: 10,
        };
        let min = minimize(|x: f64| x.cos(), 0.5, &region);
        assert!(min.evaluations <= 10, "{min:?}");
    }

    #[test]
    fn test_returns_best_sample() {
        let mut samples = Vec::new();
        let min = minimize(
            |x: f64| {
                let fx = (x * 3.0).sin() + 0.1 * x * x;
                samples.push(fx);
                fx
            },
            2.0,
            &TrustRegion::default(),
        );
        let lowest = samples.iter().copied().fold(f64::INFINITY, f64::min);
        assert_eq!(min.fx, lowest);
    }

    #[test]
    fn test_nan_objective_is_avoided() {
        let min = minimize(
            |x: f64| if x < 0.0 { f64::NAN } else { (x - 0.5).powi(2) },
            2.0,
            &TrustRegion::default(),
        );
        assert!(min.fx.is_finite());
        assert!((min.x - 0.5).abs() < 1e-6, "{min:?}");
    }
}
