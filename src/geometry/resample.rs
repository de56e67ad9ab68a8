use crate::algorithms::{interp, is_non_decreasing, linspace};
use crate::geometry::curve2::ParametricCurve2;

/// The number of curve evaluations per output abscissa when resampling a curve onto an x grid
pub const OVERSAMPLE: usize = 3;

fn sample_xy<C: ParametricCurve2 + ?Sized>(curve: &C, count: usize) -> (Vec<f64>, Vec<f64>) {
    let points = curve.evaluate_multi(&linspace(0.0, 1.0, count));
    points.iter().map(|p| (p.x, p.y)).unzip()
}

/// Returns the y value of the curve at each x in `x_vec`. The curve is evaluated at
/// `OVERSAMPLE * x_vec.len()` uniformly spaced parameters and the resulting points are treated as
/// a piecewise linear function of x.
///
/// The curve's x coordinate must not decrease along the parameter for the result to be
/// meaningful. This is not enforced: a non-monotonic curve is logged as a warning and the
/// interpolation proceeds anyway. Use `x_monotonic` to check ahead of time.
pub fn resample_on_x<C: ParametricCurve2 + ?Sized>(curve: &C, x_vec: &[f64]) -> Vec<f64> {
    let (xs, ys) = sample_xy(curve, x_vec.len() * OVERSAMPLE);

    if !is_non_decreasing(&xs) {
        log::warn!(
            "curve x is not monotonic over {} samples, resampled values are unreliable",
            xs.len()
        );
    }

    x_vec.iter().map(|x| interp(*x, &xs, &ys)).collect()
}

/// Checks whether the curve's x coordinate is non-decreasing over `samples` uniformly spaced
/// parameter values
pub fn x_monotonic<C: ParametricCurve2 + ?Sized>(curve: &C, samples: usize) -> bool {
    let (xs, _) = sample_xy(curve, samples);
    is_non_decreasing(&xs)
}
