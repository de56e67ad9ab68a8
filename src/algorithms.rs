use itertools::Itertools;
use ncollide2d::na::RealField;
use std::f64::consts::PI;

/// Finds the index of the last element of an ascending slice which is not greater than the test
/// value. Values below the second element return 0, values at or beyond the last element return
/// the last index.
fn preceding_index_search<N: RealField + Copy>(slice: &[N], test_value: N) -> usize {
    if slice.len() <= 1 || slice[1] > test_value {
        return 0;
    }

    let mut a = 1;
    let mut b = slice.len() - 1;
    if slice[b] <= test_value {
        return b;
    }

    while b > a + 1 {
        let check = (a + b) / 2;
        if test_value >= slice[check] {
            a = check;
        } else {
            b = check;
        }
    }
    a
}

/// Returns `count` evenly spaced values from `start` to `stop`, with both endpoints included
/// exactly.
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
            values[count - 1] = stop;
            values
        }
    }
}

/// Cosine spaced values on [0, 1], clustered towards both ends. The first and last values are
/// exactly 0.0 and 1.0.
pub fn cosine_spacing(count: usize) -> Vec<f64> {
    let mut values: Vec<f64> = linspace(0.0, PI, count)
        .into_iter()
        .map(|t| (1.0 - t.cos()) / 2.0)
        .collect();

    if let Some(first) = values.first_mut() {
        *first = 0.0;
    }
    if count > 1 {
        values[count - 1] = 1.0;
    }
    values
}

/// One dimensional piecewise linear interpolation of the function sampled at (`xp`, `fp`),
/// evaluated at `x`. Values outside of the sampled range are clamped to the end values.
///
/// `xp` is expected to be in ascending order. If it isn't the result is still finite, but it is
/// not meaningful. A NaN `x`, or empty samples, give NaN.
pub fn interp(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    let count = xp.len().min(fp.len());
    if count == 0 || x.is_nan() {
        return f64::NAN;
    }

    let last = count - 1;
    if x <= xp[0] {
        return fp[0];
    }
    if x >= xp[last] {
        return fp[last];
    }

    let i = preceding_index_search(&xp[..count], x);
    let span = xp[i + 1] - xp[i];
    if span <= 0.0 {
        return fp[i];
    }

    let f = (x - xp[i]) / span;
    fp[i] + (fp[i + 1] - fp[i]) * f
}

pub fn is_non_decreasing(values: &[f64]) -> bool {
    values.iter().tuple_windows().all(|(a, b)| a <= b)
}
