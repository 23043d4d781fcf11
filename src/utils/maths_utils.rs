use argminmax::ArgMinMax;

/// Magnitudes below this are treated as zero when used as a divisor.
pub const NEAR_ZERO: f64 = 1e-12;

pub fn get_max(vec: &[f64]) -> f64 {
    let max_index: usize = vec.argmax();
    vec[max_index]
}

pub fn get_min(vec: &[f64]) -> f64 {
    let min_index: usize = vec.argmin();
    vec[min_index]
}

/// (min, max) of a slice, or `None` if it is empty.
pub fn get_min_max(vec: &[f64]) -> Option<(f64, f64)> {
    if vec.is_empty() {
        return None;
    }
    Some((get_min(vec), get_max(vec)))
}

#[inline]
pub fn is_near_zero(value: f64, epsilon: f64) -> bool {
    value.abs() < epsilon
}

/// Percent change of `value` relative to `base`.
/// Caller guarantees `base` is not near zero.
#[inline]
pub fn pct_change(base: f64, value: f64) -> f64 {
    (value / base - 1.0) * 100.0
}

/// Ordinary least squares slope of `y` against x = 0, 1, 2, ...
/// Fewer than two points (or a degenerate x spread) gives 0.0.
pub fn linear_slope(y: &[f64]) -> f64 {
    let n = y.len() as f64;
    if y.len() < 2 {
        return 0.0;
    }
    let x_mean = (n - 1.0) / 2.0;
    let y_mean = y.iter().sum::<f64>() / n;

    let (num, den) = y
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(num, den), (i, &yi)| {
            let dx = i as f64 - x_mean;
            (num + dx * (yi - y_mean), den + dx * dx)
        });

    if is_near_zero(den, NEAR_ZERO) {
        return 0.0;
    }
    num / den
}
