//! Inverse interpolation for boundary crossings.

/// Evaluate the Lagrange polynomial through `(xs[i], ys[i])` at `x`.
///
/// Used inversely: `xs` are angles and `ys` are times, so the result is the
/// time at which the angle reaches `x`. Returns NaN for coincident abscissae.
pub fn lagrange(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    let mut sum = 0.0;
    for (i, (&xi, &yi)) in xs.iter().zip(ys).enumerate() {
        let mut term = yi;
        for (j, &xj) in xs.iter().enumerate() {
            if i != j {
                let denom = xi - xj;
                if denom == 0.0 {
                    return f64::NAN;
                }
                term *= (x - xj) / denom;
            }
        }
        sum += term;
    }
    sum
}

/// Time at which a linearly moving angle reaches `target`.
pub fn linear_crossing(t0: f64, a0: f64, t1: f64, a1: f64, target: f64) -> f64 {
    if a1 == a0 {
        return 0.5 * (t0 + t1);
    }
    t0 + (target - a0) / (a1 - a0) * (t1 - t0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproduces_nodes() {
        let xs = [0.0, 1.0, 3.0, 4.5];
        let ys = [2.0, -1.0, 5.0, 0.5];
        for (x, y) in xs.iter().zip(&ys) {
            assert!((lagrange(&xs, &ys, *x) - y).abs() < 1e-12);
        }
    }

    #[test]
    fn exact_for_cubic() {
        let f = |x: f64| 0.5 * x * x * x - 2.0 * x + 1.0;
        let xs = [-1.0, 0.3, 1.1, 2.0, 3.7];
        let ys = xs.map(f);
        let x = 1.7;
        assert!((lagrange(&xs, &ys, x) - f(x)).abs() < 1e-10);
    }

    #[test]
    fn inverse_of_quadratic_motion() {
        // angle(t) = 10 t + 0.4 t², invert for angle = 12.
        let ts = [0.0, 0.25, 0.5, 0.75, 1.0, 1.25];
        let angles = ts.map(|t: f64| 10.0 * t + 0.4 * t * t);
        let t = lagrange(&angles[1..], &ts[1..], 12.0);
        let exact = (-10.0 + (100.0_f64 + 4.0 * 0.4 * 12.0).sqrt()) / 0.8;
        assert!((t - exact).abs() < 1e-6, "t = {t}, exact = {exact}");
    }

    #[test]
    fn duplicate_abscissa_is_nan() {
        assert!(lagrange(&[1.0, 1.0], &[0.0, 1.0], 0.5).is_nan());
    }

    #[test]
    fn linear_midpoint() {
        assert!((linear_crossing(0.0, 10.0, 1.0, 20.0, 15.0) - 0.5).abs() < 1e-15);
    }
}
