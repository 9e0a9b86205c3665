use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FitError {
    #[error("need at least 2 points to fit a line, got {0}")]
    TooFewPoints(usize),
    #[error("zero variance in x values")]
    ZeroVariance,
}

/// Ordinary-least-squares simple linear regression fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination over the fitted series. Defined as 1.0
    /// when all y values are identical (the trivial perfect fit).
    pub r2: f64,
}

impl LinearFit {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit y = slope * x + intercept by ordinary least squares.
///
/// Errors on fewer than 2 points or when every x is identical, so the
/// caller never sees NaN or infinite coefficients.
pub fn fit(x: &[f64], y: &[f64]) -> Result<LinearFit, FitError> {
    debug_assert_eq!(x.len(), y.len());
    let n = x.len();
    if n < 2 {
        return Err(FitError::TooFewPoints(n));
    }

    let nf = n as f64;
    let x_mean = x.iter().sum::<f64>() / nf;
    let y_mean = y.iter().sum::<f64>() / nf;

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for i in 0..n {
        numerator += (x[i] - x_mean) * (y[i] - y_mean);
        denominator += (x[i] - x_mean) * (x[i] - x_mean);
    }

    if denominator == 0.0 {
        return Err(FitError::ZeroVariance);
    }

    let slope = numerator / denominator;
    let intercept = y_mean - slope * x_mean;

    let mut ss_res = 0.0;
    let mut ss_tot = 0.0;
    for i in 0..n {
        let predicted = slope * x[i] + intercept;
        ss_res += (y[i] - predicted) * (y[i] - predicted);
        ss_tot += (y[i] - y_mean) * (y[i] - y_mean);
    }

    let r2 = if ss_tot == 0.0 { 1.0 } else { 1.0 - ss_res / ss_tot };

    Ok(LinearFit { slope, intercept, r2 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_point_fit() {
        let fit = fit(&[0.0, 1.0], &[100.0, 200.0]).unwrap();
        assert_eq!(fit.slope, 100.0);
        assert_eq!(fit.intercept, 100.0);
        assert_eq!(fit.r2, 1.0);
        assert_eq!(fit.predict(2.0), 300.0);
    }

    #[test]
    fn test_exact_line_has_perfect_r2() {
        let x = [0.0, 1.0, 2.0, 5.0, 9.0];
        let y: Vec<f64> = x.iter().map(|v| 3.5 * v - 2.0).collect();
        let fit = fit(&x, &y).unwrap();
        assert!((fit.slope - 3.5).abs() < 1e-12);
        assert!((fit.intercept + 2.0).abs() < 1e-12);
        assert!((fit.r2 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_constant_y_is_flat_with_r2_one() {
        let fit = fit(&[0.0, 3.0, 7.0], &[50.0, 50.0, 50.0]).unwrap();
        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.intercept, 50.0);
        assert_eq!(fit.r2, 1.0);
    }

    #[test]
    fn test_noisy_fit_r2_below_one() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [1.0, 3.0, 2.0, 4.0];
        let fit = fit(&x, &y).unwrap();
        assert!(fit.r2 < 1.0);
        assert!(fit.r2 > 0.0);
        assert!(fit.slope > 0.0);
    }

    #[test]
    fn test_too_few_points() {
        assert_eq!(fit(&[0.0], &[5.0]), Err(FitError::TooFewPoints(1)));
        assert_eq!(fit(&[], &[]), Err(FitError::TooFewPoints(0)));
    }

    #[test]
    fn test_identical_x_is_zero_variance() {
        assert_eq!(fit(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]), Err(FitError::ZeroVariance));
    }

    #[test]
    fn test_negative_slope() {
        let fit = fit(&[0.0, 1.0, 2.0], &[30.0, 20.0, 10.0]).unwrap();
        assert_eq!(fit.slope, -10.0);
        assert_eq!(fit.intercept, 30.0);
    }
}
