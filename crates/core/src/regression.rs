//! Univariate linear regression
//!
//! Ordinary least squares over explicit `(x, y)` points. The forecast
//! generator fits monthly revenue against month-of-year, so x values are
//! month numbers rather than a running time index.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A fitted line `y = intercept + slope * x`.
///
/// # Example
///
/// ```rust
/// use salesboard_core::regression::LinearRegression;
///
/// let points = [(1.0, 150.0), (2.0, 200.0)];
/// let model = LinearRegression::fit(&points).unwrap();
///
/// assert!((model.slope() - 50.0).abs() < 1e-10);
/// assert!((model.predict_at(3.0) - 250.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearRegression {
    intercept: f64,
    slope: f64,
    r_squared: f64,
}

impl LinearRegression {
    /// Fit by least squares. Deterministic: identical input produces
    /// bit-identical coefficients.
    ///
    /// A degenerate x spread (all points share one x value, e.g. a training
    /// year containing a single month) yields the minimum-norm solution:
    /// slope 0 and intercept mean(y).
    pub fn fit(points: &[(f64, f64)]) -> Result<Self> {
        if points.is_empty() {
            return Err(Error::InsufficientData {
                required: 1,
                actual: 0,
            });
        }

        let n = points.len() as f64;
        let sum_x: f64 = points.iter().map(|(x, _)| x).sum();
        let sum_y: f64 = points.iter().map(|(_, y)| y).sum();
        let sum_x2: f64 = points.iter().map(|(x, _)| x * x).sum();
        let sum_xy: f64 = points.iter().map(|(x, y)| x * y).sum();

        let denominator = n * sum_x2 - sum_x * sum_x;
        let (slope, intercept) = if denominator.abs() < 1e-10 {
            (0.0, sum_y / n)
        } else {
            let slope = (n * sum_xy - sum_x * sum_y) / denominator;
            (slope, (sum_y - slope * sum_x) / n)
        };

        let mean_y = sum_y / n;
        let ss_tot: f64 = points.iter().map(|(_, y)| (y - mean_y).powi(2)).sum();
        let ss_res: f64 = points
            .iter()
            .map(|(x, y)| (y - (intercept + slope * x)).powi(2))
            .sum();
        let r_squared = if ss_tot > 1e-10 { 1.0 - ss_res / ss_tot } else { 1.0 };

        Ok(Self {
            intercept,
            slope,
            r_squared,
        })
    }

    /// Slope (revenue change per unit of x)
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Y-intercept
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// R-squared (coefficient of determination)
    pub fn r_squared(&self) -> f64 {
        self.r_squared
    }

    /// Evaluate the fitted line at `x`
    pub fn predict_at(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fits_a_perfect_line() {
        let points: Vec<(f64, f64)> = (1..=12).map(|m| (m as f64, 100.0 + 20.0 * m as f64)).collect();
        let model = LinearRegression::fit(&points).unwrap();

        assert!((model.slope() - 20.0).abs() < 1e-10);
        assert!((model.intercept() - 100.0).abs() < 1e-10);
        assert!(model.r_squared() > 0.99);
    }

    #[test]
    fn test_two_aggregate_points() {
        // Month totals 150 and 200 give a line with slope 50; month 3
        // extrapolates to 250.
        let model = LinearRegression::fit(&[(1.0, 150.0), (2.0, 200.0)]).unwrap();
        assert!((model.slope() - 50.0).abs() < 1e-10);
        assert!((model.intercept() - 100.0).abs() < 1e-10);
        assert!((model.predict_at(3.0) - 250.0).abs() < 1e-10);
    }

    #[test]
    fn test_single_month_training_year() {
        let model = LinearRegression::fit(&[(4.0, 320.0)]).unwrap();
        assert_eq!(model.slope(), 0.0);
        assert!((model.intercept() - 320.0).abs() < 1e-10);
        assert!((model.predict_at(12.0) - 320.0).abs() < 1e-10);
    }

    #[test]
    fn test_repeated_x_values_fall_back_to_mean() {
        let model = LinearRegression::fit(&[(5.0, 10.0), (5.0, 30.0)]).unwrap();
        assert_eq!(model.slope(), 0.0);
        assert!((model.intercept() - 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_input_is_an_error() {
        let err = LinearRegression::fit(&[]).unwrap_err();
        assert!(matches!(err, Error::InsufficientData { actual: 0, .. }));
    }

    #[test]
    fn test_noisy_fit_r_squared() {
        let points = [(1.0, 10.0), (2.0, 21.0), (3.0, 29.0), (4.0, 41.0)];
        let model = LinearRegression::fit(&points).unwrap();
        assert!(model.r_squared() > 0.9);
        assert!(model.slope() > 0.0);
    }
}
