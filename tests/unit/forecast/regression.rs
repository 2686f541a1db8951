//! Unit tests for the least-squares model

use tickcast::error::ForecastError;
use tickcast::forecast::LinearModel;

use crate::support::assert_close;

#[test]
fn test_fit_recovers_exact_line() {
    let x: Vec<f64> = (0..8).map(|i| i as f64).collect();
    let y: Vec<f64> = x.iter().map(|v| 2.0 * v + 1.0).collect();

    let model = LinearModel::fit(&x, &y).unwrap();
    assert_close(model.slope, 2.0);
    assert_close(model.intercept, 1.0);
    assert_close(model.predict(10.0), 21.0);
}

#[test]
fn test_fit_flat_series_has_zero_slope() {
    let x: Vec<f64> = (0..10).map(|i| i as f64 / 9.0).collect();
    let y = vec![10.0; 10];

    let model = LinearModel::fit(&x, &y).unwrap();
    assert_eq!(model.slope, 0.0);
    assert_eq!(model.intercept, 10.0);
}

#[test]
fn test_fit_least_squares_on_noisy_points() {
    // Points (0,1), (1,3), (2,2): slope 0.5, intercept 1.5.
    let model = LinearModel::fit(&[0.0, 1.0, 2.0], &[1.0, 3.0, 2.0]).unwrap();
    assert_close(model.slope, 0.5);
    assert_close(model.intercept, 1.5);
}

#[test]
fn test_fit_rejects_mismatched_lengths() {
    let err = LinearModel::fit(&[0.0, 1.0], &[1.0]).unwrap_err();
    assert_eq!(err, ForecastError::DimensionMismatch { x: 2, y: 1 });
}

#[test]
fn test_fit_rejects_degenerate_input() {
    assert_eq!(
        LinearModel::fit(&[1.0], &[1.0]),
        Err(ForecastError::DegenerateDomain)
    );
    assert_eq!(
        LinearModel::fit(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]),
        Err(ForecastError::DegenerateDomain)
    );
}

#[test]
fn test_fit_rejects_non_finite_targets() {
    assert_eq!(
        LinearModel::fit(&[0.0, 1.0, 2.0], &[1.0, f64::INFINITY, 2.0]),
        Err(ForecastError::NonFiniteInput)
    );
}
