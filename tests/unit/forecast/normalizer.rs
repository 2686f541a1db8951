//! Unit tests for min-max scaling

use tickcast::error::ForecastError;
use tickcast::forecast::MinMaxScaler;

use crate::support::assert_close;

fn index_domain(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64).collect()
}

#[test]
fn test_fit_transform_maps_domain_to_unit_interval() {
    let mut scaler = MinMaxScaler::new();
    let scaled = scaler.fit_transform(&index_domain(10)).unwrap();

    assert_eq!(scaled.first().copied(), Some(0.0));
    assert_eq!(scaled.last().copied(), Some(1.0));
    assert!(scaled.iter().all(|v| (0.0..=1.0).contains(v)));
    assert_eq!(scaler.min(), Some(0.0));
    assert_eq!(scaler.max(), Some(9.0));
}

#[test]
fn test_transform_extrapolates_without_clipping() {
    let mut scaler = MinMaxScaler::new();
    scaler.fit(&index_domain(10)).unwrap();
    assert_close(scaler.transform(10.0).unwrap(), 10.0 / 9.0);
}

#[test]
fn test_refit_shifts_mapping_of_same_index() {
    let mut scaler = MinMaxScaler::new();
    scaler.fit(&index_domain(10)).unwrap();
    let before = scaler.transform(9.0).unwrap();

    scaler.fit(&index_domain(20)).unwrap();
    let after = scaler.transform(9.0).unwrap();

    assert_eq!(before, 1.0);
    assert_close(after, 9.0 / 19.0);
}

#[test]
fn test_transform_before_fit_fails() {
    let scaler = MinMaxScaler::new();
    assert!(!scaler.is_fitted());
    assert_eq!(scaler.transform(1.0), Err(ForecastError::ScalerNotFitted));
}

#[test]
fn test_single_point_domain_is_rejected_and_keeps_bounds() {
    let mut scaler = MinMaxScaler::new();
    scaler.fit(&index_domain(5)).unwrap();

    assert_eq!(scaler.fit(&[0.0]), Err(ForecastError::DegenerateDomain));
    assert_eq!(scaler.fit(&[]), Err(ForecastError::DegenerateDomain));
    assert_eq!(scaler.max(), Some(4.0));
}

#[test]
fn test_non_finite_input_is_rejected() {
    let mut scaler = MinMaxScaler::new();
    assert_eq!(
        scaler.fit(&[0.0, f64::NAN, 2.0]),
        Err(ForecastError::NonFiniteInput)
    );
    assert!(!scaler.is_fitted());
}
