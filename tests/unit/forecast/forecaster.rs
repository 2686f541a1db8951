//! Unit tests for the per-instrument forecaster

use tickcast::error::ForecastError;
use tickcast::forecast::{Forecaster, TrainOutcome, MIN_TRAINING_POINTS};

use crate::support::{assert_close, bars, history};

fn linear(n: usize) -> Vec<f64> {
    (1..=n).map(|i| i as f64).collect()
}

#[test]
fn test_train_skips_below_threshold() {
    let h = history(&linear(9));
    let mut forecaster = Forecaster::new();

    assert_eq!(forecaster.train(&h), Ok(TrainOutcome::Skipped { len: 9 }));
    assert!(forecaster.model().is_none());
    assert_eq!(
        forecaster.predict_next(&h),
        Err(ForecastError::InsufficientHistory {
            len: 9,
            required: MIN_TRAINING_POINTS
        })
    );
}

#[test]
fn test_train_fits_at_threshold() {
    let h = history(&linear(10));
    let mut forecaster = Forecaster::new();

    let outcome = forecaster.train(&h).unwrap();
    assert!(matches!(outcome, TrainOutcome::Fitted(_)));
    assert!(forecaster.predict_next(&h).is_ok());
    assert!(forecaster.scaler().is_fitted());
}

#[test]
fn test_flat_history_predicts_same_price() {
    let h = history(&[10.0; 10]);
    let mut forecaster = Forecaster::new();
    forecaster.train(&h).unwrap();

    assert_eq!(forecaster.predict_next(&h), Ok(10.0));
}

#[test]
fn test_linear_trend_extrapolates_next_step() {
    let h = history(&linear(10));
    let mut forecaster = Forecaster::new();
    forecaster.train(&h).unwrap();

    assert_close(forecaster.predict_next(&h).unwrap(), 11.0);
}

#[test]
fn test_retraining_same_history_is_deterministic() {
    let h = history(&[5.0, 5.5, 5.2, 6.1, 6.0, 6.4, 6.3, 7.0, 6.8, 7.4, 7.1]);
    let mut forecaster = Forecaster::new();

    let first = forecaster.train(&h).unwrap();
    let second = forecaster.train(&h).unwrap();

    assert_eq!(first, second);
    assert_eq!(forecaster.predict_next(&h), forecaster.predict_next(&h));
}

#[test]
fn test_failed_training_keeps_previous_model() {
    let mut h = history(&linear(10));
    let mut forecaster = Forecaster::new();
    forecaster.train(&h).unwrap();
    let fitted = *forecaster.model().unwrap();
    let scaler = *forecaster.scaler();

    let mut broken = bars(&[f64::NAN]).remove(0);
    broken.timestamp = h.last().unwrap().timestamp + chrono::Duration::minutes(1);
    h.append(broken);

    assert_eq!(forecaster.train(&h), Err(ForecastError::NonFiniteInput));
    assert_eq!(forecaster.model(), Some(&fitted));
    assert_eq!(forecaster.scaler(), &scaler);
    // Stale model still answers, now at index 11 on the old scale.
    assert_close(forecaster.predict_next(&h).unwrap(), 12.0);
}

#[test]
fn test_predict_without_training_reports_missing_model() {
    let h = history(&linear(12));
    let forecaster = Forecaster::new();
    assert_eq!(
        forecaster.predict_next(&h),
        Err(ForecastError::ModelNotFitted)
    );
}
