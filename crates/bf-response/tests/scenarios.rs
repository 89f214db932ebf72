//! End-to-end Bode scenarios: model construction through frequency response.

use bf_lti::{LtiError, PadeOptions, TransferFunctionModel, approximate};
use bf_response::{FrequencySweep, ResponseError, evaluate};

#[test]
fn lead_over_integrator_on_default_sweep() {
    // (s + 1) / s
    let model = TransferFunctionModel::builder()
        .numerator(vec![1.0, 1.0])
        .denominator(vec![1.0, 0.0])
        .build()
        .unwrap();
    let sweep = FrequencySweep::default();
    let response = evaluate(&model, &sweep).unwrap();

    assert_eq!(response.len(), sweep.len());
    assert_eq!(response.frequencies(), sweep.samples());

    let at_one = response.nearest(1.0).unwrap();
    assert!((at_one.frequency - 1.0).abs() < 1e-4);
    assert!((at_one.magnitude_db - 3.0103).abs() < 1e-3);
    assert!((at_one.phase_deg + 45.0).abs() < 1e-2);
}

#[test]
fn lag_with_second_order_delay() {
    // 1 / (10 s + 1) with exp(-s) approximated by a [2/2] Padé approximant
    let model = TransferFunctionModel::builder()
        .denominator(vec![10.0, 1.0])
        .delay(1.0)
        .order(2)
        .build()
        .unwrap();
    assert_eq!(model.degrees(), (2, 3));
    assert_eq!(model.dc_gain(), 1.0);

    let sweep = FrequencySweep::logarithmic(0.01, 100.0, 2_000).unwrap();
    let response = evaluate(&model, &sweep).unwrap();

    // Low-frequency gain approaches 0 dB.
    assert!(response.magnitude_db()[0].abs() < 0.05);
    // -atan(0.1) from the lag plus -0.01 rad from the delay
    assert!((response.phase_deg()[0] + 6.28).abs() < 0.05);

    // The all-pass delay keeps the high-frequency roll-off of the lag alone.
    let hf = response.nearest(100.0).unwrap();
    assert!((hf.magnitude_db + 60.0).abs() < 0.1);

    // Phase keeps falling past -180° without jumping back.
    for pair in response.phase_deg().windows(2) {
        assert!((pair[1] - pair[0]).abs() <= 180.0);
    }
    assert!(*response.phase_deg().last().unwrap() < -360.0);
}

#[test]
fn zero_denominator_is_rejected_before_sweeping() {
    let err = TransferFunctionModel::build(&[1.0], &[0.0, 0.0], None, PadeOptions::default())
        .unwrap_err();
    assert!(matches!(err, LtiError::DegenerateSystem { .. }));
}

#[test]
fn numerator_degree_above_order_is_invalid() {
    let err = approximate(1.0, 2, Some(5)).unwrap_err();
    assert!(matches!(err, LtiError::InvalidParameter { .. }));
}

#[test]
fn singular_sample_aborts_sweep() {
    let model = TransferFunctionModel::builder()
        .denominator(vec![1.0, 0.0])
        .build()
        .unwrap();
    let sweep = FrequencySweep::from_samples(vec![0.0, 0.5, 1.0]).unwrap();
    let err = evaluate(&model, &sweep).unwrap_err();
    assert!(matches!(err, ResponseError::SingularResponse { frequency } if frequency == 0.0));
}

#[test]
fn repeated_evaluation_is_deterministic() {
    let model = TransferFunctionModel::builder()
        .numerator(vec![2.0, 1.0])
        .denominator(vec![1.0, 10.1, 1.0, 0.0])
        .build()
        .unwrap();
    let sweep = FrequencySweep::linear(0.01, 100.0, 10_000).unwrap();
    let a = evaluate(&model, &sweep).unwrap();
    let b = evaluate(&model, &sweep).unwrap();
    assert_eq!(a, b);
}
