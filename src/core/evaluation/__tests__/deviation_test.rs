use crate::core::evaluation::{flank_deviations, mean_flank_deviations, FlankDeviation};
use crate::core::types::{EvaluationRange, ToothCurveSet};
use approx::assert_abs_diff_eq;

#[test]
fn 직선_곡선의_편차() {
    let samples: Vec<f64> = (0..10).map(|i| 0.5 * i as f64).collect();
    let range = EvaluationRange::new(0.0, 9.0, 0.0, 9.0);
    let dev = flank_deviations(&samples, &range);

    assert_abs_diff_eq!(dev.total, 4.5, epsilon = 1e-12);
    assert_abs_diff_eq!(dev.slope, 4.5, epsilon = 1e-9);
    assert_abs_diff_eq!(dev.form, 0.0, epsilon = 1e-9);
}

#[test]
fn 평가_구간만_사용() {
    // 양 끝의 큰 값은 평가 구간 밖
    let mut samples = vec![0.0; 21];
    samples[0] = 50.0;
    samples[20] = -50.0;
    samples[10] = 1.0;
    let range = EvaluationRange::new(0.0, 20.0, 2.0, 18.0);
    let dev = flank_deviations(&samples, &range);

    assert_abs_diff_eq!(dev.total, 1.0, epsilon = 1e-12);
    assert!(dev.form >= dev.total - 1e-9);
}

#[test]
fn 뒤집힌_구간도_같은_결과() {
    let mut samples = vec![0.0; 21];
    samples[0] = 50.0;
    samples[20] = -50.0;
    samples[10] = 1.0;

    let normal = flank_deviations(&samples, &EvaluationRange::new(0.0, 20.0, 2.0, 18.0));
    let eval_inverted = flank_deviations(&samples, &EvaluationRange::new(0.0, 20.0, 18.0, 2.0));
    let both_inverted = flank_deviations(&samples, &EvaluationRange::new(20.0, 0.0, 18.0, 2.0));

    assert_eq!(eval_inverted, normal);
    assert_eq!(both_inverted, normal);
    assert_abs_diff_eq!(eval_inverted.total, 1.0, epsilon = 1e-12);
}

#[test]
fn 하강_기울기는_음수() {
    let samples: Vec<f64> = (0..30).map(|i| -0.2 * i as f64 + (i % 2) as f64 * 0.1).collect();
    let range = EvaluationRange::new(0.0, 29.0, 0.0, 29.0);
    assert!(flank_deviations(&samples, &range).slope < 0.0);
}

#[test]
fn 빈_곡선은_0() {
    let range = EvaluationRange::new(0.0, 1.0, 0.0, 1.0);
    assert_eq!(flank_deviations(&[], &range), FlankDeviation::default());
    assert_eq!(
        mean_flank_deviations(&ToothCurveSet::new(), &range, 0.5),
        FlankDeviation::default()
    );
}

#[test]
fn 치아_평균() {
    let range = EvaluationRange::new(0.0, 9.0, 0.0, 9.0);
    let mut curves = ToothCurveSet::new();
    curves.insert(1, 5.0, (0..10).map(|i| i as f64).collect());
    curves.insert(2, 5.0, (0..10).map(|i| 3.0 * i as f64).collect());
    // 기준에서 먼 곡선은 무시된다
    curves.insert(2, 50.0, vec![100.0; 10]);

    let mean = mean_flank_deviations(&curves, &range, 5.0);
    assert_abs_diff_eq!(mean.total, 18.0, epsilon = 1e-9);
    assert_abs_diff_eq!(mean.slope, 18.0, epsilon = 1e-9);
}
